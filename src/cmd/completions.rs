//! Completions command implementation
//!
//! Handles the `size-report completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// size-report completions bash > /etc/bash_completion.d/size-report
///
/// # Zsh
/// size-report completions zsh > ~/.zfunc/_size-report
///
/// # Fish
/// size-report completions fish > ~/.config/fish/completions/size-report.fish
/// ```
pub fn cmd_completions(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}

/// Write the completion script for `shell` into `out`
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    // Cli lives in main.rs, so the command tree is rebuilt here
    use clap::{Arg, ArgAction, Command};

    let mut cmd = Command::new("size-report")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compressed asset size reporter")
        .subcommand(
            Command::new("report")
                .about("Report compressed sizes for a build output directory")
                .arg(Arg::new("dir").required(true))
                .arg(Arg::new("pattern").long("pattern"))
                .arg(Arg::new("json-file").long("json-file"))
                .arg(Arg::new("strip-hash").long("strip-hash"))
                .arg(Arg::new("compression-level").long("compression-level"))
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("no-color")
                        .long("no-color")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("completions").about("Generate shell completions"));

    let bin_name = "size-report".to_string();
    generate(shell, &mut cmd, bin_name, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_completions_all_shells_produce_output() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
            let mut out = Vec::new();
            write_completions(shell, &mut out);
            assert!(!out.is_empty(), "{:?} produced no script", shell);
        }
    }

    #[test]
    fn test_bash_completions_mention_report_flags() {
        let mut out = Vec::new();
        write_completions(Shell::Bash, &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("size-report"));
        assert!(script.contains("--strip-hash"));
    }
}
