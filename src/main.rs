use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;
use size_report::cmd::{self, ReportOptions};

/// Compressed asset size reporter
///
/// size-report measures the gzip size of every build output file, compares it
/// with the previous build and prints a color-coded table of sizes and deltas.
#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report compressed sizes for a build output directory
    Report {
        /// Build output directory to measure
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Only measure files whose relative path matches this regex
        #[arg(long)]
        pattern: Option<String>,

        /// Snapshot file holding sizes from the previous build
        #[arg(long, value_name = "FILE")]
        json_file: Option<PathBuf>,

        /// Regex whose matches are replaced by placeholders before comparison
        #[arg(long, value_name = "REGEX")]
        strip_hash: Option<String>,

        /// gzip level used to estimate transfer size (0-9)
        #[arg(long, value_name = "LEVEL")]
        compression_level: Option<u32>,

        /// Output as JSON (for CI/CD integration)
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Report {
            dir,
            pattern,
            json_file,
            strip_hash,
            compression_level,
            json,
            no_color,
        }) => cmd::cmd_report(&ReportOptions {
            dir,
            pattern,
            json_file,
            strip_hash,
            compression_level,
            json,
            no_color,
        }),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("size-report v{}", env!("CARGO_PKG_VERSION"));
            println!("Compressed asset size reporter\n");
            println!("Usage: size-report <COMMAND>\n");
            println!("Commands:");
            println!("  report       Report compressed sizes for a build output directory");
            println!("  completions  Generate shell completions");
            println!("\nRun 'size-report <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use size_report::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
