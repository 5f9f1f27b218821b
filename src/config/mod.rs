//! Configuration for size reporting
//!
//! This module provides:
//! - The `.size-report.toml` config file structure and defaults
//! - Loading of the config file

pub mod file;
pub mod loader;

pub use file::{ReportConfig, CONFIG_FILE_NAME, DEFAULT_JSON_FILE, DEFAULT_PATTERN};
pub use loader::ConfigLoader;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name_constant_is_correct() {
        assert_eq!(CONFIG_FILE_NAME, ".size-report.toml");
    }
}
