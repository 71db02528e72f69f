//! Logging setup.
//!
//! The terminal is owned by the game while it runs, so log records only go somewhere when a log
//! file is configured. `RUST_LOG` overrides the default filter either way, but without a log file
//! the records it lets through are discarded.

use std::{fs::File, io};

use color_eyre::eyre::Result;
use env_logger::{Builder, Env, Target};

use crate::config::Config;

/// Installs the global logger.
///
/// # Errors
///
/// This function fails if the log file cannot be created or a logger is already installed.
pub fn init(config: &Config) -> Result<()> {
    Builder::from_env(Env::default().default_filter_or(default_filter(config)))
        .target(target(config)?)
        .try_init()?;

    Ok(())
}

/// Where log records are written: the configured log file, or nowhere.
///
/// Records are never written to stderr, which would draw over the game screen.
fn target(config: &Config) -> Result<Target> {
    let target = match &config.log_file {
        Some(path) => Target::Pipe(Box::new(File::create(path)?)),
        None => Target::Pipe(Box::new(io::sink())),
    };

    Ok(target)
}

/// Filter used when `RUST_LOG` is unset.
const fn default_filter(config: &Config) -> &'static str {
    if config.log_file.is_some() {
        "info"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_default_filter_without_file() {
        assert_eq!(default_filter(&Config::default()), "off");
    }

    #[test]
    fn test_target_without_file_is_not_stderr() {
        let target = target(&Config::default()).expect("sink target should build");

        assert!(matches!(target, Target::Pipe(_)));
    }

    #[test]
    fn test_default_filter_with_file() {
        let config = Config {
            log_file: Some(PathBuf::from("labyrunner.log")),
            ..Config::default()
        };

        assert_eq!(default_filter(&config), "info");
    }
}
