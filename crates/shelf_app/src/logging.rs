//! Logging initialization for the shelf binary.
//!
//! The rendered library owns stdout, so file logging (`./shelf.log`) is the
//! default. The level is `info` unless `SHELF_LOG` names another one.

use std::fs::File;
use std::path::Path;

use clap::ValueEnum;
use log::LevelFilter;
use shelf_logging::{level_from_env, LOG_LEVEL_ENV};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./shelf.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogDestination {
    /// Write to ./shelf.log in the current directory.
    #[default]
    File,
    /// Write to the terminal.
    Terminal,
    /// Write to both file and terminal.
    Both,
}

impl LogDestination {
    fn to_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }

    fn to_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }
}

/// Installs the global logger. Silently keeps going without file output if
/// the log file cannot be created.
pub fn initialize(destination: LogDestination) {
    let level = level_from_env(LOG_LEVEL_ENV, LevelFilter::Info);
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.to_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if destination.to_file() {
        if let Some(file_logger) = file_logger(Path::new(LOG_FILE), level, config) {
            loggers.push(file_logger);
        }
    }
    if loggers.is_empty() {
        return;
    }

    let _ = CombinedLogger::init(loggers);
}

fn file_logger(path: &Path, level: LevelFilter, config: Config) -> Option<Box<dyn SharedLogger>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: could not create log file {}: {}", path.display(), err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LogDestination;

    #[test]
    fn destinations_route_as_named() {
        assert!(LogDestination::File.to_file() && !LogDestination::File.to_terminal());
        assert!(LogDestination::Terminal.to_terminal() && !LogDestination::Terminal.to_file());
        assert!(LogDestination::Both.to_file() && LogDestination::Both.to_terminal());
    }
}
