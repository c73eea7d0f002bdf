use std::path::PathBuf;

use clap::Parser;
use shelf_core::MovieId;

use crate::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "shelf", version, about = "Browse a movie library and refresh its metadata")]
pub struct Cli {
    /// RON config file; missing is fine.
    #[arg(long, default_value = "shelf.ron")]
    pub config: PathBuf,

    /// Origin of the library service, e.g. http://localhost:8080.
    #[arg(long)]
    pub base_url: Option<String>,

    /// How long a toast stays up, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub notification_ms: Option<u64>,

    /// Refresh this movie once the library is loaded. Repeatable.
    #[arg(long = "refresh", value_name = "ID")]
    pub refresh: Vec<MovieId>,

    /// Exit once nothing is loading, refreshing or showing instead of
    /// reading commands from stdin.
    #[arg(long)]
    pub once: bool,

    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn refresh_is_repeatable() {
        let cli = Cli::parse_from(["shelf", "--refresh", "1", "--refresh", "7", "--once"]);
        assert_eq!(cli.refresh, vec![1, 7]);
        assert!(cli.once);
        assert_eq!(cli.log, LogDestination::File);
        assert_eq!(cli.config, PathBuf::from("shelf.ron"));
    }
}
