pub mod search;
pub mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use search::handle_search;

#[derive(Parser)]
#[command(name = "ecostay")]
#[command(about = "Find your dream hotel from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Recommendation endpoint, overrides the configured one
    #[arg(long, value_name = "URL", global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand, Default)]
pub enum Commands {
    /// Launch the interactive client (default)
    #[default]
    Tui,
    /// Run one search and print the results
    Search {
        /// What you are looking for
        query: String,

        /// Latitude sent with the query
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude sent with the query
        #[arg(long, allow_hyphen_values = true)]
        lng: Option<f64>,

        /// Number of hotels to ask for (1 to 100)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
        top: Option<u32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::try_parse_from(["ecostay"]).unwrap();
        assert!(matches!(cli.command, None));
        assert!(matches!(cli.command.unwrap_or_default(), Commands::Tui));
    }

    #[test]
    fn test_search_args() {
        let cli = Cli::try_parse_from([
            "ecostay",
            "search",
            "quiet spa",
            "--lat",
            "45.0",
            "--lng",
            "-1.5",
            "--top",
            "6",
            "--endpoint",
            "http://example.com/recommend",
        ])
        .unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("http://example.com/recommend"));
        match cli.command {
            Some(Commands::Search {
                query,
                lat,
                lng,
                top,
            }) => {
                assert_eq!(query, "quiet spa");
                assert_eq!(lat, Some(45.0));
                assert_eq!(lng, Some(-1.5));
                assert_eq!(top, Some(6));
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_top_out_of_range_rejected() {
        for top in ["0", "101"] {
            let parsed = Cli::try_parse_from(["ecostay", "search", "spa", "--top", top]);
            assert!(parsed.is_err(), "--top {top} should be rejected");
        }
        let cli = Cli::try_parse_from(["ecostay", "search", "spa", "--top", "100"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Search { top: Some(100), .. })));
    }
}
