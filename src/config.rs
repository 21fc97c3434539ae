use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::tracker::{
    MAX_ENTRY_GRAMS, NoMatchPolicy, PARSE_CANDIDATE_LIMIT, PICK_SEARCH_LIMIT, ParseOptions,
};

/// Runtime settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub foods_path: PathBuf,
    /// Candidates offered when picking a food interactively.
    pub pick_limit: usize,
    /// Candidate limit and no-match policy for free-text resolution. The
    /// policy also governs interactive search.
    pub parse: ParseOptions,
    /// Upper bound for one interactively entered quantity, in grams.
    pub max_entry_grams: f64,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            foods_path: PathBuf::from("foods.csv"),
            pick_limit: PICK_SEARCH_LIMIT,
            parse: ParseOptions {
                candidate_limit: PARSE_CANDIDATE_LIMIT,
                no_match: NoMatchPolicy::Empty,
            },
            max_entry_grams: MAX_ENTRY_GRAMS,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Build settings from parsed command-line arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let no_match = if cli.fallback {
            NoMatchPolicy::FirstPage
        } else {
            NoMatchPolicy::Empty
        };

        let defaults = Self::default();
        Self {
            foods_path: cli.foods.clone(),
            parse: ParseOptions {
                no_match,
                ..defaults.parse
            },
            output: cli.format,
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli_defaults() {
        let config = Config::from_cli(&Cli::parse_from(["plate"]));
        assert_eq!(config.pick_limit, 30);
        assert_eq!(config.parse.candidate_limit, PARSE_CANDIDATE_LIMIT);
        assert_eq!(config.parse.no_match, NoMatchPolicy::Empty);
        assert_eq!(config.max_entry_grams, MAX_ENTRY_GRAMS);
    }

    #[test]
    fn test_from_cli_fallback() {
        let config = Config::from_cli(&Cli::parse_from(["plate", "--fallback", "-f", "x.csv"]));
        assert_eq!(config.parse.no_match, NoMatchPolicy::FirstPage);
        assert_eq!(config.foods_path, PathBuf::from("x.csv"));
    }
}
