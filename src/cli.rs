use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::models::MealType;
use crate::tracker::DEFAULT_SEARCH_LIMIT;

/// Plate Balance: totals the nutrients of what you ate from a reference table.
#[derive(Parser, Debug)]
#[command(name = "plate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the reference table CSV.
    #[arg(short, long, default_value = "foods.csv", global = true)]
    pub foods: PathBuf,

    /// When a search finds nothing, use the first page of the table instead.
    #[arg(long, global = true)]
    pub fallback: bool,

    /// Output format for parse and calc.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the reference table by name or alias.
    Search {
        /// Substring to look for; omit to list the first page.
        query: Option<String>,

        /// Maximum number of results.
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },

    /// Parse free text ("sweetpotato 130g" per line) into entries.
    Parse {
        /// Text to parse. Read from stdin when omitted.
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Parse free text and report nutrient totals.
    Calc {
        /// Text to parse. Read from stdin when omitted.
        #[arg(short, long)]
        text: Option<String>,

        /// Meal label for the report.
        #[arg(short, long, value_enum, default_value_t = MealType::default())]
        meal: MealType,
    },

    /// Interactive session: search, add, list, clear and calculate.
    Session {
        /// Meal label for the session.
        #[arg(short, long, value_enum, default_value_t = MealType::default())]
        meal: MealType,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Session {
            meal: MealType::default(),
        }
    }
}

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
