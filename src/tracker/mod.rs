pub mod aggregate;
pub mod constants;
pub mod parser;
pub mod search;

pub use aggregate::{MealReport, compute_totals};
pub use constants::*;
pub use parser::{
    LineMatch, ParseOptions, ParseOutcome, normalize_line, parse_free_text,
    parse_free_text_detailed, parse_line,
};
pub use search::{NoMatchPolicy, search};
