use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::models::SelectedEntry;
use crate::table::FoodTable;
use crate::tracker::constants::PARSE_CANDIDATE_LIMIT;
use crate::tracker::search::{NoMatchPolicy, search};

/// Name fragment, optional whitespace, quantity, optional gram unit.
static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>.+?)\s*(?P<amount>\d+(?:\.\d+)?)\s*(?:g|G|グラム|grams?)?$")
        .expect("line pattern is valid")
});

/// Name fragment and quantity read from one line, before name resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMatch {
    pub fragment: String,
    pub grams: f64,
}

/// How fragments are resolved against the table.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Candidates requested from search; only the first is used.
    pub candidate_limit: usize,
    pub no_match: NoMatchPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            candidate_limit: PARSE_CANDIDATE_LIMIT,
            no_match: NoMatchPolicy::default(),
        }
    }
}

/// Entries read from a block of text, plus how many non-blank lines yielded
/// nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    pub entries: Vec<SelectedEntry>,
    pub skipped: usize,
}

/// NFKC-normalize and trim a line, folding full-width digits, letters,
/// spaces and punctuation to their half-width forms.
pub fn normalize_line(line: &str) -> String {
    line.nfkc().collect::<String>().trim().to_string()
}

/// Match one line against the trailing-quantity pattern.
///
/// Returns `None` when the line does not fit the pattern or the quantity does
/// not parse as a number.
pub fn parse_line(line: &str) -> Option<LineMatch> {
    let normalized = normalize_line(line);
    let caps = LINE_PATTERN.captures(&normalized)?;

    let fragment = caps["name"].trim().to_string();
    if fragment.is_empty() {
        return None;
    }

    let amount = &caps["amount"];
    let grams = match amount.parse::<f64>() {
        Ok(g) => g,
        Err(e) => {
            debug!(line = %normalized, amount, error = %e, "quantity did not parse");
            return None;
        }
    };

    Some(LineMatch { fragment, grams })
}

/// Parse free text into entries, one per line that matches and resolves.
///
/// Each fragment is resolved to the name of the FIRST search result, not the
/// closest one, so "potato" may resolve to "Sweet Potato" if that row comes
/// first.
pub fn parse_free_text_detailed(
    text: &str,
    table: &FoodTable,
    options: &ParseOptions,
) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some(LineMatch { fragment, grams }) = parse_line(line) else {
            debug!(line, "line skipped: no trailing quantity");
            outcome.skipped += 1;
            continue;
        };

        let candidates = search(&fragment, table, options.candidate_limit, options.no_match);
        let Some(first) = candidates.first() else {
            debug!(line, fragment = %fragment, "line skipped: no matching food");
            outcome.skipped += 1;
            continue;
        };

        debug!(fragment = %fragment, resolved = %first.name, grams, "line parsed");
        outcome.entries.push(SelectedEntry::new(first.name.clone(), grams));
    }

    outcome
}

/// Parse free text into entries, dropping lines that do not parse or resolve.
pub fn parse_free_text(text: &str, table: &FoodTable, options: &ParseOptions) -> Vec<SelectedEntry> {
    parse_free_text_detailed(text, table, options).entries
}
