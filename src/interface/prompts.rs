use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::config::Config;
use crate::error::{PlateError, Result};
use crate::interface::render::display_search_results;
use crate::table::FoodTable;
use crate::tracker::{DEFAULT_ENTRY_GRAMS, MAX_SUGGESTIONS, SUGGESTION_THRESHOLD, search};

/// One step of the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    SearchAndAdd,
    FreeText,
    ShowList,
    ClearList,
    Calculate,
    Quit,
}

impl SessionAction {
    const ALL: [SessionAction; 6] = [
        SessionAction::SearchAndAdd,
        SessionAction::FreeText,
        SessionAction::ShowList,
        SessionAction::ClearList,
        SessionAction::Calculate,
        SessionAction::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            SessionAction::SearchAndAdd => "Search and add a food",
            SessionAction::FreeText => "Add from free text (e.g. sweetpotato 130g)",
            SessionAction::ShowList => "Show today's list",
            SessionAction::ClearList => "Clear the list",
            SessionAction::Calculate => "Calculate nutrients",
            SessionAction::Quit => "Quit",
        }
    }
}

/// Prompt for the next session action.
pub fn prompt_action() -> Result<SessionAction> {
    let labels: Vec<&str> = SessionAction::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(SessionAction::ALL
        .get(selection)
        .copied()
        .unwrap_or(SessionAction::Quit))
}

/// Table names close to `query` by Jaro-Winkler similarity, best first.
///
/// Display aid only; entries are never resolved through this.
pub fn suggest_names<'a>(query: &str, table: &'a FoodTable) -> Vec<&'a str> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    // One score per name: rows sharing a name keep their best alias score.
    let mut scored: Vec<(&str, f64)> = Vec::new();
    for record in table.iter() {
        let score = jaro_winkler(&record.name.to_lowercase(), &query)
            .max(jaro_winkler(&record.alias.to_lowercase(), &query));
        match scored.iter_mut().find(|(name, _)| *name == record.name) {
            Some(slot) => slot.1 = slot.1.max(score),
            None => scored.push((record.name.as_str(), score)),
        }
    }

    scored.retain(|(_, score)| *score > SUGGESTION_THRESHOLD);
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().take(MAX_SUGGESTIONS).map(|(n, _)| n).collect()
}

/// Search the table and let the user pick one food.
///
/// Returns `None` when nothing is picked.
pub fn prompt_food(table: &FoodTable, config: &Config) -> Result<Option<String>> {
    let query: String = Input::new()
        .with_prompt("Search foods (blank lists the first page)")
        .allow_empty(true)
        .interact_text()?;

    let results = search(&query, table, config.pick_limit, config.parse.no_match);
    if results.is_empty() {
        display_search_results(&results, query.trim());
        let suggestions = suggest_names(&query, table);
        if !suggestions.is_empty() {
            println!("Did you mean: {}", suggestions.join(", "));
        }
        return Ok(None);
    }

    let mut options: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    options.push("(none)");

    let selection = Select::new()
        .with_prompt("Pick a food")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(results.get(selection).map(|r| r.name.clone()))
}

/// Prompt for a quantity in grams, bounded to `(0, max]`.
pub fn prompt_grams(max: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Amount (g)")
        .default(DEFAULT_ENTRY_GRAMS.to_string())
        .interact_text()?;

    let grams: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlateError::InvalidInput("Invalid number".to_string()))?;

    if !(grams > 0.0 && grams <= max) {
        return Err(PlateError::InvalidInput(format!(
            "Amount must be between 0 and {} g",
            max
        )));
    }

    Ok(grams)
}

/// Read free-text lines until an empty line.
pub fn prompt_free_text() -> Result<String> {
    println!("One food per line, e.g. 'sweetpotato 130g'. Empty line to finish.");

    let mut lines = Vec::new();
    loop {
        let line: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()?;

        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodRecord, Nutrients};

    #[test]
    fn test_suggest_names_ranks_close_names() {
        let table = FoodTable::from_records(vec![
            FoodRecord::new("banana", Nutrients::zero()),
            FoodRecord::new("sweetpotato", Nutrients::zero()),
            FoodRecord::new("rice", Nutrients::zero()),
        ]);

        let suggestions = suggest_names("sweetpotatoe", &table);
        assert_eq!(suggestions.first(), Some(&"sweetpotato"));
        assert!(!suggestions.contains(&"rice"));
        assert!(suggest_names("  ", &table).is_empty());
    }

    #[test]
    fn test_suggest_names_lists_each_name_once() {
        let table = FoodTable::from_records(vec![
            FoodRecord::new("sweetpotato", Nutrients::zero()).with_alias("satsumaimo"),
            FoodRecord::new("sweetpotatoes", Nutrients::zero()),
            FoodRecord::new("sweetpotato", Nutrients::zero()).with_alias("sweetpotatoe"),
        ]);

        let suggestions = suggest_names("sweetpotatoe", &table);
        assert_eq!(suggestions, vec!["sweetpotato", "sweetpotatoes"]);
    }
}
