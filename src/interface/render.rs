use crate::error::Result;
use crate::models::{FoodRecord, Nutrient, SelectedEntry};
use crate::tracker::MealReport;

/// Format a value with the precision used for its nutrient.
pub fn format_amount(nutrient: Nutrient, value: f64) -> String {
    format!("{:.*}", nutrient.display_precision(), value)
}

/// Format grams without a trailing `.0` for whole numbers.
pub fn format_grams(grams: f64) -> String {
    if grams.fract() == 0.0 {
        format!("{:.0}", grams)
    } else {
        format!("{}", grams)
    }
}

/// Display search results as a numbered list.
pub fn display_search_results(results: &[&FoodRecord], query: &str) {
    if results.is_empty() {
        println!("No foods match '{}'.", query);
        return;
    }

    let max_name_len = results.iter().map(|r| r.name.chars().count()).max().unwrap_or(10);

    for (i, record) in results.iter().enumerate() {
        let alias = if record.alias != record.name {
            format!("  ({})", record.alias)
        } else {
            String::new()
        };
        println!(
            "{:>3}. {:<width$}  {:>4.0} kcal / {}g{}",
            i + 1,
            record.name,
            record.nutrients.energy,
            format_grams(record.reference_mass),
            alias,
            width = max_name_len
        );
    }
}

/// Display the selected entries.
pub fn display_entries(entries: &[SelectedEntry]) {
    if entries.is_empty() {
        println!("No foods added yet.");
        return;
    }

    for (i, entry) in entries.iter().enumerate() {
        println!("{:>3}. {} ... {} g", i + 1, entry.name, format_grams(entry.grams));
    }
}

/// Render a meal report as text.
pub fn render_report(report: &MealReport) -> String {
    let mut out = String::new();
    let totals = &report.totals;

    out.push_str(&format!("=== {} ===\n\n", report.meal));
    out.push_str(&format!(
        "Total energy: {} kcal\n",
        format_amount(Nutrient::Energy, totals.energy)
    ));
    for (nutrient, value) in totals.iter().skip(1) {
        out.push_str(&format!(
            "{:<13} {} {}\n",
            format!("{}:", nutrient.label()),
            format_amount(nutrient, value),
            nutrient.unit()
        ));
    }

    if !report.details.is_empty() {
        out.push_str("\n--- Per item ---\n");
        for d in &report.details {
            out.push_str(&format!(
                "- {} {} g -> {} kcal / P {} / F {} / C {}\n",
                d.name,
                format_grams(d.grams),
                format_amount(Nutrient::Energy, d.nutrients.energy),
                format_amount(Nutrient::Protein, d.nutrients.protein),
                format_amount(Nutrient::Fat, d.nutrients.fat),
                format_amount(Nutrient::Carbohydrate, d.nutrients.carbohydrate),
            ));
        }
    }

    out
}

/// Render a meal report as pretty JSON.
pub fn render_report_json(report: &MealReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render entries as pretty JSON.
pub fn render_entries_json(entries: &[SelectedEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
