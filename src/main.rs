use std::io::{self, Read};

use clap::Parser;
use tracing::{debug, warn};

use plate_balance::cli::{Cli, Command, OutputFormat};
use plate_balance::interface::{
    SessionAction, display_entries, display_search_results, format_grams, prompt_action,
    prompt_food, prompt_free_text, prompt_grams, prompt_yes_no, render_entries_json,
    render_report, render_report_json,
};
use plate_balance::tracker::parse_free_text_detailed;
use plate_balance::{Config, FoodTable, MealReport, MealType, PlateError, Result, Session, search};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    plate_balance::logging::init_logging(cli.verbose)?;

    let config = Config::from_cli(&cli);
    debug!(?config, "starting");

    match cli.command.unwrap_or_default() {
        Command::Search { query, limit } => cmd_search(&config, query.as_deref().unwrap_or(""), limit),
        Command::Parse { text } => cmd_parse(&config, text),
        Command::Calc { text, meal } => cmd_calc(&config, text, meal),
        Command::Session { meal } => cmd_session(&config, meal),
    }
}

/// Load the reference table named in the config.
fn load_table(config: &Config) -> Result<FoodTable> {
    if !config.foods_path.exists() {
        return Err(PlateError::InvalidInput(format!(
            "reference table not found: {}",
            config.foods_path.display()
        )));
    }
    FoodTable::load(&config.foods_path)
}

/// Use the given text, or read all of stdin.
fn read_text(text: Option<String>) -> Result<String> {
    match text {
        Some(t) => Ok(t),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Print matching foods.
fn cmd_search(config: &Config, query: &str, limit: usize) -> Result<()> {
    let table = load_table(config)?;
    let results = search(query, &table, limit, config.parse.no_match);
    display_search_results(&results, query);
    Ok(())
}

/// Print the entries read from free text.
fn cmd_parse(config: &Config, text: Option<String>) -> Result<()> {
    let table = load_table(config)?;
    let text = read_text(text)?;
    let outcome = parse_free_text_detailed(&text, &table, &config.parse);

    if outcome.skipped > 0 {
        warn!(skipped = outcome.skipped, "some lines were not read");
    }

    match config.output {
        OutputFormat::Json => println!("{}", render_entries_json(&outcome.entries)?),
        OutputFormat::Text => display_entries(&outcome.entries),
    }
    Ok(())
}

/// Parse free text and print the nutrient report.
fn cmd_calc(config: &Config, text: Option<String>, meal: MealType) -> Result<()> {
    let table = load_table(config)?;
    let text = read_text(text)?;
    let outcome = parse_free_text_detailed(&text, &table, &config.parse);

    if outcome.entries.is_empty() {
        eprintln!("No foods could be read. Check that each line ends with an amount in g.");
    } else if outcome.skipped > 0 {
        eprintln!("Skipped {} line(s) that could not be read.", outcome.skipped);
    }

    let report = MealReport::build(meal, &outcome.entries, &table)?;
    print_report(config, &report)
}

fn print_report(config: &Config, report: &MealReport) -> Result<()> {
    match config.output {
        OutputFormat::Json => println!("{}", render_report_json(report)?),
        OutputFormat::Text => print!("{}", render_report(report)),
    }
    Ok(())
}

/// Report entry-level failures and keep the session going.
fn soft<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e @ (PlateError::InvalidInput(_) | PlateError::FoodNotFound(_))) => {
            println!("{}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Interactive loop over one in-memory session.
fn cmd_session(config: &Config, meal: MealType) -> Result<()> {
    let table = load_table(config)?;
    let mut session = Session::new(meal);

    println!("Loaded {} foods. Recording {}.", table.len(), session.meal());
    println!();

    loop {
        match prompt_action()? {
            SessionAction::SearchAndAdd => {
                let Some(name) = prompt_food(&table, config)? else {
                    continue;
                };
                let added = soft(
                    prompt_grams(config.max_entry_grams)
                        .and_then(|g| session.add(&table, &name, g).map(|_| g)),
                )?;
                if let Some(grams) = added {
                    println!("Added {} g of {}.", format_grams(grams), name);
                }
            }
            SessionAction::FreeText => {
                let text = prompt_free_text()?;
                let outcome = parse_free_text_detailed(&text, &table, &config.parse);
                if outcome.entries.is_empty() {
                    println!("No foods could be read. Check that each line ends with an amount in g.");
                    continue;
                }

                let mut added = 0;
                for entry in &outcome.entries {
                    if soft(session.add(&table, &entry.name, entry.grams))?.is_some() {
                        added += 1;
                    }
                }
                println!("Added {} food(s).", added);
                if outcome.skipped > 0 {
                    println!("Skipped {} line(s).", outcome.skipped);
                }
            }
            SessionAction::ShowList => display_entries(session.entries()),
            SessionAction::ClearList => {
                if session.is_empty() {
                    println!("The list is already empty.");
                } else if prompt_yes_no("Clear the list?", false)? {
                    session.clear();
                    println!("List cleared.");
                }
            }
            SessionAction::Calculate => {
                if session.is_empty() {
                    println!("Add some foods first.");
                } else {
                    let report = session.totals(&table)?;
                    println!();
                    print_report(config, &report)?;
                }
            }
            SessionAction::Quit => break,
        }
        println!();
    }

    Ok(())
}
