pub mod prompts;
pub mod render;

pub use prompts::{
    SessionAction, prompt_action, prompt_food, prompt_free_text, prompt_grams, prompt_yes_no,
    suggest_names,
};
pub use render::{
    display_entries, display_search_results, format_amount, format_grams, render_entries_json,
    render_report, render_report_json,
};
