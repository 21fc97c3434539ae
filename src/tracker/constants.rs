// ============================================================================
// Search
// ============================================================================

/// Results shown by `plate search`.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Candidates offered when picking a food in the interactive session.
pub const PICK_SEARCH_LIMIT: usize = 30;

/// Candidates fetched when resolving a free-text name fragment.
/// Only the first one is used.
pub const PARSE_CANDIDATE_LIMIT: usize = 10;

// ============================================================================
// Entry bounds (enforced by callers, not by the parser)
// ============================================================================

/// Largest single quantity accepted from the interactive prompt, in grams.
pub const MAX_ENTRY_GRAMS: f64 = 3000.0;

/// Quantity pre-filled in the interactive prompt, in grams.
pub const DEFAULT_ENTRY_GRAMS: f64 = 100.0;

/// Jaro-Winkler similarity a name needs to be offered as a suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Most suggestions offered after an empty search.
pub const MAX_SUGGESTIONS: usize = 5;
