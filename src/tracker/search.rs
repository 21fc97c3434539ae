use tracing::debug;

use crate::models::FoodRecord;
use crate::table::FoodTable;

/// What a search returns when no record contains the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoMatchPolicy {
    /// Return nothing.
    #[default]
    Empty,

    /// Return the first page of the table, as if the query were blank.
    FirstPage,
}

/// Case-insensitive substring search over name and alias.
///
/// A blank query returns the first `limit` records. Otherwise every record
/// whose name or alias contains the trimmed query is returned in table order,
/// truncated to `limit`. Plain containment only, no ranking.
pub fn search<'a>(
    query: &str,
    table: &'a FoodTable,
    limit: usize,
    policy: NoMatchPolicy,
) -> Vec<&'a FoodRecord> {
    let query = query.trim();
    if query.is_empty() {
        return table.head(limit);
    }

    let needle = query.to_lowercase();
    let hits: Vec<&FoodRecord> = table
        .iter()
        .filter(|r| r.matches(&needle))
        .take(limit)
        .collect();

    if hits.is_empty() && policy == NoMatchPolicy::FirstPage {
        debug!(query, "no match, falling back to first page");
        return table.head(limit);
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrients;

    fn sample_table() -> FoodTable {
        FoodTable::from_records(vec![
            FoodRecord::new("Sweet Potato", Nutrients::zero()).with_alias("satsumaimo"),
            FoodRecord::new("Potato", Nutrients::zero()).with_alias("jagaimo"),
            FoodRecord::new("Rice", Nutrients::zero()).with_alias("gohan"),
            FoodRecord::new("Brown Rice", Nutrients::zero()).with_alias("genmai"),
        ])
    }

    fn names(hits: &[&FoodRecord]) -> Vec<String> {
        hits.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_blank_query_returns_head() {
        let table = sample_table();
        let hits = search("   ", &table, 2, NoMatchPolicy::Empty);
        assert_eq!(names(&hits), vec!["Sweet Potato", "Potato"]);
    }

    #[test]
    fn test_substring_in_table_order() {
        let table = sample_table();
        let hits = search("potato", &table, 10, NoMatchPolicy::Empty);
        assert_eq!(names(&hits), vec!["Sweet Potato", "Potato"]);
    }

    #[test]
    fn test_alias_match() {
        let table = sample_table();
        let hits = search("GOHAN", &table, 10, NoMatchPolicy::Empty);
        assert_eq!(names(&hits), vec!["Rice"]);
    }

    #[test]
    fn test_limit_truncates() {
        let table = sample_table();
        let hits = search("rice", &table, 1, NoMatchPolicy::Empty);
        assert_eq!(names(&hits), vec!["Rice"]);
        assert!(search("rice", &table, 0, NoMatchPolicy::Empty).is_empty());
    }

    #[test]
    fn test_no_match_policies() {
        let table = sample_table();
        assert!(search("natto", &table, 3, NoMatchPolicy::Empty).is_empty());

        let fallback = search("natto", &table, 3, NoMatchPolicy::FirstPage);
        assert_eq!(names(&fallback), vec!["Sweet Potato", "Potato", "Rice"]);
    }
}
