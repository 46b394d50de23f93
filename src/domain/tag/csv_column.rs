//! CSV-column storage codec for tags
//!
//! Adapter helpers for stores that keep an experiment's tags in a single
//! comma-separated string column instead of one row per tag. The tag
//! engine's contract is satisfiable over either representation; these
//! functions translate between the column form and the normalized name
//! list the engine works with.

/// Parse a tags column value into its tag names
///
/// The column stores tags as `"tag1,tag2,tag3"`. An empty value means no
/// tags. Blank segments are dropped.
pub fn parse_tags_csv(column: &str) -> Vec<String> {
    column
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Serialize tag names back to the column form
///
/// Normalizes each name and deduplicates while preserving first-seen
/// order, so a column that accumulated case variants collapses cleanly.
pub fn serialize_tags_csv<S: AsRef<str>>(tags: &[S]) -> String {
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::new();

    for tag in tags {
        let normalized = tag.as_ref().trim().to_lowercase();
        if !normalized.is_empty() && seen.insert(normalized.clone()) {
            unique.push(normalized);
        }
    }

    unique.join(",")
}
