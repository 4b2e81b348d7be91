use crate::enumeration::types::WindowRecord;

/// Every match starts from this score.
pub const BASE_SCORE: f64 = 1.0;
/// Added when the title starts with the query; takes precedence over the
/// process-name bonus.
pub const TITLE_PREFIX_BONUS: f64 = 0.5;
/// Added when only the process name starts with the query.
pub const PROCESS_PREFIX_BONUS: f64 = 0.25;

/// Trim and lowercase the query text. An empty normalized query matches
/// every window.
pub fn normalize_query(text: Option<&str>) -> String {
    text.map(|t| t.trim().to_lowercase()).unwrap_or_default()
}

/// Window results are opt-in under the reserved tag; any other tag scopes the
/// search to some other feature.
pub fn tag_allows(tag: Option<&str>, reserved: &str) -> bool {
    match tag {
        None => true,
        Some(tag) => tag.to_lowercase() == reserved.to_lowercase(),
    }
}

pub fn is_match(record: &WindowRecord, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(normalized_query)
        || record.process_name.to_lowercase().contains(normalized_query)
}

/// Score for a record already known to match. Non-matching windows are
/// excluded entirely, never scored.
pub fn score(record: &WindowRecord, normalized_query: &str) -> f64 {
    let mut score = BASE_SCORE;
    if record.title.to_lowercase().starts_with(normalized_query) {
        score += TITLE_PREFIX_BONUS;
    } else if record.process_name.to_lowercase().starts_with(normalized_query) {
        score += PROCESS_PREFIX_BONUS;
    }
    score
}
