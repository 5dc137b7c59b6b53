//! Text matching utilities.

use crate::types::ContentItem;

/// Lower-cases a raw search string once so it can be reused across items.
///
/// Matching is plain Unicode lower-casing; accents and locale-specific
/// foldings are left untouched.
pub fn normalize_search_text(raw: &str) -> String {
    raw.to_lowercase()
}

/// Checks a lower-cased needle against a candidate with case-insensitive
/// substring semantics. An empty needle matches everything.
pub fn text_matches(needle: &str, candidate: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    candidate.to_lowercase().contains(needle)
}

/// Matches a lower-cased needle against any of the given fields.
pub fn fields_match<'a, I>(needle: &str, fields: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    if needle.is_empty() {
        return true;
    }
    fields.into_iter().any(|field| text_matches(needle, field))
}

/// Matches a lower-cased needle against an item's title, body, and tags.
pub(crate) fn item_text_matches(needle: &str, item: &ContentItem) -> bool {
    fields_match(
        needle,
        std::iter::once(item.title.as_str())
            .chain(std::iter::once(item.body.as_str()))
            .chain(item.tags.iter().map(String::as_str)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(title: &str, body: &str, tags: &[&str]) -> ContentItem {
        ContentItem {
            id: "1".to_string(),
            title: title.to_string(),
            body: body.to_string(),
            category: "general".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: Utc.with_ymd_and_hms(2024, 12, 10, 9, 0, 0).unwrap(),
            popularity_score: 0.0,
        }
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(text_matches("", "anything"));
        assert!(item_text_matches("", &item("", "", &[])));
    }

    #[test]
    fn matching_ignores_case() {
        let needle = normalize_search_text("FINALS");
        assert!(text_matches(&needle, "Feeling overwhelmed with finals"));
        assert!(!text_matches(&needle, "Midterms"));
    }

    #[test]
    fn matches_title_body_or_tag() {
        let entry = item("Sleep tips", "Lying awake at night", &["Stress", "routine"]);
        assert!(item_text_matches("sleep", &entry));
        assert!(item_text_matches("awake", &entry));
        assert!(item_text_matches("stress", &entry));
        assert!(item_text_matches("rout", &entry));
        assert!(!item_text_matches("anxiety", &entry));
    }

    #[test]
    fn substring_spans_words_but_not_fields() {
        let entry = item("Study group", "accountability", &["study group"]);
        assert!(item_text_matches("dy gr", &entry));
        // Title and body are matched independently, never concatenated.
        assert!(!item_text_matches("groupaccount", &entry));
    }

    #[test]
    fn non_ascii_text_is_lowercased() {
        let needle = normalize_search_text("ÉTUDE");
        assert!(text_matches(&needle, "Une étude"));
        // No accent folding.
        assert!(!text_matches(&needle, "etude"));
    }
}
