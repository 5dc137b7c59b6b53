//! Filter-then-sort evaluation for content queries.

use crate::query::{sort_by_mode, sort_items, ContentMatcher};
use crate::types::{ContentItem, QueryParams, QueryResult};

/// Produces the ordered, filtered view of `items` for `params`.
///
/// Items failing either the text or the category predicate are dropped; the
/// survivors are ordered by `params.sort_mode`. The input slice is only read,
/// and a fresh vector is returned on every call. The engine has no failure
/// path: an unknown category or an empty input yields an empty result.
pub fn query(items: &[ContentItem], params: &QueryParams) -> Vec<ContentItem> {
    let matcher = ContentMatcher::compile(params);
    evaluate(items, &matcher)
}

/// Like [`query`], but also reports how many items were scanned and the
/// term to highlight.
pub fn search(items: &[ContentItem], params: &QueryParams) -> QueryResult {
    let matcher = ContentMatcher::compile(params);
    let matches = evaluate(items, &matcher);

    QueryResult {
        count: matches.len(),
        items: matches,
        scanned: items.len(),
        highlight_term: matcher.highlight_term(),
        category: matcher.category().clone(),
        sort_mode: matcher.sort_mode(),
    }
}

/// Searches typed records and returns references to the matching records
/// themselves, in engine order.
///
/// Each record is projected to a `ContentItem` once; filtering and sorting
/// happen on that projection, so results are identical to running [`search`]
/// over the projected items.
pub fn search_records<'r, T>(records: &'r [T], params: &QueryParams) -> QueryResult<&'r T>
where
    for<'a> ContentItem: From<&'a T>,
{
    let matcher = ContentMatcher::compile(params);
    let mut matches = records
        .iter()
        .map(|record| (ContentItem::from(record), record))
        .filter(|(item, _)| matcher.matches(item))
        .collect::<Vec<_>>();
    sort_by_mode(&mut matches, matcher.sort_mode(), |(item, _)| item);

    log::debug!(
        "record query matched {} of {} records (category={}, sort={})",
        matches.len(),
        records.len(),
        matcher.category(),
        matcher.sort_mode()
    );

    QueryResult {
        count: matches.len(),
        items: matches.into_iter().map(|(_, record)| record).collect(),
        scanned: records.len(),
        highlight_term: matcher.highlight_term(),
        category: matcher.category().clone(),
        sort_mode: matcher.sort_mode(),
    }
}

fn evaluate(items: &[ContentItem], matcher: &ContentMatcher) -> Vec<ContentItem> {
    let mut matches = items
        .iter()
        .filter(|item| matcher.matches(item))
        .cloned()
        .collect::<Vec<_>>();
    sort_items(&mut matches, matcher.sort_mode());

    log::debug!(
        "content query matched {} of {} items (category={}, sort={})",
        matches.len(),
        items.len(),
        matcher.category(),
        matcher.sort_mode()
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryFilter, SortMode};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 10, 12, 0, 0).unwrap()
    }

    fn item(
        id: &str,
        title: &str,
        category: &str,
        tags: &[&str],
        hours_ago: i64,
        score: f64,
    ) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            title: title.to_string(),
            body: String::new(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: base_time() - Duration::hours(hours_ago),
            popularity_score: score,
        }
    }

    fn scenario_items() -> Vec<ContentItem> {
        vec![
            item("1", "Feeling overwhelmed", "support", &["finals", "stress"], 5, 20.0),
            item("2", "Small victory", "success", &["anxiety"], 2, 43.0),
        ]
    }

    fn board() -> Vec<ContentItem> {
        vec![
            item(
                "1",
                "Feeling overwhelmed with finals approaching",
                "support",
                &["finals", "stress", "overwhelmed"],
                2,
                20.0,
            ),
            item(
                "2",
                "Small victory: I asked for help today!",
                "success",
                &["anxiety", "counseling", "victory"],
                5,
                43.0,
            ),
            item(
                "3",
                "Tips for better sleep during stressful times?",
                "advice",
                &["sleep", "stress", "tips"],
                8,
                15.0,
            ),
            item(
                "4",
                "How do you deal with homesickness?",
                "question",
                &["homesickness", "freshman", "adjustment"],
                12,
                27.0,
            ),
            item(
                "5",
                "Study group for accountability?",
                "general",
                &["study group", "accountability", "motivation"],
                24,
                11.0,
            ),
            item("6", "Exam week check-in", "support", &["finals"], 8, 27.0),
        ]
    }

    fn ids(items: &[ContentItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    fn params(search_text: &str, category: &str, sort_mode: SortMode) -> QueryParams {
        QueryParams::new(search_text, category, sort_mode)
    }

    #[test]
    fn scenario_all_recent_orders_newest_first() {
        let result = query(&scenario_items(), &params("", "all", SortMode::Recent));
        assert_eq!(ids(&result), vec!["2", "1"]);
    }

    #[test]
    fn scenario_search_matches_through_tag() {
        let result = query(&scenario_items(), &params("stress", "all", SortMode::Recent));
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn scenario_category_filter() {
        let result = query(&scenario_items(), &params("", "success", SortMode::Recent));
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn scenario_no_match_is_empty() {
        let result = query(&scenario_items(), &params("zzz", "all", SortMode::Recent));
        assert!(result.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        for mode in [SortMode::Recent, SortMode::Popular, SortMode::Unsorted] {
            assert!(query(&[], &params("stress", "all", mode)).is_empty());
            assert!(query(&[], &params("", "support", mode)).is_empty());
        }
    }

    #[test]
    fn unknown_category_yields_empty_result() {
        let result = query(&board(), &params("", "memes", SortMode::Recent));
        assert!(result.is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let items = board();
        let query_params = params("st", "all", SortMode::Popular);
        let first = query(&items, &query_params);
        let second = query(&items, &query_params);
        assert_eq!(first, second);
    }

    #[test]
    fn input_is_not_mutated() {
        let items = board();
        let before = items.clone();
        let _ = query(&items, &params("", "all", SortMode::Popular));
        let _ = query(&items, &params("sleep", "advice", SortMode::Recent));
        assert_eq!(items, before);
    }

    #[test]
    fn output_is_sound_and_complete() {
        let items = board();
        let query_params = params("STRESS", "all", SortMode::Recent);
        let result = query(&items, &query_params);
        let matcher = ContentMatcher::compile(&query_params);

        for entry in &result {
            assert!(matcher.matches(entry));
        }
        for entry in items.iter().filter(|entry| matcher.matches(entry)) {
            let occurrences = result.iter().filter(|found| found.id == entry.id).count();
            assert_eq!(occurrences, 1);
        }
        assert_eq!(ids(&result), vec!["1", "3"]);
    }

    #[test]
    fn recent_output_is_descending() {
        let result = query(&board(), &params("", "all", SortMode::Recent));
        for pair in result.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
        // Items 3 and 6 share a timestamp and keep their input order.
        assert_eq!(ids(&result), vec!["1", "2", "3", "6", "4", "5"]);
    }

    #[test]
    fn popular_output_is_descending_and_stable() {
        let result = query(&board(), &params("", "all", SortMode::Popular));
        for pair in result.windows(2) {
            assert!(pair[0].popularity_score >= pair[1].popularity_score);
        }
        // Items 4 and 6 tie on 27 and keep their input order.
        assert_eq!(ids(&result), vec!["2", "4", "6", "1", "3", "5"]);
    }

    #[test]
    fn unsorted_mode_keeps_filtered_input_order() {
        let result = query(&board(), &params("", "support", SortMode::Unsorted));
        assert_eq!(ids(&result), vec!["1", "6"]);
    }

    #[test]
    fn search_reports_bookkeeping() {
        let result = search(&board(), &params("Finals", "support", SortMode::Popular));
        assert_eq!(result.scanned, 6);
        assert_eq!(result.count, 2);
        assert_eq!(ids(&result.items), vec!["6", "1"]);
        assert_eq!(result.highlight_term.as_deref(), Some("finals"));
        assert_eq!(result.category, CategoryFilter::only("support"));
        assert_eq!(result.sort_mode, SortMode::Popular);
    }

    #[test]
    fn record_search_matches_item_search() {
        use crate::source::{Post, PostCategory};

        let posts = board()
            .into_iter()
            .map(|item| Post {
                id: item.id,
                title: item.title,
                content: item.body,
                author: "Anonymous Student".to_string(),
                author_initials: "AS".to_string(),
                category: item.category.parse().unwrap_or(PostCategory::General),
                tags: item.tags,
                timestamp: item.created_at,
                replies: item.popularity_score as u32,
                hearts: 0,
                is_anonymous: true,
                is_moderated: true,
            })
            .collect::<Vec<_>>();

        let query_params = params("", "all", SortMode::Popular);
        let records = search_records(&posts, &query_params);
        let items = search(&board(), &query_params);
        let record_ids = records
            .items
            .iter()
            .map(|post| post.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(record_ids, ids(&items.items));
        assert_eq!(records.count, 6);
        assert_eq!(records.scanned, 6);
    }
}
