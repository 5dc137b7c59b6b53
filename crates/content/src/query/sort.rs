//! Result ordering.

use std::cmp::Ordering;

use crate::types::{ContentItem, SortMode};

/// Sorts items in place for the given mode.
///
/// `slice::sort_by` is stable, so items comparing equal keep their input
/// order. `Unsorted` leaves the slice untouched.
pub fn sort_items(items: &mut [ContentItem], mode: SortMode) {
    sort_by_mode(items, mode, |item| item);
}

/// Sorts arbitrary entries by the `ContentItem` each one projects to.
pub fn sort_by_mode<T, F>(entries: &mut [T], mode: SortMode, key: F)
where
    F: Fn(&T) -> &ContentItem,
{
    match mode {
        SortMode::Recent => entries.sort_by(|a, b| compare_recent(key(a), key(b))),
        SortMode::Popular => entries.sort_by(|a, b| compare_popular(key(a), key(b))),
        SortMode::Unsorted => {}
    }
}

fn compare_recent(a: &ContentItem, b: &ContentItem) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

// total_cmp keeps the order total even for NaN scores.
fn compare_popular(a: &ContentItem, b: &ContentItem) -> Ordering {
    b.popularity_score.total_cmp(&a.popularity_score)
}
