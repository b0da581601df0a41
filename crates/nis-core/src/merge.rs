//! Bounded merge of two date-sorted sequences.
//!
//! Both inputs must already be ascending by key. The merge takes from
//! `first` only when its head is strictly earlier than the head of `second`,
//! so ties go to `second`. It stops as soon as `limit` items are out; the
//! rest of both inputs is dropped unread.

use crate::entities::SpaceItem;

/// Merge two ascending sequences into one, keeping at most `limit` items.
///
/// The result has `min(limit, len(first) + len(second))` items.
#[must_use]
pub fn merge_sorted_by_key<T, K, F>(
    first: impl IntoIterator<Item = T>,
    second: impl IntoIterator<Item = T>,
    limit: usize,
    mut key: F,
) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut first = first.into_iter().peekable();
    let mut second = second.into_iter().peekable();
    let mut merged = Vec::new();

    while merged.len() < limit {
        let take_first = match (first.peek(), second.peek()) {
            (Some(a), Some(b)) => key(a) < key(b),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_first { first.next() } else { second.next() };
        merged.extend(next);
    }

    merged
}

/// Merge events and launches by date. Launches win ties.
#[must_use]
pub fn merge_by_date(
    events: impl IntoIterator<Item = SpaceItem>,
    launches: impl IntoIterator<Item = SpaceItem>,
    limit: usize,
) -> Vec<SpaceItem> {
    merge_sorted_by_key(events, launches, limit, SpaceItem::date)
}
