//! Activity feed derivation.

use memodash_common::types::ActivityItem;

/// Builds the activity feed: `len` entries, newest first.
///
/// Pure and deterministic; the same `len` always yields the same sequence.
#[must_use]
pub fn activity_feed(len: usize) -> Vec<ActivityItem> {
    (1..=len)
        .map(|n| ActivityItem {
            id: u32::try_from(n - 1).unwrap_or(u32::MAX),
            text: format!("Activity {n} - Processing data..."),
            relative_time: format!("{n}m ago"),
        })
        .collect()
}
