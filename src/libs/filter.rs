//! Visibility filtering over the local task mirror.
//!
//! Pure functions of (entries, in-flight set, filter mode). Filtering never
//! reorders: the result is always an ordered subsequence of the collection.

use crate::libs::task::{Entry, FilterMode};
use std::collections::HashMap;

/// Selects the entries visible under `mode`.
///
/// Classification uses each entry's effective status, except that an entry
/// with a mutation in flight is classified by its last-confirmed status so
/// it cannot vanish from its current bucket mid-mutation.
pub fn visible<'a>(entries: &'a [Entry], busy: &HashMap<i64, u32>, mode: FilterMode) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|entry| {
            let status = entry.filter_status(busy.contains_key(&entry.task.id));
            match mode {
                FilterMode::All => true,
                FilterMode::Active => !status,
                FilterMode::Completed => status,
            }
        })
        .collect()
}

/// Number of confirmed-active tasks ("N items left"). Counts ignore pending
/// overrides: only settled state moves the counters.
pub fn active_count(entries: &[Entry]) -> usize {
    entries.iter().filter(|e| !e.task.completed).count()
}

/// Number of confirmed-completed tasks.
pub fn completed_count(entries: &[Entry]) -> usize {
    entries.iter().filter(|e| e.task.completed).count()
}
