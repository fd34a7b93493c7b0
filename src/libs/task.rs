use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A task record as owned by the remote store.
///
/// `id == 0` is reserved for the local placeholder shown while a create
/// request is outstanding; the server never assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub owner: i64,
}

impl Task {
    pub fn new(id: i64, title: &str, completed: bool, owner: i64) -> Self {
        Task {
            id,
            title: title.to_string(),
            completed,
            owner,
        }
    }

    /// Stand-in record for a creation in flight.
    pub fn placeholder(title: &str, owner: i64) -> Self {
        Task::new(0, title, false, owner)
    }
}

/// Locally held values that temporarily supersede the confirmed record
/// while a mutation is in flight or has just failed.
///
/// A later optimistic edit of the same field before the earlier request
/// settles simply overwrites the value (last writer wins, no coalescing).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// One slot of the local mirror: the last server-confirmed record plus an
/// optional pending override. Keeping both in one structure makes every
/// "effective value" derivation total over a single state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub task: Task,
    pub pending: Option<Patch>,
}

impl Entry {
    pub fn confirmed(task: Task) -> Self {
        Entry { task, pending: None }
    }

    /// Title shown to the user: pending override if present, else confirmed.
    pub fn effective_title(&self) -> &str {
        self.pending
            .as_ref()
            .and_then(|p| p.title.as_deref())
            .unwrap_or(&self.task.title)
    }

    /// Status shown to the user: pending override if present, else confirmed.
    pub fn effective_completed(&self) -> bool {
        self.pending
            .as_ref()
            .and_then(|p| p.completed)
            .unwrap_or(self.task.completed)
    }

    /// Status used for filter classification. While a mutation for this
    /// entry is in flight the confirmed status wins, so a task never drops
    /// out of its current filter bucket mid-mutation.
    pub fn filter_status(&self, in_flight: bool) -> bool {
        if in_flight {
            self.task.completed
        } else {
            self.effective_completed()
        }
    }

    fn patch_mut(&mut self) -> &mut Patch {
        self.pending.get_or_insert_with(Patch::default)
    }

    pub fn set_pending_title(&mut self, title: &str) {
        self.patch_mut().title = Some(title.to_string());
    }

    pub fn set_pending_completed(&mut self, completed: bool) {
        self.patch_mut().completed = Some(completed);
    }

    /// Drops both overrides, reverting display to the confirmed record.
    /// Called on every settlement: after success the confirmed record
    /// already carries the new values, after failure the UI must revert.
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }
}

/// Which subset of the collection is displayed. Pure UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}
