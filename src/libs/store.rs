//! The optimistic synchronization core.
//!
//! `TaskStore` owns the authoritative local mirror of the remote task
//! collection and is the only mutation entry point in the application. Every
//! user intent mutates visible state immediately (optimism), issues an
//! asynchronous gateway call, and on settlement either commits the confirmed
//! record or rolls back and raises a flag on the error aggregator.
//!
//! ## State ownership
//!
//! All shared mutable state lives in a single `AppState` behind one mutex:
//! the entry collection, the creation placeholder, the in-flight counts, the
//! edit session and the UI flags. The lock is never held across an await;
//! gateway calls run between two short lock scopes (optimistic apply,
//! settlement), which gives the replace-whole-value atomicity the rendering
//! layer relies on.
//!
//! ## Concurrency
//!
//! Fan-out operations (`toggle_all`, `clear_completed`) run their per-task
//! mutations concurrently within the calling task and tolerate out-of-order
//! settlement: each mutation tracks its own in-flight count and settles
//! independently. There is no cancellation and no automatic retry; a failed
//! mutation is rolled back and retrying is up to the user.

use crate::api::{TaskDraft, TaskGateway};
use crate::libs::edit::{decide_commit, CommitAction, EditSession};
use crate::libs::filter;
use crate::libs::notice::{Fault, Notices};
use crate::libs::task::{Entry, FilterMode, Task};
use crate::libs::view::{Snapshot, TaskRow};
use futures::future::join_all;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// User intents accepted by the store. The rendering layer dispatches these
/// instead of reaching into state directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Reload the whole collection from the gateway.
    Reload,
    /// Create a task with the given (untrimmed) title.
    Create(String),
    /// Flip the completion status of one task.
    Toggle(i64),
    /// Delete one task via its row control.
    Delete(i64),
    /// Flip every task toward the common status.
    ToggleAll,
    /// Delete every completed task.
    ClearCompleted,
    /// Open the inline edit session for a task.
    StartEdit(i64),
    /// Submit or blur the edit field with the given draft.
    CommitEdit { id: i64, draft: String },
    /// Escape: discard the edit session.
    CancelEdit,
    /// Switch the visibility filter.
    SetFilter(FilterMode),
    /// Close the error banner and clear all flags.
    DismissErrors,
}

#[derive(Debug, Default)]
struct AppState {
    entries: Vec<Entry>,
    placeholder: Option<Task>,
    input_draft: String,
    creating: bool,
    loading: bool,
    /// Per-id count of unsettled mutations. A count (rather than a plain
    /// set) keeps the busy indicator honest when a second mutation for the
    /// same id is issued before the first settles.
    busy: HashMap<i64, u32>,
    edit: EditSession,
    filter: FilterMode,
}

impl AppState {
    fn position(&self, id: i64) -> Option<usize> {
        self.entries.iter().position(|e| e.task.id == id)
    }

    fn entry_mut(&mut self, id: i64) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.task.id == id)
    }

    fn begin_flight(&mut self, id: i64) {
        *self.busy.entry(id).or_insert(0) += 1;
    }

    fn end_flight(&mut self, id: i64) {
        if let Some(count) = self.busy.get_mut(&id) {
            *count -= 1;
            if *count == 0 {
                self.busy.remove(&id);
            }
        }
    }
}

/// What a committed edit resolved to, decided under the lock and executed
/// after it is released.
enum PlannedCommit {
    Rename(Task),
    Delete { original_title: String },
}

pub struct TaskStore<G> {
    gateway: Arc<G>,
    owner: i64,
    state: Arc<Mutex<AppState>>,
    notices: Notices,
}

impl<G> Clone for TaskStore<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            owner: self.owner,
            state: Arc::clone(&self.state),
            notices: self.notices.clone(),
        }
    }
}

impl<G: TaskGateway> TaskStore<G> {
    pub fn new(gateway: G, owner: i64) -> Self {
        Self {
            gateway: Arc::new(gateway),
            owner,
            state: Arc::new(Mutex::new(AppState::default())),
            notices: Notices::new(),
        }
    }

    /// Routes a user intent to the matching operation.
    pub async fn dispatch(&self, intent: Intent) {
        match intent {
            Intent::Reload => self.load().await,
            Intent::Create(title) => self.create(&title).await,
            Intent::Toggle(id) => self.toggle(id).await,
            Intent::Delete(id) => self.delete(id, false, "").await,
            Intent::ToggleAll => self.toggle_all().await,
            Intent::ClearCompleted => self.clear_completed().await,
            Intent::StartEdit(id) => self.start_edit(id),
            Intent::CommitEdit { id, draft } => self.commit_edit(id, &draft).await,
            Intent::CancelEdit => self.cancel_edit(),
            Intent::SetFilter(mode) => self.set_filter(mode),
            Intent::DismissErrors => self.dismiss_errors(),
        }
    }

    /// Replaces the local mirror wholesale with the remote collection.
    /// On failure the collection is left empty; no stale rows survive.
    pub async fn load(&self) {
        self.state.lock().loading = true;
        let result = self.gateway.list(self.owner).await;
        let failed = {
            let mut state = self.state.lock();
            let failed = match result {
                Ok(tasks) => {
                    tracing::debug!(count = tasks.len(), "loaded task collection");
                    state.entries = tasks.into_iter().map(Entry::confirmed).collect();
                    false
                }
                Err(err) => {
                    tracing::warn!(%err, "failed to load tasks");
                    state.entries.clear();
                    true
                }
            };
            state.loading = false;
            failed
        };
        if failed {
            self.notices.raise(Fault::Load);
        }
    }

    /// Creates a task. An empty trimmed title fails fast with a validation
    /// flag and no request. Otherwise a placeholder row appears immediately
    /// and is removed on settlement whatever the outcome.
    pub async fn create(&self, title: &str) {
        let trimmed = title.trim().to_string();
        if trimmed.is_empty() {
            self.notices.raise(Fault::EmptyTitle);
            return;
        }

        {
            let mut state = self.state.lock();
            state.placeholder = Some(Task::placeholder(&trimmed, self.owner));
            state.creating = true;
        }

        let draft = TaskDraft {
            title: trimmed,
            completed: false,
            owner: self.owner,
        };
        let result = self.gateway.create(&draft).await;

        let failed = {
            let mut state = self.state.lock();
            let failed = match result {
                Ok(task) => {
                    tracing::debug!(id = task.id, "task created");
                    state.entries.push(Entry::confirmed(task));
                    state.input_draft.clear();
                    false
                }
                Err(err) => {
                    tracing::warn!(%err, "failed to create task");
                    true
                }
            };
            state.placeholder = None;
            state.creating = false;
            failed
        };
        if failed {
            self.notices.raise(Fault::Create);
        }
    }

    /// Sends the full desired record to the gateway. On success the
    /// server-returned record replaces the stored one and both overrides are
    /// cleared; on failure the overrides are cleared too, reverting the UI
    /// to the last-confirmed values, and a failed title edit reopens the
    /// edit session with the pre-edit title.
    pub async fn update(&self, desired: Task, from_title_edit: bool) {
        let id = desired.id;
        self.state.lock().begin_flight(id);

        let draft = TaskDraft {
            title: desired.title.trim().to_string(),
            completed: desired.completed,
            owner: desired.owner,
        };
        let result = self.gateway.update(id, &draft).await;

        let failed = {
            let mut state = self.state.lock();
            let failed = match result {
                Ok(confirmed) => {
                    tracing::debug!(id, "update confirmed");
                    if let Some(entry) = state.entry_mut(id) {
                        entry.task = confirmed;
                        entry.clear_pending();
                    }
                    if from_title_edit && state.edit.is_editing(id) {
                        state.edit.close();
                    }
                    false
                }
                Err(err) => {
                    tracing::warn!(%err, id, "update failed, rolling back");
                    let original_title = state.entry_mut(id).map(|entry| {
                        entry.clear_pending();
                        entry.task.title.clone()
                    });
                    if from_title_edit {
                        if let Some(title) = original_title {
                            state.edit.reopen(id, &title);
                        }
                    }
                    true
                }
            };
            state.end_flight(id);
            failed
        };
        if failed {
            self.notices.raise(Fault::Update);
        }
    }

    /// Deletes a task. A failed delete leaves the row untouched; when the
    /// delete came from an empty-title edit, the session stays open with the
    /// original title so the user can retry.
    pub async fn delete(&self, id: i64, from_title_edit: bool, original_title: &str) {
        self.state.lock().begin_flight(id);

        let result = self.gateway.delete(id).await;

        let failed = {
            let mut state = self.state.lock();
            let failed = match result {
                Ok(()) => {
                    tracing::debug!(id, "delete confirmed");
                    state.entries.retain(|e| e.task.id != id);
                    if from_title_edit && state.edit.is_editing(id) {
                        state.edit.close();
                    }
                    false
                }
                Err(err) => {
                    tracing::warn!(%err, id, "delete failed");
                    if from_title_edit {
                        state.edit.reopen(id, original_title);
                    }
                    true
                }
            };
            state.end_flight(id);
            failed
        };
        if failed {
            self.notices.raise(Fault::Delete);
        }
    }

    /// Optimistic status flip for one task: the override is written before
    /// the request goes out, so the checkbox reacts instantly.
    pub async fn toggle(&self, id: i64) {
        let desired = {
            let mut state = self.state.lock();
            let Some(entry) = state.entry_mut(id) else {
                return;
            };
            let next = !entry.task.completed;
            entry.set_pending_completed(next);
            let mut task = entry.task.clone();
            task.completed = next;
            task
        };
        self.update(desired, false).await;
    }

    /// Flips every task whose confirmed status matches the "all completed?"
    /// aggregate; tasks already in the target state are untouched. Each flip
    /// is an independent mutation with no atomicity across the set.
    pub async fn toggle_all(&self) {
        let targets: Vec<Task> = {
            let mut state = self.state.lock();
            if state.entries.is_empty() {
                return;
            }
            let all_completed = state.entries.iter().all(|e| e.task.completed);
            state
                .entries
                .iter_mut()
                .filter(|e| e.task.completed == all_completed)
                .map(|entry| {
                    entry.set_pending_completed(!all_completed);
                    let mut task = entry.task.clone();
                    task.completed = !all_completed;
                    task
                })
                .collect()
        };
        join_all(targets.into_iter().map(|task| self.update(task, false))).await;
    }

    /// Deletes every confirmed-completed task, each as an independent
    /// mutation. Partial failure leaves the failed rows in place.
    pub async fn clear_completed(&self) {
        let ids: Vec<i64> = {
            let state = self.state.lock();
            state.entries.iter().filter(|e| e.task.completed).map(|e| e.task.id).collect()
        };
        join_all(ids.into_iter().map(|id| self.delete(id, false, ""))).await;
    }

    /// Opens the edit session for a task, seeding the draft with its
    /// confirmed title. An already-open session for another task is
    /// reinitialized, never merged.
    pub fn start_edit(&self, id: i64) {
        let mut state = self.state.lock();
        if let Some(pos) = state.position(id) {
            let title = state.entries[pos].task.title.clone();
            state.edit.begin(id, &title);
        }
    }

    pub fn cancel_edit(&self) {
        self.state.lock().edit.cancel();
    }

    /// Resolves a submitted edit draft: unchanged titles close the session
    /// with no request, changed titles become an optimistic rename (session
    /// closed immediately, reopened by the failure path), and an empty
    /// draft deletes the task with the session held open until settlement.
    pub async fn commit_edit(&self, id: i64, draft: &str) {
        let planned = {
            let mut state = self.state.lock();
            let Some(pos) = state.position(id) else {
                if state.edit.is_editing(id) {
                    state.edit.close();
                }
                return;
            };
            let current_title = state.entries[pos].task.title.clone();
            match decide_commit(draft, &current_title) {
                CommitAction::Cancel => {
                    if state.edit.is_editing(id) {
                        state.edit.close();
                    }
                    None
                }
                CommitAction::Rename(title) => {
                    if state.edit.is_editing(id) {
                        state.edit.close();
                    }
                    let entry = &mut state.entries[pos];
                    entry.set_pending_title(&title);
                    let mut desired = entry.task.clone();
                    desired.title = title;
                    Some(PlannedCommit::Rename(desired))
                }
                CommitAction::Delete => Some(PlannedCommit::Delete {
                    original_title: current_title,
                }),
            }
        };

        match planned {
            Some(PlannedCommit::Rename(task)) => self.update(task, true).await,
            Some(PlannedCommit::Delete { original_title }) => self.delete(id, true, &original_title).await,
            None => {}
        }
    }

    pub fn set_filter(&self, mode: FilterMode) {
        self.state.lock().filter = mode;
    }

    pub fn set_input(&self, text: &str) {
        self.state.lock().input_draft = text.to_string();
    }

    pub fn dismiss_errors(&self) {
        self.notices.dismiss();
    }

    /// Read-only view for the rendering layer.
    pub fn snapshot(&self) -> Snapshot {
        let state = self.state.lock();
        let tasks = filter::visible(&state.entries, &state.busy, state.filter)
            .into_iter()
            .map(|entry| TaskRow {
                id: entry.task.id,
                title: entry.effective_title().to_string(),
                completed: entry.effective_completed(),
                busy: state.busy.contains_key(&entry.task.id),
            })
            .collect();
        Snapshot {
            tasks,
            placeholder: state.placeholder.clone(),
            editing: state.edit.as_view().map(|(id, draft)| (id, draft.to_string())),
            filter: state.filter,
            active_count: filter::active_count(&state.entries),
            completed_count: filter::completed_count(&state.entries),
            loading: state.loading,
            creating: state.creating,
            input_locked: state.creating || !state.busy.is_empty(),
            input_draft: state.input_draft.clone(),
            notices: self.notices.snapshot(),
        }
    }
}
