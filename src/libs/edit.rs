//! Inline title editing, one row at a time.

/// Single-slot edit session. At most one task is ever being edited;
/// starting a new edit reinitializes the slot, it never merges drafts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { todo_id: i64, draft: String },
}

impl EditSession {
    /// Opens a session for `todo_id`, seeding the draft with the task's
    /// current confirmed title.
    pub fn begin(&mut self, todo_id: i64, title: &str) {
        *self = EditSession::Editing {
            todo_id,
            draft: title.to_string(),
        };
    }

    /// Escape: discard the draft unconditionally, no request.
    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }

    pub fn close(&mut self) {
        *self = EditSession::Idle;
    }

    /// Failure paths put the session back (or keep it) open with a known
    /// draft so the user can retry without losing context.
    pub fn reopen(&mut self, todo_id: i64, draft: &str) {
        *self = EditSession::Editing {
            todo_id,
            draft: draft.to_string(),
        };
    }

    pub fn is_editing(&self, id: i64) -> bool {
        matches!(self, EditSession::Editing { todo_id, .. } if *todo_id == id)
    }

    pub fn as_view(&self) -> Option<(i64, &str)> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { todo_id, draft } => Some((*todo_id, draft.as_str())),
        }
    }
}

/// What a submit/blur of the edit field should do, decided purely from the
/// draft and the task's current confirmed title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitAction {
    /// Draft trims to the current title: close the session, no request.
    Cancel,
    /// Non-empty changed title: optimistic rename.
    Rename(String),
    /// Empty draft: delete the task, keeping the session open until the
    /// request settles.
    Delete,
}

/// Classifies a commit. `current_title` is the last-confirmed title of the
/// task under edit.
pub fn decide_commit(draft: &str, current_title: &str) -> CommitAction {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        CommitAction::Delete
    } else if trimmed == current_title {
        CommitAction::Cancel
    } else {
        CommitAction::Rename(trimmed.to_string())
    }
}
