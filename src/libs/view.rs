//! Read-only contract between the synchronization core and any front end,
//! plus the terminal renderer used by the CLI commands.

use crate::libs::messages::Message;
use crate::libs::notice::NoticeSnapshot;
use crate::libs::task::{FilterMode, Task};
use crate::{msg_error, msg_print};
use prettytable::{row, Table};

/// One displayable row: effective title and status with the overrides
/// already applied, plus whether a mutation for it is still in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub busy: bool,
}

/// Immutable snapshot of everything a rendering layer may show. Snapshots
/// are cheap to take and never let the front end mutate core state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Tasks visible under the current filter, in collection order.
    pub tasks: Vec<TaskRow>,
    /// Creation in flight, if any.
    pub placeholder: Option<Task>,
    /// Open edit session as (task id, draft title).
    pub editing: Option<(i64, String)>,
    pub filter: FilterMode,
    pub active_count: usize,
    pub completed_count: usize,
    pub loading: bool,
    pub creating: bool,
    /// New-todo input and the toggle-all control are disabled while a
    /// create or any per-task mutation is outstanding.
    pub input_locked: bool,
    pub input_draft: String,
    pub notices: NoticeSnapshot,
}

pub struct View {}

impl View {
    /// Prints the visible tasks as a table, placeholder row included.
    pub fn tasks(snapshot: &Snapshot) {
        let mut table = Table::new();
        table.add_row(row!["ID", "TITLE", "DONE", "SYNC"]);
        for task in &snapshot.tasks {
            table.add_row(row![
                task.id,
                task.title,
                if task.completed { "x" } else { " " },
                if task.busy { "..." } else { "" }
            ]);
        }
        if let Some(placeholder) = &snapshot.placeholder {
            table.add_row(row!["-", placeholder.title, " ", "..."]);
        }
        table.printstd();
        msg_print!(Message::ItemsLeft(snapshot.active_count));
    }

    /// Prints every raised error flag as one banner line, in the fixed
    /// order the aggregator defines.
    pub fn notices(notices: &NoticeSnapshot) {
        for message in notices.messages() {
            msg_error!(message);
        }
    }
}
