//! Error aggregation for failed mutations.
//!
//! Collects independent failure-category flags into a single dismissible
//! notification. The banner becomes visible the moment the first flag is
//! raised and auto-hides after a fixed window; the underlying flags survive
//! the auto-hide and are only ever cleared by an explicit user dismissal.
//!
//! Timer policy: the one-shot timer is armed only on the all-clear to
//! at-least-one-flag transition. Raising further faults while any flag is
//! already set neither restarts the timer nor re-shows a banner that has
//! already hidden itself.

use crate::libs::messages::Message;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// How long the banner stays visible without an explicit dismissal.
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(3);

/// Independent failure categories, one flag each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Load,
    EmptyTitle,
    Create,
    Delete,
    Update,
}

/// Point-in-time view of the aggregator handed to the rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSnapshot {
    pub load_failed: bool,
    pub empty_title: bool,
    pub create_failed: bool,
    pub delete_failed: bool,
    pub update_failed: bool,
    pub show: bool,
}

impl NoticeSnapshot {
    pub fn any(&self) -> bool {
        self.load_failed || self.empty_title || self.create_failed || self.delete_failed || self.update_failed
    }

    /// Banner lines for every raised flag, in the fixed render order:
    /// load, title, create, delete, update.
    pub fn messages(&self) -> Vec<Message> {
        let mut lines = Vec::new();
        if self.load_failed {
            lines.push(Message::UnableToLoadTodos);
        }
        if self.empty_title {
            lines.push(Message::TitleShouldNotBeEmpty);
        }
        if self.create_failed {
            lines.push(Message::UnableToAddTodo);
        }
        if self.delete_failed {
            lines.push(Message::UnableToDeleteTodo);
        }
        if self.update_failed {
            lines.push(Message::UnableToUpdateTodo);
        }
        lines
    }
}

#[derive(Debug, Default)]
struct NoticeState {
    load_failed: bool,
    empty_title: bool,
    create_failed: bool,
    delete_failed: bool,
    update_failed: bool,
    show: bool,
    // Bumped whenever a running timer must stop mattering. A timer task
    // only clears `show` if the epoch it captured is still current.
    epoch: u64,
}

impl NoticeState {
    fn any(&self) -> bool {
        self.load_failed || self.empty_title || self.create_failed || self.delete_failed || self.update_failed
    }

    fn flag_mut(&mut self, fault: Fault) -> &mut bool {
        match fault {
            Fault::Load => &mut self.load_failed,
            Fault::EmptyTitle => &mut self.empty_title,
            Fault::Create => &mut self.create_failed,
            Fault::Delete => &mut self.delete_failed,
            Fault::Update => &mut self.update_failed,
        }
    }

    fn clear(&mut self) {
        self.load_failed = false;
        self.empty_title = false;
        self.create_failed = false;
        self.delete_failed = false;
        self.update_failed = false;
    }
}

/// Shared handle to the error aggregator. Cloning is cheap; all clones see
/// the same flags.
#[derive(Clone, Default)]
pub struct Notices {
    state: Arc<Mutex<NoticeState>>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises a failure flag. Must run inside a tokio runtime: the first
    /// flag of a batch arms the auto-hide timer as a background task.
    pub fn raise(&self, fault: Fault) {
        let arm = {
            let mut state = self.state.lock();
            let had_any = state.any();
            *state.flag_mut(fault) = true;
            if !had_any {
                state.show = true;
                state.epoch += 1;
                Some(state.epoch)
            } else {
                None
            }
        };
        if let Some(epoch) = arm {
            tracing::debug!(?fault, "error banner shown");
            self.arm_timer(epoch);
        } else {
            tracing::debug!(?fault, "error flag added to visible banner");
        }
    }

    fn arm_timer(&self, epoch: u64) {
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            tokio::time::sleep(BANNER_TIMEOUT).await;
            let mut state = state.lock();
            if state.epoch == epoch {
                state.show = false;
            }
        });
    }

    /// Explicit user dismissal: clears every flag, hides the banner and
    /// invalidates any pending timer.
    pub fn dismiss(&self) {
        let mut state = self.state.lock();
        state.clear();
        state.show = false;
        state.epoch += 1;
    }

    pub fn snapshot(&self) -> NoticeSnapshot {
        let state = self.state.lock();
        NoticeSnapshot {
            load_failed: state.load_failed,
            empty_title: state.empty_title,
            create_failed: state.create_failed,
            delete_failed: state.delete_failed,
            update_failed: state.update_failed,
            show: state.show,
        }
    }
}
