//! Deletes every completed task, each as an independent mutation.

use crate::libs::messages::Message;
use crate::libs::store::Intent;
use crate::libs::view::View;
use crate::{msg_info, msg_success};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let store = super::build_store()?;
    store.load().await;

    let snapshot = store.snapshot();
    if snapshot.notices.any() {
        View::notices(&snapshot.notices);
        return Ok(());
    }
    let completed = snapshot.completed_count;
    if completed == 0 {
        msg_info!(Message::NoCompletedTasks);
        return Ok(());
    }

    store.dispatch(Intent::ClearCompleted).await;

    let snapshot = store.snapshot();
    if snapshot.notices.any() {
        View::notices(&snapshot.notices);
    } else {
        msg_success!(Message::CompletedTasksCleared(completed));
    }
    Ok(())
}
