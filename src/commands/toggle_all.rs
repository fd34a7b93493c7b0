//! Flips every task toward the common status: if all are completed they all
//! become active, otherwise every active task becomes completed. Each flip
//! is an independent mutation; a partial failure leaves a mixed state.

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
    let total = snapshot.tasks.len();
    if total == 0 {
        msg_info!(Message::NoTasks);
        return Ok(());
    }
    // Tasks already in the target state are untouched.
    let targets = if snapshot.active_count == 0 { total } else { snapshot.active_count };

    store.dispatch(Intent::ToggleAll).await;

    let snapshot = store.snapshot();
    if snapshot.notices.any() {
        View::notices(&snapshot.notices);
    } else {
        msg_success!(Message::AllTasksToggled(targets));
    }
    Ok(())
}
