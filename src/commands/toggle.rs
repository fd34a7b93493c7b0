//! Flips the completion status of one task.

use crate::libs::messages::Message;
use crate::libs::store::Intent;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Id of the task to toggle
    #[arg(required = true)]
    id: i64,
}

pub async fn cmd(args: ToggleArgs) -> Result<()> {
    let store = super::build_store()?;
    store.load().await;

    let snapshot = store.snapshot();
    if snapshot.notices.any() {
        View::notices(&snapshot.notices);
        return Ok(());
    }
    if !snapshot.tasks.iter().any(|t| t.id == args.id) {
        return Err(msg_error_anyhow!(Message::TaskNotFoundWithId(args.id)));
    }

    store.dispatch(Intent::Toggle(args.id)).await;

    let snapshot = store.snapshot();
    if snapshot.notices.any() {
        View::notices(&snapshot.notices);
    } else {
        msg_success!(Message::TaskToggled(args.id));
    }
    Ok(())
}
