//! Deletes one task by id.

use crate::libs::messages::Message;
use crate::libs::store::Intent;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RmArgs {
    /// Id of the task to delete
    #[arg(required = true)]
    id: i64,
}

pub async fn cmd(args: RmArgs) -> Result<()> {
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

    store.dispatch(Intent::Delete(args.id)).await;

    let snapshot = store.snapshot();
    if snapshot.notices.any() {
        View::notices(&snapshot.notices);
    } else {
        msg_success!(Message::TaskDeleted(args.id));
    }
    Ok(())
}
