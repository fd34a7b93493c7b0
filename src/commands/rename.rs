//! Renames a task through the edit-session path, so an empty title deletes
//! the task exactly like clearing the inline edit field would.

use crate::libs::messages::Message;
use crate::libs::store::Intent;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Id of the task to rename
    #[arg(required = true)]
    id: i64,
    /// New title; an empty string deletes the task
    #[arg(required = true, allow_hyphen_values = true)]
    title: String,
}

pub async fn cmd(args: RenameArgs) -> Result<()> {
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

    store.dispatch(Intent::StartEdit(args.id)).await;
    store
        .dispatch(Intent::CommitEdit {
            id: args.id,
            draft: args.title.clone(),
        })
        .await;

    let snapshot = store.snapshot();
    if snapshot.notices.any() {
        View::notices(&snapshot.notices);
    } else if args.title.trim().is_empty() {
        msg_success!(Message::TaskDeleted(args.id));
    } else {
        msg_success!(Message::TaskRenamed(args.title.trim().to_string()));
    }
    Ok(())
}
