//! Creates a new task on the remote store.

use crate::libs::messages::Message;
use crate::libs::store::Intent;
use crate::libs::view::View;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Title of the new task
    #[arg(required = true)]
    title: String,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let store = super::build_store()?;
    store.load().await;
    // The draft is cleared by the store only when the create settles
    // successfully, so a failed create leaves it available for retry.
    store.set_input(&args.title);
    store.dispatch(Intent::Create(args.title.clone())).await;

    let snapshot = store.snapshot();
    if snapshot.notices.any() {
        View::notices(&snapshot.notices);
    } else {
        msg_success!(Message::TaskCreated(args.title.trim().to_string()));
    }
    Ok(())
}
