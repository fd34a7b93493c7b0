//! Lists tasks, optionally restricted to the active or completed subset.

use crate::libs::messages::Message;
use crate::libs::store::Intent;
use crate::libs::task::FilterMode;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which subset of tasks to show
    #[arg(short, long, value_enum, default_value_t = FilterMode::All)]
    filter: FilterMode,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let store = super::build_store()?;
    store.load().await;
    store.dispatch(Intent::SetFilter(args.filter)).await;

    let snapshot = store.snapshot();
    if snapshot.notices.any() {
        View::notices(&snapshot.notices);
        return Ok(());
    }
    if snapshot.tasks.is_empty() {
        msg_info!(Message::NoTasks);
    } else {
        View::tasks(&snapshot);
    }
    Ok(())
}
