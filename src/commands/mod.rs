pub mod add;
pub mod clear;
pub mod init;
pub mod list;
pub mod rename;
pub mod rm;
pub mod toggle;
pub mod toggle_all;

use crate::api::RestGateway;
use crate::libs::config::Config;
use crate::libs::store::TaskStore;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Toggle a task's completion status")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Rename a task")]
    Rename(rename::RenameArgs),
    #[command(about = "Delete a task")]
    Rm(rm::RmArgs),
    #[command(about = "Toggle every task toward the common status")]
    ToggleAll,
    #[command(about = "Delete all completed tasks")]
    Clear,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args).await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Toggle(args) => toggle::cmd(args).await,
            Commands::Rename(args) => rename::cmd(args).await,
            Commands::Rm(args) => rm::cmd(args).await,
            Commands::ToggleAll => toggle_all::cmd().await,
            Commands::Clear => clear::cmd().await,
        }
    }
}

/// Builds the synchronization core against the configured remote store.
pub(crate) fn build_store() -> Result<TaskStore<RestGateway>> {
    let config = Config::read()?;
    let gateway = RestGateway::new(&config.gateway.api_url);
    Ok(TaskStore::new(gateway, config.gateway.owner))
}
