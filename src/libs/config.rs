//! Configuration management for the tudu application.
//!
//! Settings live in a JSON file under the platform application data
//! directory. A missing file is not an error: the defaults point at the
//! public demo task store so the client works out of the box. The `init`
//! command runs a small interactive wizard for overriding them.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\tudu\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/tudu/config.json`
//! - **Linux**: `~/.local/share/lacodda/tudu/config.json`

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Demo task store used when nothing has been configured.
const DEFAULT_API_URL: &str = "https://mate.academy/students-api";

/// Owner id of the demo account on the default store.
const DEFAULT_OWNER: i64 = 3200;

/// Connection parameters of the remote task store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL of the task store API; endpoints are built by appending
    /// `/todos` paths to it.
    pub api_url: String,

    /// Owner id the task collection belongs to. Every request is scoped
    /// to this id.
    pub owner: i64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            owner: DEFAULT_OWNER,
        }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when no file
    /// exists yet. A file that exists but cannot be parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).context(Message::ConfigParseError)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, creating the data
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path).context(Message::ConfigSaveError)?;
        serde_json::to_writer_pretty(&config_file, &self).context(Message::ConfigSaveError)?;
        Ok(())
    }

    /// Interactive setup wizard. Existing values are offered as defaults so
    /// re-running only changes what the user actually edits.
    pub fn init() -> Result<Self> {
        let current = Config::read().unwrap_or_default();

        println!("Remote task store settings");
        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter the task store API URL")
            .default(current.gateway.api_url)
            .interact_text()?;
        if api_url.trim().is_empty() {
            msg_bail_anyhow!(Message::GatewayUrlRequired);
        }
        let owner: i64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your owner id")
            .default(current.gateway.owner)
            .interact_text()?;

        Ok(Config {
            gateway: GatewayConfig {
                api_url: api_url.trim().trim_end_matches('/').to_string(),
                owner,
            },
        })
    }
}
