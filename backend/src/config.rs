//! Service settings.
//!
//! Values are resolved once at startup, lowest priority first:
//! built-in defaults, an optional `qrhook.{toml,yaml,json}` file in the working
//! directory, then `QRHOOK_*` environment variables (`QRHOOK_API_TOKEN`,
//! `QRHOOK_PORT`, ...). The API token has no default and must be provided.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

const CONFIG_FILE: &str = "qrhook";
const ENV_PREFIX: &str = "QRHOOK";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// GraphQL endpoint used for lookups.
    pub api_url: String,
    /// Multipart endpoint used for file uploads.
    pub file_api_url: String,
    pub api_token: String,
    pub board_id: String,
    /// Background artwork; a gradient is drawn when it cannot be read.
    pub background_path: PathBuf,
    pub http_timeout_secs: u64,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(Environment::with_prefix(ENV_PREFIX)),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Settings = builder
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000_i64)?
            .set_default("api_url", "https://api.monday.com/v2")?
            .set_default("file_api_url", "https://api.monday.com/v2/file")?
            .set_default("board_id", "9241811459")?
            .set_default("background_path", "attached_assets/background.png")?
            .set_default("http_timeout_secs", 30_i64)?
            .build()?
            .try_deserialize()?;

        if settings.api_token.trim().is_empty() {
            return Err(ConfigError::Message(format!(
                "{}_API_TOKEN must not be empty",
                ENV_PREFIX
            )));
        }
        Ok(settings)
    }

    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
