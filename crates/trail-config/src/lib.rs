//! # trail-config
//!
//! Layered configuration loading for the audit trail client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TRAIL_*` prefix, `__` as separator)
//! 2. Project-level `.trail/config.toml`
//! 3. User-level `~/.config/trail/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `TRAIL_CLIENT__BASE_URL` -> `client.base_url`,
//! `TRAIL_CLIENT__API_KEY` -> `client.api_key`, etc.
//!
//! ```no_run
//! use trail_config::TrailConfig;
//!
//! let config = TrailConfig::load_with_dotenv().expect("config");
//! if config.client.is_configured() {
//!     println!("audit trail server: {}", config.client.base_url);
//! }
//! ```

mod client;
mod error;

pub use client::ClientConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of environment overrides; `__` separates nested keys.
pub const ENV_PREFIX: &str = "TRAIL_";

/// Project-local directory holding `config.toml` and `.env`.
pub const PROJECT_DIR: &str = ".trail";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrailConfig {
    #[serde(default)]
    pub client: ClientConfig,
}

impl TrailConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read any `.env` file; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// [`ClientConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.client.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.trail/.env`, then `.env`.
    ///
    /// Variables already present in the process environment are never
    /// replaced, and the first file to set a variable wins. Missing files are
    /// skipped.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        for path in [Path::new(PROJECT_DIR).join(".env"), PathBuf::from(".env")] {
            if let Err(e) = dotenvy::from_path(&path) {
                if !e.not_found() {
                    tracing::warn!(path = %path.display(), %e, "skipping unreadable env file");
                }
            }
        }
        Self::load()
    }

    /// Candidate TOML files, lowest priority first: the user-level file
    /// under the platform config dir, then the project file. Paths are
    /// returned whether or not they exist.
    pub fn config_files() -> Vec<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("trail").join(CONFIG_FILE))
            .into_iter()
            .chain(std::iter::once(Path::new(PROJECT_DIR).join(CONFIG_FILE)))
            .collect()
    }

    /// Build the figment provider chain: defaults, each existing file from
    /// [`Self::config_files`], then `TRAIL_*` variables.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    pub fn figment() -> Figment {
        let base = Figment::from(Serialized::defaults(Self::default()));
        Self::config_files()
            .into_iter()
            .filter(|path| path.is_file())
            .fold(base, |figment, path| figment.merge(Toml::file(path)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}
