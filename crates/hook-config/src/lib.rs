//! # hook-config
//!
//! Layered configuration loading for hookctl using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HOOKCTL_*` prefix, `__` as separator)
//! 2. Project-level `hookctl.toml` in the repository root
//! 3. User-level `~/.config/hookctl/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `HOOKCTL_SETTINGS__SKIP` -> `settings.skip`. Keys under `hooks` have their
//! underscores turned into dashes, so `HOOKCTL_HOOKS__PRE_PUSH` -> `hooks.pre-push`.
//!
//! # Usage
//!
//! ```no_run
//! use hook_config::HookConfig;
//!
//! let config = HookConfig::load_with_dotenv(".").expect("config");
//! for (name, body) in config.validated_hooks().expect("valid hook names") {
//!     println!("{name}: {body}");
//! }
//! ```

mod error;
mod hooks;
mod settings;

pub use error::ConfigError;
pub use settings::Settings;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Uncased,
};
use hook_core::{HookManager, HookName};
use serde::{Deserialize, Serialize};

/// Project-local config file name, resolved against the repository root.
pub const PROJECT_CONFIG_FILE: &str = "hookctl.toml";

const ENV_PREFIX: &str = "HOOKCTL_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HookConfig {
    /// Hook name -> script body.
    #[serde(default, deserialize_with = "hooks::deserialize")]
    pub hooks: BTreeMap<String, String>,
    #[serde(default)]
    pub settings: Settings,
}

impl HookConfig {
    /// Load configuration for the repository at `root` (TOML files + environment).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::figment(root.as_ref())
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration after reading `<root>/.env`, if present.
    pub fn load_with_dotenv(root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let root = root.as_ref();
        let env_path = root.join(".env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
        }
        Self::load(root)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer more providers on top.
    #[must_use]
    pub fn figment(root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = root.join(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Self::env_provider())
    }

    /// Environment provider with dashed hook names.
    #[must_use]
    pub fn env_provider() -> Env {
        Env::prefixed(ENV_PREFIX).split("__").map(|key| {
            let key = key.as_str().to_ascii_lowercase();
            match key.strip_prefix("hooks.") {
                Some(hook) => Uncased::from(format!("hooks.{}", hook.replace('_', "-"))),
                None => Uncased::from(key),
            }
        })
    }

    /// Configured hooks with their names checked against the git allow-list.
    pub fn validated_hooks(&self) -> Result<Vec<(HookName, &str)>, ConfigError> {
        Ok(HookManager::validate_hook_names(&self.hooks)?)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hookctl").join("config.toml"))
    }
}
