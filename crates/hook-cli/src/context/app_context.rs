use std::sync::Arc;

use anyhow::Context;
use hook_config::HookConfig;
use hook_core::{HookManager, TracingLogger};

/// Shared resources for one command invocation.
pub struct AppContext {
    pub config: HookConfig,
    pub manager: HookManager,
}

impl AppContext {
    /// Load configuration and build a manager for the current directory.
    pub fn init() -> anyhow::Result<Self> {
        let config =
            HookConfig::load_with_dotenv(".").context("failed to load hookctl configuration")?;
        Ok(Self::with_config(config))
    }

    #[must_use]
    pub fn with_config(config: HookConfig) -> Self {
        Self {
            config,
            manager: HookManager::new(Arc::new(TracingLogger)),
        }
    }
}
