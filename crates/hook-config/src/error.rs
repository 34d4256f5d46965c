//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A key of the `[hooks]` table is not a git hook.
    #[error("Invalid hook configuration: {0}")]
    Hook(#[from] hook_core::HookError),
}
