//! # hook-core
//!
//! Git hook management for hookctl.
//!
//! [`HookManager`] works directly on `<root>/.git/hooks`:
//! - Validates hook names against the set git recognizes
//! - Writes hook scripts idempotently, with owner `rwx` permissions on Unix
//! - Lists, prints and test-executes installed hooks
//!
//! Every diagnostic goes through the [`HookLogger`] capability supplied at
//! construction.

mod error;
mod logger;
mod manager;
mod name;
mod platform;
mod repo;

pub use error::HookError;
pub use logger::{HookLogger, MemoryLogger, TracingLogger};
pub use manager::{HookManager, HookRun, InstalledHook, WriteOutcome, hook_file_content};
pub use name::HookName;
pub use platform::Platform;
pub use repo::RepoLayout;
