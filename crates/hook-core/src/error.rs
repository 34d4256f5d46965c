use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("`{name}` is not a git hook. Available hooks are: {valid}")]
    InvalidHookName { name: String, valid: String },
    #[error("cannot create directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("test execution of hooks is unavailable on this platform (Windows or no POSIX file permissions)")]
    UnsupportedPlatform,
    #[error("interrupted while waiting for hook process: {0}")]
    Interrupted(#[source] std::io::Error),
    #[error("hook output reader thread panicked")]
    OutputReader,
}
