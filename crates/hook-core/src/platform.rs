/// Whether hooks can be test-executed on the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Unix-like host with POSIX permission bits and `sh`.
    Posix,
    /// Windows or any host without POSIX file permissions.
    Unsupported,
}

impl Platform {
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(unix) && !cfg!(windows) {
            Self::Posix
        } else {
            Self::Unsupported
        }
    }

    #[must_use]
    pub const fn supports_execution(self) -> bool {
        matches!(self, Self::Posix)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
