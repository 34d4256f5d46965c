//! Logging capability handed to [`crate::HookManager`].

use std::sync::Mutex;

/// Sink for the informational messages the manager produces.
///
/// Hook output is forwarded from a reader thread, so implementations must be
/// shareable across threads.
pub trait HookLogger: Send + Sync {
    fn info(&self, message: &str);
}

/// Forwards every message to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl HookLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "hookctl", "{message}");
    }
}

/// Keeps messages in memory, in the order they were logged.
///
/// Meant for tests that assert on the manager's log sequence.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl HookLogger for MemoryLogger {
    fn info(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(message.to_string());
        }
    }
}
