//! Behaviour switches for the hookctl commands.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    /// Turn `install` into a no-op.
    #[serde(default)]
    pub skip: bool,

    /// Print every hook right after installing it.
    #[serde(default)]
    pub print_after_install: bool,
}
