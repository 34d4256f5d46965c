use clap::{Args, Subcommand};
use hook_core::HookName;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Write the hooks configured in hookctl.toml into .git/hooks.
    Install,
    /// List hooks currently present in .git/hooks.
    List,
    /// Print the contents of installed hooks.
    Print(HookArgs),
    /// Execute installed hooks and report their exit codes.
    Test(HookArgs),
}

#[derive(Clone, Debug, Args)]
pub struct HookArgs {
    /// Hook to act on (defaults to every configured hook)
    pub hook: Option<HookName>,
}
