use hook_core::HookName;
use serde::Serialize;

use crate::cli::{GlobalFlags, HookArgs};
use crate::commands::shared::target_hooks;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PrintedHook {
    pub name: HookName,
    pub installed: bool,
}

/// Handle `hookctl print`.
pub fn handle(args: &HookArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let printed = run(args, ctx)?;
    output(&printed, flags.format)
}

pub fn run(args: &HookArgs, ctx: &AppContext) -> anyhow::Result<Vec<PrintedHook>> {
    let mut printed = Vec::new();
    for name in target_hooks(ctx, args.hook)? {
        let installed = ctx.manager.print_hook(name)?;
        if !installed {
            tracing::warn!(hook = %name, "hook is not installed");
        }
        printed.push(PrintedHook { name, installed });
    }
    Ok(printed)
}
