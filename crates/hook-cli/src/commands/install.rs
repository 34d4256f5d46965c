use anyhow::Context;
use hook_core::{HookName, WriteOutcome};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InstallStatus {
    Installed,
    Skipped,
    NotAGitRepository,
}

#[derive(Debug, Serialize)]
pub struct InstalledEntry {
    pub name: HookName,
    pub outcome: WriteOutcome,
}

#[derive(Debug, Serialize)]
pub struct InstallReport {
    pub status: InstallStatus,
    pub hooks: Vec<InstalledEntry>,
}

impl InstallReport {
    const fn empty(status: InstallStatus) -> Self {
        Self {
            status,
            hooks: Vec::new(),
        }
    }
}

/// Handle `hookctl install`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = run(ctx)?;
    output(&report, flags.format)
}

pub fn run(ctx: &AppContext) -> anyhow::Result<InstallReport> {
    if ctx.config.settings.skip {
        tracing::info!("hook installation is disabled by settings.skip");
        return Ok(InstallReport::empty(InstallStatus::Skipped));
    }

    if !ctx.manager.is_git_repository() {
        tracing::warn!(
            root = %ctx.manager.layout().root().display(),
            "not a git repository, no hooks installed"
        );
        return Ok(InstallReport::empty(InstallStatus::NotAGitRepository));
    }

    let hooks = ctx.config.validated_hooks()?;
    ctx.manager.ensure_hooks_directory()?;

    let mut entries = Vec::with_capacity(hooks.len());
    for (name, body) in hooks {
        let outcome = ctx
            .manager
            .write_hook(name, body)
            .with_context(|| format!("failed to write hook {name}"))?;
        if ctx.config.settings.print_after_install {
            ctx.manager.print_hook(name)?;
        }
        entries.push(InstalledEntry { name, outcome });
    }

    Ok(InstallReport {
        status: InstallStatus::Installed,
        hooks: entries,
    })
}
