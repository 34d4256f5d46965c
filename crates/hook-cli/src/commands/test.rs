use anyhow::bail;
use hook_core::{HookName, HookRun};
use serde::Serialize;

use crate::cli::{GlobalFlags, HookArgs};
use crate::commands::shared::target_hooks;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct TestReport {
    pub runs: Vec<HookRun>,
    pub missing: Vec<HookName>,
}

impl TestReport {
    fn failed(&self) -> Vec<String> {
        self.runs
            .iter()
            .filter(|run| !run.success)
            .map(|run| run.name.to_string())
            .collect()
    }
}

/// Handle `hookctl test`.
pub fn handle(args: &HookArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = run(args, ctx)?;
    output(&report, flags.format)?;

    let failed = report.failed();
    if !failed.is_empty() {
        bail!("hook test failed: {}", failed.join(", "));
    }
    Ok(())
}

pub fn run(args: &HookArgs, ctx: &AppContext) -> anyhow::Result<TestReport> {
    let mut report = TestReport {
        runs: Vec::new(),
        missing: Vec::new(),
    };
    for name in target_hooks(ctx, args.hook)? {
        match ctx.manager.execute_hook(name)? {
            Some(run) => report.runs.push(run),
            None => {
                tracing::warn!(hook = %name, "hook is not installed, nothing to execute");
                report.missing.push(name);
            }
        }
    }
    Ok(report)
}

#[cfg(all(test, unix))]
mod tests {
    use hook_config::Settings;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::install;
    use crate::commands::shared::testing::{context, git_repo};

    #[test]
    fn runs_configured_hooks_and_collects_failures() {
        let repo = git_repo();
        let (ctx, _) = context(
            &repo,
            &[("pre-commit", "exit 3"), ("pre-push", "echo ok")],
            Settings::default(),
        );
        install::run(&ctx).unwrap();

        let report = run(&HookArgs { hook: None }, &ctx).unwrap();
        assert!(report.missing.is_empty());
        assert_eq!(
            report
                .runs
                .iter()
                .map(|run| (run.name, run.exit_code))
                .collect::<Vec<_>>(),
            vec![(HookName::PreCommit, Some(3)), (HookName::PrePush, Some(0))]
        );
        assert_eq!(report.failed(), vec!["pre-commit".to_string()]);
    }

    #[test]
    fn missing_hook_is_reported_not_failed() {
        let repo = git_repo();
        let (ctx, logger) = context(&repo, &[], Settings::default());

        let report = run(&HookArgs { hook: Some(HookName::Update) }, &ctx).unwrap();
        assert!(report.runs.is_empty());
        assert_eq!(report.missing, vec![HookName::Update]);
        assert!(report.failed().is_empty());
        assert!(logger.lines().is_empty());
    }
}
