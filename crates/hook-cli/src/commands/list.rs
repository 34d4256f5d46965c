use hook_core::InstalledHook;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hookctl list`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(ctx), flags.format)
}

pub fn run(ctx: &AppContext) -> Vec<InstalledHook> {
    ctx.manager.list_installed_hooks()
}

#[cfg(test)]
mod tests {
    use hook_config::Settings;
    use hook_core::HookName;
    use pretty_assertions::assert_eq;

    use super::run;
    use crate::commands::shared::testing::{context, git_repo};

    #[test]
    fn lists_only_installed_hooks() {
        let repo = git_repo();
        let (ctx, _) = context(&repo, &[], Settings::default());
        assert!(run(&ctx).is_empty());

        ctx.manager.ensure_hooks_directory().unwrap();
        ctx.manager.write_hook(HookName::PrePush, "cargo test").unwrap();
        ctx.manager.write_hook(HookName::PreCommit, "true").unwrap();

        let listed = run(&ctx);
        assert_eq!(
            listed.iter().map(|hook| hook.name).collect::<Vec<_>>(),
            vec![HookName::PreCommit, HookName::PrePush]
        );
        assert_eq!(listed[1].path, repo.path().join(".git/hooks/pre-push"));
    }
}
