use hook_core::HookName;

use crate::context::AppContext;

/// The explicitly requested hook, or every hook named in the configuration.
pub fn target_hooks(ctx: &AppContext, requested: Option<HookName>) -> anyhow::Result<Vec<HookName>> {
    if let Some(hook) = requested {
        return Ok(vec![hook]);
    }

    let configured = ctx
        .config
        .validated_hooks()?
        .into_iter()
        .map(|(name, _)| name)
        .collect::<Vec<_>>();
    if configured.is_empty() {
        tracing::warn!("no hooks configured; pass a hook name or add a [hooks] table to hookctl.toml");
    }
    Ok(configured)
}

#[cfg(test)]
pub mod testing {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use hook_config::{HookConfig, Settings};
    use hook_core::{HookManager, MemoryLogger};
    use tempfile::TempDir;

    use crate::context::AppContext;

    pub fn git_repo() -> TempDir {
        let dir = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(dir.path().join(".git")).expect(".git should create");
        dir
    }

    pub fn context(
        dir: &TempDir,
        hooks: &[(&str, &str)],
        settings: Settings,
    ) -> (AppContext, Arc<MemoryLogger>) {
        let logger = Arc::new(MemoryLogger::new());
        let config = HookConfig {
            hooks: hooks
                .iter()
                .map(|(name, body)| ((*name).to_string(), (*body).to_string()))
                .collect::<BTreeMap<_, _>>(),
            settings,
        };
        let ctx = AppContext {
            config,
            manager: HookManager::with_root(dir.path(), logger.clone()),
        };
        (ctx, logger)
    }
}
