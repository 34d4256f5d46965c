use std::path::{Path, PathBuf};

use anyhow::Context;

/// Resolve the repository root from `--project` or the current directory.
pub fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);

        // Accept `--project path/to/repo/.git` as a convenience.
        if explicit
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name == ".git")
        {
            return explicit
                .parent()
                .map(Path::to_path_buf)
                .context("invalid --project path: '.git' directory has no parent");
        }

        if explicit.is_dir() {
            return Ok(explicit);
        }

        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    std::env::current_dir().context("failed to read current directory")
}

/// Make the resolved root the working directory.
///
/// Hook paths are relative to the working directory, and hooks inherit it
/// when executed.
pub fn enter_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    let root = resolve_project_root(project_override)?;
    std::env::set_current_dir(&root)
        .with_context(|| format!("failed to enter project root {}", root.display()))?;
    tracing::debug!(root = %root.display(), "entered project root");
    Ok(root)
}
