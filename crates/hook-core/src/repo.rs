use std::path::{Path, PathBuf};

use crate::name::HookName;

/// Filesystem locations the manager works with, all derived from one root.
#[derive(Debug, Clone)]
pub struct RepoLayout {
    pub root: PathBuf,
    pub git_dir: PathBuf,
    pub hooks_dir: PathBuf,
}

impl RepoLayout {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let git_dir = root.join(".git");
        let hooks_dir = git_dir.join("hooks");
        Self {
            root,
            git_dir,
            hooks_dir,
        }
    }

    #[must_use]
    pub fn hook_path(&self, name: HookName) -> PathBuf {
        self.hooks_dir.join(name.as_str())
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
