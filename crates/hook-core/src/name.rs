use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HookError;

/// A hook identifier git knows how to invoke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookName {
    ApplypatchMsg,
    CommitMsg,
    FsmonitorWatchman,
    PostUpdate,
    PreApplypatch,
    PreCommit,
    PreMergeCommit,
    PrePush,
    PreRebase,
    PreReceive,
    PrepareCommitMsg,
    PushToCheckout,
    Update,
}

impl HookName {
    /// Every hook name accepted by the manager.
    pub const ALL: [Self; 13] = [
        Self::ApplypatchMsg,
        Self::CommitMsg,
        Self::FsmonitorWatchman,
        Self::PostUpdate,
        Self::PreApplypatch,
        Self::PreCommit,
        Self::PreMergeCommit,
        Self::PrePush,
        Self::PreRebase,
        Self::PreReceive,
        Self::PrepareCommitMsg,
        Self::PushToCheckout,
        Self::Update,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ApplypatchMsg => "applypatch-msg",
            Self::CommitMsg => "commit-msg",
            Self::FsmonitorWatchman => "fsmonitor-watchman",
            Self::PostUpdate => "post-update",
            Self::PreApplypatch => "pre-applypatch",
            Self::PreCommit => "pre-commit",
            Self::PreMergeCommit => "pre-merge-commit",
            Self::PrePush => "pre-push",
            Self::PreRebase => "pre-rebase",
            Self::PreReceive => "pre-receive",
            Self::PrepareCommitMsg => "prepare-commit-msg",
            Self::PushToCheckout => "push-to-checkout",
            Self::Update => "update",
        }
    }

    /// Comma separated list of valid names, used in error messages.
    #[must_use]
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|name| name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookName {
    type Err = HookError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == value)
            .ok_or_else(|| HookError::InvalidHookName {
                name: value.to_string(),
                valid: Self::valid_names(),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_name_parses_back_to_itself() {
        for name in HookName::ALL {
            assert_eq!(name.as_str().parse::<HookName>().unwrap(), name);
        }
    }

    #[test]
    fn names_are_unique() {
        let unique = HookName::ALL
            .iter()
            .map(|name| name.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(unique.len(), HookName::ALL.len());
    }

    #[test]
    fn unknown_names_are_rejected() {
        for value in ["post-commit", "pre_commit", "PRE-COMMIT", "", " pre-commit"] {
            let err = value.parse::<HookName>().unwrap_err();
            assert!(matches!(err, HookError::InvalidHookName { .. }), "{value}");
        }
    }

    #[test]
    fn error_message_lists_valid_names() {
        let err = "post-checkout".parse::<HookName>().unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("`post-checkout` is not a git hook."));
        assert!(message.contains("pre-commit"));
        assert!(message.contains("push-to-checkout"));
    }

    #[test]
    fn serializes_as_kebab_case() {
        let json = serde_json::to_string(&HookName::PrepareCommitMsg).unwrap();
        assert_eq!(json, "\"prepare-commit-msg\"");
        let parsed: HookName = serde_json::from_str("\"fsmonitor-watchman\"").unwrap();
        assert_eq!(parsed, HookName::FsmonitorWatchman);
    }
}
