use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread;

use serde::Serialize;

use crate::error::HookError;
use crate::logger::HookLogger;
use crate::name::HookName;
use crate::platform::Platform;
use crate::repo::RepoLayout;

const SHEBANG: &str = "#!/bin/sh";

/// Owner read, write and execute.
#[cfg(unix)]
const HOOK_FILE_MODE: u32 = 0o700;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct InstalledHook {
    pub name: HookName,
    pub path: PathBuf,
}

/// Result of a hook test run.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct HookRun {
    pub name: HookName,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub success: bool,
}

/// Installs, inspects and test-executes the hooks of one repository.
pub struct HookManager {
    layout: RepoLayout,
    platform: Platform,
    logger: Arc<dyn HookLogger>,
}

impl HookManager {
    /// Manager rooted at the current working directory.
    pub fn new(logger: Arc<dyn HookLogger>) -> Self {
        Self::with_root(".", logger)
    }

    pub fn with_root(root: impl Into<PathBuf>, logger: Arc<dyn HookLogger>) -> Self {
        Self {
            layout: RepoLayout::new(root),
            platform: Platform::current(),
            logger,
        }
    }

    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub const fn layout(&self) -> &RepoLayout {
        &self.layout
    }

    /// Checks every key of `hooks` against the git hook allow-list.
    ///
    /// Returns the parsed names paired with their bodies, in key order.
    pub fn validate_hook_names(
        hooks: &BTreeMap<String, String>,
    ) -> Result<Vec<(HookName, &str)>, HookError> {
        hooks
            .iter()
            .map(|(name, body)| Ok((name.parse::<HookName>()?, body.as_str())))
            .collect()
    }

    #[must_use]
    pub fn is_git_repository(&self) -> bool {
        self.layout.git_dir.exists()
    }

    pub fn ensure_hooks_directory(&self) -> Result<(), HookError> {
        let hooks_dir = &self.layout.hooks_dir;
        if hooks_dir.exists() {
            return Ok(());
        }
        fs::create_dir_all(hooks_dir).map_err(|source| HookError::DirectoryCreation {
            path: hooks_dir.clone(),
            source,
        })?;
        self.logger
            .info(&format!("Created hooks directory {}", hooks_dir.display()));
        Ok(())
    }

    #[must_use]
    pub fn list_installed_hooks(&self) -> Vec<InstalledHook> {
        HookName::ALL
            .into_iter()
            .map(|name| InstalledHook {
                name,
                path: self.layout.hook_path(name),
            })
            .filter(|hook| hook.path.exists())
            .collect()
    }

    /// Writes the hook file unless it already holds the same content.
    ///
    /// The hooks directory must exist; see [`Self::ensure_hooks_directory`].
    pub fn write_hook(&self, name: HookName, body: &str) -> Result<WriteOutcome, HookError> {
        let path = self.layout.hook_path(name);
        let content = hook_file_content(body);

        if read_if_exists(&path)?.as_deref() == Some(content.as_bytes()) {
            self.logger
                .info(&format!("The hook `{name}` has not changed, skipping"));
            return Ok(WriteOutcome::Unchanged);
        }

        self.logger.info(&format!("Writing `{name}` hook"));
        fs::write(&path, content)?;
        ensure_owner_rwx(&path)?;
        Ok(WriteOutcome::Written)
    }

    pub fn read_hook(&self, name: HookName) -> Result<Option<String>, HookError> {
        let bytes = read_if_exists(&self.layout.hook_path(name))?;
        Ok(bytes.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Logs the hook's content. Returns whether the hook exists.
    pub fn print_hook(&self, name: HookName) -> Result<bool, HookError> {
        let Some(content) = self.read_hook(name)? else {
            return Ok(false);
        };
        self.logger.info(&format!(
            "`{name}` -> The following commands will be invoked: \n{content}"
        ));
        Ok(true)
    }

    /// Runs the hook with `sh -c`, forwarding its stdout to the logger.
    ///
    /// Returns `None` when the hook is not installed. Blocks until the hook
    /// exits; there is no timeout.
    pub fn execute_hook(&self, name: HookName) -> Result<Option<HookRun>, HookError> {
        if !self.platform.supports_execution() {
            return Err(HookError::UnsupportedPlatform);
        }
        if self.read_hook(name)?.is_none() {
            return Ok(None);
        }

        let path = self.layout.hook_path(name);
        self.logger
            .info(&format!(">>>>> Executing hook `{name}` <<<<<"));
        tracing::debug!(path = %path.display(), "spawning hook process");

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&path)
            .stdout(Stdio::piped())
            .spawn()?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("hook stdout was not captured"))?;

        let logger = Arc::clone(&self.logger);
        let reader = thread::Builder::new()
            .name(format!("{name}-stdout"))
            .spawn(move || forward_lines(stdout, logger.as_ref()));
        let reader = match reader {
            Ok(handle) => handle,
            Err(error) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(error.into());
            }
        };

        // std retries `wait` on EINTR; an `Interrupted` kind here only comes
        // from platforms that surface it.
        let status = child.wait().map_err(|error| {
            if error.kind() == io::ErrorKind::Interrupted {
                HookError::Interrupted(error)
            } else {
                HookError::Io(error)
            }
        })?;
        // All output is logged before the exit code is reported.
        reader.join().map_err(|_| HookError::OutputReader)?;

        let exit_code = status.code();
        match exit_code {
            Some(code) => self.logger.info(&format!("Exit code is {code}")),
            None => self
                .logger
                .info("Exit code is unavailable, the hook was terminated by a signal"),
        }
        let success = exit_code == Some(0);
        self.logger.info(&format!(
            ">>>>> The hook `{name}` was executed with the {} result <<<<<",
            if success { "SUCCESS" } else { "ERROR" }
        ));

        Ok(Some(HookRun {
            name,
            exit_code,
            success,
        }))
    }
}

/// Shebang line followed by `body` with every run of two or more spaces removed.
#[must_use]
pub fn hook_file_content(body: &str) -> String {
    format!("{SHEBANG}\n{}", strip_space_runs(body))
}

fn strip_space_runs(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut spaces = 0usize;
    for ch in body.chars() {
        if ch == ' ' {
            spaces += 1;
            continue;
        }
        if spaces == 1 {
            out.push(' ');
        }
        spaces = 0;
        out.push(ch);
    }
    if spaces == 1 {
        out.push(' ');
    }
    out
}

fn read_if_exists(path: &Path) -> Result<Option<Vec<u8>>, HookError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error.into()),
    }
}

#[cfg(unix)]
fn ensure_owner_rwx(path: &Path) -> Result<(), HookError> {
    use std::os::unix::fs::PermissionsExt;

    let mode = fs::metadata(path)?.permissions().mode();
    if mode & HOOK_FILE_MODE != HOOK_FILE_MODE {
        fs::set_permissions(path, fs::Permissions::from_mode(HOOK_FILE_MODE))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_owner_rwx(_path: &Path) -> Result<(), HookError> {
    Ok(())
}

fn forward_lines(stream: impl Read, logger: &dyn HookLogger) {
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                logger.info(line.trim_end_matches(&['\r', '\n'][..]));
            }
        }
    }
}
