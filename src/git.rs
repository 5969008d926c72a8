use std::path::PathBuf;
use std::process::Command as GitCommand;

use crate::error::GitError;

/// Which side of the index a diff is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffMode {
    Staged,
    Unstaged,
}

impl DiffMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffMode::Staged => "staged",
            DiffMode::Unstaged => "unstaged",
        }
    }
}

/// Paths with pending changes, in the order git reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedFiles {
    pub staged: Vec<String>,
    pub unstaged: Vec<String>,
}

impl ChangedFiles {
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty()
    }
}

/// Read-only view of pending changes. The orchestrator only talks to this
/// trait, so tests can script the git side.
pub trait DiffSource {
    /// List staged and unstaged paths with pending modifications.
    fn changed_files(&self) -> Result<ChangedFiles, GitError>;

    /// Full diff for one path. Empty output is a success, not a failure.
    fn file_diff(&self, path: &str, mode: DiffMode) -> Result<String, GitError>;
}

/// Shells out to the git binary inside a working directory.
pub struct GitRepo {
    root: PathBuf,
}

impl GitRepo {
    /// Handle for the current working directory.
    pub fn new() -> Self {
        Self::at(".")
    }

    /// Handle for an explicit directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Run a git command and capture stdout as String.
    fn git_output(&self, args: &[&str]) -> Result<String, GitError> {
        let output = GitCommand::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| GitError::Spawn {
                args: args.join(" "),
                source: e,
            })?;

        if !output.status.success() {
            return Err(GitError::NonZero {
                args: args.join(" "),
                status: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Default for GitRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffSource for GitRepo {
    fn changed_files(&self) -> Result<ChangedFiles, GitError> {
        let staged_out = self.git_output(&["diff", "--cached", "--name-status"])?;
        let unstaged_out = self.git_output(&["diff", "--name-only"])?;

        Ok(ChangedFiles {
            staged: parse_name_status(&staged_out),
            unstaged: parse_name_only(&unstaged_out),
        })
    }

    fn file_diff(&self, path: &str, mode: DiffMode) -> Result<String, GitError> {
        let diff = match mode {
            DiffMode::Staged => self.git_output(&["diff", "--cached", "--", path])?,
            DiffMode::Unstaged => self.git_output(&["diff", "--", path])?,
        };
        log::info!("Got diff for file: {path}");
        Ok(diff)
    }
}

/// Parse `git diff --cached --name-status` output into paths.
///
/// Only `M` entries are kept; added, deleted, renamed and copied entries are
/// dropped. The unstaged listing ([`parse_name_only`]) is not filtered the
/// same way.
fn parse_name_status(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.starts_with('M'))
        .filter_map(|line| line.split('\t').nth(1))
        .map(|path| path.trim().to_string())
        .filter(|path| !path.is_empty())
        .collect()
}

/// Parse `git diff --name-only` output: one path per non-empty line.
fn parse_name_only(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}
