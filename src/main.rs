mod cli_args;
mod config;
mod error;
mod git;
mod llm;
mod logging;
mod setup;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use indicatif::ProgressBar;

use crate::cli_args::Cli;
use crate::config::Config;
use crate::git::{ChangedFiles, DiffMode, DiffSource, GitRepo};
use crate::llm::LlmClient;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose, cli.quiet);

    let cfg = Config::from_sources(&cli);
    let llm = setup::build_llm_client(&cli, &cfg);
    let repo = GitRepo::new();

    run(&repo, llm.as_ref());
    Ok(())
}

/// Drive the whole pipeline: enumerate changed files, generate one commit
/// message per non-empty diff (staged first, then unstaged), then merge the
/// collected messages into one. The final message is only logged; nothing is
/// written to the repository.
fn run(source: &dyn DiffSource, llm: &dyn LlmClient) {
    let files = match source.changed_files() {
        Ok(files) => files,
        Err(err) => {
            log::error!("Error running git diff commands: {err}");
            ChangedFiles::default()
        }
    };

    if files.is_empty() {
        log::info!("No changed files");
        return;
    }

    println!("{:?}", files.staged);
    println!("{:?}", files.unstaged);

    let mut messages: Vec<String> = Vec::new();
    collect_messages(source, llm, &files.staged, DiffMode::Staged, &mut messages);
    collect_messages(source, llm, &files.unstaged, DiffMode::Unstaged, &mut messages);

    if messages.is_empty() {
        return;
    }

    let pb = spinner("Merging commit messages...");
    let merged = llm.merge_messages(&messages);
    pb.finish_and_clear();

    if let Ok(final_message) = merged {
        log::info!("Final cohesive commit message:\n{final_message}");
    }
}

/// Fetch each path's diff and append one commit message per non-empty diff.
///
/// A failed git command is logged here and skips the file; a failed inference
/// call was already logged by the client and also skips. An empty diff is a
/// success that contributes nothing.
fn collect_messages(
    source: &dyn DiffSource,
    llm: &dyn LlmClient,
    paths: &[String],
    mode: DiffMode,
    messages: &mut Vec<String>,
) {
    for path in paths {
        let diff = match source.file_diff(path, mode) {
            Ok(diff) => diff,
            Err(err) => {
                log::error!("Error running git diff for {path}: {err}");
                continue;
            }
        };

        if diff.is_empty() {
            continue;
        }

        let pb = spinner("Generating commit message...");
        let message = llm.message_for_diff(&diff);
        pb.finish_and_clear();

        if let Ok(message) = message {
            log::info!(
                "Commit message for {} file {path}:\n{message}\n",
                mode.as_str()
            );
            messages.push(message);
        }
    }
}

/// Spinner on stderr while a blocking inference call is in flight. Hidden
/// automatically when stderr is not a terminal.
fn spinner(msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(150));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GitError, LlmError};
    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, HashSet};

    /// Scripted stand-in for the git side.
    #[derive(Default)]
    struct ScriptedSource {
        files: ChangedFiles,
        fail_enumeration: bool,
        diffs: HashMap<String, String>,
        failing: HashSet<String>,
        diff_calls: Cell<usize>,
    }

    impl ScriptedSource {
        fn with_files(staged: &[&str], unstaged: &[&str]) -> Self {
            Self {
                files: ChangedFiles {
                    staged: staged.iter().map(|s| s.to_string()).collect(),
                    unstaged: unstaged.iter().map(|s| s.to_string()).collect(),
                },
                ..Self::default()
            }
        }

        fn diff(mut self, path: &str, diff: &str) -> Self {
            self.diffs.insert(path.to_string(), diff.to_string());
            self
        }

        fn failing(mut self, path: &str) -> Self {
            self.failing.insert(path.to_string());
            self
        }
    }

    impl DiffSource for ScriptedSource {
        fn changed_files(&self) -> Result<ChangedFiles, GitError> {
            if self.fail_enumeration {
                return Err(GitError::NonZero {
                    args: "diff --cached --name-status".into(),
                    status: Some(128),
                });
            }
            Ok(self.files.clone())
        }

        fn file_diff(&self, path: &str, _mode: DiffMode) -> Result<String, GitError> {
            self.diff_calls.set(self.diff_calls.get() + 1);
            if self.failing.contains(path) {
                return Err(GitError::NonZero {
                    args: format!("diff -- {path}"),
                    status: Some(128),
                });
            }
            Ok(self.diffs.get(path).cloned().unwrap_or_default())
        }
    }

    /// Scripted stand-in for the inference side; records what it was asked.
    #[derive(Default)]
    struct ScriptedLlm {
        fail_generation: bool,
        seen_diffs: RefCell<Vec<String>>,
        merges: RefCell<Vec<Vec<String>>>,
    }

    impl LlmClient for ScriptedLlm {
        fn message_for_diff(&self, diff: &str) -> Result<String, LlmError> {
            self.seen_diffs.borrow_mut().push(diff.to_string());
            if self.fail_generation {
                return Err(LlmError::BadResponse {
                    url: "scripted".into(),
                    reason: "scripted failure".into(),
                });
            }
            Ok(format!("message for {diff}"))
        }

        fn merge_messages(&self, messages: &[String]) -> Result<String, LlmError> {
            self.merges.borrow_mut().push(messages.to_vec());
            Ok("merged".into())
        }
    }

    #[test]
    fn two_staged_diffs_and_one_empty_unstaged_yield_two_calls_then_one_merge() {
        let source = ScriptedSource::with_files(&["a.rs", "b.rs"], &["c.rs"])
            .diff("a.rs", "+a")
            .diff("b.rs", "+b")
            .diff("c.rs", "");
        let llm = ScriptedLlm::default();

        run(&source, &llm);

        assert_eq!(source.diff_calls.get(), 3);
        assert_eq!(*llm.seen_diffs.borrow(), vec!["+a", "+b"]);
        let merges = llm.merges.borrow();
        assert_eq!(merges.len(), 1);
        assert_eq!(merges[0], vec!["message for +a", "message for +b"]);
    }

    #[test]
    fn no_changed_files_makes_no_calls() {
        let source = ScriptedSource::default();
        let llm = ScriptedLlm::default();

        run(&source, &llm);

        assert_eq!(source.diff_calls.get(), 0);
        assert!(llm.seen_diffs.borrow().is_empty());
        assert!(llm.merges.borrow().is_empty());
    }

    #[test]
    fn enumeration_failure_degrades_to_the_no_changes_path() {
        let source = ScriptedSource {
            fail_enumeration: true,
            ..ScriptedSource::with_files(&["a.rs"], &[])
        };
        let llm = ScriptedLlm::default();

        run(&source, &llm);

        assert_eq!(source.diff_calls.get(), 0);
        assert!(llm.seen_diffs.borrow().is_empty());
        assert!(llm.merges.borrow().is_empty());
    }

    #[test]
    fn fetch_failure_skips_only_that_file() {
        let source = ScriptedSource::with_files(&["bad.rs", "good.rs"], &[])
            .failing("bad.rs")
            .diff("good.rs", "+g");
        let llm = ScriptedLlm::default();

        run(&source, &llm);

        assert_eq!(*llm.seen_diffs.borrow(), vec!["+g"]);
        assert_eq!(llm.merges.borrow().len(), 1);
    }

    #[test]
    fn merge_is_skipped_when_no_message_survives() {
        let source = ScriptedSource::with_files(&["a.rs"], &[]).diff("a.rs", "+a");
        let llm = ScriptedLlm {
            fail_generation: true,
            ..ScriptedLlm::default()
        };

        run(&source, &llm);

        assert_eq!(llm.seen_diffs.borrow().len(), 1);
        assert!(llm.merges.borrow().is_empty());
    }

    #[test]
    fn staged_messages_precede_unstaged_in_the_merge() {
        let source = ScriptedSource::with_files(&["s.rs"], &["u.rs"])
            .diff("s.rs", "+s")
            .diff("u.rs", "+u");
        let llm = ScriptedLlm::default();

        run(&source, &llm);

        assert_eq!(
            llm.merges.borrow()[0],
            vec!["message for +s", "message for +u"]
        );
    }
}
