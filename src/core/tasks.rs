//! Follow-up task dispatch.
//!
//! Formatting runs in the foreground with a bounded wait; test runs are
//! launched detached. A detached child is never waited on, never
//! observed, and outlives the hook process. Hook latency stays bounded
//! no matter how long the test suite takes, because the host blocks on
//! the hook's own exit.

use crate::config::{FormatterConfig, TestsConfig};
use crate::error::{Error, Result};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Companion-file suffixes probed, in order, when resolving a test target.
const TEST_COMPANION_SUFFIXES: [&str; 4] = [".test.ts", ".test.tsx", ".spec.ts", ".spec.tsx"];

/// Test-runner flag that tolerates a scope with zero matching tests.
const PASS_WITH_NO_TESTS: &str = "--passWithNoTests";

/// A subprocess to launch without tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundTask {
    /// Full command line, program first.
    pub argv: Vec<String>,

    /// Working directory for the child.
    pub cwd: PathBuf,
}

/// Spawn a task detached, with all stdio discarded.
///
/// Returns as soon as the child has started. The child handle is
/// dropped immediately; its outcome is never observed.
///
/// # Errors
///
/// Returns an error only when the process cannot be started at all.
#[allow(clippy::zombie_processes)]
pub fn launch_detached(task: &BackgroundTask) -> io::Result<()> {
    let (program, args) = task
        .argv
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty argv"))?;

    Command::new(program)
        .args(args)
        .current_dir(&task.cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    Ok(())
}

/// Run the formatter on a single path, waiting up to the configured
/// timeout.
///
/// Returns `Ok(true)` if the formatter exited successfully, `Ok(false)`
/// if it reported failure or overran the deadline (the child is killed).
///
/// # Errors
///
/// Returns an error if the formatter command is empty or cannot be
/// started.
pub fn run_formatter(config: &FormatterConfig, path: &str, project_dir: &Path) -> Result<bool> {
    let mut argv = config.command.clone();
    argv.push(path.to_string());
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| Error::Config("formatter command is empty".to_string()))?;

    let mut child = Command::new(program)
        .args(args)
        .current_dir(project_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(Error::Io)?;

    let deadline = Instant::now() + Duration::from_secs(config.timeout_secs);
    loop {
        match child.try_wait().map_err(Error::Io)? {
            Some(status) => return Ok(status.success()),
            None if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return Ok(false);
            }
            None => std::thread::sleep(Duration::from_millis(25)),
        }
    }
}

/// Scope a test run resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestScope {
    /// A companion test file found next to the edited file.
    File(String),
    /// The containing directory, run with the zero-tests-tolerant flag.
    Directory(String),
}

/// Probe for a companion test file next to the edited file.
///
/// Strips the extension and tries each recognized suffix in order,
/// returning the first candidate that exists on disk.
#[must_use]
pub fn find_test_companion(path: &str) -> Option<String> {
    let base = path.rsplit_once('.').map_or(path, |(base, _)| base);
    TEST_COMPANION_SUFFIXES
        .iter()
        .map(|suffix| format!("{base}{suffix}"))
        .find(|candidate| Path::new(candidate).exists())
}

/// Resolve the test scope for an edited path.
///
/// `None` when no companion exists and the path has no directory
/// component to fall back to.
#[must_use]
pub fn resolve_test_scope(path: &str) -> Option<TestScope> {
    if let Some(companion) = find_test_companion(path) {
        return Some(TestScope::File(companion));
    }

    let dir = Path::new(path)
        .parent()
        .and_then(Path::to_str)
        .unwrap_or("");
    if dir.is_empty() {
        None
    } else {
        Some(TestScope::Directory(dir.to_string()))
    }
}

/// Build the test-runner invocation for a resolved scope.
#[must_use]
pub fn test_task(config: &TestsConfig, scope: &TestScope, project_dir: &Path) -> BackgroundTask {
    let mut argv = config.command.clone();
    match scope {
        TestScope::File(file) => {
            argv.push(file.clone());
            argv.push("--".to_string());
            argv.push(PASS_WITH_NO_TESTS.to_string());
        }
        TestScope::Directory(dir) => {
            argv.push("--".to_string());
            argv.push(PASS_WITH_NO_TESTS.to_string());
            argv.push(format!("--testPathPattern={dir}"));
        }
    }

    BackgroundTask {
        argv,
        cwd: project_dir.to_path_buf(),
    }
}

/// Resolve and launch the test run for an edited path, detached.
///
/// Launch failures go to stderr only; they never reach the hook's exit
/// code.
pub fn dispatch_tests(config: &TestsConfig, path: &str, project_dir: &Path) {
    let Some(scope) = resolve_test_scope(path) else {
        return;
    };

    match &scope {
        TestScope::File(file) => eprintln!("porter: running tests for: {file}"),
        TestScope::Directory(dir) => eprintln!("porter: running tests in: {dir}"),
    }

    let task = test_task(config, &scope, project_dir);
    if let Err(e) = launch_detached(&task) {
        eprintln!("porter: warning: could not start test runner: {e}");
    }
}
