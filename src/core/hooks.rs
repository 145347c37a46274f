//! Hook handler implementations.

use crate::config::{Config, RuleSets};
use crate::core::{policy, session, tasks};
use crate::hooks::input::{ActionRequest, HostEnv};
use crate::hooks::output::Verdict;

/// Handle the pre-edit hook.
///
/// A request with no target path allows automatically; otherwise the
/// path goes through the policy matcher.
#[must_use]
pub fn handle_pre_edit(request: &ActionRequest, rules: &RuleSets) -> Verdict {
    let Some(path) = request.target_path.as_deref() else {
        return Verdict::Allow; // Nothing to act on
    };

    policy::verdict(rules, path)
}

/// Handle the post-edit hook.
///
/// Formats the edited file in the foreground (bounded wait) and
/// dispatches a detached test run, each only when the path is eligible.
/// Nothing here can alter the hook's exit code.
pub fn handle_post_edit(request: &ActionRequest, config: &Config, env: &HostEnv) {
    let Some(path) = request.target_path.as_deref() else {
        return;
    };

    if policy::wants_format(&config.rules, path) {
        match tasks::run_formatter(&config.formatter, path, &env.project_dir) {
            Ok(true) => eprintln!("porter: formatted: {path}"),
            Ok(false) => eprintln!("porter: could not format: {path}"),
            Err(e) => eprintln!("porter: warning: formatter did not run: {e}"),
        }
    }

    if policy::wants_tests(&config.rules, path) {
        tasks::dispatch_tests(&config.tests, path, &env.project_dir);
    }
}

/// Handle the session-end hook.
pub fn handle_session_end(env: &HostEnv) {
    session::record(env);
}
