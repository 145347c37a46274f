//! `porter hook` command implementation.

use crate::config::{Config, load_config};
use crate::hooks::input::HostEnv;
use crate::hooks::runner::run_hook;
use std::io::{self, Read};
use std::process::ExitCode;

/// Run a hook command.
///
/// Reads JSON from stdin, dispatches to the appropriate hook handler,
/// and writes any response JSON to stdout. Exits 2 only for a pre-edit
/// block verdict; every other path, including all internal failures,
/// exits 0 (fail open).
#[must_use]
pub fn run(hook_name: &str) -> ExitCode {
    let env = HostEnv::from_process_env();

    let config = match load_config(&env.project_dir) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("porter: warning: config load failed, using defaults: {e}");
            Config::default() // Fail open
        }
    };

    let mut payload = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut payload) {
        eprintln!("porter: warning: could not read stdin: {e}");
        // An unreadable stdin decodes like an empty one: allow/no-op.
    }

    ExitCode::from(run_hook(hook_name, &payload, &config, &env))
}
