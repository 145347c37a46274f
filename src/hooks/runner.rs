//! Hook dispatch logic.

use crate::config::Config;
use crate::core::{handle_post_edit, handle_pre_edit, handle_session_end};
use crate::hooks::input::{ActionKind, HostEnv, decode};
use crate::hooks::output::emit;

/// Map a hook name to its lifecycle kind.
#[must_use]
pub fn action_kind(name: &str) -> Option<ActionKind> {
    match name {
        "pre-edit" => Some(ActionKind::PreEdit),
        "post-edit" => Some(ActionKind::PostEdit),
        "session-end" => Some(ActionKind::SessionEnd),
        _ => None,
    }
}

/// Dispatch a hook by name and return the process exit code.
///
/// Every failure path fails open to exit 0; the only nonzero exit is a
/// pre-edit block verdict. Blocking is a policy decision, never a
/// failure side-effect.
#[must_use]
pub fn run_hook(name: &str, payload: &str, config: &Config, env: &HostEnv) -> u8 {
    let Some(kind) = action_kind(name) else {
        eprintln!("porter: warning: unknown hook: {name}");
        return 0; // Fail open for unknown hooks
    };

    match kind {
        // Session end never looks at stdin.
        ActionKind::SessionEnd => {
            handle_session_end(env);
            0
        }
        ActionKind::PreEdit | ActionKind::PostEdit => {
            let request = match decode(kind, payload, env) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("porter: warning: failed to parse input: {e}");
                    return 0; // Fail open
                }
            };

            if kind == ActionKind::PreEdit {
                emit(&handle_pre_edit(&request, &config.rules))
            } else {
                handle_post_edit(&request, config, env);
                0
            }
        }
    }
}
