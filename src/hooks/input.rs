//! Hook input decoding.
//!
//! Claude Code pipes one JSON object to the hook's stdin. The target
//! path resolves with a fixed precedence: `tool_input.file_path`, then
//! `tool_input.path`, then the first entry of the `CLAUDE_FILE_PATHS`
//! fallback. No target at all is a valid state, not an error.

use crate::error::Result;
use serde::Deserialize;
use serde_json::Value;
use std::env;
use std::path::PathBuf;

/// Lifecycle point a hook invocation serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Before an Edit/Write executes; may block it.
    PreEdit,
    /// After an Edit/Write completed; triggers follow-up work.
    PostEdit,
    /// When the session ends.
    SessionEnd,
}

/// Payload received from Claude Code hooks.
#[derive(Debug, Clone, Deserialize)]
pub struct HookInput {
    /// Tool input of the Edit/Write call, when present.
    #[serde(default)]
    pub tool_input: Option<ToolInput>,
}

/// The `tool_input` object of an Edit/Write call.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolInput {
    /// Path argument of Edit/Write.
    #[serde(default)]
    pub file_path: Option<String>,

    /// Alternate path argument some tools use.
    #[serde(default)]
    pub path: Option<String>,
}

/// Ambient host environment, resolved once per invocation.
#[derive(Debug, Clone)]
pub struct HostEnv {
    /// Project root; working directory for launched tasks and log root.
    pub project_dir: PathBuf,

    /// Whitespace-separated path list from `CLAUDE_FILE_PATHS`.
    pub file_paths: Vec<String>,

    /// Session identifier, `"unknown"` when the host did not provide one.
    pub session_id: String,
}

impl HostEnv {
    /// Capture the host environment from process env vars.
    #[must_use]
    pub fn from_process_env() -> Self {
        let project_dir = env::var("CLAUDE_PROJECT_DIR").map_or_else(
            |_| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            PathBuf::from,
        );
        let file_paths = env::var("CLAUDE_FILE_PATHS").map_or_else(
            |_| Vec::new(),
            |v| v.split_whitespace().map(str::to_string).collect(),
        );
        let session_id =
            env::var("CLAUDE_SESSION_ID").unwrap_or_else(|_| "unknown".to_string());

        Self {
            project_dir,
            file_paths,
            session_id,
        }
    }
}

/// A normalized action descriptor.
#[derive(Debug, Clone)]
pub struct ActionRequest {
    /// Which lifecycle point produced this request.
    pub kind: ActionKind,

    /// Resolved target path; `None` means nothing to act on.
    pub target_path: Option<String>,

    /// The full payload, kept opaque for diagnostics.
    pub raw: Value,
}

/// Decode a hook payload into an [`ActionRequest`].
///
/// # Errors
///
/// Returns an error when the payload is not a JSON object. Callers map
/// this to an allow/no-op at the boundary — a malformed payload must
/// never abort the host action.
pub fn decode(kind: ActionKind, payload: &str, env: &HostEnv) -> Result<ActionRequest> {
    let raw: Value = serde_json::from_str(payload)?;
    let input: HookInput = serde_json::from_value(raw.clone())?;

    let from_tool = input.tool_input.as_ref().and_then(|t| {
        t.file_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| t.path.as_deref().filter(|p| !p.is_empty()))
            .map(str::to_string)
    });

    let target_path = from_tool.or_else(|| env.file_paths.first().cloned());

    Ok(ActionRequest {
        kind,
        target_path,
        raw,
    })
}
