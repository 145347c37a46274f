//! Hook output types.
//!
//! The pre-edit hook speaks to Claude Code through a JSON body on
//! stdout plus the process exit code: 0 continues, 2 aborts the action.
//! Allow is silent — no body at all.

use serde::Serialize;
use std::io::{self, Write};

/// Decision produced by policy evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Let the action proceed silently.
    Allow,
    /// Let the action proceed, with an advisory message.
    Warn {
        /// Advisory shown to the user.
        message: String,
    },
    /// Abort the action.
    Block {
        /// Reason surfaced to the user.
        message: String,
    },
}

/// Exit code that signals a blocked action to Claude Code.
pub const BLOCK_EXIT_CODE: u8 = 2;

/// Response body Claude Code reads from the hook's stdout.
#[derive(Debug, Clone, Serialize)]
pub struct HookResponse {
    /// Whether the host should continue with the action.
    #[serde(rename = "continue")]
    pub continue_: bool,

    /// Why the action was stopped (only for block).
    #[serde(rename = "stopReason", skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,

    /// Advisory message shown alongside a continued action.
    #[serde(rename = "systemMessage", skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,

    /// Whether the host should hide the hook's stdout from the transcript.
    #[serde(rename = "suppressOutput")]
    pub suppress_output: bool,
}

impl Verdict {
    /// Exit code for this verdict. Block is the only nonzero path.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Block { .. } => BLOCK_EXIT_CODE,
            Self::Allow | Self::Warn { .. } => 0,
        }
    }

    /// Response body for this verdict. Allow has none.
    #[must_use]
    pub fn response(&self) -> Option<HookResponse> {
        match self {
            Self::Allow => None,
            Self::Warn { message } => Some(HookResponse {
                continue_: true,
                stop_reason: None,
                system_message: Some(message.clone()),
                suppress_output: false,
            }),
            Self::Block { message } => Some(HookResponse {
                continue_: false,
                stop_reason: Some(message.clone()),
                system_message: None,
                suppress_output: false,
            }),
        }
    }
}

/// Write the verdict's response body to stdout and return the exit code.
///
/// Any failure to encode or write the body is reported to stderr and
/// mapped to the allow exit code — a hook that cannot speak must not
/// abort the host action.
#[must_use]
pub fn emit(verdict: &Verdict) -> u8 {
    let Some(response) = verdict.response() else {
        return verdict.exit_code();
    };

    let json = match serde_json::to_string(&response) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("porter: warning: could not encode response: {e}");
            return 0;
        }
    };

    let mut stdout = io::stdout();
    if let Err(e) = stdout
        .write_all(json.as_bytes())
        .and_then(|()| stdout.write_all(b"\n"))
    {
        eprintln!("porter: warning: could not write response: {e}");
        return 0;
    }

    verdict.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_has_no_body() {
        assert!(Verdict::Allow.response().is_none());
        assert_eq!(Verdict::Allow.exit_code(), 0);
    }

    #[test]
    fn warn_serialization() {
        let verdict = Verdict::Warn {
            message: "careful with that config".to_string(),
        };
        let json = serde_json::to_string(&verdict.response().unwrap()).unwrap();
        assert!(json.contains(r#""continue":true"#));
        assert!(json.contains(r#""systemMessage":"careful with that config""#));
        assert!(json.contains(r#""suppressOutput":false"#));
        assert!(!json.contains("stopReason"));
        assert_eq!(verdict.exit_code(), 0);
    }

    #[test]
    fn block_serialization() {
        let verdict = Verdict::Block {
            message: "protected file".to_string(),
        };
        let json = serde_json::to_string(&verdict.response().unwrap()).unwrap();
        assert!(json.contains(r#""continue":false"#));
        assert!(json.contains(r#""stopReason":"protected file""#));
        assert!(!json.contains("systemMessage"));
        assert_eq!(verdict.exit_code(), BLOCK_EXIT_CODE);
    }

    #[test]
    fn emit_allow_exits_zero() {
        assert_eq!(emit(&Verdict::Allow), 0);
    }

    #[test]
    fn emit_block_exits_two() {
        let verdict = Verdict::Block {
            message: "no".to_string(),
        };
        assert_eq!(emit(&verdict), 2);
    }
}
