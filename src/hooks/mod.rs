//! Hook input/output types and dispatch.

pub mod input;
pub mod output;
pub mod runner;

pub use input::{ActionKind, ActionRequest, HookInput, HostEnv};
pub use output::{HookResponse, Verdict, emit};
pub use runner::run_hook;
