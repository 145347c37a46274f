//! porter CLI - File-guard hooks for Claude Code.

use clap::{Parser, Subcommand};
use porter::cli;
use std::process::ExitCode;

/// Get the version string.
///
/// - Release builds (on a git tag): "0.1.0"
/// - Development builds: "0.1.0-dev (abc1234)"
/// - Dirty working directory: "0.1.0-dev (abc1234-dirty)"
fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("PORTER_GIT_HASH");
    const IS_RELEASE: &str = env!("PORTER_IS_RELEASE");

    // Use a static to avoid repeated allocations
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            VERSION.to_string()
        } else {
            format!("{VERSION}-dev ({GIT_HASH})")
        }
    })
}

#[derive(Parser)]
#[command(name = "porter")]
#[command(author, version = version(), about = "File-guard hooks for Claude Code", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// [Internal] Run a hook (JSON stdin/stdout). Called by Claude Code hooks.
    Hook {
        /// Hook name (pre-edit, post-edit, session-end).
        name: String,
    },

    /// [User] Show the effective rule sets and commands.
    Rules,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hook { name } => cli::hook::run(&name),
        Commands::Rules => match cli::rules::run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("porter: error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}
