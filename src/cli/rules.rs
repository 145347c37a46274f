//! `porter rules` command implementation.

use crate::config::load_config;
use crate::error::Result;
use crate::hooks::input::HostEnv;

/// Print the effective rule sets and commands for the current project.
///
/// Unlike the hook paths, this is an ordinary CLI command: a broken
/// config file is a hard error here so the user actually sees it.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
pub fn run() -> Result<()> {
    let env = HostEnv::from_process_env();
    let config = load_config(&env.project_dir)?;

    println!("project: {}", env.project_dir.display());
    println!();
    print_set("protected (substring, blocks edit)", &config.rules.protected);
    print_set("critical (substring, warns)", &config.rules.critical);
    print_set("formattable (suffix)", &config.rules.formattable);
    print_set("testable (suffix)", &config.rules.testable);
    print_set("skip_dirs (substring, vetoes tests)", &config.rules.skip_dirs);
    println!();
    println!(
        "formatter: {} (timeout {}s)",
        config.formatter.command.join(" "),
        config.formatter.timeout_secs
    );
    println!("tests: {}", config.tests.command.join(" "));

    Ok(())
}

fn print_set(label: &str, fragments: &[String]) {
    println!("{label}:");
    if fragments.is_empty() {
        println!("  (none)");
    }
    for fragment in fragments {
        println!("  {fragment}");
    }
}
