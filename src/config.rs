//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence:
//! 1. Environment variables (`PORTER_*`)
//! 2. Config file (`<project>/.claude/porter.toml`, then `~/.porter/config.toml`)
//! 3. Defaults
//!
//! The result is immutable for the lifetime of the process; hooks load
//! it once at startup and pass it down by reference.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Path rule sets evaluated by the policy matcher.
    pub rules: RuleSets,

    /// Formatter invocation.
    pub formatter: FormatterConfig,

    /// Test runner invocation.
    pub tests: TestsConfig,
}

/// Path rule sets.
///
/// All patterns are plain string fragments. `protected` and `critical`
/// match by substring containment anywhere in the path; `formattable`
/// and `testable` are exact trailing suffixes; `skip_dirs` fragments
/// veto test runs by substring containment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuleSets {
    /// Never modified through the agent. Any match blocks the edit.
    pub protected: Vec<String>,

    /// Modifiable, but the edit gets an advisory warning.
    pub critical: Vec<String>,

    /// Suffixes handed to the formatter after an edit.
    pub formattable: Vec<String>,

    /// Suffixes that trigger a test run after an edit.
    pub testable: Vec<String>,

    /// Directory fragments that suppress test runs.
    pub skip_dirs: Vec<String>,
}

impl Default for RuleSets {
    fn default() -> Self {
        Self {
            protected: vec![
                ".env".to_string(),
                ".env.local".to_string(),
                ".env.production".to_string(),
                "package-lock.json".to_string(),
                "pnpm-lock.yaml".to_string(),
                "yarn.lock".to_string(),
                ".git/".to_string(),
                "node_modules/".to_string(),
                ".next/".to_string(),
            ],
            critical: vec![
                "next.config.js".to_string(),
                "next.config.mjs".to_string(),
                "tailwind.config.ts".to_string(),
                "tsconfig.json".to_string(),
            ],
            formattable: vec![
                ".ts".to_string(),
                ".tsx".to_string(),
                ".js".to_string(),
                ".jsx".to_string(),
                ".css".to_string(),
                ".json".to_string(),
                ".md".to_string(),
            ],
            testable: vec![
                ".ts".to_string(),
                ".tsx".to_string(),
                ".js".to_string(),
                ".jsx".to_string(),
            ],
            skip_dirs: vec![
                "node_modules".to_string(),
                ".next".to_string(),
                "dist".to_string(),
                "build".to_string(),
            ],
        }
    }
}

/// Formatter invocation configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Argv prefix; the target path is appended as the final argument.
    pub command: Vec<String>,

    /// Upper bound on how long the formatter may run.
    pub timeout_secs: u64,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            command: vec![
                "npx".to_string(),
                "prettier".to_string(),
                "--write".to_string(),
            ],
            timeout_secs: 30,
        }
    }
}

/// Test runner invocation configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TestsConfig {
    /// Argv prefix; scope arguments are appended per dispatch.
    pub command: Vec<String>,
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self {
            command: vec!["pnpm".to_string(), "test".to_string()],
        }
    }
}

/// Load configuration with precedence: env vars → file → defaults.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn load_config(project_dir: &Path) -> Result<Config> {
    let mut config = Config::default();

    // Try to load config file
    let config_path = config_path(project_dir);
    if config_path.exists() {
        let contents = fs::read_to_string(&config_path).map_err(Error::Io)?;
        config = toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))?;
    }

    // Override with environment variables
    apply_env_overrides(&mut config);

    Ok(config)
}

/// Get the path to the config file.
///
/// A project-local file wins over the home-directory one so a repository
/// can carry its own policy.
fn config_path(project_dir: &Path) -> PathBuf {
    if let Ok(path) = env::var("PORTER_CONFIG") {
        return PathBuf::from(path);
    }

    let project = project_dir.join(".claude").join("porter.toml");
    if project.exists() {
        return project;
    }

    dirs::home_dir().map_or_else(|| PathBuf::from(".porter"), |h| h.join(".porter")).join("config.toml")
}

/// Apply environment variable overrides to config.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(val) = env::var("PORTER_FORMAT_TIMEOUT_SECS") {
        if let Ok(secs) = val.parse() {
            config.formatter.timeout_secs = secs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.rules.protected.contains(&".env".to_string()));
        assert!(config.rules.critical.contains(&"tsconfig.json".to_string()));
        assert!(config.rules.testable.contains(&".tsx".to_string()));
        assert_eq!(config.formatter.timeout_secs, 30);
        assert_eq!(config.tests.command, vec!["pnpm", "test"]);
    }

    #[test]
    fn parse_config_toml() {
        let toml = r#"
            [rules]
            protected = ["secrets/", ".pem"]
            critical = ["Cargo.toml"]
            formattable = [".rs"]
            testable = [".rs"]
            skip_dirs = ["target"]

            [formatter]
            command = ["rustfmt"]
            timeout_secs = 10

            [tests]
            command = ["cargo", "test"]
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.rules.protected, vec!["secrets/", ".pem"]);
        assert_eq!(config.rules.skip_dirs, vec!["target"]);
        assert_eq!(config.formatter.command, vec!["rustfmt"]);
        assert_eq!(config.formatter.timeout_secs, 10);
        assert_eq!(config.tests.command, vec!["cargo", "test"]);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let toml = r#"
            [formatter]
            timeout_secs = 5
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.formatter.timeout_secs, 5);
        assert_eq!(config.formatter.command[0], "npx"); // Default
        assert!(config.rules.protected.contains(&".git/".to_string())); // Default
    }

    #[test]
    fn load_config_missing_file_is_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.formatter.timeout_secs, 30);
    }

    #[test]
    fn load_config_reads_project_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join(".claude");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("porter.toml"),
            "[rules]\nprotected = [\"only-this\"]\n",
        )
        .unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.rules.protected, vec!["only-this"]);
        // Sections not present in the file fall back to defaults
        assert_eq!(config.tests.command, vec!["pnpm", "test"]);
    }

    #[test]
    fn load_config_rejects_bad_toml() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join(".claude");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("porter.toml"), "rules = not toml [").unwrap();

        assert!(load_config(temp.path()).is_err());
    }
}
