//! Path policy evaluation.
//!
//! Patterns are plain substrings, not globs: a path containing `.git/`
//! anywhere is blocked, and a file literally named `my.env.txt` matches
//! the `.env` fragment. Suffix rules are exact, case-sensitive trailing
//! matches.

use crate::config::RuleSets;
use crate::hooks::output::Verdict;

/// Evaluate a pre-edit path against the protected and critical sets.
///
/// First protected match short-circuits to a block; otherwise a critical
/// match warns; otherwise the edit passes silently.
#[must_use]
pub fn verdict(rules: &RuleSets, path: &str) -> Verdict {
    if let Some(fragment) = rules
        .protected
        .iter()
        .find(|f| path.contains(f.as_str()))
    {
        return Verdict::Block {
            message: format!(
                "Cannot modify protected file '{path}' (matched '{fragment}'). \
                 Protected patterns: {}. \
                 If this file must change, edit it manually.",
                rules.protected.join(", ")
            ),
        };
    }

    if rules.critical.iter().any(|f| path.contains(f.as_str())) {
        return Verdict::Warn {
            message: format!(
                "Modifying critical configuration file '{path}'. Review changes carefully."
            ),
        };
    }

    Verdict::Allow
}

/// Whether a post-edit path is eligible for formatting.
#[must_use]
pub fn wants_format(rules: &RuleSets, path: &str) -> bool {
    rules
        .formattable
        .iter()
        .any(|suffix| path.ends_with(suffix.as_str()))
}

/// Whether a post-edit path is eligible for a test run.
///
/// The suffix must match and the path must not sit under a skip
/// directory. Format and test eligibility are independent checks.
#[must_use]
pub fn wants_tests(rules: &RuleSets, path: &str) -> bool {
    if rules.skip_dirs.iter().any(|d| path.contains(d.as_str())) {
        return false;
    }
    rules
        .testable
        .iter()
        .any(|suffix| path.ends_with(suffix.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSets {
        RuleSets::default()
    }

    #[test]
    fn protected_path_blocks() {
        let verdict = verdict(&rules(), "src/app/.env");
        assert!(matches!(verdict, Verdict::Block { .. }));
    }

    #[test]
    fn block_message_names_the_path() {
        let Verdict::Block { message } = verdict(&rules(), "src/app/.env") else {
            panic!("expected block");
        };
        assert!(message.contains(".env"));
        assert!(message.contains("src/app/.env"));
    }

    #[test]
    fn protected_wins_over_critical() {
        // A path matching both sets must block, not warn.
        let path = "node_modules/next.config.js";
        assert!(matches!(verdict(&rules(), path), Verdict::Block { .. }));
    }

    #[test]
    fn protected_matches_mid_path() {
        assert!(matches!(
            verdict(&rules(), "vendor/.git/config"),
            Verdict::Block { .. }
        ));
    }

    #[test]
    fn substring_match_is_deliberately_broad() {
        // A file merely containing the fragment in its name still blocks.
        assert!(matches!(
            verdict(&rules(), "docs/my.env.txt"),
            Verdict::Block { .. }
        ));
    }

    #[test]
    fn critical_path_warns() {
        let verdict = verdict(&rules(), "next.config.js");
        let Verdict::Warn { message } = verdict else {
            panic!("expected warn");
        };
        assert!(message.contains("next.config.js"));
    }

    #[test]
    fn plain_path_allows() {
        assert_eq!(verdict(&rules(), "src/app/page.tsx"), Verdict::Allow);
    }

    #[test]
    fn format_suffix_match() {
        let rules = rules();
        assert!(wants_format(&rules, "src/app/page.tsx"));
        assert!(wants_format(&rules, "README.md"));
        assert!(!wants_format(&rules, "Cargo.lock"));
    }

    #[test]
    fn format_suffix_is_case_sensitive() {
        assert!(!wants_format(&rules(), "src/app/page.TSX"));
    }

    #[test]
    fn test_suffix_match() {
        let rules = rules();
        assert!(wants_tests(&rules, "src/lib/util.ts"));
        assert!(!wants_tests(&rules, "styles/globals.css"));
    }

    #[test]
    fn skip_dir_vetoes_tests() {
        let rules = rules();
        assert!(!wants_tests(&rules, "node_modules/pkg/index.ts"));
        assert!(!wants_tests(&rules, "dist/out.js"));
    }

    #[test]
    fn skip_dir_does_not_veto_format() {
        // Only the test check consults skip_dirs.
        assert!(wants_format(&rules(), "dist/out.js"));
    }

    #[test]
    fn format_and_test_are_independent() {
        let rules = rules();
        // .css formats but never tests
        assert!(wants_format(&rules, "styles/app.css"));
        assert!(!wants_tests(&rules, "styles/app.css"));
        // .ts does both
        assert!(wants_format(&rules, "src/a.ts"));
        assert!(wants_tests(&rules, "src/a.ts"));
    }

    #[test]
    fn verdict_is_pure() {
        let rules = rules();
        assert_eq!(
            verdict(&rules, "src/app/.env").exit_code(),
            verdict(&rules, "src/app/.env").exit_code()
        );
    }

    #[test]
    fn empty_rule_sets_allow_everything() {
        let rules = RuleSets {
            protected: Vec::new(),
            critical: Vec::new(),
            formattable: Vec::new(),
            testable: Vec::new(),
            skip_dirs: Vec::new(),
        };
        assert_eq!(verdict(&rules, ".env"), Verdict::Allow);
        assert!(!wants_format(&rules, "a.ts"));
        assert!(!wants_tests(&rules, "a.ts"));
    }
}
