//! Per-line rule matching.

use crate::scanner::model::{Rule, RuleSet};

/// Evaluate every rule in the set against one line of text.
///
/// Rules are tested independently with unanchored substring search; several
/// rules may match the same line and all of them are returned, in table
/// order. No early exit, no line-length limit - the full set is always
/// evaluated so output stays deterministic and complete.
pub fn match_line<'r>(rules: &'r RuleSet, line: &str) -> Vec<&'r Rule> {
    rules
        .rules
        .iter()
        .filter(|rule| rule.pattern.is_match(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::model::Severity;
    use regex::Regex;

    fn rule(id: &'static str, pattern: &str) -> Rule {
        Rule {
            id,
            pattern: Regex::new(pattern).unwrap(),
            severity: Severity::High,
            category: "test",
            message: "test rule",
        }
    }

    fn set(rules: Vec<Rule>) -> RuleSet {
        RuleSet {
            language: "test",
            rules,
        }
    }

    #[test]
    fn returns_one_result_per_matching_rule() {
        let rules = set(vec![
            rule("t-001", r"strcpy"),
            rule("t-002", r"\("),
            rule("t-003", r"nothing_matches_this"),
        ]);
        let matched = match_line(&rules, "strcpy(dest, src);");
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].id, "t-001");
        assert_eq!(matched[1].id, "t-002");
    }

    #[test]
    fn no_match_returns_empty() {
        let rules = set(vec![rule("t-001", r"eval\s*\(")]);
        assert!(match_line(&rules, "let x = 1;").is_empty());
    }

    #[test]
    fn matching_is_substring_not_anchored() {
        let rules = set(vec![rule("t-001", r"system\s*\(")]);
        assert_eq!(match_line(&rules, "    rc = system(cmd); // danger").len(), 1);
    }

    #[test]
    fn case_sensitivity_is_per_rule() {
        let rules = set(vec![
            rule("t-sensitive", r"password"),
            rule("t-insensitive", r"(?i)password"),
        ]);
        let matched = match_line(&rules, "PASSWORD = \"hunter2\"");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "t-insensitive");
    }

    #[test]
    fn full_set_matches_when_every_rule_fires() {
        let rules = set(vec![rule("a", "x"), rule("b", "x"), rule("c", "x")]);
        assert_eq!(match_line(&rules, "x marks the spot").len(), 3);
    }
}
