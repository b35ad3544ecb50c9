/// Horizontal rule (thematic break).
pub struct HorizontalRule;

impl HorizontalRule {
    pub const MIN_RUN: usize = 3;

    /// Three or more of the same `-`, `*` or `_` and nothing else.
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let Some(first) = t.chars().next() else {
            return false;
        };
        matches!(first, '-' | '*' | '_')
            && t.len() >= Self::MIN_RUN
            && t.chars().all(|c| c == first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_of_one_marker() {
        assert!(HorizontalRule::matches("---"));
        assert!(HorizontalRule::matches("*****"));
        assert!(HorizontalRule::matches("  ___  "));
    }

    #[test]
    fn mixed_or_short_runs_are_not_rules() {
        assert!(!HorizontalRule::matches("--"));
        assert!(!HorizontalRule::matches("-*-"));
        assert!(!HorizontalRule::matches("- - -"));
        assert!(!HorizontalRule::matches(""));
    }
}
