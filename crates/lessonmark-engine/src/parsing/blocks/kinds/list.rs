use std::sync::LazyLock;

use regex::Regex;

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-*+]\s+(.*)$").expect("bullet pattern regex should compile")
});

static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+\.\s+(.*)$").expect("ordered item pattern regex should compile")
});

/// List item block type. Items are flat: indentation is ignored.
pub struct ListItem;

impl ListItem {
    /// Returns `(ordered, text)` if `line` is a list item.
    pub fn parse(line: &str) -> Option<(bool, &str)> {
        if let Some(caps) = BULLET_RE.captures(line) {
            return Some((false, caps.get(1).map_or("", |m| m.as_str().trim())));
        }
        let caps = ORDERED_RE.captures(line)?;
        Some((true, caps.get(1).map_or("", |m| m.as_str().trim())))
    }
}
