use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})\s+(.*)$").expect("heading pattern regex should compile")
});

/// ATX heading block type.
pub struct Heading;

impl Heading {
    /// Deepest level a heading is reported at; `#####` and `######` clamp to it.
    pub const MAX_LEVEL: u8 = 4;

    /// Returns `(level, text)` if `line` is a heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let caps = HEADING_RE.captures(line)?;
        let hashes = caps.get(1)?.as_str().len();
        let text = caps.get(2).map_or("", |m| m.as_str().trim());
        let level = u8::try_from(hashes).unwrap_or(Self::MAX_LEVEL);
        Some((level.min(Self::MAX_LEVEL), text))
    }
}
