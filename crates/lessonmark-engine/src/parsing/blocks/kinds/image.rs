use std::sync::LazyLock;

use regex::Regex;

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^!\[([^\]]*)\]\(([^)\s]+)\)$").expect("image pattern regex should compile")
});

/// Standalone image line `![alt](src)`.
pub struct Image;

impl Image {
    /// Returns `(alt, src)` if the trimmed line is exactly one image.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        let caps = IMAGE_RE.captures(line.trim())?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}
