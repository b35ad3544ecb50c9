//! Removal of a trailing exercise payload from otherwise plain markdown.

use std::sync::LazyLock;

use regex::Regex;

use super::json::balanced_end;
use crate::parsing::blocks::kinds::CodeFence;

static PAYLOAD_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)"(?:quiz|exercises|ejercicios|questions|preguntas)"\s*:\s*[\[{]"#)
        .expect("payload marker regex should compile")
});

/// Trims trailing whitespace, and cuts off an exercise payload (fenced or
/// bare, complete or truncated) if one ends the text.
///
/// A marker followed by more prose is left in place.
pub fn strip_trailing_payload(text: &str) -> &str {
    let cut = PAYLOAD_MARKER_RE.find_iter(text).find_map(|m| {
        let start = payload_start(text, m.start());
        is_trailing(text, start).then_some(start)
    });
    match cut {
        Some(start) => {
            log::debug!("stripped {} bytes of trailing exercise payload", text.len() - start);
            text[..start].trim_end_matches(|c: char| c.is_whitespace() || c == ',')
        }
        None => text.trim_end(),
    }
}

/// Where the payload holding the marker at `marker` begins.
///
/// An opening brace earlier on the marker's line starts it. When the marker
/// (or its brace) leads the line, the payload extends back over JSON-looking
/// lines up to and including a fence opener, never across a blank line.
fn payload_start(text: &str, marker: usize) -> usize {
    let line_start = text[..marker].rfind('\n').map_or(0, |i| i + 1);
    let before = &text[line_start..marker];
    match before.rfind('{') {
        Some(brace) if !before[..brace].trim().is_empty() => return line_start + brace,
        None if !before.trim().is_empty() => return marker,
        _ => {}
    }

    let mut start = line_start;
    while start > 0 {
        let prev_start = text[..start - 1].rfind('\n').map_or(0, |i| i + 1);
        let prev = text[prev_start..start - 1].trim();
        if prev.is_empty() {
            break;
        }
        if prev.starts_with(CodeFence::BACKTICKS) {
            start = prev_start;
            break;
        }
        if !looks_like_json(prev) {
            break;
        }
        start = prev_start;
    }
    start
}

fn looks_like_json(line: &str) -> bool {
    line.starts_with(['{', '[', '"', '}', ']']) || line.ends_with(['{', '['])
}

/// True if nothing but closing punctuation follows the payload at `start`.
fn is_trailing(text: &str, start: usize) -> bool {
    let Some(open) = text[start..].find(['{', '[']).map(|i| start + i) else {
        return false;
    };
    match balanced_end(text, open) {
        None => true,
        Some(end) => text[end..]
            .chars()
            .all(|c| c.is_whitespace() || matches!(c, '`' | '}' | ']' | ',')),
    }
}
