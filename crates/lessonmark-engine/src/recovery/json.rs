//! Locating JSON inside free text.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Widest fenced object: first fence opener to the last `}` before a fence.
static GREEDY_FENCED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)```(?:json)?\s*(\{.*\})\s*```").expect("greedy fenced JSON regex should compile")
});

/// Narrowest fenced object, for text holding several fences.
static LAZY_FENCED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)```(?:json)?\s*(\{.*?\})\s*```").expect("lazy fenced JSON regex should compile")
});

/// Parses the first fully closed fenced block holding a JSON object.
///
/// The widest candidate is tried first so an object containing fenced
/// examples of its own stays whole.
pub fn fenced_json(text: &str) -> Option<Value> {
    [&*GREEDY_FENCED_RE, &*LAZY_FENCED_RE]
        .into_iter()
        .find_map(|re| {
            let body = re.captures(text)?.get(1)?.as_str();
            serde_json::from_str(body)
                .inspect_err(|e| log::debug!("fenced block is not valid JSON: {e}"))
                .ok()
        })
}

/// Parses `text` as a whole when it is bracketed like an object or array.
pub fn whole_json(text: &str) -> Option<Value> {
    let t = text.trim();
    let bracketed = (t.starts_with('{') && t.ends_with('}')) || (t.starts_with('[') && t.ends_with(']'));
    if !bracketed {
        return None;
    }
    serde_json::from_str(t)
        .inspect_err(|e| log::debug!("bracketed payload is not valid JSON: {e}"))
        .ok()
}

/// Byte offset just past the bracket that closes the one at `open`.
///
/// Brackets inside string literals are ignored. Returns `None` when the
/// input ends before the brackets balance, which is how truncation shows.
pub fn balanced_end(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.get(open..)?.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(open + i + c.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}
