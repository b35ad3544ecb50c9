use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{
    fields::exercise_field,
    json::{balanced_end, fenced_json, whole_json},
};

static ARRAY_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)"(?:quiz|exercises|ejercicios|questions|preguntas)"\s*:\s*\["#)
        .expect("exercise array marker regex should compile")
});

/// The exercise array attached to a producer payload, or an empty list.
///
/// Reads the field directly from structured payloads, from fenced or whole
/// JSON inside strings, and as a last resort from the first bracket-balanced
/// exercise array in raw text. A truncated array yields nothing.
pub fn recover_exercises(payload: &Value) -> Vec<Value> {
    match payload {
        Value::String(s) => recover_exercises_str(s),
        Value::Object(_) | Value::Array(_) => from_json(payload).unwrap_or_default(),
        _ => vec![],
    }
}

pub fn recover_exercises_str(text: &str) -> Vec<Value> {
    if let Some(found) = fenced_json(text).as_ref().and_then(from_json) {
        return found;
    }
    if let Some(found) = whole_json(text).as_ref().and_then(from_json) {
        return found;
    }

    let Some(m) = ARRAY_MARKER_RE.find(text) else {
        return vec![];
    };
    let open = m.end() - 1;
    match balanced_end(text, open) {
        Some(end) => serde_json::from_str(&text[open..end]).unwrap_or_else(|e| {
            log::debug!("exercise array is not valid JSON: {e}");
            vec![]
        }),
        None => {
            log::debug!("exercise array is truncated");
            vec![]
        }
    }
}

fn from_json(value: &Value) -> Option<Vec<Value>> {
    match exercise_field(value)? {
        Value::Array(items) => Some(items.clone()),
        Value::String(s) => Some(recover_exercises_str(s)),
        _ => None,
    }
}
