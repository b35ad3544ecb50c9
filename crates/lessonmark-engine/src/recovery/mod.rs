//! # Content Recovery
//!
//! Turns a producer payload of unknown shape into the lesson markdown it
//! carries. Payloads may be clean markdown, a structured object, a fenced
//! JSON blob, or JSON cut off mid-string by a length limit.
//!
//! ## Cascade
//!
//! Strategies are tried in a fixed order and the first to succeed wins:
//!
//! 1. **Structured**: read a lesson field from an object (see [`fields`]).
//! 2. **Fenced JSON**: parse a closed ```` ```json ```` block and unwrap it.
//! 3. **Truncated field**: scan for a lesson field value up to its closing
//!    quote or the end of input (see [`truncated`]).
//! 4. **Whole JSON**: parse a bracketed payload as a whole and unwrap it.
//! 5. **Markdown**: keep the text, minus any trailing exercise payload
//!    (see [`strip`]).
//!
//! A string found by any step re-enters the cascade, so the result records the
//! whole path taken. Nothing here fails: a strategy that does not apply
//! simply hands over to the next one.

pub mod exercises;
pub mod fields;
pub mod json;
pub mod strip;
pub mod truncated;

pub use exercises::{recover_exercises, recover_exercises_str};

use serde::Serialize;
use serde_json::Value;

use fields::{lesson_field, pretty};

/// Which step of the cascade produced (part of) the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Structured,
    FencedJson,
    TruncatedField,
    WholeJson,
    Markdown,
    /// Nothing to recover: `null`, or blank text.
    Empty,
}

/// The recovered markdown plus the strategies applied, outermost first.
///
/// The trail is for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveryResult {
    pub markdown: String,
    pub trail: Vec<Strategy>,
}

impl RecoveryResult {
    /// The top-level strategy that handled the payload.
    pub fn strategy(&self) -> Strategy {
        self.trail.first().copied().unwrap_or(Strategy::Empty)
    }
}

pub fn recover(payload: &Value) -> RecoveryResult {
    let mut cascade = Cascade::default();
    let markdown = cascade.value(payload);
    cascade.finish(markdown)
}

pub fn recover_str(payload: &str) -> RecoveryResult {
    let mut cascade = Cascade::default();
    let markdown = cascade.text(payload);
    cascade.finish(markdown)
}

#[derive(Default)]
struct Cascade {
    trail: Vec<Strategy>,
}

impl Cascade {
    fn finish(self, markdown: String) -> RecoveryResult {
        log::debug!("recovered {} bytes via {:?}", markdown.len(), self.trail);
        RecoveryResult {
            markdown,
            trail: self.trail,
        }
    }

    fn step(&mut self, strategy: Strategy, markdown: String) -> String {
        self.trail.push(strategy);
        markdown
    }

    fn value(&mut self, value: &Value) -> String {
        match value {
            Value::String(s) => self.text(s),
            Value::Null => self.step(Strategy::Empty, String::new()),
            Value::Object(_) | Value::Array(_) => {
                self.trail.push(Strategy::Structured);
                match lesson_field(value) {
                    Some(field) => self.field(field),
                    None => {
                        log::debug!("structured payload has no lesson field, keeping it as JSON");
                        pretty(value)
                    }
                }
            }
            scalar => self.step(Strategy::Structured, scalar.to_string()),
        }
    }

    /// A lesson field's value: strings re-enter the cascade, anything else
    /// is shown as JSON.
    fn field(&mut self, field: &Value) -> String {
        match field {
            Value::String(s) => self.text(s),
            other => pretty(other),
        }
    }

    fn text(&mut self, text: &str) -> String {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return self.step(Strategy::Empty, String::new());
        }

        if let Some(v) = json::fenced_json(trimmed) {
            match lesson_field(&v) {
                Some(field) => {
                    self.trail.push(Strategy::FencedJson);
                    return self.field(field);
                }
                None => log::debug!("fenced JSON has no lesson field, trying the next strategy"),
            }
        }

        if let Some(lesson) = truncated::truncated_field(trimmed) {
            self.trail.push(Strategy::TruncatedField);
            return self.text(&lesson);
        }

        if let Some(v) = json::whole_json(trimmed) {
            match lesson_field(&v) {
                Some(field) => {
                    self.trail.push(Strategy::WholeJson);
                    return self.field(field);
                }
                None => log::debug!("JSON payload has no lesson field, keeping it as text"),
            }
        }

        self.step(Strategy::Markdown, strip::strip_trailing_payload(text).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use Strategy::*;

    #[test]
    fn truncated_json_recovers_lesson_only() {
        let payload = r##"{"lesson": "# Title\nBody text that is long enough to exceed fifty characters easily", "quiz": [...truncated"##;
        let result = recover_str(payload);
        assert_eq!(
            result.markdown,
            "# Title\nBody text that is long enough to exceed fifty characters easily"
        );
        assert_eq!(result.strategy(), TruncatedField);
    }

    #[test]
    fn serialized_lesson_holding_fenced_json_matches_structured() {
        let stored = json!({
            "title": "Lección: Semana 7, Día 5, Pomodoro 2",
            "lesson": "```json\n{\n  \"contenido\": \"# 💾 Recuperación de Datos\\n\\nBla bla bla\\n\\n```javascript\\nconsole.log('test')\\n```\"\n}\n```",
            "exercises": []
        });
        let expected = "# 💾 Recuperación de Datos\n\nBla bla bla\n\n```javascript\nconsole.log('test')\n```";

        let structured = recover(&stored);
        assert_eq!(structured.markdown, expected);
        assert_eq!(structured.trail, vec![Structured, FencedJson, Markdown]);

        let text = recover_str(&stored.to_string());
        assert_eq!(text.markdown, expected);
        assert_eq!(text.trail, vec![TruncatedField, FencedJson, Markdown]);
    }

    #[test]
    fn serialized_backslashes_survive_truncated_scan() {
        let stored = json!({
            "lesson": "Call `re.compile(\"\\d+\")` on files under C:\\Users\\new to match digits."
        });
        let text = recover_str(&stored.to_string());
        assert_eq!(text.strategy(), TruncatedField);
        assert_eq!(text.markdown, recover(&stored).markdown);
        assert_eq!(
            text.markdown,
            "Call `re.compile(\"\\d+\")` on files under C:\\Users\\new to match digits."
        );
    }

    #[test]
    fn clean_markdown_passes_through() {
        let payload = "# Title\n\nSome **bold** text.\n\n- a\n- b\n\n  \n";
        let result = recover_str(payload);
        assert_eq!(result.markdown, "# Title\n\nSome **bold** text.\n\n- a\n- b");
        assert_eq!(result.trail, vec![Markdown]);
    }

    #[rstest]
    #[case::lesson(json!({"title": "t", "lesson": "# L\n\nBody"}), "# L\n\nBody")]
    #[case::priority(json!({"content": "second", "lesson": "first"}), "first")]
    #[case::spanish(json!({"titulo": "t", "contenido": "hola"}), "hola")]
    #[case::array(json!([{"id": 1}, {"texto": "desde lista"}]), "desde lista")]
    #[case::object_field(json!({"lesson": {"x": 1}}), "{\n  \"x\": 1\n}")]
    #[case::no_field(json!({"a": 1}), "{\n  \"a\": 1\n}")]
    #[case::number(json!(42), "42")]
    fn structured_payloads(#[case] payload: Value, #[case] expected: &str) {
        let result = recover(&payload);
        assert_eq!(result.markdown, expected);
        assert_eq!(result.strategy(), Structured);
    }

    #[test]
    fn nested_string_reenters_cascade() {
        let payload = json!({"lesson": "```json\n{\"contenido\": \"## Inner\"}\n```"});
        let result = recover(&payload);
        assert_eq!(result.markdown, "## Inner");
        assert_eq!(result.trail, vec![Structured, FencedJson, Markdown]);
    }

    #[rstest]
    #[case::fenced(
        "Here you go:\n```json\n{\"lesson\": \"# T\\n\\nBody\", \"quiz\": []}\n```",
        "# T\n\nBody",
        vec![FencedJson, Markdown]
    )]
    #[case::whole_json_short_lesson(
        "{\"lesson\": \"short one\"}",
        "short one",
        vec![WholeJson, Markdown]
    )]
    #[case::json_without_lesson("{\"a\": 1}", "{\"a\": 1}", vec![Markdown])]
    #[case::example_fence_kept(
        "# Lesson\n\n```json\n{\"name\": \"demo\"}\n```",
        "# Lesson\n\n```json\n{\"name\": \"demo\"}\n```",
        vec![Markdown]
    )]
    #[case::trailing_quiz(
        "# Lesson\n\nBody.\n\n```json\n{\n  \"quiz\": [{\"q\": 1}]\n}\n```",
        "# Lesson\n\nBody.",
        vec![Markdown]
    )]
    fn string_payloads(#[case] payload: &str, #[case] expected: &str, #[case] trail: Vec<Strategy>) {
        let result = recover_str(payload);
        assert_eq!(result.markdown, expected);
        assert_eq!(result.trail, trail);
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(""))]
    #[case(json!("   \n "))]
    fn empty_payloads(#[case] payload: Value) {
        let result = recover(&payload);
        assert_eq!(result.markdown, "");
        assert_eq!(result.strategy(), Empty);
    }

    #[test]
    fn string_and_value_entry_points_agree() {
        let text = "{\"leccion\": \"Texto de la lección\"}";
        assert_eq!(recover_str(text), recover(&json!(text)));
    }
}
