//! Recovery of a lesson field from JSON that was cut off mid-string.

use std::sync::LazyLock;

use regex::Regex;

use super::fields::LESSON_FIELDS;

/// Raw (still escaped) values shorter than this are treated as noise.
pub const MIN_RAW_CHARS: usize = 50;

/// `"<field>": "` for each lesson field, in priority order.
static FIELD_MARKERS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    LESSON_FIELDS
        .iter()
        .map(|name| {
            let re = Regex::new(&format!(r#""{name}"\s*:\s*""#))
                .expect("field marker regex should compile");
            (*name, re)
        })
        .collect()
});

/// Extracts the first lesson field value found in `text`, closed or not.
///
/// The value runs from its opening quote to the first unescaped quote, or
/// to the end of input when the payload was truncated inside the string.
pub fn truncated_field(text: &str) -> Option<String> {
    FIELD_MARKERS.iter().find_map(|(name, re)| {
        let start = re.find(text)?.end();
        let raw = raw_value(&text[start..]);
        let chars = raw.chars().count();
        if chars < MIN_RAW_CHARS {
            log::debug!("\"{name}\" value has {chars} chars, below the {MIN_RAW_CHARS} char minimum");
            return None;
        }
        Some(unescape(raw).trim_end().to_string())
    })
}

fn raw_value(s: &str) -> &str {
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            return &s[..i];
        }
    }
    s
}

/// Decodes `\n`, `\t`, `\"` and `\\` in one left-to-right pass. Any other
/// escape, such as `\u00e9`, is kept as written.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BODY: &str = "Body text that is long enough to exceed fifty characters easily";

    #[test]
    fn cut_off_after_closed_lesson_value() {
        let text = format!(r##"{{"lesson": "# Title\n{BODY}", "quiz": [{{"q": "wh"##);
        assert_eq!(truncated_field(&text), Some(format!("# Title\n{BODY}")));
    }

    #[test]
    fn cut_off_inside_lesson_value() {
        let text = format!(r###"{{"titulo": "x", "contenido": "## Part\n\n{BODY} and more\n"###);
        assert_eq!(
            truncated_field(&text),
            Some(format!("## Part\n\n{BODY} and more"))
        );
    }

    #[test]
    fn escaped_quotes_do_not_end_value() {
        let text = r#"{"content": "Say \"hello\" to the\tworld, then keep writing until we pass fifty", "#;
        assert_eq!(
            truncated_field(text),
            Some("Say \"hello\" to the\tworld, then keep writing until we pass fifty".to_string())
        );
    }

    #[test]
    fn short_candidate_falls_through_to_next_field() {
        let text = format!(r#"{{"lesson": "tiny", "text": "{BODY}"#);
        assert_eq!(truncated_field(&text), Some(BODY.to_string()));
    }

    #[test]
    fn unicode_escapes_are_left_alone() {
        let text = format!(r#""texto": "caf\u00e9 {BODY}""#);
        assert_eq!(truncated_field(&text), Some(format!(r"caf\u00e9 {BODY}")));
    }

    #[test]
    fn escaped_backslash_is_decoded_before_what_follows_it() {
        let text = format!(r#"{{"text": "Paths like C:\\new\\tmp and \\n stay literal. {BODY}"#);
        assert_eq!(
            truncated_field(&text),
            Some(format!(r"Paths like C:\new\tmp and \n stay literal. {BODY}"))
        );
    }

    #[test]
    fn value_ending_in_escaped_backslash_stops_at_its_quote() {
        let text = format!(r#"{{"text": "{BODY} C:\\", "quiz": []}}"#);
        assert_eq!(truncated_field(&text), Some(format!(r"{BODY} C:\")));
    }

    #[test]
    fn no_marker_no_value() {
        assert_eq!(truncated_field(BODY), None);
    }
}
