use super::span::Span;

/// Extracts the text for a span, truncating to at most `max` bytes with a
/// "..." suffix if needed. Truncation never splits a character.
///
/// Used for human-readable snapshot output.
pub fn preview(src: &str, sp: Span, max: usize) -> String {
    let Some(text) = sp.slice(src) else {
        return String::new();
    };
    if text.len() <= max {
        return text.to_string();
    }
    let cut = text
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= max)
        .last()
        .unwrap_or(0);
    let mut s = text[..cut].to_string();
    s.push_str("...");
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        assert_eq!(preview("hello", Span::new(0, 5), 10), "hello");
    }

    #[test]
    fn preview_exact_length_unchanged() {
        assert_eq!(preview("hello", Span::new(0, 5), 5), "hello");
    }

    #[test]
    fn preview_truncates_long_text() {
        assert_eq!(preview("hello world", Span::new(0, 11), 5), "hello...");
    }

    #[test]
    fn preview_truncates_to_zero() {
        assert_eq!(preview("hello", Span::new(0, 5), 0), "...");
    }

    #[test]
    fn preview_respects_char_boundaries() {
        // "añb": 'ñ' occupies bytes 1..3
        assert_eq!(preview("añb", Span::new(0, 4), 2), "a...");
    }

    #[test]
    fn preview_out_of_bounds_is_empty() {
        assert_eq!(preview("abc", Span::new(1, 10), 5), "");
    }
}
