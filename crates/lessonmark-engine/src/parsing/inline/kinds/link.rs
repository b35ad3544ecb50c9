use crate::parsing::inline::{cursor::Cursor, types::InlineRun};

/// Inline link `[text](href)`. The href may not contain whitespace.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const HREF_OPEN: u8 = b'(';
    pub const HREF_CLOSE: u8 = b')';

    pub fn try_parse(cur: &mut Cursor<'_>) -> Option<InlineRun> {
        if cur.peek() != Some(Self::OPEN) {
            return None;
        }
        let saved = cur.clone();
        let parsed = Self::parse_parts(cur);
        if parsed.is_none() {
            *cur = saved;
        }
        parsed
    }

    fn parse_parts(cur: &mut Cursor<'_>) -> Option<InlineRun> {
        cur.bump();
        let text_start = cur.pos();
        let text_end = cur.eat_until(&[Self::TEXT_CLOSE]);
        if text_end == text_start || cur.peek() != Some(Self::TEXT_CLOSE) {
            return None;
        }
        cur.bump();
        if cur.bump() != Some(Self::HREF_OPEN) {
            return None;
        }
        let href_start = cur.pos();
        let href_end = cur.eat_until(&[Self::HREF_CLOSE, b' ', b'\t']);
        if href_end == href_start || cur.peek() != Some(Self::HREF_CLOSE) {
            return None;
        }
        cur.bump();
        Some(InlineRun::Link {
            text: cur.slice(text_start, text_end).to_string(),
            href: cur.slice(href_start, href_end).to_string(),
        })
    }
}
