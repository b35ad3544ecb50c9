use crate::parsing::inline::{cursor::Cursor, types::InlineRun};

/// Bold (`**x**`) and italic (`*x*`) spans share one delimiter byte.
///
/// Content may not contain the delimiter itself, so spans never nest and
/// `**x**` can only ever be bold.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const BOLD: &'static [u8; 2] = b"**";

    pub fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<InlineRun> {
        if !cur.starts_with(Self::BOLD) {
            return None;
        }
        let saved = cur.clone();
        cur.bump_n(Self::BOLD.len());
        let inner_start = cur.pos();
        let inner_end = cur.eat_until(&[Self::STAR]);
        if inner_end == inner_start || !cur.starts_with(Self::BOLD) {
            *cur = saved;
            return None;
        }
        cur.bump_n(Self::BOLD.len());
        Some(InlineRun::Bold {
            text: cur.slice(inner_start, inner_end).to_string(),
        })
    }

    pub fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<InlineRun> {
        if cur.peek() != Some(Self::STAR) {
            return None;
        }
        let saved = cur.clone();
        cur.bump();
        let inner_start = cur.pos();
        let inner_end = cur.eat_until(&[Self::STAR]);
        if inner_end == inner_start || cur.peek() != Some(Self::STAR) {
            *cur = saved;
            return None;
        }
        cur.bump();
        Some(InlineRun::Italic {
            text: cur.slice(inner_start, inner_end).to_string(),
        })
    }
}
