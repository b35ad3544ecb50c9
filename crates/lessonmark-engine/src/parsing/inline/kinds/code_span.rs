use crate::parsing::inline::{cursor::Cursor, types::InlineRun};

/// Code span `` `x` ``. Raw: the content is never re-tokenized.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';

    /// Attempts a non-empty code span at the cursor.
    ///
    /// On failure the cursor is left where it was.
    pub fn try_parse(cur: &mut Cursor<'_>) -> Option<InlineRun> {
        if cur.peek() != Some(Self::TICK) {
            return None;
        }
        let saved = cur.clone();
        cur.bump();
        let inner_start = cur.pos();
        let inner_end = cur.eat_until(&[Self::TICK]);
        if cur.peek() != Some(Self::TICK) || inner_end == inner_start {
            *cur = saved;
            return None;
        }
        cur.bump();
        Some(InlineRun::Code {
            text: cur.slice(inner_start, inner_end).to_string(),
        })
    }
}
