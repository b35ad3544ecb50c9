use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link},
    types::InlineRun,
};

/// Tokenizes one run of text into [`InlineRun`]s.
///
/// At each position the constructs are tried in precedence order: bold,
/// italic, code span, link. The first that closes wins; otherwise the byte
/// becomes part of the surrounding literal. Unmatched delimiters stay in the
/// literal text, so concatenating the runs' source never drops characters.
pub fn parse_inline(s: &str) -> Vec<InlineRun> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineRun>, text: &str) {
        if !text.is_empty() {
            out.push(InlineRun::Literal {
                text: text.to_string(),
            });
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        let run = Emphasis::try_parse_bold(&mut cur)
            .or_else(|| Emphasis::try_parse_italic(&mut cur))
            .or_else(|| CodeSpan::try_parse(&mut cur))
            .or_else(|| Link::try_parse(&mut cur));
        match run {
            Some(run) => {
                flush_text(&mut out, cur.slice(text_start, start));
                out.push(run);
                text_start = cur.pos();
            }
            None => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, cur.slice(text_start, s.len()));
    out
}
