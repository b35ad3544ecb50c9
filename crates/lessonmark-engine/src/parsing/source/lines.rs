use super::span::Span;

/// A single source line with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of the line content, excluding the line terminator.
    pub span: Span,
    /// The line text without `\n` or `\r\n`.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `src` with their byte spans.
///
/// Both `\n` and `\r\n` terminate a line; the terminator is excluded from
/// the span. A trailing terminator does not produce an extra empty line.
pub fn lines_with_spans(src: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    src.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        let text = raw
            .strip_suffix('\n')
            .map(|t| t.strip_suffix('\r').unwrap_or(t))
            .unwrap_or(raw);
        LineRef {
            span: Span::new(start, start + text.len()),
            text,
        }
    })
}
