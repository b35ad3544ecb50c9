/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default block when no other
/// rule matches. Consecutive plain lines are trimmed and joined with
/// [`Paragraph::JOINER`].
pub struct Paragraph;

impl Paragraph {
    pub const JOINER: char = ' ';

    pub fn append(buf: &mut String, line: &str) {
        if !buf.is_empty() {
            buf.push(Self::JOINER);
        }
        buf.push_str(line.trim());
    }
}
