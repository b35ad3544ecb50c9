/// Blockquote block type with owned delimiter constant.
///
/// One quote line is one block; consecutive quote lines are not merged and
/// nested `>` prefixes are kept as literal text.
pub struct BlockQuote;

impl BlockQuote {
    /// A quote line must start with this exact prefix (no indentation).
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted text if `line` is a quote line.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }
}
