use super::kinds::{
    BlockQuote, CodeFence, FenceKind, Heading, HorizontalRule, Image, ListItem, Table,
};

/// Which structural rule a single line matches, with its captured parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Opens a fence; `language` is the first word of the info string.
    FenceOpen { kind: FenceKind, language: &'a str },
    /// Closes the currently open fence.
    FenceClose,
    /// Any line while a fence is open, kept verbatim.
    FenceContent,
    TableRow,
    /// The `|---|---|` row between header and body; consumed, never emitted.
    TableSeparator,
    HorizontalRule,
    Heading { level: u8, text: &'a str },
    BlockQuote { text: &'a str },
    ListItem { ordered: bool, text: &'a str },
    Image { alt: &'a str, src: &'a str },
    /// Whitespace-only; flushes open accumulators.
    Blank,
    Plain { text: &'a str },
}

/// Classifies individual lines for the block segmenter.
///
/// The only context it needs is whether a fence is open, and with which
/// delimiter: inside a fence every line is content until the matching
/// closer, regardless of its own shape.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies `line` (without terminator) in priority order:
    /// fence, table, rule, heading, quote, list, image, blank, plain.
    pub fn classify<'a>(&self, line: &'a str, open_fence: Option<FenceKind>) -> LineClass<'a> {
        if let Some(kind) = open_fence {
            return if CodeFence::closes(kind, line) {
                LineClass::FenceClose
            } else {
                LineClass::FenceContent
            };
        }

        if let Some(sig) = CodeFence::sig(line) {
            return LineClass::FenceOpen {
                kind: sig.kind,
                language: CodeFence::language(sig.info),
            };
        }

        let line = line.trim_end();

        if Table::is_row(line) {
            return if Table::is_separator(line) {
                LineClass::TableSeparator
            } else {
                LineClass::TableRow
            };
        }
        if HorizontalRule::matches(line) {
            return LineClass::HorizontalRule;
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if let Some(text) = BlockQuote::strip_prefix(line) {
            return LineClass::BlockQuote { text };
        }
        if let Some((ordered, text)) = ListItem::parse(line) {
            return LineClass::ListItem { ordered, text };
        }
        if let Some((alt, src)) = Image::parse(line) {
            return LineClass::Image { alt, src };
        }
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        LineClass::Plain { text: line.trim() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn classify(line: &str) -> LineClass<'_> {
        MarkdownLineClassifier.classify(line, None)
    }

    #[rstest]
    #[case("```python", LineClass::FenceOpen { kind: FenceKind::Backticks, language: "python" })]
    #[case("```", LineClass::FenceOpen { kind: FenceKind::Backticks, language: "" })]
    #[case("| a | b |", LineClass::TableRow)]
    #[case("|---|:---:|", LineClass::TableSeparator)]
    #[case("---", LineClass::HorizontalRule)]
    #[case("## Two", LineClass::Heading { level: 2, text: "Two" })]
    #[case("> quoted", LineClass::BlockQuote { text: "quoted" })]
    #[case("- item", LineClass::ListItem { ordered: false, text: "item" })]
    #[case("3. item", LineClass::ListItem { ordered: true, text: "item" })]
    #[case("![alt](a.png)", LineClass::Image { alt: "alt", src: "a.png" })]
    #[case("   ", LineClass::Blank)]
    #[case("", LineClass::Blank)]
    #[case("  just text  ", LineClass::Plain { text: "just text" })]
    fn classification_outside_fence(#[case] line: &str, #[case] expected: LineClass<'_>) {
        assert_eq!(classify(line), expected);
    }

    #[test]
    fn rule_outranks_list_marker() {
        assert_eq!(classify("***"), LineClass::HorizontalRule);
        assert_eq!(
            classify("* * *"),
            LineClass::ListItem {
                ordered: false,
                text: "* *"
            }
        );
    }

    #[test]
    fn fence_state_makes_everything_content() {
        let c = MarkdownLineClassifier;
        let open = Some(FenceKind::Backticks);
        assert_eq!(c.classify("| a | b |", open), LineClass::FenceContent);
        assert_eq!(c.classify("# not a heading", open), LineClass::FenceContent);
        assert_eq!(c.classify("```js", open), LineClass::FenceContent);
        assert_eq!(c.classify("```", open), LineClass::FenceClose);
    }

    #[test]
    fn tilde_fence_ignores_backtick_closer() {
        let c = MarkdownLineClassifier;
        assert_eq!(
            c.classify("```", Some(FenceKind::Tildes)),
            LineClass::FenceContent
        );
        assert_eq!(c.classify("~~~", Some(FenceKind::Tildes)), LineClass::FenceClose);
    }
}
