/// The delimiter character a fence was opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    fn marker(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// What a fence-shaped line looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig<'a> {
    pub kind: FenceKind,
    /// Text after the delimiter run, trimmed. Empty for a bare delimiter.
    pub info: &'a str,
}

/// Fenced code block type with owned delimiter constants.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";
    /// Fence language that selects the diagram variant (case-insensitive).
    pub const DIAGRAM_LANGUAGE: &'static str = "mermaid";

    /// Detects a fence delimiter on a line (leading/trailing whitespace ignored).
    pub fn sig(line: &str) -> Option<FenceSig<'_>> {
        let t = line.trim();
        let kind = if t.starts_with(Self::BACKTICKS) {
            FenceKind::Backticks
        } else if t.starts_with(Self::TILDES) {
            FenceKind::Tildes
        } else {
            return None;
        };
        let info = t.trim_start_matches(kind.marker()).trim();
        Some(FenceSig { kind, info })
    }

    /// Whether a line closes a fence opened with `kind`.
    ///
    /// Only a bare delimiter run of the same character closes; a line such
    /// as ```` ```python ```` inside an open fence is content.
    pub fn closes(kind: FenceKind, line: &str) -> bool {
        matches!(Self::sig(line), Some(sig) if sig.kind == kind && sig.info.is_empty())
    }

    /// The language tag declared by an opener's info string (first word).
    pub fn language(info: &str) -> &str {
        info.split_whitespace().next().unwrap_or("")
    }

    pub fn is_diagram(language: &str) -> bool {
        language.eq_ignore_ascii_case(Self::DIAGRAM_LANGUAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(
            CodeFence::sig("```rust"),
            Some(FenceSig {
                kind: FenceKind::Backticks,
                info: "rust"
            })
        );
    }

    #[test]
    fn detect_indented_tilde_fence() {
        assert_eq!(
            CodeFence::sig("  ~~~"),
            Some(FenceSig {
                kind: FenceKind::Tildes,
                info: ""
            })
        );
    }

    #[test]
    fn two_backticks_are_not_a_fence() {
        assert_eq!(CodeFence::sig("``x``"), None);
        assert_eq!(CodeFence::sig("hello"), None);
    }

    #[test]
    fn closes_only_on_bare_matching_fence() {
        assert!(CodeFence::closes(FenceKind::Backticks, "```"));
        assert!(CodeFence::closes(FenceKind::Backticks, "  `````  "));
        assert!(!CodeFence::closes(FenceKind::Backticks, "```python"));
        assert!(!CodeFence::closes(FenceKind::Backticks, "~~~"));
        assert!(!CodeFence::closes(FenceKind::Tildes, "```"));
    }

    #[test]
    fn language_is_first_word_of_info() {
        assert_eq!(CodeFence::language("python title=x.py"), "python");
        assert_eq!(CodeFence::language(""), "");
    }

    #[test]
    fn diagram_language_ignores_case() {
        assert!(CodeFence::is_diagram("mermaid"));
        assert!(CodeFence::is_diagram("Mermaid"));
        assert!(!CodeFence::is_diagram("mermaidjs"));
    }
}
