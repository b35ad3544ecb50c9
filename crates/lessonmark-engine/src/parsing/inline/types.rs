use serde::Serialize;

/// A formatted (or literal) span of inline text.
///
/// Runs never nest: the text inside a matched span is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineRun {
    /// Text outside any construct, including unmatched delimiters.
    Literal { text: String },
    Bold { text: String },
    Italic { text: String },
    Code { text: String },
    Link { text: String, href: String },
}

impl InlineRun {
    /// The visible text of the run.
    pub fn text(&self) -> &str {
        match self {
            InlineRun::Literal { text }
            | InlineRun::Bold { text }
            | InlineRun::Italic { text }
            | InlineRun::Code { text }
            | InlineRun::Link { text, .. } => text,
        }
    }
}
