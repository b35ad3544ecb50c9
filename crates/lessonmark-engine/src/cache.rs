use crate::parsing::{Document, parse_document};

/// Remembers the last parsed input for one consumer.
///
/// Re-rendering the same text returns the cached [`Document`]; any change to
/// the text replaces it. The cache is owned by its consumer and never shared.
#[derive(Debug, Default)]
pub struct ParseCache {
    entry: Option<(String, Document)>,
}

impl ParseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_parse(&mut self, input: &str) -> &Document {
        if !self.is_cached(input) {
            self.entry = None;
        }
        let (_, doc) = self.entry.get_or_insert_with(|| {
            log::trace!("parse cache miss ({} bytes)", input.len());
            (input.to_string(), parse_document(input))
        });
        doc
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn is_cached(&self, input: &str) -> bool {
        matches!(&self.entry, Some((cached, _)) if cached == input)
    }
}
