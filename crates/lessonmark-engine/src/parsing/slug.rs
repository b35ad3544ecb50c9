/// Derives an anchor identifier from heading text.
///
/// Lower-cases the text, collapses every run of non-alphanumeric characters
/// into a single `-`, and trims leading/trailing hyphens. Alphanumerics are
/// Unicode-aware, so accented letters survive.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
