//! Text normalization for extracted descriptions and code.

use crate::patterns::BLANK_LINES;

/// Collapse redundant blank lines in extracted text.
///
/// Multi-element descriptions are newline-joined; elements that render with
/// trailing whitespace produce blank lines between entries, which read as
/// paragraph breaks that were never in the page. Each run of
/// newline-whitespace-newline collapses to a single newline. Leading and
/// trailing whitespace on the whole text is left alone.
#[must_use]
pub fn clean_text(text: &str) -> String {
    BLANK_LINES.replace_all(text, "\n").into_owned()
}
