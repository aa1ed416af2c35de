//! Section segmentation.
//!
//! The pages express hierarchy only through heading levels and sibling order,
//! so every extractor recovers its scope the same way: walk forward from a
//! heading wrapper, collecting siblings until a boundary closes the section.
//! This is the one traversal primitive in the crate; extractors differ only
//! in the boundary they pass and in how they classify the collected nodes.

use crate::dom::{self, Selection};
use crate::node::{self, HeadingLevel, NodeKind};

/// Collect `start`'s following element siblings up to a boundary.
///
/// Walks forward from `start`, collecting each sibling until one satisfies
/// `is_boundary` or siblings run out. Neither `start` itself nor the boundary
/// node is included. Returns an empty vector when the first sibling is
/// already a boundary.
pub fn following_until<'a, F>(start: &Selection<'a>, is_boundary: F) -> Vec<Selection<'a>>
where
    F: Fn(&Selection<'a>) -> bool,
{
    let mut collected = Vec::new();
    let mut next = dom::next_element_sibling(start);

    while let Some(sibling) = next {
        if is_boundary(&sibling) {
            break;
        }
        next = dom::next_element_sibling(&sibling);
        collected.push(sibling);
    }

    collected
}

/// Boundary test: a heading wrapper at `level` or any coarser level.
///
/// A section at level N is closed by the next heading of the same or an
/// enclosing level; a finer heading belongs to the section body.
#[must_use]
pub fn closes_section(sel: &Selection, level: HeadingLevel) -> bool {
    matches!(node::classify(sel), NodeKind::Heading(l) if l <= level)
}

/// The body of the section opened by `heading`: every following sibling up
/// to the next heading of the same or a coarser level.
#[must_use]
pub fn section_body<'a>(heading: &Selection<'a>, level: HeadingLevel) -> Vec<Selection<'a>> {
    following_until(heading, |sel| closes_section(sel, level))
}
