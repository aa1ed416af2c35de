//! Field extractors.
//!
//! One module per entity kind. Each extractor is handed a section heading (or
//! the whole page), segments the section body with the traversal primitive,
//! classifies every node, and interprets the matching ones into records.
//! Non-matching nodes are ignored, never an error.

pub mod constants;
pub mod examples;
pub mod extends;
pub mod functions;
pub mod objects;
pub mod properties;

use crate::dom::{self, Selection};
use crate::node::{self, HeadingLevel};
use crate::page::Page;

/// All top-level section headings on the page, in document order.
#[must_use]
pub fn sections(page: &Page) -> Vec<Selection<'_>> {
    dom::each(&dom::query_selector_all(
        &page.content(),
        HeadingLevel::H2.wrapper_selector(),
    ))
}

/// Title of a top-level section.
#[must_use]
pub fn section_title(heading: &Selection) -> String {
    node::heading_title(heading, HeadingLevel::H2)
}

/// First top-level section whose title contains `title`.
#[must_use]
pub fn find_section_by_title<'a>(page: &'a Page, title: &str) -> Option<Selection<'a>> {
    sections(page)
        .into_iter()
        .find(|section| section_title(section).contains(title))
}
