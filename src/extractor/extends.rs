//! Inheritance list extraction.
//!
//! "Extends" sections (and their inverse, "Classes that extend X") carry
//! related class names as list items. Every list up to the section boundary
//! contributes.

use crate::dom::{self, Selection};
use crate::node::{self, HeadingLevel, NodeKind};
use crate::segment;

/// Collect the related class names listed in the section opened by
/// `section_heading`.
#[must_use]
pub fn parse(section_heading: &Selection) -> Vec<String> {
    let mut related = Vec::new();

    for element in segment::section_body(section_heading, HeadingLevel::H2) {
        if node::classify(&element) == NodeKind::List {
            for item in dom::each(&dom::query_selector_all(&element, "li")) {
                related.push(dom::text_content(&item).to_string());
            }
        }
    }

    related
}
