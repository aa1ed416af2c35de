//! Constant extraction.
//!
//! Same scan as properties, but only paragraphs contribute to the
//! description, and the joined text is kept as-is.

use crate::dom::{self, Selection};
use crate::node::{self, HeadingLevel, NodeKind};
use crate::record::Constant;
use crate::segment;

/// Parse every constant entry in the section opened by `section_heading`.
#[must_use]
pub fn parse(section_heading: &Selection) -> Vec<Constant> {
    let mut constants = Vec::new();

    for entry in segment::section_body(section_heading, HeadingLevel::H2) {
        if !node::is_heading(&entry, HeadingLevel::H3) {
            continue;
        }

        let name = node::heading_title(&entry, HeadingLevel::H3);
        let mut description: Vec<String> = Vec::new();

        for element in segment::section_body(&entry, HeadingLevel::H3) {
            if node::classify(&element) == NodeKind::Paragraph {
                let text = dom::text_content(&element).to_string();
                if !text.is_empty() {
                    description.push(text);
                }
            }
        }

        constants.push(Constant {
            name,
            description: description.join("\n"),
        });
    }

    constants
}
