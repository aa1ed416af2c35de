//! Property extraction.
//!
//! Every level-3 heading inside a "Properties" section starts one property.
//! Paragraphs and warning callouts in the entry body contribute to the
//! description, in document order; everything else is ignored.

use crate::dom::{self, Selection};
use crate::node::{self, HeadingLevel, NodeKind, Severity};
use crate::record::Property;
use crate::segment;
use crate::text::clean_text;

/// Parse every property entry in the section opened by `section_heading`.
#[must_use]
pub fn parse(section_heading: &Selection) -> Vec<Property> {
    let mut properties = Vec::new();

    for entry in segment::section_body(section_heading, HeadingLevel::H2) {
        if !node::is_heading(&entry, HeadingLevel::H3) {
            continue;
        }

        let name = node::heading_title(&entry, HeadingLevel::H3);
        let mut description: Vec<String> = Vec::new();

        for element in segment::section_body(&entry, HeadingLevel::H3) {
            match node::classify(&element) {
                NodeKind::Paragraph => {
                    let text = dom::text_content(&element).to_string();
                    if !text.is_empty() {
                        description.push(text);
                    }
                }
                NodeKind::Callout(Severity::Warning) => {
                    description.push(dom::text_content(&element).to_string());
                }
                _ => {}
            }
        }

        properties.push(Property {
            name,
            description: clean_text(&description.join("\n")),
        });
    }

    properties
}
