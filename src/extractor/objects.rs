//! Object extraction.
//!
//! Objects live under top-level sections whose title contains "Objects".
//! Unlike the other section extractors, every matching section on the page
//! contributes, accumulated in document order.

use crate::dom;
use crate::extractor;
use crate::node::{self, HeadingLevel, NodeKind};
use crate::page::Page;
use crate::record::ObjectDoc;
use crate::segment;

/// Parse every object entry across all "Objects" sections of the page.
#[must_use]
pub fn parse(page: &Page) -> Vec<ObjectDoc> {
    let mut objects = Vec::new();

    for section in extractor::sections(page) {
        if !extractor::section_title(&section).contains("Objects") {
            continue;
        }

        for entry in segment::section_body(&section, HeadingLevel::H2) {
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

            objects.push(ObjectDoc {
                name,
                description: description.join("\n"),
            });
        }
    }

    objects
}
