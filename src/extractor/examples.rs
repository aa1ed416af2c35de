//! Code example extraction.
//!
//! Examples hang off level-4 headings titled "Examples", anywhere on the
//! page. Each level-5 heading inside such a region names one example; its
//! code is the nearest following code block, skipping intermediate siblings.
//! Entries with no name or no code block are discarded, and exact
//! (name, code) duplicates are dropped.

use crate::dom::{self, Selection};
use crate::node::{self, HeadingLevel, NodeKind};
use crate::page::Page;
use crate::record::Example;
use crate::segment;
use crate::text::clean_text;

/// Parse every example on the page, deduplicated by (name, code).
#[must_use]
pub fn parse(page: &Page) -> Vec<Example> {
    let mut examples: Vec<Example> = Vec::new();

    let headings = dom::each(&dom::query_selector_all(
        &page.content(),
        HeadingLevel::H4.wrapper_selector(),
    ));

    for heading in headings {
        if !node::heading_title(&heading, HeadingLevel::H4).contains("Examples") {
            continue;
        }

        for entry in segment::section_body(&heading, HeadingLevel::H4) {
            if !node::is_heading(&entry, HeadingLevel::H5) {
                continue;
            }

            let code_name = node::heading_title(&entry, HeadingLevel::H5);
            if code_name.is_empty() {
                continue;
            }

            let Some(code_block) = nearest_code_block(&entry) else {
                continue;
            };

            let code = clean_text(&dom::text_content(&code_block));
            let duplicate = examples
                .iter()
                .any(|e| e.code_name == code_name && e.code == code);
            if !duplicate {
                examples.push(Example { code_name, code });
            }
        }
    }

    examples
}

/// The nearest following sibling that is a code block, if any.
///
/// The walk does not stop at headings: on these pages the code block can be
/// separated from its title by arbitrary prose.
fn nearest_code_block<'a>(entry: &Selection<'a>) -> Option<Selection<'a>> {
    let mut current = dom::next_element_sibling(entry);

    loop {
        match current {
            Some(sel) if node::classify(&sel) == NodeKind::CodeBlock => return Some(sel),
            Some(sel) => current = dom::next_element_sibling(&sel),
            None => return None,
        }
    }
}
