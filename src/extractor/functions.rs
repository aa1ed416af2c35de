//! Function extraction.
//!
//! Entries in a "Methods" section are level-3 headings, or level-3 headings
//! nested inside an experimental marker. One pass over the entry body fills
//! two accumulators: the prose description and the parameter list. Relative
//! order is preserved within each accumulator, not across them.
//!
//! A list only contributes to the description when it immediately follows a
//! paragraph (an inline enumeration reading as prose); a standalone list
//! contributes nothing.

use crate::dom::{self, Selection};
use crate::node::{self, HeadingLevel, NodeKind};
use crate::record::{Function, Parameter};
use crate::segment;
use crate::text::clean_text;

/// Parse every function entry in the section opened by `section_heading`.
#[must_use]
pub fn parse(section_heading: &Selection) -> Vec<Function> {
    let mut functions = Vec::new();

    for element in segment::section_body(section_heading, HeadingLevel::H2) {
        match node::classify(&element) {
            NodeKind::Heading(HeadingLevel::H3) => functions.push(parse_entry(&element)),
            NodeKind::Experimental => {
                let inner =
                    dom::query_selector(&element, HeadingLevel::H3.wrapper_selector());
                if inner.exists() {
                    functions.push(parse_entry(&inner));
                }
            }
            _ => {}
        }
    }

    functions
}

fn parse_entry(heading: &Selection) -> Function {
    let name = node::heading_title(heading, HeadingLevel::H3);
    let mut description: Vec<String> = Vec::new();
    let mut parameters: Vec<Parameter> = Vec::new();

    for element in segment::section_body(heading, HeadingLevel::H3) {
        accumulate_description(&element, &mut description);
        accumulate_parameters(&element, &mut parameters);
    }

    Function {
        name,
        description: clean_text(&description.join("\n")),
        parameters,
    }
}

fn accumulate_description(element: &Selection, description: &mut Vec<String>) {
    match node::classify(element) {
        NodeKind::Paragraph => {
            let text = dom::text_content(element).to_string();
            if !text.is_empty() {
                description.push(text);
            }
        }
        NodeKind::List => {
            let follows_paragraph = dom::previous_element_sibling(element)
                .is_some_and(|prev| node::classify(&prev) == NodeKind::Paragraph);
            if follows_paragraph {
                for item in dom::each(&dom::query_selector_all(element, "li")) {
                    description.push(dom::text_content(&item).to_string());
                }
            }
        }
        NodeKind::Heading(HeadingLevel::H4) => {
            if node::heading_title(element, HeadingLevel::H4).contains("Returns") {
                description.push(dom::text_content(element).to_string());
            }
        }
        NodeKind::Callout(_) => {
            description.push(dom::text_content(element).to_string());
        }
        _ => {}
    }
}

fn accumulate_parameters(element: &Selection, parameters: &mut Vec<Parameter>) {
    if node::classify(element) != NodeKind::List {
        return;
    }

    let is_parameter_list = dom::previous_element_sibling(element).is_some_and(|prev| {
        node::is_heading(&prev, HeadingLevel::H4)
            && dom::text_content(&prev).contains("Parameters")
    });
    if !is_parameter_list {
        return;
    }

    for item in dom::each(&dom::query_selector_all(element, "li")) {
        let paragraphs = dom::each(&dom::query_selector_all(&item, "p"));

        if paragraphs.len() > 1 {
            parameters.push(Parameter {
                name: dom::text_content(&paragraphs[0]).to_string(),
                description: dom::text_content(&paragraphs[1]).to_string(),
            });
        } else {
            // Ambiguous markup: the whole item reads as the name.
            parameters.push(Parameter {
                name: dom::text_content(&item).to_string(),
                description: String::new(),
            });
        }
    }
}
