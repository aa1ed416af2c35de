//! Document assemblers.
//!
//! One function per page kind. An assembler locates the relevant top-level
//! sections by title, runs the matching extractors, and combines the results
//! into a single record.

use crate::dom;
use crate::error::Result;
use crate::extractor::{self, constants, examples, extends, functions, properties};
use crate::node::{self, NodeKind};
use crate::page::Page;
use crate::patterns::DANGER_ALERT;
use crate::record::{ClassDoc, EnumDoc, InterfaceDoc};

/// Parse an enum page: title, lead paragraph, constants.
pub fn parse_enum(page: &Page) -> Result<EnumDoc> {
    let mut doc = EnumDoc {
        name: page.title()?,
        description: page.lead_paragraph()?.trim().to_string(),
        constants: Vec::new(),
    };

    for section in extractor::sections(page) {
        if extractor::section_title(&section).contains("Constants") {
            doc.constants = constants::parse(&section);
        }
    }

    Ok(doc)
}

/// Parse an interface page: title, lead paragraph, properties, examples.
pub fn parse_interface(page: &Page) -> Result<InterfaceDoc> {
    let mut doc = InterfaceDoc {
        name: page.title()?,
        description: page.lead_paragraph()?.trim().to_string(),
        properties: Vec::new(),
        examples: examples::parse(page),
    };

    for section in extractor::sections(page) {
        if extractor::section_title(&section).contains("Properties") {
            doc.properties = properties::parse(&section);
        }
    }

    Ok(doc)
}

/// Parse a class page.
///
/// The only assembler with explicit failure handling: an error anywhere in
/// the extraction is logged and re-raised, aborting the whole request. No
/// partial record is returned.
pub fn parse_class(page: &Page) -> Result<ClassDoc> {
    match assemble_class(page) {
        Ok(doc) => Ok(doc),
        Err(error) => {
            tracing::error!(%error, "class page extraction failed");
            Err(error)
        }
    }
}

fn assemble_class(page: &Page) -> Result<ClassDoc> {
    let mut doc = ClassDoc {
        name: page.title()?,
        description: class_description(page)?,
        properties: Vec::new(),
        methods: Vec::new(),
        constants: Vec::new(),
        examples: examples::parse(page),
    };

    let extended_by = format!("Classes that extend {}", doc.name);

    for section in extractor::sections(page) {
        let title = extractor::section_title(&section);

        if title.contains("Extends") || title.contains(&extended_by) {
            let related = extends::parse(&section).join(", ");
            doc.description.push_str(&format!(" Extends: {related}."));
        } else {
            match title.as_str() {
                "Properties" => doc.properties = properties::parse(&section),
                "Methods" => doc.methods = functions::parse(&section),
                "Constants" => doc.constants = constants::parse(&section),
                _ => {}
            }
        }
    }

    Ok(doc)
}

/// The class description.
///
/// A visible danger callout immediately followed by a paragraph replaces the
/// lead paragraph: the trimmed callout text concatenated with the paragraph
/// text. Hidden callouts (conditional markup for other build flavors) are
/// skipped. Falls back to the lead paragraph.
fn class_description(page: &Page) -> Result<String> {
    let callouts = dom::each(&dom::query_selector_all(&page.content(), DANGER_ALERT));

    if let Some(callout) = callouts.into_iter().find(dom::is_visible) {
        if let Some(next) = dom::next_element_sibling(&callout) {
            if node::classify(&next) == NodeKind::Paragraph {
                let mut description = dom::text_content(&callout).trim().to_string();
                description.push_str(&dom::text_content(&next));
                return Ok(description);
            }
        }
    }

    page.lead_paragraph()
}
