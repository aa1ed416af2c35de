//! Structural node classification.
//!
//! The page layout carries no explicit nesting: wrappers, paragraphs, lists,
//! callouts and code blocks are all siblings, and their role is implied by
//! their shape. This module classifies a node into a closed tagged variant
//! once, so the extraction logic matches on an enumerated kind instead of
//! sniffing selectors at every step.

use crate::dom::{self, Selection};

/// Heading depth, coarsest (`H2`) to finest (`H5`).
///
/// A section at one level runs until the next sibling heading of the same or
/// a coarser level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H2,
    H3,
    H4,
    H5,
}

impl HeadingLevel {
    /// Selector matching this level's heading wrapper.
    #[must_use]
    pub const fn wrapper_selector(self) -> &'static str {
        match self {
            Self::H2 => crate::patterns::H2_WRAPPER,
            Self::H3 => crate::patterns::H3_WRAPPER,
            Self::H4 => crate::patterns::H4_WRAPPER,
            Self::H5 => crate::patterns::H5_WRAPPER,
        }
    }

    /// Tag of the title element nested inside the wrapper.
    #[must_use]
    pub const fn title_tag(self) -> &'static str {
        match self {
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
        }
    }

    fn from_attr(value: &str) -> Option<Self> {
        match value {
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "h4" => Some(Self::H4),
            "h5" => Some(Self::H5),
            _ => None,
        }
    }
}

/// Callout severity, from the alert class variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Danger,
    Primary,
    Warning,
}

/// The closed set of node shapes the extractors care about.
///
/// Anything that is none of these is `Other` and ignored by every extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Heading(HeadingLevel),
    Paragraph,
    List,
    Callout(Severity),
    CodeBlock,
    /// Wrapper marking an entry that only exists in experimental builds.
    Experimental,
    Other,
}

/// Classify a node by its structural shape.
#[must_use]
pub fn classify(sel: &Selection) -> NodeKind {
    let Some(tag) = dom::tag_name(sel) else {
        return NodeKind::Other;
    };

    match tag.as_str() {
        "p" => NodeKind::Paragraph,
        "ul" => NodeKind::List,
        "pre" => NodeKind::CodeBlock,
        "div" => classify_div(sel),
        _ => NodeKind::Other,
    }
}

fn classify_div(sel: &Selection) -> NodeKind {
    if dom::has_class(sel, "heading-wrapper") {
        if let Some(level) = dom::get_attribute(sel, "data-heading-level")
            .as_deref()
            .and_then(HeadingLevel::from_attr)
        {
            return NodeKind::Heading(level);
        }
    }

    if dom::has_class(sel, "alert") {
        if dom::has_class(sel, "is-danger") {
            return NodeKind::Callout(Severity::Danger);
        }
        if dom::has_class(sel, "is-primary") {
            return NodeKind::Callout(Severity::Primary);
        }
        if dom::has_class(sel, "is-warning") {
            return NodeKind::Callout(Severity::Warning);
        }
    }

    if dom::get_attribute(sel, "data-moniker").is_some_and(|m| m.contains("experimental")) {
        return NodeKind::Experimental;
    }

    NodeKind::Other
}

/// Test whether a node is a heading wrapper at exactly the given level.
#[must_use]
pub fn is_heading(sel: &Selection, level: HeadingLevel) -> bool {
    classify(sel) == NodeKind::Heading(level)
}

/// The title text of a heading wrapper (text of the nested `hN` element).
///
/// Empty string when the nested title element is missing.
#[must_use]
pub fn heading_title(sel: &Selection, level: HeadingLevel) -> String {
    dom::text_content(&dom::query_selector(sel, level.title_tag())).to_string()
}
