//! Record types for extraction output.
//!
//! One struct per entity kind recognized on a reference page. Every record is
//! built fresh per request and serializes to the JSON shape the host
//! application consumes.

use serde::{Deserialize, Serialize};

/// A named property of a class or interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name, from its level-3 heading.
    pub name: String,

    /// Normalized text of the paragraphs and warning callouts under the
    /// heading, in document order.
    pub description: String,
}

/// A function or method, with its ordered parameter list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// Function name, from its level-3 heading.
    pub name: String,

    /// Paragraphs, inline list items, the "Returns" block and alert callouts,
    /// concatenated in document order and normalized.
    pub description: String,

    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
}

/// One function parameter.
///
/// `description` is always present, defaulting to the empty string when the
/// source list item carries no secondary paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub description: String,
}

/// A named constant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,

    /// Paragraph text only, newline-joined.
    pub description: String,
}

/// A named object exposed by the page's "Objects" section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDoc {
    pub name: String,

    /// Paragraph text only, newline-joined.
    pub description: String,
}

/// A code example, unique per (name, code) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    /// Example name, from its level-5 heading.
    pub code_name: String,

    /// Normalized text of the first code block following the heading.
    pub code: String,
}

/// A parsed enum page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDoc {
    pub name: String,
    pub description: String,
    pub constants: Vec<Constant>,
}

/// A parsed interface page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDoc {
    pub name: String,
    pub description: String,
    pub properties: Vec<Property>,
    pub examples: Vec<Example>,
}

/// A parsed class page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDoc {
    pub name: String,

    /// Lead paragraph, or a visible danger callout joined with its trailing
    /// paragraph; "Extends" sections append a trailing sentence.
    pub description: String,

    pub properties: Vec<Property>,
    pub methods: Vec<Function>,
    pub constants: Vec<Constant>,
    pub examples: Vec<Example>,
}
