//! Request dispatch.
//!
//! The host application drives extraction through one message shape:
//! `{ "action": <name> }` in, `{ "data": <record|records|null> }` out. Each
//! request is handled synchronously against a parsed page and returns exactly
//! one payload. Unrecognized actions answer with null data rather than an
//! error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::assemble;
use crate::dom::Selection;
use crate::error::{Error, Result};
use crate::extractor::{self, constants, examples, functions, objects, properties};
use crate::page::Page;

/// The actions a request can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ParseEnum,
    ParseClass,
    ParseInterface,
    ParseObject,
    ParseConstant,
    ParseProperty,
    ParseFunction,
    ParseExample,
}

impl Action {
    /// Resolve a wire action name. Unknown names are `None`, not an error.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "parseEnum" => Some(Self::ParseEnum),
            "parseClass" => Some(Self::ParseClass),
            "parseInterface" => Some(Self::ParseInterface),
            "parseObject" => Some(Self::ParseObject),
            "parseConstant" => Some(Self::ParseConstant),
            "parseProperty" => Some(Self::ParseProperty),
            "parseFunction" => Some(Self::ParseFunction),
            "parseExample" => Some(Self::ParseExample),
            _ => None,
        }
    }
}

/// An incoming extraction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub action: String,
}

/// The response payload: one record, an array of records, or null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub data: Value,
}

/// Handle one request against a parsed page.
pub fn handle_request(page: &Page, request: &Request) -> Result<Response> {
    let Some(action) = Action::from_name(&request.action) else {
        tracing::debug!(action = %request.action, "unrecognized action");
        return Ok(Response { data: Value::Null });
    };

    let data = match action {
        Action::ParseEnum => serde_json::to_value(assemble::parse_enum(page)?)?,
        Action::ParseClass => serde_json::to_value(assemble::parse_class(page)?)?,
        Action::ParseInterface => serde_json::to_value(assemble::parse_interface(page)?)?,
        Action::ParseObject => serde_json::to_value(objects::parse(page))?,
        Action::ParseConstant => {
            serde_json::to_value(constants::parse(&titled_section(page, "Constants")?))?
        }
        Action::ParseProperty => {
            serde_json::to_value(properties::parse(&titled_section(page, "Properties")?))?
        }
        Action::ParseFunction => {
            serde_json::to_value(functions::parse(&titled_section(page, "Methods")?))?
        }
        Action::ParseExample => serde_json::to_value(examples::parse(page))?,
    };

    Ok(Response { data })
}

fn titled_section<'a>(page: &'a Page, title: &str) -> Result<Selection<'a>> {
    extractor::find_section_by_title(page, title)
        .ok_or_else(|| Error::MissingSection(title.to_string()))
}
