//! # apiref-extract
//!
//! Structured record extraction for rendered API reference pages.
//!
//! The pages this crate reads express their structure as a flat sequence of
//! heading wrappers and content elements inside one `div.content` container;
//! nesting is implied by heading levels and sibling order alone. The crate
//! recovers that hierarchy and extracts typed records: class, interface and
//! enum descriptions, properties, functions with parameters, constants,
//! objects, and code examples.
//!
//! ## Quick Start
//!
//! ```rust
//! use apiref_extract::{handle_request, Page, Request};
//!
//! let html = r#"<div class="content">
//!   <h1>Season</h1>
//!   <p>Named seasons.</p>
//!   <div class="heading-wrapper" data-heading-level="h2"><h2>Constants</h2></div>
//!   <div class="heading-wrapper" data-heading-level="h3"><h3>Summer</h3></div>
//!   <p>The warm one.</p>
//! </div>"#;
//!
//! let page = Page::parse(html);
//! let response = handle_request(&page, &Request { action: "parseEnum".to_string() })?;
//! assert_eq!(response.data["name"], "Season");
//! assert_eq!(response.data["constants"][0]["name"], "Summer");
//! # Ok::<(), apiref_extract::Error>(())
//! ```
//!
//! Requests are handled synchronously, one payload per request, against a
//! read-only page; the crate keeps no state between requests.

mod assemble;
mod dispatch;
mod error;
mod page;
mod record;
mod text;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection for byte input.
pub mod encoding;

/// Per-entity-kind field extractors.
pub mod extractor;

/// Structural node classification.
pub mod node;

/// Compiled patterns and layout selectors.
pub mod patterns;

/// Section segmentation primitives.
pub mod segment;

// Public API - re-exports
pub use assemble::{parse_class, parse_enum, parse_interface};
pub use dispatch::{handle_request, Action, Request, Response};
pub use error::{Error, Result};
pub use page::Page;
pub use record::{
    ClassDoc, Constant, EnumDoc, Example, Function, InterfaceDoc, ObjectDoc, Parameter, Property,
};
