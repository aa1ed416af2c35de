//! Page access.
//!
//! `Page` owns the parsed document and exposes the handful of lookups the
//! assemblers need: the content root, the page title, and the lead paragraph.
//! The tree is read-only for the lifetime of the page.

use crate::dom::{self, Document, Selection};
use crate::encoding;
use crate::error::{Error, Result};
use crate::patterns::CONTENT_SELECTOR;

/// A parsed reference page.
pub struct Page {
    doc: Document,
}

impl Page {
    /// Parse a page from an HTML string.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self { doc: dom::parse(html) }
    }

    /// Parse a page from raw bytes, sniffing the charset from meta tags.
    #[must_use]
    pub fn from_bytes(html: &[u8]) -> Self {
        Self::parse(&encoding::transcode_to_utf8(html))
    }

    /// The `div.content` root every page element lives under.
    #[must_use]
    pub fn content(&self) -> Selection<'_> {
        self.doc.select(CONTENT_SELECTOR)
    }

    /// The page title, from the `h1` inside the content root.
    pub fn title(&self) -> Result<String> {
        let h1 = dom::query_selector(&self.content(), "h1");
        if h1.exists() {
            Ok(dom::text_content(&h1).to_string())
        } else {
            Err(Error::MissingNode("content h1"))
        }
    }

    /// The first paragraph inside the content root, untrimmed.
    pub fn lead_paragraph(&self) -> Result<String> {
        let p = dom::query_selector(&self.content(), "p");
        if p.exists() {
            Ok(dom::text_content(&p).to_string())
        } else {
            Err(Error::MissingNode("lead paragraph"))
        }
    }
}
