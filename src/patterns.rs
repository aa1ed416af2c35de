//! Compiled regex patterns and CSS selectors for page extraction.
//!
//! All patterns are compiled once at startup using `LazyLock`. The selector
//! constants describe the fixed layout convention of the reference pages:
//! one `div.content` root, heading wrappers tagged with a `data-heading-level`
//! attribute, alert callouts, and `pre` code blocks.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Page Layout Selectors
// =============================================================================

/// The single container holding every rendered page element.
pub const CONTENT_SELECTOR: &str = "div.content";

/// Heading wrappers by level. Structure on these pages is flat: wrappers and
/// body elements are siblings, nesting is implied by the level attribute only.
pub const H2_WRAPPER: &str = r#"div.heading-wrapper[data-heading-level="h2"]"#;
pub const H3_WRAPPER: &str = r#"div.heading-wrapper[data-heading-level="h3"]"#;
pub const H4_WRAPPER: &str = r#"div.heading-wrapper[data-heading-level="h4"]"#;
pub const H5_WRAPPER: &str = r#"div.heading-wrapper[data-heading-level="h5"]"#;

/// Danger callout, the variant that can replace a lead paragraph.
pub const DANGER_ALERT: &str = "div.alert.is-danger";

/// Marker wrapping entries that only exist in experimental builds.
pub const EXPERIMENTAL_MARKER: &str = r#"div[data-moniker*="experimental"]"#;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches a blank (possibly whitespace-filled) line between two newlines.
pub static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("BLANK_LINES regex"));
