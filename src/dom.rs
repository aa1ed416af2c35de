//! DOM operations adapter.
//!
//! Thin read-only layer over the `dom_query` crate. All tree access in this
//! crate goes through these helpers so the extraction logic never touches
//! `dom_query` navigation primitives directly. The page tree is never mutated.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Node information ===

/// Get tag name (lowercase) of the first node in the selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists.
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Check whether the element's class attribute contains the given token.
///
/// Token comparison, not substring: `has_class(sel, "alert")` does not match
/// `class="alerts"`.
#[must_use]
pub fn has_class(sel: &Selection, token: &str) -> bool {
    get_attribute(sel, "class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == token))
}

// === Text content ===

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Tree navigation ===

/// Get parent element.
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Get next element sibling (skipping text nodes).
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

/// Get previous element sibling (skipping text nodes).
#[must_use]
pub fn previous_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.prev_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.prev_sibling();
        }
        None
    })
}

// === Querying ===

/// Query single element by CSS selector (first match in document order).
#[inline]
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select_single(selector)
}

/// Query all elements by CSS selector.
#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}

/// Split a selection into one `Selection` per matched node, document order.
#[must_use]
pub fn each<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

// === Visibility ===

/// Test whether an element would render with a non-zero size.
///
/// A static tree has no layout, so this checks the conditions that collapse
/// an element in the source pages: a `hidden` attribute or an inline
/// `display:none` / `visibility:hidden` style, on the element or any
/// ancestor.
#[must_use]
pub fn is_visible(sel: &Selection) -> bool {
    if element_hidden(sel) {
        return false;
    }

    let mut ancestor = parent(sel);
    while ancestor.exists() {
        if element_hidden(&ancestor) {
            return false;
        }
        ancestor = parent(&ancestor);
    }

    true
}

fn element_hidden(sel: &Selection) -> bool {
    if has_attribute(sel, "hidden") {
        return true;
    }
    if let Some(style) = get_attribute(sel, "style") {
        let style: String = style.chars().filter(|c| !c.is_whitespace()).collect();
        return style.contains("display:none") || style.contains("visibility:hidden");
    }
    false
}
