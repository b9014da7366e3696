//! Thin adapter over `dom_query`.
//!
//! Only the primitives the pipelines actually exercise live here: parsing,
//! text and attribute access, and the direct-child walks the positional
//! locators are built on. Anything selector-shaped belongs in [`crate::locate`].

pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// All text content of the first matched node and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Attribute value of the first matched node.
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Tag name (lowercase) of the first matched node.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Direct element children of the first matched node, in document order.
///
/// Text and comment nodes are skipped. This is the primitive behind every
/// "nth direct child" locator, where a descendant CSS query would leak
/// matches out of nested tables.
#[must_use]
pub fn element_children<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    let mut children = Vec::new();
    if let Some(node) = sel.nodes().first() {
        for child in node.children() {
            if child.is_element() {
                children.push(Selection::from(child));
            }
        }
    }
    children
}

/// First direct element child, if any.
#[must_use]
pub fn first_element_child<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    if let Some(node) = sel.nodes().first() {
        for child in node.children() {
            if child.is_element() {
                return Some(Selection::from(child));
            }
        }
    }
    None
}

/// Direct `td` children of a table row.
///
/// Mirrors the row's `cells` collection: nested tables inside a cell do not
/// contribute.
#[must_use]
pub fn cells<'a>(row: &Selection<'a>) -> Vec<Selection<'a>> {
    element_children(row)
        .into_iter()
        .filter(|cell| tag_name(cell).as_deref() == Some("td"))
        .collect()
}
