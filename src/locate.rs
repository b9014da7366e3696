//! Field Locator: structural queries that fail loudly.
//!
//! The source markup exposes no stable identifiers for most fields, so every
//! locator works by position and class pattern. The contract throughout: a
//! query either yields the expected shape or fails with
//! [`Error::StructureNotFound`] naming the missing anchor; locators never
//! silently fall back to wrong-shaped data.

use dom_query::{Document, Selection};

use crate::dom;
use crate::error::{Error, Result};

/// First element matching `selector` under `root`, in document order.
pub fn require<'a>(root: &Selection<'a>, selector: &str, anchor: &str) -> Result<Selection<'a>> {
    let matched = root.select(selector);
    match matched.nodes().first() {
        Some(node) => Ok(Selection::from(*node)),
        None => Err(Error::StructureNotFound(anchor.to_string())),
    }
}

/// First element matching `selector` anywhere in the document.
pub fn require_doc<'a>(doc: &'a Document, selector: &str, anchor: &str) -> Result<Selection<'a>> {
    let matched = doc.select(selector);
    match matched.nodes().first() {
        Some(node) => Ok(Selection::from(*node)),
        None => Err(Error::StructureNotFound(anchor.to_string())),
    }
}

/// All elements matching `selector` under `root`, in document order.
#[must_use]
pub fn collect<'a>(root: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    root.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// All elements matching `selector` anywhere in the document.
#[must_use]
pub fn collect_doc<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// A required attribute of an already-located element.
pub fn require_attr(sel: &Selection, name: &str, anchor: &str) -> Result<String> {
    dom::attr(sel, name).ok_or_else(|| Error::StructureNotFound(format!("{anchor} [{name}]")))
}

/// Ordered destructuring of a fixed-arity element list.
///
/// Fewer elements than `N` is a structural failure; surplus trailing
/// elements are ignored, matching how the upstream layouts pad their tables.
pub fn fixed<'a, const N: usize>(
    mut items: Vec<Selection<'a>>,
    anchor: &str,
) -> Result<[Selection<'a>; N]> {
    if items.len() < N {
        return Err(Error::StructureNotFound(format!(
            "{anchor}: expected {N} elements, found {}",
            items.len()
        )));
    }
    items.truncate(N);
    items
        .try_into()
        .map_err(|_| Error::StructureNotFound(anchor.to_string()))
}

/// Data cells of a table's own `tr[class*=row]` rows, flattened in document
/// order.
///
/// Walks the table's direct body only: rows of tables nested inside a cell
/// are not included, which a descendant CSS query could not guarantee.
pub fn direct_row_cells<'a>(table: &Selection<'a>, anchor: &str) -> Result<Vec<Selection<'a>>> {
    let tbody = dom::element_children(table)
        .into_iter()
        .find(|child| dom::tag_name(child).as_deref() == Some("tbody"))
        .ok_or_else(|| Error::StructureNotFound(format!("{anchor}: table body")))?;

    let mut all_cells = Vec::new();
    for row in dom::element_children(&tbody) {
        if dom::tag_name(&row).as_deref() != Some("tr") {
            continue;
        }
        if !dom::attr(&row, "class").is_some_and(|class| class.contains("row")) {
            continue;
        }
        all_cells.extend(dom::cells(&row));
    }
    Ok(all_cells)
}
