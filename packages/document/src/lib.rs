//! # Pagekit Document
//!
//! Element tree model for the funnel page builder.
//!
//! A page is a tree of [`Element`]s anchored at a single `__body`
//! container. Each element is either a container (ordered children) or a
//! leaf (opaque payload such as a link target). Trees are persisted by the
//! surrounding application as the JSON `content` of a page record;
//! [`parse_elements`] and [`to_json`] convert between the two.

pub mod element;
pub mod error;
pub mod query;
pub mod visitor;

pub use element::{Element, ElementContent, ElementKind, LeafContent, Styles, BODY_ID};
pub use error::{DocumentError, DocumentResult};
pub use query::{collect_ids, contains_id, find_element, validate_tree};
pub use visitor::{walk_element, walk_elements, IdCollector, TreeStats, Visitor};

/// The tree of a fresh page: a single empty body
pub fn default_tree() -> Vec<Element> {
    vec![Element::body()]
}

/// Parse persisted page content into an element tree
pub fn parse_elements(source: &str) -> DocumentResult<Vec<Element>> {
    Ok(serde_json::from_str(source)?)
}

/// Serialize an element tree to page content
pub fn to_json(elements: &[Element]) -> DocumentResult<String> {
    Ok(serde_json::to_string(elements)?)
}
