//! Read-only lookups and integrity checks over element trees

use crate::element::Element;
use crate::error::{DocumentError, DocumentResult};
use crate::visitor::{walk_elements, IdCollector};
use std::collections::HashSet;

/// Find an element anywhere in the tree by id
pub fn find_element<'a>(elements: &'a [Element], id: &str) -> Option<&'a Element> {
    for element in elements {
        if element.id == id {
            return Some(element);
        }
        if let Some(found) = element.children().and_then(|children| find_element(children, id)) {
            return Some(found);
        }
    }
    None
}

pub fn contains_id(elements: &[Element], id: &str) -> bool {
    find_element(elements, id).is_some()
}

/// All ids in depth-first order
pub fn collect_ids(elements: &[Element]) -> Vec<String> {
    let mut collector = IdCollector::default();
    walk_elements(&mut collector, elements);
    collector.ids
}

/// Check the structural invariants of a page tree
///
/// A valid tree has exactly one root, the root is a container, and every
/// id is non-empty and unique.
pub fn validate_tree(elements: &[Element]) -> DocumentResult<()> {
    let root = match elements {
        [] => return Err(DocumentError::MissingRoot),
        [root] => root,
        _ => return Err(DocumentError::MultipleRoots(elements.len())),
    };

    if !root.is_container() {
        return Err(DocumentError::RootNotContainer(root.id.clone()));
    }

    let mut seen = HashSet::new();
    for id in collect_ids(elements) {
        if id.is_empty() {
            return Err(DocumentError::EmptyId);
        }
        if !seen.insert(id.clone()) {
            return Err(DocumentError::DuplicateId(id));
        }
    }

    Ok(())
}
