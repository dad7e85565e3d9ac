//! # Tree Mutations
//!
//! Pure rebuilds of the element tree for the three tree-editing actions.
//!
//! ## Semantics
//!
//! ### Insert
//! - Appends to the end of the matching container's children
//! - Leaves never receive children, even when their id matches
//! - Missing container: tree returned unchanged
//! - Element whose id (or a descendant's id) is already in the tree, or
//!   that repeats an id within itself: tree returned unchanged
//!
//! ### Update
//! - Full replacement of the node with the same id
//! - Missing node: tree returned unchanged
//! - Replacement carrying an id that lives elsewhere in the tree (or twice
//!   in the replacement itself): tree returned unchanged
//! - A root must stay a container; a leaf replacement for a root is
//!   ignored
//!
//! ### Delete
//! - Removes the node and all descendants
//! - Missing node: tree returned unchanged
//!
//! Each entry point takes the action it implements and rejects any other
//! kind with [`EditorError::InvalidActionKind`].

use crate::action::{ActionKind, EditorAction};
use crate::EditorError;
use pagekit_document::{collect_ids, contains_id, find_element, Element, ElementContent};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Apply an [`EditorAction::Insert`]
pub fn add_element(elements: &[Element], action: &EditorAction) -> Result<Vec<Element>, EditorError> {
    let EditorAction::Insert { container_id, element } = action else {
        return Err(wrong_kind(ActionKind::Insert, action));
    };

    let incoming = collect_ids(std::slice::from_ref(element));
    if let Some(existing) = first_repeated(&incoming)
        .or_else(|| incoming.iter().find(|id| contains_id(elements, id)))
    {
        warn!(element_id = %existing, "Rejecting insert of an id already in the tree");
        return Ok(elements.to_vec());
    }

    if !has_container(elements, container_id) {
        debug!(container_id = %container_id, "Insert target is not a container in the tree");
    }

    Ok(insert_into(elements, container_id, element))
}

/// Apply an [`EditorAction::Update`]
pub fn update_element(elements: &[Element], action: &EditorAction) -> Result<Vec<Element>, EditorError> {
    let EditorAction::Update { element } = action else {
        return Err(wrong_kind(ActionKind::Update, action));
    };

    let Some(target) = find_element(elements, &element.id) else {
        debug!(element_id = %element.id, "Update target not found");
        return Ok(elements.to_vec());
    };

    if !element.is_container() && elements.iter().any(|root| root.id == element.id) {
        warn!(element_id = %element.id, "Rejecting update that turns a root into a leaf");
        return Ok(elements.to_vec());
    }

    // Ids under the replaced node are free to reappear in the replacement
    let replaced: HashSet<String> = collect_ids(std::slice::from_ref(target)).into_iter().collect();
    let incoming = collect_ids(std::slice::from_ref(element));
    if let Some(existing) = first_repeated(&incoming).or_else(|| {
        incoming
            .iter()
            .find(|id| !replaced.contains(*id) && contains_id(elements, id))
    }) {
        warn!(
            element_id = %element.id,
            duplicate_id = %existing,
            "Rejecting update that duplicates an id already in the tree"
        );
        return Ok(elements.to_vec());
    }

    Ok(replace_in(elements, element))
}

/// Apply an [`EditorAction::Delete`]
pub fn delete_element(elements: &[Element], action: &EditorAction) -> Result<Vec<Element>, EditorError> {
    let EditorAction::Delete { element_id } = action else {
        return Err(wrong_kind(ActionKind::Delete, action));
    };

    if !contains_id(elements, element_id) {
        debug!(element_id = %element_id, "Delete target not found");
    }

    Ok(remove_from(elements, element_id))
}

fn wrong_kind(expected: ActionKind, action: &EditorAction) -> EditorError {
    EditorError::InvalidActionKind {
        expected,
        found: action.kind(),
    }
}

fn first_repeated(ids: &[String]) -> Option<&String> {
    let mut seen = HashSet::new();
    ids.iter().find(|id| !seen.insert(id.as_str()))
}

fn has_container(elements: &[Element], id: &str) -> bool {
    elements.iter().any(|element| match &element.content {
        ElementContent::Children(children) => element.id == id || has_container(children, id),
        ElementContent::Leaf(_) => false,
    })
}

fn insert_into(elements: &[Element], container_id: &str, new_element: &Element) -> Vec<Element> {
    elements
        .iter()
        .map(|element| match &element.content {
            ElementContent::Children(children) if element.id == container_id => {
                let mut children = children.clone();
                children.push(new_element.clone());
                Element {
                    content: ElementContent::Children(children),
                    ..element.clone()
                }
            }
            ElementContent::Children(children) => Element {
                content: ElementContent::Children(insert_into(children, container_id, new_element)),
                ..element.clone()
            },
            ElementContent::Leaf(_) => element.clone(),
        })
        .collect()
}

fn replace_in(elements: &[Element], updated: &Element) -> Vec<Element> {
    elements
        .iter()
        .map(|element| {
            if element.id == updated.id {
                return updated.clone();
            }
            match &element.content {
                ElementContent::Children(children) => Element {
                    content: ElementContent::Children(replace_in(children, updated)),
                    ..element.clone()
                },
                ElementContent::Leaf(_) => element.clone(),
            }
        })
        .collect()
}

fn remove_from(elements: &[Element], target_id: &str) -> Vec<Element> {
    elements
        .iter()
        .filter(|element| element.id != target_id)
        .map(|element| match &element.content {
            ElementContent::Children(children) => Element {
                content: ElementContent::Children(remove_from(children, target_id)),
                ..element.clone()
            },
            ElementContent::Leaf(_) => element.clone(),
        })
        .collect()
}
