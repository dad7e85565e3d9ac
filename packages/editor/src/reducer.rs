//! # Action Reducer
//!
//! `reduce(state, action) -> state'`: the only place editor state changes.
//!
//! `reduce` is pure. It reads the current state, builds the next one and
//! returns it; the input is never touched, so a failed action leaves the
//! caller's state exactly as it was.
//!
//! `reduce_in_place` applies the same transition to a state the caller owns,
//! without copying the history. Every fallible step runs before the state is
//! written, so an error still leaves the state untouched.

use crate::action::EditorAction;
use crate::config::EditorConfig;
use crate::document::EditorDocument;
use crate::history::HistoryLog;
use crate::mutations::{add_element, delete_element, update_element};
use crate::EditorError;
use pagekit_document::{default_tree, validate_tree};
use tracing::{debug, info};

/// Working document plus its undo/redo log
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    document: EditorDocument,

    history: HistoryLog,

    config: EditorConfig,
}

impl EditorState {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let document = EditorDocument {
            device: config.default_device,
            ..EditorDocument::new()
        };
        let history = HistoryLog::with_max_entries(document.clone(), config.history_limit);

        Self {
            document,
            history,
            config,
        }
    }

    /// Working document, including uncommitted flag changes
    pub fn document(&self) -> &EditorDocument {
        &self.document
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Snapshot the working document as a new history entry
    fn commit(&mut self) {
        self.history.push(self.document.clone());
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the state that results from applying `action` to `state`
pub fn reduce(state: &EditorState, action: &EditorAction) -> Result<EditorState, EditorError> {
    let mut next = state.clone();
    reduce_in_place(&mut next, action)?;
    Ok(next)
}

/// Apply `action` to `state` directly
///
/// On error `state` is left exactly as it was.
pub fn reduce_in_place(state: &mut EditorState, action: &EditorAction) -> Result<(), EditorError> {
    debug!(
        action = %action.kind(),
        cursor = state.history.cursor(),
        entries = state.history.len(),
        "Reducing editor action"
    );

    match action {
        EditorAction::Insert { .. } => {
            state.document.elements = add_element(&state.document.elements, action)?;
            state.commit();
        }

        EditorAction::Update { element } => {
            state.document.elements = update_element(&state.document.elements, action)?;
            let selected = state.document.selected_id() == Some(element.id.as_str());
            state.document.selected_element = selected.then(|| element.clone());
            state.commit();
        }

        EditorAction::Delete { .. } => {
            state.document.elements = delete_element(&state.document.elements, action)?;
            state.document.selected_element = None;
            state.commit();
        }

        EditorAction::SetSelectedElement { element } => {
            state.document.selected_element = element.clone();
            state.commit();
        }

        EditorAction::SetDevice { device } => {
            state.document.device = *device;
        }

        EditorAction::TogglePreview => {
            state.document.preview_mode = !state.document.preview_mode;
        }

        EditorAction::ToggleLiveMode { value } => {
            state.document.live_mode = value.unwrap_or(!state.document.live_mode);
        }

        EditorAction::Redo => {
            if let Some(snapshot) = state.history.redo() {
                state.document = snapshot.clone();
            }
        }

        EditorAction::Undo => {
            if let Some(snapshot) = state.history.undo() {
                state.document = snapshot.clone();
            }
        }

        EditorAction::LoadDocument { elements, live } => {
            info!(live = *live, seeded = elements.is_some(), "Loading document");
            let elements = match elements {
                Some(elements) => {
                    validate_tree(elements)?;
                    elements.clone()
                }
                None => default_tree(),
            };
            state.document = EditorDocument {
                device: state.config.default_device,
                live_mode: *live,
                ..EditorDocument::with_elements(elements)
            };
            state.history.reset(state.document.clone());
        }

        EditorAction::BindPage { page_id } => {
            state.document.page_id = page_id.clone();
            state.commit();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Device;
    use pagekit_document::{find_element, Element, ElementKind};

    fn text(id: &str) -> Element {
        Element::leaf(id, "Text", ElementKind::Text)
    }

    #[test]
    fn test_insert_commits_history() {
        let state = EditorState::new();
        let next = reduce(&state, &EditorAction::insert("__body", text("a"))).unwrap();

        assert!(find_element(&next.document.elements, "a").is_some());
        assert_eq!(next.history.len(), 2);
        assert_eq!(next.history.cursor(), 1);
        assert_eq!(next.history.current(), &next.document);

        // Input state untouched
        assert_eq!(state, EditorState::new());
    }

    #[test]
    fn test_update_refreshes_selected_element() {
        let state = reduce(&EditorState::new(), &EditorAction::insert("__body", text("a"))).unwrap();
        let state = reduce(&state, &EditorAction::select(text("a"))).unwrap();

        let renamed = Element {
            name: "Title".to_string(),
            ..text("a")
        };
        let next = reduce(&state, &EditorAction::update(renamed.clone())).unwrap();

        assert_eq!(next.document.selected_element, Some(renamed));
    }

    #[test]
    fn test_update_of_other_element_clears_selection() {
        let state = reduce(&EditorState::new(), &EditorAction::insert("__body", text("a"))).unwrap();
        let state = reduce(&state, &EditorAction::insert("__body", text("b"))).unwrap();
        let state = reduce(&state, &EditorAction::select(text("a"))).unwrap();

        let next = reduce(&state, &EditorAction::update(text("b").with_style("color", "red"))).unwrap();

        assert!(next.document.selected_element.is_none());
    }

    #[test]
    fn test_delete_clears_selection() {
        let state = reduce(&EditorState::new(), &EditorAction::insert("__body", text("a"))).unwrap();
        let state = reduce(&state, &EditorAction::select(text("a"))).unwrap();

        let next = reduce(&state, &EditorAction::delete("a")).unwrap();

        assert!(next.document.selected_element.is_none());
        assert!(find_element(&next.document.elements, "a").is_none());
    }

    #[test]
    fn test_selection_commits_history() {
        let next = reduce(&EditorState::new(), &EditorAction::select(Element::body())).unwrap();
        assert_eq!(next.history.len(), 2);
        assert_eq!(next.history.current().selected_id(), Some("__body"));

        let cleared = reduce(&next, &EditorAction::clear_selection()).unwrap();
        assert_eq!(cleared.history.len(), 3);
        assert!(cleared.document.selected_element.is_none());
    }

    #[test]
    fn test_flags_do_not_commit() {
        let state = EditorState::new();
        let state = reduce(&state, &EditorAction::SetDevice { device: Device::Mobile }).unwrap();
        let state = reduce(&state, &EditorAction::TogglePreview).unwrap();
        let state = reduce(&state, &EditorAction::ToggleLiveMode { value: None }).unwrap();

        assert_eq!(state.document.device, Device::Mobile);
        assert!(state.document.preview_mode);
        assert!(state.document.live_mode);
        assert_eq!(state.history.len(), 1);

        let state = reduce(&state, &EditorAction::ToggleLiveMode { value: Some(true) }).unwrap();
        assert!(state.document.live_mode);
        let state = reduce(&state, &EditorAction::ToggleLiveMode { value: None }).unwrap();
        assert!(!state.document.live_mode);
    }

    #[test]
    fn test_load_document_resets_history() {
        let state = reduce(&EditorState::new(), &EditorAction::insert("__body", text("a"))).unwrap();
        let tree = vec![Element::body().with_children(vec![text("loaded")])];

        let next = reduce(
            &state,
            &EditorAction::LoadDocument {
                elements: Some(tree.clone()),
                live: true,
            },
        )
        .unwrap();

        assert_eq!(next.document.elements, tree);
        assert!(next.document.live_mode);
        assert_eq!(next.history.len(), 1);
        assert_eq!(next.history.cursor(), 0);
        assert_eq!(next.history.current(), &next.document);
    }

    #[test]
    fn test_load_document_without_tree_uses_empty_body() {
        let state = reduce(&EditorState::new(), &EditorAction::insert("__body", text("a"))).unwrap();
        let next = reduce(&state, &EditorAction::LoadDocument { elements: None, live: false }).unwrap();

        assert_eq!(next.document.elements, default_tree());
    }

    #[test]
    fn test_config_applies_to_fresh_and_loaded_documents() {
        let config = EditorConfig {
            history_limit: 2,
            default_device: Device::Tablet,
        };
        let state = EditorState::with_config(config);
        assert_eq!(state.document.device, Device::Tablet);

        let state = reduce(&state, &EditorAction::SetDevice { device: Device::Desktop }).unwrap();
        let state = reduce(&state, &EditorAction::LoadDocument { elements: None, live: false }).unwrap();
        assert_eq!(state.document.device, Device::Tablet);

        let state = reduce(&state, &EditorAction::insert("__body", text("a"))).unwrap();
        let state = reduce(&state, &EditorAction::insert("__body", text("b"))).unwrap();
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn test_load_document_rejects_broken_tree() {
        let state = reduce(&EditorState::new(), &EditorAction::insert("__body", text("a"))).unwrap();
        let broken = vec![Element::body().with_children(vec![text("x"), text("x")])];

        let result = reduce(
            &state,
            &EditorAction::LoadDocument {
                elements: Some(broken),
                live: false,
            },
        );
        assert!(matches!(result, Err(EditorError::Document(_))));

        let two_roots = vec![Element::body(), Element::body()];
        let mut in_place = state.clone();
        let result = reduce_in_place(
            &mut in_place,
            &EditorAction::LoadDocument {
                elements: Some(two_roots),
                live: false,
            },
        );
        assert!(result.is_err());
        assert_eq!(in_place, state);
    }

    #[test]
    fn test_in_place_matches_pure_reduce() {
        let actions = vec![
            EditorAction::insert("__body", text("a")),
            EditorAction::select(text("a")),
            EditorAction::TogglePreview,
            EditorAction::Undo,
            EditorAction::delete("a"),
            EditorAction::Undo,
            EditorAction::Redo,
        ];

        let mut pure = EditorState::new();
        let mut in_place = EditorState::new();
        for action in &actions {
            pure = reduce(&pure, action).unwrap();
            reduce_in_place(&mut in_place, action).unwrap();
            assert_eq!(in_place, pure);
        }
    }

    #[test]
    fn test_bind_page_commits_history() {
        let next = reduce(&EditorState::new(), &EditorAction::bind_page("page-1")).unwrap();
        assert_eq!(next.document.page_id, "page-1");
        assert_eq!(next.history.len(), 2);
    }
}
