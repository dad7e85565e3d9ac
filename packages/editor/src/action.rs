//! # Editor Actions
//!
//! Everything the builder UI can ask the engine to do.
//!
//! ## History semantics
//!
//! - Tree edits, selection changes and page binding commit a new history
//!   entry (and discard anything that was undone)
//! - Device, preview and live-mode flags change the document in place and
//!   are never undone
//! - Undo/redo move the history cursor without committing
//! - Loading a document starts a fresh history
//!
//! ## Wire format
//!
//! Actions arriving from outside the process are adjacently tagged JSON:
//!
//! ```json
//! { "type": "insert", "payload": { "containerId": "__body", "element": { ... } } }
//! ```
//!
//! Actions whose payload fields are all optional (`setSelectedElement`,
//! `toggleLiveMode`, `loadDocument`) may leave `payload` out or send `null`.

use crate::document::Device;
use crate::EditorError;
use pagekit_document::Element;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum EditorAction {
    /// Append an element to the end of a container's children
    #[serde(rename_all = "camelCase")]
    Insert {
        container_id: String,
        element: Element,
    },

    /// Replace the element with the same id
    Update { element: Element },

    /// Remove an element and its subtree
    #[serde(rename_all = "camelCase")]
    Delete { element_id: String },

    /// Select an element, or clear the selection with `None`
    SetSelectedElement {
        #[serde(default)]
        element: Option<Element>,
    },

    SetDevice { device: Device },

    TogglePreview,

    /// Set live mode, or flip it when no value is given
    ToggleLiveMode {
        #[serde(default)]
        value: Option<bool>,
    },

    Redo,

    Undo,

    /// Start over from the given tree (or an empty body)
    LoadDocument {
        #[serde(default)]
        elements: Option<Vec<Element>>,
        #[serde(default)]
        live: bool,
    },

    /// Attach the document to a persisted page
    #[serde(rename_all = "camelCase")]
    BindPage { page_id: String },
}

/// Discriminant of [`EditorAction`], used in errors and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Insert,
    Update,
    Delete,
    SetSelectedElement,
    SetDevice,
    TogglePreview,
    ToggleLiveMode,
    Redo,
    Undo,
    LoadDocument,
    BindPage,
}

impl ActionKind {
    /// Whether reducing this kind commits a history entry
    pub fn commits_history(self) -> bool {
        matches!(
            self,
            ActionKind::Insert
                | ActionKind::Update
                | ActionKind::Delete
                | ActionKind::SetSelectedElement
                | ActionKind::BindPage
        )
    }

    /// Whether every payload field of this kind may be omitted
    pub fn payload_optional(self) -> bool {
        matches!(
            self,
            ActionKind::SetSelectedElement | ActionKind::ToggleLiveMode | ActionKind::LoadDocument
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Insert => "insert",
            ActionKind::Update => "update",
            ActionKind::Delete => "delete",
            ActionKind::SetSelectedElement => "setSelectedElement",
            ActionKind::SetDevice => "setDevice",
            ActionKind::TogglePreview => "togglePreview",
            ActionKind::ToggleLiveMode => "toggleLiveMode",
            ActionKind::Redo => "redo",
            ActionKind::Undo => "undo",
            ActionKind::LoadDocument => "loadDocument",
            ActionKind::BindPage => "bindPage",
        }
    }
}

impl ActionKind {
    const ALL: [ActionKind; 11] = [
        ActionKind::Insert,
        ActionKind::Update,
        ActionKind::Delete,
        ActionKind::SetSelectedElement,
        ActionKind::SetDevice,
        ActionKind::TogglePreview,
        ActionKind::ToggleLiveMode,
        ActionKind::Redo,
        ActionKind::Undo,
        ActionKind::LoadDocument,
        ActionKind::BindPage,
    ];

    /// Look up a kind by its wire `type` tag
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EditorAction {
    /// Decode a wire action, rejecting payloads that do not fit their type
    pub fn from_json(source: &str) -> Result<Self, EditorError> {
        let mut value: Value = serde_json::from_str(source).map_err(EditorError::MalformedAction)?;

        if let Value::Object(fields) = &mut value {
            let optional = fields
                .get("type")
                .and_then(Value::as_str)
                .and_then(ActionKind::from_name)
                .map_or(false, ActionKind::payload_optional);
            let absent = fields.get("payload").map_or(true, Value::is_null);

            if optional && absent {
                fields.insert("payload".to_string(), Value::Object(Map::new()));
            }
        }

        serde_json::from_value(value).map_err(EditorError::MalformedAction)
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            EditorAction::Insert { .. } => ActionKind::Insert,
            EditorAction::Update { .. } => ActionKind::Update,
            EditorAction::Delete { .. } => ActionKind::Delete,
            EditorAction::SetSelectedElement { .. } => ActionKind::SetSelectedElement,
            EditorAction::SetDevice { .. } => ActionKind::SetDevice,
            EditorAction::TogglePreview => ActionKind::TogglePreview,
            EditorAction::ToggleLiveMode { .. } => ActionKind::ToggleLiveMode,
            EditorAction::Redo => ActionKind::Redo,
            EditorAction::Undo => ActionKind::Undo,
            EditorAction::LoadDocument { .. } => ActionKind::LoadDocument,
            EditorAction::BindPage { .. } => ActionKind::BindPage,
        }
    }

    pub fn insert(container_id: impl Into<String>, element: Element) -> Self {
        EditorAction::Insert {
            container_id: container_id.into(),
            element,
        }
    }

    pub fn update(element: Element) -> Self {
        EditorAction::Update { element }
    }

    pub fn delete(element_id: impl Into<String>) -> Self {
        EditorAction::Delete {
            element_id: element_id.into(),
        }
    }

    pub fn select(element: Element) -> Self {
        EditorAction::SetSelectedElement {
            element: Some(element),
        }
    }

    pub fn clear_selection() -> Self {
        EditorAction::SetSelectedElement { element: None }
    }

    pub fn bind_page(page_id: impl Into<String>) -> Self {
        EditorAction::BindPage {
            page_id: page_id.into(),
        }
    }
}
