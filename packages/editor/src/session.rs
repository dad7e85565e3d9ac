//! # Edit Session Management
//!
//! An EditorSession is one caller-owned editing session of one funnel
//! page: the reducer state, the context the builder was opened with, and
//! the listeners that re-render when the state changes.
//!
//! Sessions are independent values. Two tabs editing two pages hold two
//! sessions; nothing is shared between them.

use crate::action::EditorAction;
use crate::config::EditorConfig;
use crate::document::EditorDocument;
use crate::reducer::{reduce_in_place, EditorState};
use crate::EditorError;
use pagekit_document::{parse_elements, to_json, validate_tree};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Persisted funnel page, as handed over by the surrounding application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelPage {
    pub id: String,
    pub name: String,
    pub path_name: String,
    #[serde(default)]
    pub visits: u64,
    /// Serialized element tree; `None` for a page never saved from the editor
    #[serde(default)]
    pub content: Option<String>,
    pub order: u32,
    #[serde(default)]
    pub preview_image: Option<String>,
    pub funnel_id: String,
}

/// What the builder was opened on
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionContext {
    pub subaccount_id: String,
    pub funnel_id: String,
    pub page_details: Option<FunnelPage>,
    /// Open the page in live mode (published view, no editor chrome)
    pub live: bool,
}

/// Handle returned by [`EditorSession::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&EditorState)>;

pub struct EditorSession {
    context: SessionContext,

    state: EditorState,

    listeners: Vec<(SubscriptionId, Listener)>,

    next_subscription: u64,
}

impl EditorSession {
    /// Create a session on an empty body, ignoring any page in the context
    pub fn new(context: SessionContext) -> Self {
        Self::with_config(context, EditorConfig::default())
    }

    pub fn with_config(context: SessionContext, config: EditorConfig) -> Self {
        Self {
            context,
            state: EditorState::with_config(config),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a session and rehydrate the page from the context
    ///
    /// Loads the page's stored tree (or an empty body when the page has no
    /// content yet) and binds the document to the page id.
    pub fn open(context: SessionContext, config: EditorConfig) -> Result<Self, EditorError> {
        let mut session = Self::with_config(context, config);
        let live = session.context.live;

        let Some(page) = session.context.page_details.clone() else {
            session.dispatch(EditorAction::LoadDocument { elements: None, live })?;
            return Ok(session);
        };

        let elements = match page.content.as_deref().map(str::trim) {
            Some(content) if !content.is_empty() => {
                let elements = parse_elements(content)?;
                validate_tree(&elements)?;
                Some(elements)
            }
            _ => None,
        };

        info!(
            page_id = %page.id,
            funnel_id = %session.context.funnel_id,
            subaccount_id = %session.context.subaccount_id,
            has_content = elements.is_some(),
            live,
            "Opening page in editor"
        );

        session.dispatch(EditorAction::LoadDocument { elements, live })?;
        session.dispatch(EditorAction::bind_page(page.id))?;

        Ok(session)
    }

    /// Apply an action and notify listeners
    ///
    /// On error the state is left exactly as it was and no listener runs.
    pub fn dispatch(&mut self, action: EditorAction) -> Result<&EditorState, EditorError> {
        reduce_in_place(&mut self.state, &action)?;

        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }

        Ok(&self.state)
    }

    /// Decode a wire action and dispatch it
    pub fn dispatch_json(&mut self, source: &str) -> Result<&EditorState, EditorError> {
        let action = EditorAction::from_json(source)?;
        self.dispatch(action)
    }

    /// Register a callback run after every successful dispatch
    pub fn subscribe(&mut self, listener: impl FnMut(&EditorState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn document(&self) -> &EditorDocument {
        self.state.document()
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn can_undo(&self) -> bool {
        self.state.history().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.history().can_redo()
    }

    /// Serialize the current tree for saving back to the page record
    pub fn page_content(&self) -> Result<String, EditorError> {
        Ok(to_json(&self.state.document().elements)?)
    }
}
