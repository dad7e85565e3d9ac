//! # Pagekit Editor
//!
//! Document editing engine for the funnel page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ builder UI: drag, drop, settings panel      │
//! └─────────────────────────────────────────────┘
//!                     ↓ EditorAction
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorSession                       │
//! │  - reduce(state, action) → state'           │
//! │  - pure tree mutations (insert/update/del)  │
//! │  - linear undo/redo history of snapshots    │
//! │  - listeners notified after each dispatch   │
//! └─────────────────────────────────────────────┘
//!                     ↓ page content (JSON)
//! ┌─────────────────────────────────────────────┐
//! │ application: persistence, rendering         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Pure reducer**: every state change goes through `reduce` (or its
//!    in-place twin used by sessions), and a failed action changes nothing
//! 2. **Snapshots, not inverses**: history stores whole documents, so
//!    undo/redo are cursor moves
//! 3. **Caller-owned sessions**: no global state; each editing session is
//!    a value
//! 4. **Silent no-ops**: edits aimed at ids that no longer exist change
//!    nothing and raise nothing
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagekit_editor::{EditorAction, EditorSession, SessionContext};
//! use pagekit_document::{Element, ElementKind};
//!
//! let mut session = EditorSession::new(SessionContext::default());
//!
//! session.dispatch(EditorAction::insert(
//!     "__body",
//!     Element::leaf("headline", "Text", ElementKind::Text),
//! ))?;
//! session.dispatch(EditorAction::Undo)?;
//!
//! // Save
//! let content = session.page_content()?;
//! ```

mod action;
mod config;
mod document;
mod errors;
mod history;
mod mutations;
mod reducer;
mod session;

pub use action::{ActionKind, EditorAction};
pub use config::{EditorConfig, DEFAULT_CONFIG_NAME};
pub use document::{Device, EditorDocument};
pub use errors::EditorError;
pub use history::HistoryLog;
pub use mutations::{add_element, delete_element, update_element};
pub use reducer::{reduce, reduce_in_place, EditorState};
pub use session::{EditorSession, FunnelPage, SessionContext, SubscriptionId};

// Re-export the tree model for convenience
pub use pagekit_document::{Element, ElementContent, ElementKind, LeafContent};
