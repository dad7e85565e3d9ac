//! # Editor Document
//!
//! The working state of one page editing session: the element tree plus
//! the presentation flags the builder chrome reads (selection, simulated
//! device, preview and live modes) and the page the tree is bound to.

use pagekit_document::{default_tree, Element};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Viewport simulated by the editor canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Device {
    #[default]
    Desktop,
    Mobile,
    Tablet,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Device::Desktop => "Desktop",
            Device::Mobile => "Mobile",
            Device::Tablet => "Tablet",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorDocument {
    /// Page tree (a single `__body` root)
    pub elements: Vec<Element>,

    /// Element open in the settings panel, `None` when nothing is selected
    pub selected_element: Option<Element>,

    pub device: Device,

    pub preview_mode: bool,

    pub live_mode: bool,

    /// Persisted page this tree belongs to; empty when unbound
    pub page_id: String,
}

impl EditorDocument {
    /// Empty body, nothing selected, unbound
    pub fn new() -> Self {
        Self::with_elements(default_tree())
    }

    pub fn with_elements(elements: Vec<Element>) -> Self {
        Self {
            elements,
            selected_element: None,
            device: Device::default(),
            preview_mode: false,
            live_mode: false,
            page_id: String::new(),
        }
    }

    pub fn is_bound(&self) -> bool {
        !self.page_id.is_empty()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_element.as_ref().map(|element| element.id.as_str())
    }
}

impl Default for EditorDocument {
    fn default() -> Self {
        Self::new()
    }
}
