use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Id of the root element every page tree is anchored at
pub const BODY_ID: &str = "__body";

/// Presentation attributes (CSS property name → value)
///
/// Opaque to the engine: passed through unchanged.
pub type Styles = BTreeMap<String, Value>;

/// Node in the page tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,

    /// Display label (not unique)
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ElementKind,

    #[serde(default)]
    pub styles: Styles,

    pub content: ElementContent,
}

/// Either an ordered child list or an opaque leaf payload, never both
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementContent {
    /// Container variant
    Children(Vec<Element>),

    /// Leaf variant
    Leaf(LeafContent),
}

/// Leaf payload (link target, text, or anything else a widget stores)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_text: Option<String>,

    /// Keys this crate does not interpret; preserved on round trip
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Element tag
///
/// The set is open-ended: tags this crate does not know are kept as
/// [`ElementKind::Other`] and serialized back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementKind {
    Body,
    Container,
    Section,
    Text,
    Link,
    Image,
    Video,
    ContactForm,
    PaymentForm,
    TwoColumns,
    ThreeColumns,
    Other(String),
}

impl ElementKind {
    pub fn as_str(&self) -> &str {
        match self {
            ElementKind::Body => "__body",
            ElementKind::Container => "container",
            ElementKind::Section => "section",
            ElementKind::Text => "text",
            ElementKind::Link => "link",
            ElementKind::Image => "image",
            ElementKind::Video => "video",
            ElementKind::ContactForm => "contactForm",
            ElementKind::PaymentForm => "paymentForm",
            ElementKind::TwoColumns => "2Col",
            ElementKind::ThreeColumns => "3Col",
            ElementKind::Other(tag) => tag,
        }
    }
}

impl From<String> for ElementKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "__body" => ElementKind::Body,
            "container" => ElementKind::Container,
            "section" => ElementKind::Section,
            "text" => ElementKind::Text,
            "link" => ElementKind::Link,
            "image" => ElementKind::Image,
            "video" => ElementKind::Video,
            "contactForm" => ElementKind::ContactForm,
            "paymentForm" => ElementKind::PaymentForm,
            "2Col" => ElementKind::TwoColumns,
            "3Col" => ElementKind::ThreeColumns,
            _ => ElementKind::Other(tag),
        }
    }
}

impl From<&str> for ElementKind {
    fn from(tag: &str) -> Self {
        ElementKind::from(tag.to_string())
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Element {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<ElementKind>,
        content: ElementContent,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            styles: Styles::new(),
            content,
        }
    }

    /// Create an empty container element
    pub fn container(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<ElementKind>,
    ) -> Self {
        Self::new(id, name, kind, ElementContent::Children(Vec::new()))
    }

    /// Create a leaf element with an empty payload
    pub fn leaf(id: impl Into<String>, name: impl Into<String>, kind: impl Into<ElementKind>) -> Self {
        Self::new(id, name, kind, ElementContent::Leaf(LeafContent::default()))
    }

    /// The empty page body
    pub fn body() -> Self {
        Self::container(BODY_ID, "Body", ElementKind::Body)
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    /// Replace content with the given children (makes this a container)
    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.content = ElementContent::Children(children);
        self
    }

    /// Replace content with the given payload (makes this a leaf)
    pub fn with_leaf(mut self, leaf: LeafContent) -> Self {
        self.content = ElementContent::Leaf(leaf);
        self
    }

    pub fn is_container(&self) -> bool {
        matches!(self.content, ElementContent::Children(_))
    }

    pub fn children(&self) -> Option<&[Element]> {
        match &self.content {
            ElementContent::Children(children) => Some(children),
            ElementContent::Leaf(_) => None,
        }
    }

    pub fn leaf_content(&self) -> Option<&LeafContent> {
        match &self.content {
            ElementContent::Leaf(leaf) => Some(leaf),
            ElementContent::Children(_) => None,
        }
    }
}

impl LeafContent {
    pub fn link(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    pub fn text(inner_text: impl Into<String>) -> Self {
        Self {
            inner_text: Some(inner_text.into()),
            ..Self::default()
        }
    }
}
