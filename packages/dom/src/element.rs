//! # Elements
//!
//! A single markup tag: name, attributes, and either literal contents or
//! child ids. Elements are built detached and attached through
//! [`Tree::add_child`](crate::Tree::add_child), which is the only place a
//! parent link is ever set.

use crate::ElementId;
use indexmap::IndexMap;
use std::fmt;

/// Tag names created as self-closing when added interactively.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Variant of tag an element renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Ordinary tag with a closing marker
    Container,

    /// Void tag: no closing marker, never holds children
    SelfClosing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    contents: String,
    kind: ElementKind,
    pub(crate) children: Vec<ElementId>,
    pub(crate) parent: Option<ElementId>,
}

impl Element {
    /// Create an empty container element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            contents: String::new(),
            kind: ElementKind::Container,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Create a container element holding literal text
    pub fn with_contents(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            ..Self::new(name)
        }
    }

    /// Create a void element such as `<br>`
    pub fn self_closing(name: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::SelfClosing,
            ..Self::new(name)
        }
    }

    /// The `<!DOCTYPE html>` marker
    pub fn doctype() -> Self {
        let mut element = Self::self_closing("!DOCTYPE");
        element.add_attribute("html", "");
        element
    }

    /// Insert or overwrite an attribute. An empty value renders as a bare key.
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub(crate) fn set_contents(&mut self, contents: String) {
        self.contents = contents;
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn is_self_closing(&self) -> bool {
        self.kind == ElementKind::SelfClosing
    }

    pub fn has_contents(&self) -> bool {
        !self.contents.is_empty()
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Attributes as ` key="value" key2`, or an empty string when there are
    /// none so the tag name is never followed by a stray space.
    pub fn attribute_fragment(&self) -> String {
        let joined = self
            .attributes
            .iter()
            .map(|(key, value)| {
                if value.is_empty() {
                    key.clone()
                } else {
                    format!("{}=\"{}\"", key, value)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            joined
        } else {
            format!(" {}", joined)
        }
    }

    pub fn open_tag(&self) -> String {
        format!("<{}{}>", self.name, self.attribute_fragment())
    }

    /// Closing marker, empty for self-closing elements
    pub fn close_tag(&self) -> String {
        match self.kind {
            ElementKind::SelfClosing => String::new(),
            ElementKind::Container => format!("</{}>", self.name),
        }
    }
}

/// Whether `name` is a void element, ignoring ASCII case
pub fn is_void(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name)
    }
}
