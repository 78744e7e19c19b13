//! # Tag Tree
//!
//! Arena that owns every element of a document.
//!
//! Ownership runs strictly parent → children: each element stores the ids of
//! its children, and its parent only as a plain id used to walk upward.
//! Elements are never removed, so an id minted by a tree stays valid for as
//! long as that tree lives.

use crate::{DomError, Element};
use tracing::debug;

/// Handle to an element inside a [`Tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Element>,
}

impl Tree {
    /// Create a tree whose root is `root`
    pub fn new(mut root: Element) -> Self {
        root.parent = None;
        root.children.clear();
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up an element.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    pub fn get(&self, id: ElementId) -> &Element {
        &self.nodes[id.0]
    }

    /// Mutable access for attribute edits. Structural changes go through
    /// [`Tree::add_child`] and [`Tree::set_contents`].
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    pub fn get_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.nodes[id.0]
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).parent
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.get(id).children
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// Fails without touching the tree if `parent` holds literal contents
    /// or is self-closing.
    pub fn add_child(&mut self, parent: ElementId, child: Element) -> Result<ElementId, DomError> {
        let target = self.get(parent);
        if target.has_contents() {
            return Err(DomError::AlreadyHasContent(target.name().to_string()));
        }
        if target.is_self_closing() {
            return Err(DomError::SelfClosing(target.name().to_string()));
        }

        debug!(parent = %target, child = %child, "Adding child");
        Ok(self.attach(parent, child))
    }

    /// Append without checking the parent; callers guarantee it is an empty
    /// container.
    pub(crate) fn attach(&mut self, parent: ElementId, mut child: Element) -> ElementId {
        let id = ElementId(self.nodes.len());
        child.parent = Some(parent);
        child.children.clear();

        self.nodes.push(child);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Overwrite the literal contents of a childless container element
    pub fn set_contents(&mut self, id: ElementId, contents: impl Into<String>) -> Result<(), DomError> {
        let element = self.get_mut(id);
        if element.is_self_closing() {
            return Err(DomError::SelfClosing(element.name().to_string()));
        }
        if !element.children.is_empty() {
            return Err(DomError::HasChildren(element.name().to_string()));
        }
        element.set_contents(contents.into());
        Ok(())
    }

    /// Serialize `id` and its descendants into lines.
    ///
    /// Content-bearing elements produce a single line. Everything else
    /// produces the opening marker, each child's lines in order, then the
    /// closing marker, which is skipped when empty.
    pub fn render(&self, id: ElementId) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_into(id, &mut lines);
        lines
    }

    /// Serialize `id` and join the lines with `separator`
    pub fn render_to_string(&self, id: ElementId, separator: &str) -> String {
        self.render(id).join(separator)
    }

    fn render_into(&self, id: ElementId, lines: &mut Vec<String>) {
        let element = self.get(id);
        let open = element.open_tag();
        let close = element.close_tag();

        if element.has_contents() {
            lines.push(format!("{}{}{}", open, element.contents(), close));
            return;
        }

        lines.push(open);
        for child in element.children() {
            self.render_into(*child, lines);
        }
        if !close.is_empty() {
            lines.push(close);
        }
    }
}
