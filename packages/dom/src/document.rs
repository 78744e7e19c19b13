//! # Document Handle
//!
//! Owns the `html` root and the two regions every page has, `head` and
//! `body`, created once and never reparented.
//!
//! ## Lifecycle
//!
//! ```text
//! new → edit tree → render → save
//!                     ↓        ↓
//!                   lines    File
//! ```

use crate::{DomError, Element, ElementId, Tree};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Separator placed between rendered lines when writing to disk
pub const LINE_SEPARATOR: &str = "\n";

#[derive(Debug, Clone)]
pub struct Document {
    /// Destination written by [`Document::save`]
    path: PathBuf,

    tree: Tree,
    head: ElementId,
    body: ElementId,

    /// Rendered ahead of the html root when present
    doctype: Option<Tree>,
}

impl Document {
    /// Create `html` with `head` and `body` as its first two children
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let mut tree = Tree::new(Element::new("html"));
        let root = tree.root();

        let head = tree.attach(root, Element::new("head"));
        let body = tree.attach(root, Element::new("body"));

        Self {
            path: path.into(),
            tree,
            head,
            body,
            doctype: None,
        }
    }

    /// Like [`Document::new`], but output starts with `<!DOCTYPE html>`
    pub fn with_doctype(path: impl Into<PathBuf>) -> Self {
        Self {
            doctype: Some(Tree::new(Element::doctype())),
            ..Self::new(path)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    pub fn root(&self) -> ElementId {
        self.tree.root()
    }

    pub fn head(&self) -> ElementId {
        self.head
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    pub fn has_doctype(&self) -> bool {
        self.doctype.is_some()
    }

    /// Every line of the document, doctype first when present
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(doctype) = &self.doctype {
            lines.extend(doctype.render(doctype.root()));
        }
        lines.extend(self.tree.render(self.root()));
        lines
    }

    pub fn to_html(&self) -> String {
        self.render().join(LINE_SEPARATOR)
    }

    /// Write the rendered document to [`Document::path`].
    ///
    /// The file handle is dropped on every path out of this function.
    pub fn save(&self) -> Result<(), DomError> {
        let html = self.to_html();
        let io_error = |source| DomError::Io {
            path: self.path.clone(),
            source,
        };

        let mut file = File::create(&self.path).map_err(io_error)?;
        file.write_all(html.as_bytes()).map_err(io_error)?;
        file.flush().map_err(io_error)?;

        info!(path = %self.path.display(), bytes = html.len(), "Document saved");
        Ok(())
    }
}
