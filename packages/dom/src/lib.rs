//! # htmlgen DOM
//!
//! In-memory tag tree and its line-based serializer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ Document: html → [head, body] + save()      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ Tree: arena of Elements addressed by ids    │
//! │  - parent → children ownership              │
//! │  - parent links are plain ids               │
//! │  - render() walks depth-first, pre-order    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! An element holds either literal contents or children, never both.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use htmlgen_dom::{Document, Element};
//!
//! let mut doc = Document::new("index.html");
//! let body = doc.body();
//! let list = doc.tree_mut().add_child(body, Element::new("ul"))?;
//! doc.tree_mut().add_child(list, Element::with_contents("li", "Piano"))?;
//! doc.save()?;
//! ```

mod document;
mod element;
mod error;
mod tree;

pub use document::{Document, LINE_SEPARATOR};
pub use element::{is_void, Element, ElementKind, VOID_ELEMENTS};
pub use error::DomError;
pub use tree::{ElementId, Tree};
