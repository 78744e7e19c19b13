//! # htmlgen Editor
//!
//! Interactive, menu-driven editing of an htmlgen [`Document`](htmlgen_dom::Document).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ Console: prompts in, lines out              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ EditSession: cursor + menu loop             │
//! │  - Choice dispatch table keyed "1".."6"     │
//! │  - Stay / MoveTo / Terminate outcomes       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ dom: Tree mutations, render, save           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use htmlgen_dom::Document;
//! use htmlgen_editor::{Console, EditSession};
//!
//! let stdin = std::io::stdin();
//! let console = Console::new(stdin.lock(), std::io::stdout());
//! let mut session = EditSession::new(Document::new("index.html"), console);
//! session.run()?;
//! session.into_document().save()?;
//! ```

mod choices;
mod console;
mod errors;
mod session;

pub use choices::{Choice, ChoiceOutcome};
pub use console::Console;
pub use errors::EditorError;
pub use session::EditSession;
