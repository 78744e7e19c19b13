//! Error types for the editor

use htmlgen_dom::DomError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Tree error: {0}")]
    Dom(#[from] DomError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before the session finished")]
    InputClosed,
}
