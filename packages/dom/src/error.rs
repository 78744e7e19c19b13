//! Error types for the tag tree

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("<{0}> already has contents and cannot take children")]
    AlreadyHasContent(String),

    #[error("<{0}> is self-closing and cannot hold children or contents")]
    SelfClosing(String),

    #[error("<{0}> already has children and cannot take contents")]
    HasChildren(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
