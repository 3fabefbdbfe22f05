//! Error types for the editor host.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Block type already registered: {0}")]
    DuplicateBlockType(String),

    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),
}
