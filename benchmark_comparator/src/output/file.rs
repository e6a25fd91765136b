//!
//! Represents a single output file in a set of many.
//!

use std::path::PathBuf;

///
/// Represents a single output file in a set of many.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Path to this file relative to user-provided root.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl File {
    ///
    /// A shortcut constructor.
    ///
    pub fn new<P>(path: P, content: String) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            path: path.into(),
            content,
        }
    }
}
