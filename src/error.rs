//! Grid building error types.

use std::fmt;

/// Errors that can occur while building a grid mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// An operation was called at the wrong point in a build session.
    SessionState(String),
    /// A vertex or index entry would exceed the 16-bit index range or the
    /// grid's preallocated index capacity.
    IndexOverflow {
        /// Entries the operation would have needed.
        requested: usize,
        /// Entries available.
        limit: usize,
    },
    /// Finalization was attempted with nothing to pack.
    EmptyMesh(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionState(msg) => write!(f, "invalid session state: {msg}"),
            Self::IndexOverflow { requested, limit } => {
                write!(f, "index overflow: {requested} entries requested, {limit} available")
            }
            Self::EmptyMesh(msg) => write!(f, "empty mesh: {msg}"),
        }
    }
}

impl std::error::Error for GridError {}
