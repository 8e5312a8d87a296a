//! Error types returned by the mutating operations of the crate.
//!
//! Queries (ancestors, relative paths, lookups) never fail: the absence of a
//! relation is reported as `None` or an empty vector.

use thiserror::Error;

pub type PathResult<T> = std::result::Result<T, PathError>;

#[derive(Debug, Error)]
pub enum PathError {
    /// A path segment is empty or a bare separator.
    #[error("invalid segment name: {name:?}")]
    InvalidName { name: String },

    #[error(transparent)]
    Creation(#[from] CreationError),
}

/// A directory chain could not be fully materialized.
///
/// `materialized` is the `/`-joined prefix, relative to the starting node, that
/// exists after the failure; `created` counts the containers this call created
/// inside that prefix. Nothing is rolled back.
#[derive(Debug, Error)]
#[error("cannot materialize '{segment}' under '{materialized}': {kind}")]
pub struct CreationError {
    pub segment: String,
    pub materialized: String,
    pub created: usize,
    #[source]
    pub kind: CreationErrorKind,
}

#[derive(Debug, Error)]
pub enum CreationErrorKind {
    #[error("an entry with this name exists and is not a container")]
    NotAContainer,

    #[error("backend rejected the creation: {0}")]
    Rejected(#[source] anyhow::Error),
}

impl PathError {
    /// Returns the name of the segment the operation failed on.
    pub fn segment(&self) -> &str {
        match self {
            PathError::InvalidName { name } => name,
            PathError::Creation(err) => &err.segment,
        }
    }
}
