//! Error types for container operations.

use thiserror::Error;

/// Errors reported by container operations.
///
/// None of these are fatal: the container is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The actor is not a child of the container it was looked up in.
    #[error("actor of type '{child}' is not a child of container of type '{container}'")]
    NotAChild {
        child: &'static str,
        container: &'static str,
    },
}
