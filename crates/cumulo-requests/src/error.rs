//! Producer-side snapshot errors.

use thiserror::Error;

use crate::kind::RequestKind;

/// Error raised when the execution layer misuses a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// A detail update would change the snapshot's kind.
    #[error("snapshot kind is fixed at construction")]
    KindMismatch {
        /// Kind the snapshot was constructed with.
        expected: RequestKind,
        /// Kind of the rejected replacement detail.
        found: RequestKind,
    },
}

/// Convenience alias for snapshot update results.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
