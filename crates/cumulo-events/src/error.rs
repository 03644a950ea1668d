//! Completion channel error primitives.

use thiserror::Error;
use uuid::Uuid;

use cumulo_requests::SnapshotError;

/// Error emitted when event publishing fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BusError {
    /// An event was published for a request that already delivered its
    /// terminal event.
    #[error("request {request_id} already finished")]
    AlreadyFinished {
        /// Identifier of the offending request.
        request_id: Uuid,
    },
    /// The terminal detail did not match the kind the request started with.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Result wrapper for bus operations.
pub type BusResult<T> = Result<T, BusError>;
