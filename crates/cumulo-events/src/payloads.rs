//! Event payloads delivered through the completion channel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cumulo_requests::{RequestFailure, RequestKind, RequestOutcome, RequestSnapshot};

/// Identifier assigned to each event published on a bus.
pub type EventId = u64;

/// Default buffer size for the in-memory replay ring.
pub const DEFAULT_REPLAY_CAPACITY: usize = 1_024;

/// Notifications emitted while a request runs.
///
/// A request produces `Started`, then zero or more `Progress` and `Retrying`
/// events, then exactly one `Finished`. Snapshots embedded in events are
/// clones of the producer's working copy; consumers own them outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestEvent {
    /// The execution layer accepted the request and began working on it.
    Started {
        /// Identifier of the request being tracked.
        request_id: Uuid,
        /// Kind of request, fixed for its whole lifetime.
        kind: RequestKind,
    },
    /// Periodic progress update for a data-carrying request.
    Progress {
        /// Identifier of the request being tracked.
        request_id: Uuid,
        /// Snapshot with the progress counters updated.
        snapshot: RequestSnapshot,
    },
    /// A transient failure occurred and the request will be retried.
    Retrying {
        /// Identifier of the request being tracked.
        request_id: Uuid,
        /// The transient failure that triggered the retry.
        failure: RequestFailure,
    },
    /// The request reached its terminal state.
    Finished {
        /// Identifier of the request being tracked.
        request_id: Uuid,
        /// Final snapshot with the kind-specific result fields populated.
        snapshot: RequestSnapshot,
        /// Success or failure of the attempt.
        outcome: RequestOutcome,
    },
}

impl RequestEvent {
    /// Machine-friendly discriminator for logs and wire payloads.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Started { .. } => "started",
            Self::Progress { .. } => "progress",
            Self::Retrying { .. } => "retrying",
            Self::Finished { .. } => "finished",
        }
    }

    /// Identifier of the request this event belongs to.
    #[must_use]
    pub const fn request_id(&self) -> Uuid {
        match self {
            Self::Started { request_id, .. }
            | Self::Progress { request_id, .. }
            | Self::Retrying { request_id, .. }
            | Self::Finished { request_id, .. } => *request_id,
        }
    }

    /// Whether this event closes its request's lifecycle.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}

/// Metadata wrapper around events. Each envelope tracks the event id and
/// emission timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Sequential identifier assigned by the publishing bus.
    pub id: EventId,
    /// Emission timestamp.
    pub timestamp: DateTime<Utc>,
    /// The event itself.
    pub event: RequestEvent,
}
