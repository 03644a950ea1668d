//! Request snapshots for the Cumulo remote storage service.
//!
//! Every asynchronous operation issued against the service is described by a
//! [`RequestSnapshot`]: an immutable, point-in-time value the execution layer
//! hands to consumers alongside progress and completion notifications.
//!
//! Layout: `kind.rs` (the closed registry of request kinds), `access.rs`
//! (sharing permission levels), `detail.rs` (per-kind payload variants),
//! `snapshot.rs` (the snapshot itself and its total accessor surface),
//! `outcome.rs` (terminal success/failure taxonomy), `error.rs`
//! (producer-side misuse errors).

pub mod access;
pub mod detail;
pub mod error;
pub mod kind;
pub mod outcome;
pub mod snapshot;

pub use access::AccessLevel;
pub use detail::{FileAttrKind, RequestDetail, UserAttrKind};
pub use error::{SnapshotError, SnapshotResult};
pub use kind::RequestKind;
pub use outcome::{ErrorCode, RequestFailure, RequestOutcome};
pub use snapshot::RequestSnapshot;
