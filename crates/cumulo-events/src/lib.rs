//! Completion channel for Cumulo requests.
//!
//! The execution layer publishes zero-or-more progress events followed by
//! exactly one terminal event per request identifier; consumers subscribe to
//! the whole bus or to a single request. Internally the bus uses
//! `tokio::broadcast` with a bounded replay ring; when the channel overflows,
//! the oldest events are dropped.
//!
//! Layout: `payloads.rs` (event taxonomy and envelopes), `bus.rs` (the bus
//! and its subscription streams), `lifecycle.rs` (the producer-side handle
//! that enforces the at-most-one-terminal rule by ownership), `error.rs`
//! (publishing errors).

pub mod bus;
pub mod error;
pub mod lifecycle;
pub mod payloads;

pub use bus::{EventStream, RequestBus, RequestStream};
pub use error::{BusError, BusResult};
pub use lifecycle::RequestLifecycle;
pub use payloads::{DEFAULT_REPLAY_CAPACITY, EventEnvelope, EventId, RequestEvent};
