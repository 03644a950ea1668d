//! Producer-side request lifecycle handle.

use uuid::Uuid;

use cumulo_requests::{RequestDetail, RequestFailure, RequestKind, RequestSnapshot};

use crate::bus::RequestBus;
use crate::error::BusResult;
use crate::payloads::{EventId, RequestEvent};

/// The execution layer's private handle on one in-flight request.
///
/// The handle owns the request's working snapshot; consumers only ever see
/// clones of it, so mutating the working copy between events never reaches
/// code that already holds a snapshot. The terminal methods
/// [`RequestLifecycle::succeed`] and [`RequestLifecycle::fail`] consume the
/// handle, so publishing a second terminal event for the same request is
/// unrepresentable.
pub struct RequestLifecycle {
    request_id: Uuid,
    bus: RequestBus,
    snapshot: RequestSnapshot,
}

impl RequestLifecycle {
    /// Register a new request on the bus, publishing its `Started` event.
    ///
    /// # Errors
    ///
    /// Fails only if the freshly drawn request id collides with one that
    /// already finished on this bus.
    pub fn begin(bus: &RequestBus, detail: RequestDetail) -> BusResult<Self> {
        let request_id = Uuid::new_v4();
        let snapshot = RequestSnapshot::new(detail);
        bus.publish(RequestEvent::Started {
            request_id,
            kind: snapshot.kind(),
        })?;
        Ok(Self {
            request_id,
            bus: bus.clone(),
            snapshot,
        })
    }

    /// Identifier consumers use to subscribe to this request.
    #[must_use]
    pub const fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Kind of the request, fixed at [`RequestLifecycle::begin`].
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        self.snapshot.kind()
    }

    /// Current state of the working snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &RequestSnapshot {
        &self.snapshot
    }

    /// Record progress on the working snapshot and publish a progress event.
    ///
    /// The published snapshot is a clone; the working copy stays private.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BusError::AlreadyFinished`] if the request was
    /// finished behind this handle's back by publishing directly on the bus.
    pub fn progress(&mut self, transferred: u64, total: u64) -> BusResult<EventId> {
        self.snapshot.record_progress(transferred, total);
        self.bus.publish(RequestEvent::Progress {
            request_id: self.request_id,
            snapshot: self.snapshot.clone(),
        })
    }

    /// Report a transient failure that will be retried.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BusError::AlreadyFinished`] if the request was
    /// finished behind this handle's back by publishing directly on the bus.
    pub fn retry(&self, failure: RequestFailure) -> BusResult<EventId> {
        self.bus.publish(RequestEvent::Retrying {
            request_id: self.request_id,
            failure,
        })
    }

    /// Complete the request successfully, publishing its terminal event.
    ///
    /// `detail` carries the kind-specific result fields and must describe
    /// the same kind the request started with.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BusError::Snapshot`] when `detail` would change the
    /// request's kind; no terminal event is published in that case.
    pub fn succeed(mut self, detail: RequestDetail) -> BusResult<EventId> {
        self.snapshot.update_detail(detail)?;
        self.bus.publish(RequestEvent::Finished {
            request_id: self.request_id,
            snapshot: self.snapshot,
            outcome: Ok(()),
        })
    }

    /// Complete the request as failed, publishing its terminal event.
    ///
    /// The terminal snapshot still reports what was attempted, so consumers
    /// can log or retry with the same parameters.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BusError::AlreadyFinished`] if the request was
    /// finished behind this handle's back by publishing directly on the bus.
    pub fn fail(self, failure: RequestFailure) -> BusResult<EventId> {
        self.bus.publish(RequestEvent::Finished {
            request_id: self.request_id,
            snapshot: self.snapshot,
            outcome: Err(failure),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cumulo_model::NodeHandle;
    use cumulo_requests::{AccessLevel, ErrorCode, SnapshotError};

    use crate::error::BusError;

    #[tokio::test]
    async fn succeed_publishes_exactly_one_terminal_event() {
        let bus = RequestBus::with_capacity(16);
        let node = NodeHandle::new(0x5eed);
        let lifecycle = RequestLifecycle::begin(&bus, RequestDetail::export(node)).expect("begin");
        let request_id = lifecycle.request_id();
        let mut stream = bus.subscribe_request(request_id);

        lifecycle
            .succeed(RequestDetail::Export {
                node,
                enable: true,
                link: Some("https://cloud.example/#!exp".into()),
                access: Some(AccessLevel::ReadOnly),
            })
            .expect("succeed");

        let started = stream.next().await.expect("started");
        assert_eq!(started.event.kind(), "started");
        let terminal = stream.next().await.expect("finished");
        let RequestEvent::Finished {
            snapshot, outcome, ..
        } = terminal.event
        else {
            panic!("expected finished event");
        };
        assert_eq!(outcome, Ok(()));
        assert_eq!(snapshot.node_handle(), Some(node));
        assert!(snapshot.flag());
        assert!(stream.next().await.is_none());
        assert!(bus.is_finished(request_id));
    }

    #[tokio::test]
    async fn succeed_rejects_a_detail_of_another_kind() {
        let bus = RequestBus::with_capacity(16);
        let lifecycle =
            RequestLifecycle::begin(&bus, RequestDetail::export(NodeHandle::new(1))).expect("begin");
        let request_id = lifecycle.request_id();

        let err = lifecycle
            .succeed(RequestDetail::FetchNodes)
            .expect_err("kind change must be rejected");
        assert!(matches!(
            err,
            BusError::Snapshot(SnapshotError::KindMismatch { .. })
        ));
        assert!(!bus.is_finished(request_id));
    }

    #[tokio::test]
    async fn fail_keeps_the_attempted_parameters() {
        let bus = RequestBus::with_capacity(16);
        let lifecycle =
            RequestLifecycle::begin(&bus, RequestDetail::change_password("old", "new"))
                .expect("begin");
        let mut stream = bus.subscribe_request(lifecycle.request_id());

        lifecycle
            .fail(RequestFailure::new(ErrorCode::BadArguments, "wrong password"))
            .expect("fail");

        let _started = stream.next().await.expect("started");
        let terminal = stream.next().await.expect("finished");
        let RequestEvent::Finished {
            snapshot, outcome, ..
        } = terminal.event
        else {
            panic!("expected finished event");
        };
        assert_eq!(snapshot.password(), Some("old"));
        assert_eq!(snapshot.new_password(), Some("new"));
        assert_eq!(
            outcome.expect_err("failure outcome").code,
            ErrorCode::BadArguments
        );
    }
}
