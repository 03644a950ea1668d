//! Publish/subscribe plumbing for request events.

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tokio::sync::broadcast;
use tokio::sync::broadcast::{Receiver, Sender};
use uuid::Uuid;

use crate::error::{BusError, BusResult};
use crate::payloads::{DEFAULT_REPLAY_CAPACITY, EventEnvelope, EventId, RequestEvent};

/// Shared request event bus built on top of `tokio::broadcast`.
///
/// The bus assigns sequential identifiers, keeps a bounded replay ring so
/// reconnecting subscribers can catch up, and guarantees at most one terminal
/// event per request identifier: once a request's `Finished` event has been
/// accepted, every further event for that request is rejected.
#[derive(Clone)]
pub struct RequestBus {
    sender: Sender<EventEnvelope>,
    replay: Arc<Mutex<VecDeque<EventEnvelope>>>,
    replay_capacity: usize,
    next_id: Arc<Mutex<EventId>>,
    finished: Arc<Mutex<HashSet<Uuid>>>,
}

impl RequestBus {
    /// Construct a bus with a custom replay capacity.
    ///
    /// The broadcast channel uses the same capacity as the replay ring so
    /// dropped events impact both structures consistently.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "request bus capacity must be positive");
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            replay: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            replay_capacity: capacity,
            next_id: Arc::new(Mutex::new(1)),
            finished: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Construct a bus with the default replay capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_REPLAY_CAPACITY)
    }

    /// Publish an event, assigning it a sequential identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BusError::AlreadyFinished`] when the event's request has
    /// already delivered its terminal event; nothing is published.
    pub fn publish(&self, event: RequestEvent) -> BusResult<EventId> {
        let request_id = event.request_id();

        // The finished guard is held through id assignment so a terminal
        // event and a late straggler cannot interleave out of order.
        let mut finished = self.lock_finished();
        if finished.contains(&request_id) {
            tracing::warn!(
                %request_id,
                kind = event.kind(),
                "rejected event for finished request"
            );
            return Err(BusError::AlreadyFinished { request_id });
        }
        if event.is_terminal() {
            finished.insert(request_id);
        }

        let mut next = self.next_id.lock().unwrap_or_else(PoisonError::into_inner);
        let id = *next;
        *next = next.saturating_add(1);
        drop(next);

        let envelope = EventEnvelope {
            id,
            timestamp: Utc::now(),
            event,
        };
        {
            let mut replay = self.lock_replay();
            if replay.len() == self.replay_capacity {
                let _ = replay.pop_front();
            }
            replay.push_back(envelope.clone());
        }
        drop(finished);

        tracing::debug!(
            %request_id,
            event_id = id,
            kind = envelope.event.kind(),
            "published request event"
        );
        let _ = self.sender.send(envelope);
        Ok(id)
    }

    /// Subscribe to the bus, replaying any buffered events newer than
    /// `since_id`.
    #[must_use]
    pub fn subscribe(&self, since_id: Option<EventId>) -> EventStream {
        let mut backlog = VecDeque::new();
        if let Some(since) = since_id {
            let replay = self.lock_replay();
            backlog.extend(replay.iter().filter(|env| env.id > since).cloned());
        }
        EventStream {
            backlog,
            receiver: self.sender.subscribe(),
        }
    }

    /// Subscribe to a single request's events.
    ///
    /// Buffered events for the request are replayed first; the stream ends
    /// after yielding the request's terminal event. Subscribing to a request
    /// that already finished yields whatever the replay ring still holds and
    /// then ends.
    #[must_use]
    pub fn subscribe_request(&self, request_id: Uuid) -> RequestStream {
        let backlog: VecDeque<EventEnvelope> = {
            let replay = self.lock_replay();
            replay
                .iter()
                .filter(|env| env.event.request_id() == request_id)
                .cloned()
                .collect()
        };
        // A finished request whose events all fell out of the ring has an
        // empty backlog; consult the finished set so the stream still ends.
        let done = backlog.is_empty() && self.lock_finished().contains(&request_id);
        RequestStream {
            request_id,
            done,
            inner: EventStream {
                backlog,
                receiver: self.sender.subscribe(),
            },
        }
    }

    /// Last event id observed in the replay ring.
    #[must_use]
    pub fn last_event_id(&self) -> Option<EventId> {
        self.lock_replay().back().map(|env| env.id)
    }

    /// Collect a backlog of events emitted after the specified id.
    #[must_use]
    pub fn backlog_since(&self, id: EventId) -> Vec<EventEnvelope> {
        let replay = self.lock_replay();
        replay.iter().filter(|env| env.id > id).cloned().collect()
    }

    /// Whether the request has already delivered its terminal event.
    #[must_use]
    pub fn is_finished(&self, request_id: Uuid) -> bool {
        self.lock_finished().contains(&request_id)
    }

    fn lock_replay(&self) -> MutexGuard<'_, VecDeque<EventEnvelope>> {
        self.replay.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_finished(&self) -> MutexGuard<'_, HashSet<Uuid>> {
        self.finished.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RequestBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Stream that yields events either from the replay backlog or from the live
/// broadcast channel.
pub struct EventStream {
    backlog: VecDeque<EventEnvelope>,
    receiver: Receiver<EventEnvelope>,
}

impl EventStream {
    /// Receive the next event, respecting the replay backlog first.
    pub async fn next(&mut self) -> Option<EventEnvelope> {
        if let Some(event) = self.backlog.pop_front() {
            return Some(event);
        }

        match self.receiver.recv().await {
            Ok(event) => Some(event),
            Err(broadcast::error::RecvError::Lagged(_)) => self.receiver.recv().await.ok(),
            Err(broadcast::error::RecvError::Closed) => None,
        }
    }
}

/// Stream over a single request's events; ends after the terminal event.
pub struct RequestStream {
    request_id: Uuid,
    done: bool,
    inner: EventStream,
}

impl RequestStream {
    /// Identifier of the request this stream follows.
    #[must_use]
    pub const fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Receive the request's next event, or `None` once it has finished.
    pub async fn next(&mut self) -> Option<EventEnvelope> {
        if self.done {
            return None;
        }
        loop {
            let envelope = self.inner.next().await?;
            if envelope.event.request_id() != self.request_id {
                continue;
            }
            if envelope.event.is_terminal() {
                self.done = true;
            }
            return Some(envelope);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cumulo_requests::{ErrorCode, RequestDetail, RequestFailure, RequestKind, RequestSnapshot};

    fn started(request_id: Uuid) -> RequestEvent {
        RequestEvent::Started {
            request_id,
            kind: RequestKind::FetchNodes,
        }
    }

    fn finished(request_id: Uuid) -> RequestEvent {
        RequestEvent::Finished {
            request_id,
            snapshot: RequestSnapshot::new(RequestDetail::FetchNodes),
            outcome: Ok(()),
        }
    }

    #[tokio::test]
    async fn sequential_ids_and_replay() {
        let bus = RequestBus::with_capacity(16);

        let mut last_id = 0;
        for _ in 0..5 {
            let request_id = Uuid::new_v4();
            last_id = bus.publish(started(request_id)).expect("publish");
        }
        assert_eq!(last_id, 5);
        assert_eq!(bus.last_event_id(), Some(5));
        assert_eq!(bus.backlog_since(3).len(), 2);

        let mut stream = bus.subscribe(Some(2));
        let mut received = Vec::new();
        for _ in 0..3 {
            if let Some(envelope) = stream.next().await {
                received.push(envelope);
            }
        }
        assert_eq!(received.first().map(|env| env.id), Some(3));
        assert_eq!(received.last().map(|env| env.id), Some(5));
    }

    #[tokio::test]
    async fn events_after_terminal_are_rejected() {
        let bus = RequestBus::with_capacity(16);
        let request_id = Uuid::new_v4();

        bus.publish(started(request_id)).expect("start");
        bus.publish(finished(request_id)).expect("finish");
        assert!(bus.is_finished(request_id));

        let err = bus
            .publish(RequestEvent::Retrying {
                request_id,
                failure: RequestFailure::new(ErrorCode::RetryNeeded, "late"),
            })
            .expect_err("post-terminal event must be rejected");
        assert_eq!(err, BusError::AlreadyFinished { request_id });

        let err = bus
            .publish(finished(request_id))
            .expect_err("second terminal must be rejected");
        assert_eq!(err, BusError::AlreadyFinished { request_id });
    }

    #[tokio::test]
    async fn request_stream_filters_other_requests_and_ends() {
        let bus = RequestBus::with_capacity(16);
        let ours = Uuid::new_v4();
        let other = Uuid::new_v4();

        bus.publish(started(ours)).expect("start ours");
        bus.publish(started(other)).expect("start other");

        let mut stream = bus.subscribe_request(ours);
        bus.publish(finished(other)).expect("finish other");
        bus.publish(finished(ours)).expect("finish ours");

        let first = stream.next().await.expect("started envelope");
        assert_eq!(first.event.request_id(), ours);
        assert_eq!(first.event.kind(), "started");

        let second = stream.next().await.expect("finished envelope");
        assert!(second.event.is_terminal());
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn subscribing_to_a_finished_request_replays_then_ends() {
        let bus = RequestBus::with_capacity(16);
        let request_id = Uuid::new_v4();
        bus.publish(started(request_id)).expect("start");
        bus.publish(finished(request_id)).expect("finish");

        let mut stream = bus.subscribe_request(request_id);
        assert_eq!(stream.next().await.map(|env| env.id), Some(1));
        assert!(stream.next().await.expect("terminal").event.is_terminal());
        assert!(stream.next().await.is_none());
    }
}
