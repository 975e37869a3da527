//! Background page requests with stale-response fencing.
//!
//! Every request runs on its own thread and is never cancelled. Each request
//! gets a sequence number; only the outcome of the most recently issued
//! request is handed back; anything older is logged and dropped.

use super::client::TripClient;
use super::query::TripQuery;
use crate::model::{FetchError, TripPage};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Monotonically increasing request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A completed request.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub seq: RequestSeq,
    pub query: TripQuery,
    pub result: Result<TripPage, FetchError>,
}

/// Issues requests on background threads and collects their outcomes.
pub struct Fetcher<C: TripClient> {
    client: Arc<C>,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
    issued: u64,
    in_flight: bool,
}

impl<C: TripClient> Fetcher<C> {
    pub fn new(client: C) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            client: Arc::new(client),
            tx,
            rx,
            issued: 0,
            in_flight: false,
        }
    }

    /// Start a request. Supersedes every earlier request.
    pub fn request(&mut self, query: TripQuery) -> RequestSeq {
        self.issued += 1;
        let seq = RequestSeq(self.issued);
        self.in_flight = true;
        debug!(seq = seq.get(), ?query, "issuing trip request");

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let job = move || {
            let result = client.fetch(&query);
            // Receiver is gone once the app has shut down.
            let _ = tx.send(FetchOutcome { seq, query, result });
        };

        let spawned = std::thread::Builder::new()
            .name(format!("trip-fetch-{}", seq.get()))
            .spawn(job);
        if let Err(e) = spawned {
            warn!(error = %e, "could not spawn fetch thread");
            let _ = self.tx.send(FetchOutcome {
                seq,
                query: TripQuery::new(0, Default::default()),
                result: Err(FetchError::Transport {
                    url: String::new(),
                    message: format!("could not spawn fetch thread: {e}"),
                }),
            });
        }

        seq
    }

    /// Most recently issued request, if any.
    pub fn latest(&self) -> Option<RequestSeq> {
        (self.issued > 0).then_some(RequestSeq(self.issued))
    }

    /// Total number of requests issued so far.
    pub fn issued_count(&self) -> u64 {
        self.issued
    }

    /// Whether the latest request has not completed yet.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Non-blocking. Returns the latest request's outcome if it has arrived.
    pub fn poll(&mut self) -> Option<FetchOutcome> {
        let mut accepted = None;
        loop {
            match self.rx.try_recv() {
                Ok(outcome) => {
                    if let Some(outcome) = self.accept(outcome) {
                        accepted = Some(outcome);
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        accepted
    }

    /// Block until the latest request completes or `timeout` elapses.
    pub fn wait(&mut self, timeout: Duration) -> Option<FetchOutcome> {
        let deadline = Instant::now() + timeout;
        while self.in_flight {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(outcome) => {
                    if let Some(outcome) = self.accept(outcome) {
                        return Some(outcome);
                    }
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return None;
                }
            }
        }
        None
    }

    fn accept(&mut self, outcome: FetchOutcome) -> Option<FetchOutcome> {
        if outcome.seq.get() != self.issued {
            debug!(
                seq = outcome.seq.get(),
                latest = self.issued,
                "discarding superseded trip response"
            );
            return None;
        }
        self.in_flight = false;
        Some(outcome)
    }
}
