//! `ArrivalQueue`: admitted requests keyed by arrival tick.
//!
//! Most ticks have no arrivals, so the queue is sparse: a `BTreeMap` from
//! tick to the requests arriving then.  The simulation drains exactly one
//! tick per iteration and uses [`is_empty`][ArrivalQueue::is_empty] as part
//! of its termination test.

use std::collections::BTreeMap;

use dd_core::Tick;

use crate::Request;

/// Future arrivals, grouped by tick.
#[derive(Default, Debug)]
pub struct ArrivalQueue {
    inner: BTreeMap<Tick, Vec<Request>>,
    /// Cached total request count for O(1) `len()`.
    total: usize,
}

impl ArrivalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from already admitted requests.
    pub fn from_requests(requests: impl IntoIterator<Item = Request>) -> Self {
        let mut queue = Self::new();
        for r in requests {
            queue.push(r);
        }
        queue
    }

    /// Schedule `request` for admission at its arrival tick.
    pub fn push(&mut self, request: Request) {
        self.inner.entry(request.arrival).or_default().push(request);
        self.total += 1;
    }

    /// Remove and return all requests arriving at exactly `tick`, in
    /// ascending id order.
    ///
    /// Returns `None` if nothing arrives at that tick.
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<Request>> {
        let mut requests = self.inner.remove(&tick)?;
        self.total -= requests.len();
        requests.sort_by_key(|r| r.id);
        Some(requests)
    }

    /// Total number of queued requests across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
