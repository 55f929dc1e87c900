//! Lifecycle tracking for admitted requests.
//!
//! Every admitted request moves strictly forward through
//! `Pending → Assigned → Onboard → Completed`.  A transition out of order
//! means the dispatcher or the elevator model broke an invariant, and
//! panics.

use dd_building::DWELL_TICKS;
use dd_core::{ElevatorId, RequestId, Tick};
use dd_dispatch::Assignment;
use dd_requests::Request;

use crate::RequestMetrics;

#[cfg(feature = "fx-hash")]
type LedgerMap<V> = rustc_hash::FxHashMap<RequestId, V>;
#[cfg(not(feature = "fx-hash"))]
type LedgerMap<V> = std::collections::HashMap<RequestId, V>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequestState {
    Pending,
    Assigned,
    Onboard,
    Completed,
}

#[derive(Clone, Debug)]
pub struct LedgerEntry {
    pub request:    Request,
    pub state:      RequestState,
    pub assignment: Option<Assignment>,
    pub pickup:     Option<Tick>,
    pub dropoff:    Option<Tick>,
}

/// All admitted requests, keyed by id.
#[derive(Default, Debug)]
pub struct RequestLedger {
    entries: LedgerMap<LedgerEntry>,
    /// Requests not yet completed.
    open:    usize,
}

impl RequestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly admitted request as `Pending`.
    ///
    /// # Panics
    /// Panics if the id is already present.
    pub fn admit(&mut self, request: Request) {
        let previous = self.entries.insert(
            request.id,
            LedgerEntry {
                request,
                state:      RequestState::Pending,
                assignment: None,
                pickup:     None,
                dropoff:    None,
            },
        );
        assert!(previous.is_none(), "{} admitted twice", request.id);
        self.open += 1;
    }

    /// `Pending → Assigned`.
    pub fn assign(&mut self, id: RequestId, assignment: Assignment) {
        let entry = self.advance(id, RequestState::Pending, RequestState::Assigned);
        entry.assignment = Some(assignment);
    }

    /// `Assigned → Onboard` at `tick`, aboard `elevator`.
    pub fn board(&mut self, id: RequestId, elevator: ElevatorId, tick: Tick) {
        let entry = self.advance(id, RequestState::Assigned, RequestState::Onboard);
        check_elevator(entry, elevator);
        entry.pickup = Some(tick);
    }

    /// `Onboard → Completed` at `tick`; returns the request's metrics.
    pub fn complete(&mut self, id: RequestId, elevator: ElevatorId, tick: Tick) -> RequestMetrics {
        let entry = self.advance(id, RequestState::Onboard, RequestState::Completed);
        check_elevator(entry, elevator);
        entry.dropoff = Some(tick);
        let (request, pickup, assignment) = (entry.request, entry.pickup, entry.assignment);
        self.open -= 1;

        let Some(pickup) = pickup else {
            unreachable!("{id} onboard without a pickup tick");
        };
        let Some(assignment) = assignment else {
            unreachable!("{id} onboard without an assignment");
        };
        RequestMetrics {
            request:          id,
            elevator,
            source:           request.source,
            dest:             request.dest,
            arrival:          request.arrival,
            pickup,
            dropoff:          tick,
            wait:             pickup - request.arrival,
            travel:           (tick - pickup).saturating_sub(DWELL_TICKS),
            estimated_wait:   assignment.wait(),
            estimated_travel: assignment.travel(),
        }
    }

    pub fn get(&self, id: RequestId) -> Option<&LedgerEntry> {
        self.entries.get(&id)
    }

    pub fn state(&self, id: RequestId) -> Option<RequestState> {
        self.entries.get(&id).map(|e| e.state)
    }

    /// Number of admitted requests not yet completed.
    #[inline]
    pub fn open(&self) -> usize {
        self.open
    }

    /// Number of admitted requests.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn advance(&mut self, id: RequestId, from: RequestState, to: RequestState) -> &mut LedgerEntry {
        let Some(entry) = self.entries.get_mut(&id) else {
            panic!("{id} is not in the ledger");
        };
        assert_eq!(entry.state, from, "{id} cannot move to {to:?} from {:?}", entry.state);
        entry.state = to;
        entry
    }
}

fn check_elevator(entry: &LedgerEntry, elevator: ElevatorId) {
    let assigned = entry.assignment.map(|a| a.elevator());
    assert_eq!(
        assigned,
        Some(elevator),
        "{} serviced by elevator {elevator} but assigned to {assigned:?}",
        entry.request.id,
    );
}
