//! The ordered stop plan of one elevator.

use dd_core::{Floor, RequestId};

use crate::{PlanError, PlanResult, Stop};

/// Final positions of a request's pickup and dropoff stops, as indices into
/// the plan *after* both stops have been inserted.
///
/// The pickup stop is inserted first at `source_index`; the dropoff stop is
/// then inserted at `dest_index`, which is always greater.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insertion {
    pub source_index: usize,
    pub dest_index:   usize,
}

impl Insertion {
    /// Build from gap positions in the *existing* plan: the pickup goes
    /// before existing stop `source_gap` and the dropoff before existing stop
    /// `dest_gap` (`source_gap <= dest_gap <= len`).
    #[inline]
    pub fn from_gaps(source_gap: usize, dest_gap: usize) -> Self {
        debug_assert!(source_gap <= dest_gap);
        Self { source_index: source_gap, dest_index: dest_gap + 1 }
    }

    /// Both stops appended after the last stop of a plan of length `len`.
    #[inline]
    pub fn append(len: usize) -> Self {
        Self::from_gaps(len, len)
    }

    /// Check the insertion against a plan of length `len`.
    pub fn validate(&self, len: usize) -> PlanResult<()> {
        if self.source_index > len {
            return Err(PlanError::IndexOutOfRange { index: self.source_index, len });
        }
        if self.dest_index <= self.source_index {
            return Err(PlanError::DestinationBeforeSource {
                source_index: self.source_index,
                dest_index:   self.dest_index,
            });
        }
        if self.dest_index > len + 1 {
            return Err(PlanError::IndexOutOfRange { index: self.dest_index, len: len + 1 });
        }
        Ok(())
    }
}

/// An elevator's committed stops, serviced strictly front to back.
///
/// Stops at the same floor are kept as separate consecutive entries; they
/// are never merged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    stops: Vec<Stop>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a plan from explicit stops.  Rejects empty stops.
    pub fn from_stops(stops: Vec<Stop>) -> PlanResult<Self> {
        if let Some(empty) = stops.iter().find(|s| s.is_empty()) {
            return Err(PlanError::EmptyStop(empty.floor));
        }
        Ok(Self { stops })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[inline]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// The next stop to service.
    #[inline]
    pub fn front(&self) -> Option<&Stop> {
        self.stops.first()
    }

    /// Stop floors in service order.
    pub fn floors(&self) -> Vec<Floor> {
        self.stops.iter().map(|s| s.floor).collect()
    }

    /// Return a copy of this plan with a new stop at `index`.
    ///
    /// Existing stops keep their relative order.  `index` may equal `len()`
    /// (append).
    pub fn insert_stop(
        &self,
        index:  usize,
        floor:  Floor,
        board:  Vec<RequestId>,
        alight: Vec<RequestId>,
    ) -> PlanResult<Plan> {
        let mut next = self.clone();
        next.insert(index, Stop::new(floor, board, alight))?;
        Ok(next)
    }

    /// Insert `stop` at `index` in place.
    pub fn insert(&mut self, index: usize, stop: Stop) -> PlanResult<()> {
        if index > self.stops.len() {
            return Err(PlanError::IndexOutOfRange { index, len: self.stops.len() });
        }
        if stop.is_empty() {
            return Err(PlanError::EmptyStop(stop.floor));
        }
        self.stops.insert(index, stop);
        Ok(())
    }

    /// Return a copy of this plan with `request`'s pickup and dropoff stops
    /// inserted at `at`.
    pub fn with_request(
        &self,
        request: RequestId,
        source:  Floor,
        dest:    Floor,
        at:      Insertion,
    ) -> PlanResult<Plan> {
        let mut next = self.clone();
        next.insert_request(request, source, dest, at)?;
        Ok(next)
    }

    /// In-place form of [`with_request`][Self::with_request].  The plan is
    /// unchanged if the insertion is invalid.
    pub fn insert_request(
        &mut self,
        request: RequestId,
        source:  Floor,
        dest:    Floor,
        at:      Insertion,
    ) -> PlanResult<()> {
        at.validate(self.stops.len())?;
        self.stops.insert(at.source_index, Stop::pickup(source, request));
        self.stops.insert(at.dest_index, Stop::dropoff(dest, request));
        Ok(())
    }

    /// Remove and return the front stop.
    pub(crate) fn pop_front(&mut self) -> Option<Stop> {
        if self.stops.is_empty() {
            None
        } else {
            Some(self.stops.remove(0))
        }
    }

    /// Ticks until an elevator at `current` halts at stop `index`.
    ///
    /// See [`crate::timing::time_to_reach`].
    pub fn time_to_reach(&self, current: Floor, index: usize) -> u64 {
        crate::timing::time_to_reach(current, &self.floors(), index)
    }

    /// Occupancy right after each stop is serviced, starting from `onboard`
    /// passengers already in the car.
    ///
    /// Element `i` is the load carried from stop `i` to stop `i + 1`.
    pub fn load_profile(&self, onboard: usize) -> Vec<usize> {
        let mut load = onboard;
        self.stops
            .iter()
            .map(|stop| {
                debug_assert!(
                    stop.alight.len() <= load,
                    "more passengers alight at floor {} than are aboard",
                    stop.floor
                );
                load = load.saturating_sub(stop.alight.len()) + stop.board.len();
                load
            })
            .collect()
    }
}
