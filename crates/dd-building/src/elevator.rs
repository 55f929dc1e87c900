//! One elevator car: position, plan, and passenger manifest.

use std::collections::BTreeSet;

use dd_core::{ElevatorId, Floor, RequestId, Tick};
use log::trace;

use crate::{ElevatorSnapshot, Insertion, Plan, PlanResult, Stop};

/// Observable movement state, updated by every [`Elevator::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElevatorStatus {
    #[default]
    Idle,
    MovingUp,
    MovingDown,
    AtStop,
}

impl ElevatorStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ElevatorStatus::Idle       => "idle",
            ElevatorStatus::MovingUp   => "moving_up",
            ElevatorStatus::MovingDown => "moving_down",
            ElevatorStatus::AtStop     => "at_stop",
        }
    }
}

/// What an elevator did during one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Empty plan; the elevator stayed put.
    Idle,
    /// Travelled one floor toward the next stop.
    Moved { from: Floor, to: Floor },
    /// Halted at `floor` and serviced the front stop.
    Serviced {
        floor:    Floor,
        alighted: Vec<RequestId>,
        boarded:  Vec<RequestId>,
    },
}

/// An elevator car.
///
/// # Invariants
///
/// - `onboard.len() <= capacity` at all times.
/// - Every id in `onboard` has exactly one dropoff stop in `plan`.
/// - `plan` is consumed strictly front to back.
///
/// The dispatcher only ever touches `plan` (through
/// [`assign`][Self::assign]); position and manifest change only in
/// [`step`][Self::step].
#[derive(Clone, Debug)]
pub struct Elevator {
    pub id:       ElevatorId,
    pub floor:    Floor,
    pub capacity: u32,
    pub status:   ElevatorStatus,
    plan:         Plan,
    onboard:      BTreeSet<RequestId>,
}

impl Elevator {
    /// An idle, empty elevator at `floor`.
    pub fn new(id: ElevatorId, floor: Floor, capacity: u32) -> Self {
        Self {
            id,
            floor,
            capacity,
            status:  ElevatorStatus::Idle,
            plan:    Plan::new(),
            onboard: BTreeSet::new(),
        }
    }

    /// Replace the plan wholesale (scenario setup).
    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plan = plan;
        self
    }

    /// Seed the passenger manifest (scenario setup).  Each passenger must
    /// have a dropoff stop in the plan.
    pub fn with_onboard(mut self, passengers: impl IntoIterator<Item = RequestId>) -> Self {
        self.onboard.extend(passengers);
        self
    }

    #[inline]
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    #[inline]
    pub fn onboard(&self) -> &BTreeSet<RequestId> {
        &self.onboard
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.plan.is_empty()
    }

    /// Occupancy after each plan stop, starting from the current manifest.
    pub fn load_profile(&self) -> Vec<usize> {
        self.plan.load_profile(self.onboard.len())
    }

    /// Commit `request`'s pickup and dropoff stops into the plan.
    ///
    /// # Panics
    /// Panics if the committed plan would exceed `capacity` anywhere; the
    /// dispatcher must never propose such an insertion.
    pub fn assign(
        &mut self,
        request: RequestId,
        source:  Floor,
        dest:    Floor,
        at:      Insertion,
    ) -> PlanResult<()> {
        self.plan.insert_request(request, source, dest, at)?;
        let capacity = self.capacity as usize;
        if let Some(peak) = self.load_profile().into_iter().max() {
            assert!(
                peak <= capacity,
                "elevator {} over capacity after assigning {request}: peak {peak} > {capacity}",
                self.id,
            );
        }
        Ok(())
    }

    /// Advance one tick: service the front stop if the car is at its floor,
    /// otherwise move one floor toward it.
    ///
    /// # Panics
    /// Panics on an empty stop, on a passenger alighting who is not aboard,
    /// or on a capacity overflow.  All three are dispatcher defects.
    pub fn step(&mut self) -> StepOutcome {
        let Some(next) = self.plan.front() else {
            self.status = ElevatorStatus::Idle;
            return StepOutcome::Idle;
        };

        if next.floor != self.floor {
            let from = self.floor;
            self.floor = from.step_toward(next.floor);
            self.status = if self.floor > from {
                ElevatorStatus::MovingUp
            } else {
                ElevatorStatus::MovingDown
            };
            trace!("elevator {} moved {from} -> {}", self.id, self.floor);
            return StepOutcome::Moved { from, to: self.floor };
        }

        let Some(Stop { floor, board, alight }) = self.plan.pop_front() else {
            unreachable!("front stop vanished");
        };
        assert!(
            !(board.is_empty() && alight.is_empty()),
            "elevator {} reached an empty stop at floor {floor}",
            self.id,
        );
        self.status = ElevatorStatus::AtStop;

        for request in &alight {
            assert!(
                self.onboard.remove(request),
                "{request} alighting from elevator {} at floor {floor} was never aboard",
                self.id,
            );
        }
        self.onboard.extend(board.iter().copied());
        assert!(
            self.onboard.len() <= self.capacity as usize,
            "elevator {} over capacity at floor {floor}: {} > {}",
            self.id,
            self.onboard.len(),
            self.capacity,
        );
        trace!(
            "elevator {} serviced floor {floor}: {} off, {} on",
            self.id,
            alight.len(),
            board.len(),
        );

        StepOutcome::Serviced { floor, alighted: alight, boarded: board }
    }

    /// Observational view of this elevator at `tick`.
    pub fn snapshot(&self, tick: Tick) -> ElevatorSnapshot {
        ElevatorSnapshot {
            tick,
            elevator:   self.id,
            floor:      self.floor,
            status:     self.status,
            onboard:    self.onboard.len(),
            next_stops: self.plan.floors(),
        }
    }
}
