//! The building: floor bounds plus the elevator fleet.

use dd_core::{BuildingConfig, DdError, DdResult, ElevatorId, Floor, RequestId};

use crate::{Elevator, Insertion, PlanError, PlanResult};

/// Fixed floor range `[1, floor_count]` and the elevators serving it.
///
/// Elevator identity is its index in [`elevators`][Self::elevators].
#[derive(Clone, Debug)]
pub struct Building {
    floor_count: u32,
    elevators:   Vec<Elevator>,
}

impl Building {
    /// Build from a validated config: every elevator starts idle at the
    /// ground floor.
    pub fn new(config: &BuildingConfig) -> DdResult<Self> {
        config.validate()?;
        let elevators = (0..config.elevator_count)
            .map(|i| Elevator::new(ElevatorId(i as u16), Floor::GROUND, config.capacity))
            .collect();
        Ok(Self { floor_count: config.floor_count, elevators })
    }

    /// Build from explicit elevators, e.g. to start a scenario mid-run.
    ///
    /// Elevator ids must equal their position, and every elevator must sit
    /// inside the building with a positive capacity.
    pub fn with_elevators(floor_count: u32, elevators: Vec<Elevator>) -> DdResult<Self> {
        if floor_count == 0 {
            return Err(DdError::Config("floor_count must be at least 1".into()));
        }
        if elevators.is_empty() {
            return Err(DdError::Config("a building needs at least one elevator".into()));
        }
        for (i, e) in elevators.iter().enumerate() {
            if e.id.index() != i {
                return Err(DdError::Config(format!("elevator at position {i} has id {}", e.id)));
            }
            if e.capacity == 0 {
                return Err(DdError::Config(format!("elevator {} has zero capacity", e.id)));
            }
            if e.floor < Floor::GROUND || e.floor > Floor(floor_count) {
                return Err(DdError::Config(format!(
                    "elevator {} is at floor {} outside 1..={floor_count}",
                    e.id, e.floor
                )));
            }
        }
        Ok(Self { floor_count, elevators })
    }

    #[inline]
    pub fn floor_count(&self) -> u32 {
        self.floor_count
    }

    /// Elevators in identity order.
    #[inline]
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.elevators.get(id.index())
    }

    /// Mutable access for the simulation's advance phase.
    pub fn elevators_mut(&mut self) -> &mut [Elevator] {
        &mut self.elevators
    }

    /// Apply a dispatch decision: insert `request`'s stops into elevator
    /// `id`'s plan.
    pub fn commit(
        &mut self,
        id:      ElevatorId,
        request: RequestId,
        source:  Floor,
        dest:    Floor,
        at:      Insertion,
    ) -> PlanResult<()> {
        self.elevators
            .get_mut(id.index())
            .ok_or(PlanError::UnknownElevator(id))?
            .assign(request, source, dest, at)
    }

    /// `true` when no elevator has a pending stop.
    pub fn all_idle(&self) -> bool {
        self.elevators.iter().all(Elevator::is_idle)
    }
}
