//! The `DispatchPolicy` trait and the insertion dispatcher.

use dd_building::Building;
use dd_requests::Request;
use log::debug;

use crate::{Assignment, Offer, append_offer, best_offer};

/// Decides which elevator serves a request and where its stops go.
///
/// Implementations read the building and return a decision; they never
/// mutate it.  The simulation applies the result with
/// [`Building::commit`].
pub trait DispatchPolicy {
    fn assign(&self, building: &Building, request: &Request) -> Assignment;
}

/// Minimum total-time insertion across all elevators, with append fallback.
#[derive(Copy, Clone, Debug, Default)]
pub struct InsertionDispatcher;

impl DispatchPolicy for InsertionDispatcher {
    fn assign(&self, building: &Building, request: &Request) -> Assignment {
        dispatch(building, request)
    }
}

/// Choose the elevator and insertion for `request`.
///
/// Elevators are scanned in id order and only a strictly cheaper total
/// replaces the current winner, so ties go to the lowest id.  If no
/// elevator has a feasible candidate, both stops are appended to the
/// elevator with the cheapest append.
///
/// # Panics
/// Panics if the building has no elevators; [`Building`] constructors
/// rule that out.
pub fn dispatch(building: &Building, request: &Request) -> Assignment {
    let best = cheapest(building.elevators().iter().filter_map(|e| best_offer(e, request)));

    let assignment = match best {
        Some(offer) => Assignment { offer, fallback: false },
        None => {
            let offer = cheapest(building.elevators().iter().map(|e| append_offer(e, request)))
                .expect("building has at least one elevator");
            Assignment { offer, fallback: true }
        }
    };

    debug!(
        "{} {}->{} @ {}: elevator {} stops {}/{} wait {} travel {}{}",
        request.id,
        request.source,
        request.dest,
        request.arrival,
        assignment.elevator(),
        assignment.insertion().source_index,
        assignment.insertion().dest_index,
        assignment.wait(),
        assignment.travel(),
        if assignment.fallback { " (fallback)" } else { "" },
    );
    assignment
}

/// First offer with the minimum total, in iteration order.
fn cheapest(offers: impl Iterator<Item = Offer>) -> Option<Offer> {
    offers.fold(None, |best: Option<Offer>, offer| match best {
        Some(b) if b.total() <= offer.total() => Some(b),
        _ => Some(offer),
    })
}
