//! Candidate search within a single elevator's plan.
//!
//! Gaps are numbered against the *existing* plan: gap `i` sits just before
//! existing stop `i`, and gap `len` is the tail.  A pickup at gap `sg` and a
//! dropoff at gap `dg` (`sg <= dg`) end up at final indices `sg` and
//! `dg + 1` (see [`Insertion::from_gaps`]).

use dd_building::{Elevator, Insertion, ride_time, time_to_reach};
use dd_core::Floor;
use dd_requests::Request;

use crate::Offer;

/// The cheapest feasible insertion of `request` into `elevator`'s plan, or
/// `None` if every candidate breaks the route or capacity rules.
pub fn best_offer(elevator: &Elevator, request: &Request) -> Option<Offer> {
    let floors = elevator.plan().floors();
    let len = floors.len();
    let capacity = elevator.capacity as usize;
    let onboard = elevator.onboard().len();
    let loads = elevator.load_profile();
    let load_before = |gap: usize| if gap == 0 { onboard } else { loads[gap - 1] };

    let mut best: Option<Offer> = None;
    for sg in 0..=len {
        if !fits_gap(elevator.floor, &floors, sg, request.source) {
            continue;
        }
        if load_before(sg) + 1 > capacity {
            continue;
        }
        for dg in sg..=len {
            // The new passenger rides through existing stops sg..dg.
            // Extending the span only adds constraints, so stop at the first
            // overloaded stop.
            if dg > sg && loads[dg - 1] + 1 > capacity {
                break;
            }
            let routed = if dg == sg {
                fits_same_gap(elevator.floor, &floors, sg, request.source, request.dest)
            } else {
                fits_gap(elevator.floor, &floors, dg, request.dest)
            };
            if !routed {
                continue;
            }

            let offer = price(elevator, &floors, request, Insertion::from_gaps(sg, dg));
            if best.is_none_or(|b| offer.rank() < b.rank()) {
                best = Some(offer);
            }
        }
    }
    best
}

/// The price of appending `request` after the last stop, ignoring capacity.
///
/// Used by the fallback rule when no elevator has a feasible candidate.
pub fn append_offer(elevator: &Elevator, request: &Request) -> Offer {
    let floors = elevator.plan().floors();
    price(elevator, &floors, request, Insertion::append(floors.len()))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn price(elevator: &Elevator, floors: &[Floor], request: &Request, at: Insertion) -> Offer {
    let mut provisional = Vec::with_capacity(floors.len() + 2);
    provisional.extend_from_slice(floors);
    provisional.insert(at.source_index, request.source);
    provisional.insert(at.dest_index, request.dest);

    Offer {
        elevator:  elevator.id,
        insertion: at,
        wait:      time_to_reach(elevator.floor, &provisional, at.source_index),
        travel:    ride_time(&provisional, at.source_index, at.dest_index),
    }
}

/// Floor the car is at (or leaving) when it enters gap `gap`.
#[inline]
fn gap_start(current: Floor, floors: &[Floor], gap: usize) -> Floor {
    if gap == 0 { current } else { floors[gap - 1] }
}

/// `true` if a stop at `floor` placed in gap `gap` adds no detour.
fn fits_gap(current: Floor, floors: &[Floor], gap: usize, floor: Floor) -> bool {
    match floors.get(gap) {
        None => true,
        Some(&end) => floor.is_between(gap_start(current, floors, gap), end),
    }
}

/// `true` if a pickup at `source` followed by a dropoff at `dest` both fit
/// in gap `gap`, in the gap's direction of travel.
fn fits_same_gap(current: Floor, floors: &[Floor], gap: usize, source: Floor, dest: Floor) -> bool {
    let Some(&end) = floors.get(gap) else {
        return true;
    };
    let start = gap_start(current, floors, gap);
    if start < end {
        start <= source && source < dest && dest <= end
    } else if start > end {
        start >= source && source > dest && dest >= end
    } else {
        false
    }
}
