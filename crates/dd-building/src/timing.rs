//! Tick-cost primitives over a sequence of stop floors.
//!
//! Costs are counted in ticks: moving between floors `a` and `b` costs
//! `|a − b|`, and servicing a stop costs [`DWELL_TICKS`].  Both functions take
//! a plain floor slice so the dispatcher can price provisional plans without
//! building real [`Plan`][crate::Plan]s.
//!
//! A first stop at the elevator's current floor is the stop it is already
//! halted at: it costs no travel and no dwell.

use dd_core::Floor;

/// Ticks spent servicing one stop.
pub const DWELL_TICKS: u64 = 1;

/// Ticks until an elevator at `current` halts at `floors[index]`, having
/// serviced every stop before it.
///
/// # Panics
/// Panics if `index >= floors.len()`.
pub fn time_to_reach(current: Floor, floors: &[Floor], index: usize) -> u64 {
    assert!(
        index < floors.len(),
        "time_to_reach index {index} out of range for {} stops",
        floors.len()
    );
    let mut ticks = 0;
    let mut prev = current;
    for (i, &floor) in floors[..=index].iter().enumerate() {
        ticks += prev.distance(floor);
        if i == index {
            break;
        }
        ticks += dwell_at(current, floors, i);
        prev = floor;
    }
    ticks
}

/// Ticks a passenger spends riding from `floors[from]` to `floors[to]`:
/// travel between them plus one dwell per stop strictly in between.
///
/// Equivalent to `time_to_reach(to) − time_to_reach(from) − dwell(from)`.
///
/// # Panics
/// Panics unless `from < to < floors.len()`.
pub fn ride_time(floors: &[Floor], from: usize, to: usize) -> u64 {
    assert!(from < to && to < floors.len(), "invalid ride span {from}..{to}");
    let legs: u64 = floors[from..=to]
        .windows(2)
        .map(|w| w[0].distance(w[1]))
        .sum();
    let intermediate_stops = (to - from - 1) as u64;
    legs + intermediate_stops * DWELL_TICKS
}

/// Dwell charged for the stop at `index`, given the elevator's current floor.
#[inline]
pub fn dwell_at(current: Floor, floors: &[Floor], index: usize) -> u64 {
    if index == 0 && floors[0] == current { 0 } else { DWELL_TICKS }
}
