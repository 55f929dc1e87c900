//! `dd-dispatch`: choosing an elevator and plan positions for each request.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`policy`]   | `DispatchPolicy` trait, `InsertionDispatcher`, `dispatch` |
//! | [`search`]   | per-elevator candidate search: `best_offer`, `append_offer` |
//! | [`offer`]    | `Offer`, `Assignment`                                     |
//!
//! # Algorithm
//!
//! For every elevator, every pair of gaps `(source_gap, dest_gap)` in its
//! current plan is a potential place for the request's pickup and dropoff
//! stops.  A pair is a candidate when
//!
//! 1. each new floor lies *en route* between the stops around its gap
//!    (the car's current floor stands in before the first stop; the gap
//!    after the last stop accepts anything), and a pickup and dropoff
//!    sharing a gap follow that gap's direction;
//! 2. the car never carries more than `capacity` passengers while the
//!    passenger is aboard.
//!
//! Each candidate is priced on the provisional floor sequence with
//! [`dd_building::time_to_reach`] and [`dd_building::ride_time`]:
//!
//! ```text
//! total = wait (until the pickup stop) + travel (pickup → dropoff)
//! ```
//!
//! The request goes to the cheapest candidate overall, lowest elevator id
//! on ties.  Committed stops are never reordered, so appending at the tail
//! is always possible and every request is eventually served.
//!
//! The dispatcher holds no state and never mutates the building; the
//! caller applies the returned [`Assignment`] with
//! [`Building::commit`][dd_building::Building::commit].

pub mod offer;
pub mod policy;
pub mod search;


pub use offer::{Assignment, Offer};
pub use policy::{DispatchPolicy, InsertionDispatcher, dispatch};
pub use search::{append_offer, best_offer};
