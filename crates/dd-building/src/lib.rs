//! `dd-building`: elevator plans and building state.
//!
//! # Plan model
//!
//! Each elevator owns a [`Plan`]: an ordered list of [`Stop`]s, each tagged
//! with the requests that board and alight there.  Stops are only ever
//! inserted (never reordered or merged) and are consumed from the front as
//! the elevator services them.
//!
//! ```text
//!  floor 3          plan: [ 4 (board r7) | 6 (alight r2) | 8 (alight r7) ]
//!  onboard: {r2}
//! ```
//!
//! # Timing model
//!
//! One tick moves an elevator one floor or services one stop.  The cost
//! primitives in [`timing`] turn a floor sequence into wait and ride times;
//! the dispatcher evaluates candidate insertions with them.
//!
//! # What lives here
//!
//! | Module          | Contents                                         |
//! |-----------------|--------------------------------------------------|
//! | [`stop`]        | `Stop`                                           |
//! | [`plan`]        | `Plan`, `Insertion`, load profile                |
//! | [`timing`]      | `time_to_reach`, `ride_time`, `DWELL_TICKS`      |
//! | [`elevator`]    | `Elevator`, `ElevatorStatus`, `StepOutcome`      |
//! | [`building`]    | `Building`                                       |
//! | [`snapshot`]    | `ElevatorSnapshot`                               |

pub mod building;
pub mod elevator;
pub mod error;
pub mod plan;
pub mod snapshot;
pub mod stop;
pub mod timing;


pub use building::Building;
pub use elevator::{Elevator, ElevatorStatus, StepOutcome};
pub use error::{PlanError, PlanResult};
pub use plan::{Insertion, Plan};
pub use snapshot::ElevatorSnapshot;
pub use stop::Stop;
pub use timing::{DWELL_TICKS, ride_time, time_to_reach};
