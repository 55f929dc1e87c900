//! Raw and admitted request records.

use dd_core::{Floor, RequestId, Tick};

/// A request as read from input, before admission checks.
///
/// Fields are signed so that negative times or floors survive parsing and
/// are reported by [`RequestValidator`][crate::RequestValidator] instead of
/// failing the whole load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallRequest {
    pub time:   i64,
    pub id:     RequestId,
    pub source: i64,
    pub dest:   i64,
}

impl CallRequest {
    pub fn new(time: i64, id: u32, source: i64, dest: i64) -> Self {
        Self { time, id: RequestId(id), source, dest }
    }
}

/// An admitted request: arrival on a non-negative tick, distinct floors
/// inside the building, unique id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    pub id:      RequestId,
    pub arrival: Tick,
    pub source:  Floor,
    pub dest:    Floor,
}
