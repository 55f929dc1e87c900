//! Admission checks for incoming requests.

use std::collections::HashSet;

use dd_core::{Floor, RequestId, Tick};

use crate::{CallRequest, Request, RequestRejection};

/// Validates raw requests against the building and against ids already
/// admitted.
///
/// An id counts as taken only once a request carrying it has been admitted;
/// a rejected request does not reserve its id.
pub struct RequestValidator {
    floor_count: u32,
    admitted:    HashSet<RequestId>,
}

impl RequestValidator {
    pub fn new(floor_count: u32) -> Self {
        Self { floor_count, admitted: HashSet::new() }
    }

    /// Check `call` and, if valid, record its id and return the admitted
    /// [`Request`].
    pub fn admit(&mut self, call: &CallRequest) -> Result<Request, RequestRejection> {
        let id = call.id;
        if call.time < 0 {
            return Err(RequestRejection::NegativeArrival { id, time: call.time });
        }
        let source = self.floor(id, call.source)?;
        let dest = self.floor(id, call.dest)?;
        if source == dest {
            return Err(RequestRejection::SameFloor { id, floor: call.source });
        }
        if !self.admitted.insert(id) {
            return Err(RequestRejection::DuplicateId { id });
        }
        Ok(Request { id, arrival: Tick(call.time as u64), source, dest })
    }

    /// Number of requests admitted so far.
    pub fn admitted_count(&self) -> usize {
        self.admitted.len()
    }

    fn floor(&self, id: RequestId, raw: i64) -> Result<Floor, RequestRejection> {
        if raw < 1 || raw > self.floor_count as i64 {
            return Err(RequestRejection::FloorOutOfRange {
                id,
                floor: raw,
                floor_count: self.floor_count,
            });
        }
        Ok(Floor(raw as u32))
    }
}
