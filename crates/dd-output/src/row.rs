//! Plain data row types written by output backends.

use dd_building::ElevatorSnapshot;
use dd_requests::{CallRequest, RequestRejection};
use dd_sim::{RequestMetrics, Stats};

/// One elevator's state at the end of a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSnapshotRow {
    pub tick:        u64,
    pub elevator_id: u16,
    pub floor:       u32,
    pub status:      &'static str,
    pub onboard:     u32,
    /// Remaining stop floors, space separated, in service order.
    pub next_stops:  String,
}

impl From<&ElevatorSnapshot> for ElevatorSnapshotRow {
    fn from(s: &ElevatorSnapshot) -> Self {
        let next_stops = s
            .next_stops
            .iter()
            .map(|f| f.0.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            tick:        s.tick.0,
            elevator_id: s.elevator.0,
            floor:       s.floor.0,
            status:      s.status.as_str(),
            onboard:     s.onboard as u32,
            next_stops,
        }
    }
}

/// One completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLogRow {
    pub request_id:       u32,
    pub elevator_id:      u16,
    pub source:           u32,
    pub dest:             u32,
    pub call_tick:        u64,
    pub pickup_tick:      u64,
    pub dropoff_tick:     u64,
    pub wait:             u64,
    pub travel:           u64,
    pub total:            u64,
    pub estimated_wait:   u64,
    pub estimated_travel: u64,
}

impl From<&RequestMetrics> for RequestLogRow {
    fn from(m: &RequestMetrics) -> Self {
        Self {
            request_id:       m.request.0,
            elevator_id:      m.elevator.0,
            source:           m.source.0,
            dest:             m.dest.0,
            call_tick:        m.arrival.0,
            pickup_tick:      m.pickup.0,
            dropoff_tick:     m.dropoff.0,
            wait:             m.wait,
            travel:           m.travel,
            total:            m.total(),
            estimated_wait:   m.estimated_wait,
            estimated_travel: m.estimated_travel,
        }
    }
}

/// One request refused at admission, with its raw input values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectionRow {
    pub request_id: u32,
    pub time:       i64,
    pub source:     i64,
    pub dest:       i64,
    pub reason:     &'static str,
}

impl RejectionRow {
    pub fn new(call: &CallRequest, reason: &RequestRejection) -> Self {
        Self {
            request_id: call.id.0,
            time:       call.time,
            source:     call.source,
            dest:       call.dest,
            reason:     reason.reason(),
        }
    }
}

/// Aggregate statistics of one metric over all served requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    /// `wait`, `travel` or `total`.
    pub metric: &'static str,
    pub count:  u64,
    pub min:    u64,
    pub max:    u64,
    pub mean:   f64,
    pub median: f64,
}

impl SummaryRow {
    pub fn new(metric: &'static str, count: usize, stats: &Stats) -> Self {
        Self {
            metric,
            count:  count as u64,
            min:    stats.min,
            max:    stats.max,
            mean:   stats.mean,
            median: stats.median,
        }
    }
}
