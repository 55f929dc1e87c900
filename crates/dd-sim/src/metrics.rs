//! Per-request metrics and the run summary.

use dd_core::{ElevatorId, Floor, RequestId, Tick};

/// Timing of one completed request.
///
/// `wait` runs from arrival until the tick the car services the pickup
/// stop.  `travel` runs from the end of that stop to the tick the car
/// services the dropoff stop, so neither dwell is counted.  The
/// dispatcher's quoted times are kept alongside; realized times are never
/// shorter, since later insertions can only add stops ahead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestMetrics {
    pub request:          RequestId,
    pub elevator:         ElevatorId,
    pub source:           Floor,
    pub dest:             Floor,
    pub arrival:          Tick,
    pub pickup:           Tick,
    pub dropoff:          Tick,
    pub wait:             u64,
    pub travel:           u64,
    pub estimated_wait:   u64,
    pub estimated_travel: u64,
}

impl RequestMetrics {
    #[inline]
    pub fn total(&self) -> u64 {
        self.wait + self.travel
    }
}

/// Min / max / mean / median of one metric.  All zero when empty.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub min:    u64,
    pub max:    u64,
    pub mean:   f64,
    pub median: f64,
}

impl Stats {
    /// Compute over `values`; the slice is sorted in place.
    pub fn of(values: &mut [u64]) -> Stats {
        if values.is_empty() {
            return Stats::default();
        }
        values.sort_unstable();
        let n = values.len();
        let sum: u64 = values.iter().sum();
        let median = if n % 2 == 1 {
            values[n / 2] as f64
        } else {
            (values[n / 2 - 1] + values[n / 2]) as f64 / 2.0
        };
        Stats {
            min: values[0],
            max: values[n - 1],
            mean: sum as f64 / n as f64,
            median,
        }
    }
}

/// Aggregate over every completed request of a run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsSummary {
    pub served:   usize,
    pub rejected: usize,
    pub wait:     Stats,
    pub travel:   Stats,
    pub total:    Stats,
}

/// Owns every completed request's metrics.
#[derive(Default, Debug)]
pub struct MetricsAggregator {
    completed: Vec<RequestMetrics>,
    rejected:  usize,
}

impl MetricsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, metrics: RequestMetrics) {
        self.completed.push(metrics);
    }

    pub fn record_rejection(&mut self) {
        self.rejected += 1;
    }

    /// Completed requests in completion order.
    pub fn completed(&self) -> &[RequestMetrics] {
        &self.completed
    }

    pub fn summary(&self) -> MetricsSummary {
        let mut wait: Vec<u64> = self.completed.iter().map(|m| m.wait).collect();
        let mut travel: Vec<u64> = self.completed.iter().map(|m| m.travel).collect();
        let mut total: Vec<u64> = self.completed.iter().map(RequestMetrics::total).collect();
        MetricsSummary {
            served:   self.completed.len(),
            rejected: self.rejected,
            wait:     Stats::of(&mut wait),
            travel:   Stats::of(&mut travel),
            total:    Stats::of(&mut total),
        }
    }
}
