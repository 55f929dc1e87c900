//! Seeded synthetic workloads.
//!
//! Used when no request file is given.  A workload mixes lobby traffic
//! (calls from the ground floor upward) with inter-floor traffic between
//! uniformly chosen floors, arriving uniformly over a horizon of ticks.

use dd_core::{Floor, SimRng};

use crate::CallRequest;

/// Parameters of a generated workload.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkloadSpec {
    /// Number of requests to generate.
    pub requests:    u32,
    /// Floors in the building; must be at least 2.
    pub floor_count: u32,
    /// Arrivals fall in `[0, horizon)`.
    pub horizon:     u64,
    /// Probability that a request starts at the ground floor.
    pub lobby_share: f64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            requests:    1_000,
            floor_count: 100,
            horizon:     3_600,
            lobby_share: 0.3,
        }
    }
}

impl WorkloadSpec {
    /// Generate the workload for `seed`.
    ///
    /// Ids run `1..=requests`, assigned in arrival order; the result is
    /// sorted by `(time, id)`.  Every request has distinct in-range floors.
    /// Returns an empty workload if the building has fewer than two floors.
    pub fn generate(&self, seed: u64) -> Vec<CallRequest> {
        if self.floor_count < 2 || self.requests == 0 {
            return Vec::new();
        }
        let mut root = SimRng::new(seed);
        let mut arrivals = root.child(0);
        let mut floors = root.child(1);

        let horizon = self.horizon.max(1);
        let mut times: Vec<u64> = (0..self.requests)
            .map(|_| arrivals.gen_range(0..horizon))
            .collect();
        times.sort_unstable();

        times
            .into_iter()
            .zip(1u32..)
            .map(|(time, id)| {
                let (source, dest) = self.pick_floors(&mut floors);
                CallRequest::new(time as i64, id, source.0 as i64, dest.0 as i64)
            })
            .collect()
    }

    fn pick_floors(&self, rng: &mut SimRng) -> (Floor, Floor) {
        let top = self.floor_count;
        if rng.gen_bool(self.lobby_share) {
            return (Floor::GROUND, Floor(rng.gen_range(2..=top)));
        }
        let source = rng.gen_range(1..=top);
        // Draw from the remaining top - 1 floors and skip over `source`.
        let mut dest = rng.gen_range(1..top);
        if dest >= source {
            dest += 1;
        }
        (Floor(source), Floor(dest))
    }
}
