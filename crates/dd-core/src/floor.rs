//! Floor numbers and the travel-distance metric.

use std::fmt;

/// A floor number.  Buildings number floors from 1 ([`Floor::GROUND`]).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    /// The lowest floor of every building and the starting floor of every
    /// elevator.
    pub const GROUND: Floor = Floor(1);

    /// Number of floors between `self` and `other`, the move cost in ticks.
    #[inline]
    pub fn distance(self, other: Floor) -> u64 {
        self.0.abs_diff(other.0) as u64
    }

    /// One floor closer to `target`, or `self` if already there.
    #[inline]
    pub fn step_toward(self, target: Floor) -> Floor {
        match self.cmp(&target) {
            std::cmp::Ordering::Less    => Floor(self.0 + 1),
            std::cmp::Ordering::Greater => Floor(self.0 - 1),
            std::cmp::Ordering::Equal   => self,
        }
    }

    /// `true` if `self` lies on the closed segment between `a` and `b`, in
    /// either direction.
    #[inline]
    pub fn is_between(self, a: Floor, b: Floor) -> bool {
        a.min(b) <= self && self <= a.max(b)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
