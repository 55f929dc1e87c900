//! Priced insertion candidates.

use dd_building::Insertion;
use dd_core::ElevatorId;

/// One elevator's price for carrying a request with a given insertion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offer {
    pub elevator:  ElevatorId,
    pub insertion: Insertion,
    /// Ticks from now until the car halts at the pickup stop.
    pub wait:      u64,
    /// Ticks from the pickup stop to the dropoff stop.
    pub travel:    u64,
}

impl Offer {
    #[inline]
    pub fn total(&self) -> u64 {
        self.wait + self.travel
    }

    /// Ordering key within one elevator: total, then wait, then earliest
    /// positions.
    #[inline]
    pub(crate) fn rank(&self) -> (u64, u64, usize, usize) {
        (self.total(), self.wait, self.insertion.source_index, self.insertion.dest_index)
    }
}

/// The dispatcher's decision for one request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub offer:    Offer,
    /// `true` when no elevator had a feasible candidate and the request was
    /// appended by the fallback rule.
    pub fallback: bool,
}

impl Assignment {
    #[inline]
    pub fn elevator(&self) -> ElevatorId {
        self.offer.elevator
    }

    #[inline]
    pub fn insertion(&self) -> Insertion {
        self.offer.insertion
    }

    #[inline]
    pub fn wait(&self) -> u64 {
        self.offer.wait
    }

    #[inline]
    pub fn travel(&self) -> u64 {
        self.offer.travel
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.offer.total()
    }
}
