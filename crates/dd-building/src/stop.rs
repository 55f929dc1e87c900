//! A single committed halt in an elevator's plan.

use dd_core::{Floor, RequestId};

/// A floor at which the elevator must halt, with the requests that alight
/// and board there.
///
/// Alighting is processed before boarding when the stop is serviced.  Every
/// stop is created by an insertion that carries at least one request id; an
/// empty stop is a defect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub floor:  Floor,
    pub board:  Vec<RequestId>,
    pub alight: Vec<RequestId>,
}

impl Stop {
    pub fn new(floor: Floor, board: Vec<RequestId>, alight: Vec<RequestId>) -> Self {
        Self { floor, board, alight }
    }

    /// A stop where `request` boards.
    pub fn pickup(floor: Floor, request: RequestId) -> Self {
        Self::new(floor, vec![request], vec![])
    }

    /// A stop where `request` alights.
    pub fn dropoff(floor: Floor, request: RequestId) -> Self {
        Self::new(floor, vec![], vec![request])
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.board.is_empty() && self.alight.is_empty()
    }
}
