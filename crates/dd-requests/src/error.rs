use dd_core::RequestId;
use thiserror::Error;

/// Failure to read or write a request stream.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RequestResult<T> = Result<T, RequestError>;

/// Why a single request was refused at admission.
///
/// Rejections are per request: the run continues without the request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestRejection {
    #[error("{id}: arrival time {time} is negative")]
    NegativeArrival { id: RequestId, time: i64 },

    #[error("{id}: floor {floor} outside 1..={floor_count}")]
    FloorOutOfRange { id: RequestId, floor: i64, floor_count: u32 },

    #[error("{id}: source and destination are both floor {floor}")]
    SameFloor { id: RequestId, floor: i64 },

    #[error("{id}: duplicate request id")]
    DuplicateId { id: RequestId },
}

impl RequestRejection {
    /// The id of the rejected request.
    pub fn id(&self) -> RequestId {
        match *self {
            RequestRejection::NegativeArrival { id, .. }
            | RequestRejection::FloorOutOfRange { id, .. }
            | RequestRejection::SameFloor { id, .. }
            | RequestRejection::DuplicateId { id } => id,
        }
    }

    /// Short machine-readable reason, used as an output column.
    pub fn reason(&self) -> &'static str {
        match self {
            RequestRejection::NegativeArrival { .. } => "negative_arrival",
            RequestRejection::FloorOutOfRange { .. } => "floor_out_of_range",
            RequestRejection::SameFloor { .. }       => "same_floor",
            RequestRejection::DuplicateId { .. }     => "duplicate_id",
        }
    }
}
