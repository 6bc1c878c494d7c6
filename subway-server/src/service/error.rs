//! Service error types.

use crate::domain::{InvalidStationName, LineError, LineId, StationId};
use crate::store::StoreError;

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors returned by the use-case services.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The line rejected the change
    #[error(transparent)]
    Line(#[from] LineError),

    /// Station name failed validation
    #[error(transparent)]
    InvalidStation(#[from] InvalidStationName),

    /// No line with this id
    #[error("line {0} not found")]
    LineNotFound(LineId),

    /// No station with this id
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// Station cannot be deleted while a line runs through it
    #[error("station {0} is still on a line")]
    StationInUse(StationId),

    /// Storage failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ServiceError::LineNotFound(LineId(4));
        assert_eq!(err.to_string(), "line 4 not found");

        let err = ServiceError::StationNotFound(StationId(2));
        assert_eq!(err.to_string(), "station 2 not found");

        let err = ServiceError::StationInUse(StationId(2));
        assert_eq!(err.to_string(), "station 2 is still on a line");

        let err = ServiceError::from(LineError::SingleSectionRemaining);
        assert_eq!(
            err.to_string(),
            "cannot remove a station from a line with a single section"
        );
    }
}
