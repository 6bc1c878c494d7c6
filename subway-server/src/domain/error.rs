//! Domain error types.
//!
//! These errors describe why a topology change was rejected. A rejected
//! operation never leaves a line partially modified.

use super::StationId;

/// Errors raised by line construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// Non-positive distance or identical endpoints
    #[error("invalid section: {0}")]
    InvalidSection(&'static str),

    /// Empty line name or color
    #[error("invalid line: {0}")]
    InvalidName(&'static str),

    /// Both endpoints are already on the line (would branch or loop)
    #[error("stations {up} and {down} are both already on the line")]
    BothEndpointsAlreadyPresent { up: StationId, down: StationId },

    /// Neither endpoint is on the line (would disconnect)
    #[error("neither station {up} nor {down} is on the line")]
    NoSharedEndpoint { up: StationId, down: StationId },

    /// Split distance does not fit inside the existing section
    #[error("distance {requested} must be less than the existing section distance {existing}")]
    DistanceTooLarge { requested: u64, existing: u64 },

    /// Station to remove is not on the line
    #[error("station {0} is not on the line")]
    StationNotInPath(StationId),

    /// Removal would leave the line without sections
    #[error("cannot remove a station from a line with a single section")]
    SingleSectionRemaining,

    /// Sections do not form a single simple path
    #[error("sections do not form a single path: {0}")]
    CorruptPath(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LineError::InvalidSection("distance must be positive");
        assert_eq!(err.to_string(), "invalid section: distance must be positive");

        let err = LineError::BothEndpointsAlreadyPresent {
            up: StationId(1),
            down: StationId(2),
        };
        assert_eq!(err.to_string(), "stations 1 and 2 are both already on the line");

        let err = LineError::NoSharedEndpoint {
            up: StationId(3),
            down: StationId(4),
        };
        assert_eq!(err.to_string(), "neither station 3 nor 4 is on the line");

        let err = LineError::DistanceTooLarge {
            requested: 10,
            existing: 10,
        };
        assert_eq!(
            err.to_string(),
            "distance 10 must be less than the existing section distance 10"
        );

        let err = LineError::StationNotInPath(StationId(9));
        assert_eq!(err.to_string(), "station 9 is not on the line");

        let err = LineError::SingleSectionRemaining;
        assert_eq!(
            err.to_string(),
            "cannot remove a station from a line with a single section"
        );
    }
}
