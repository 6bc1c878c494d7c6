//! Station types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Error returned when a station name fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// Storage-assigned station identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A human-readable station name.
///
/// Names are trimmed and must not be empty. This type guarantees that any
/// `StationName` value is valid by construction.
///
/// # Examples
///
/// ```
/// use subway_server::domain::StationName;
///
/// let name = StationName::new("Gangnam".to_string()).unwrap();
/// assert_eq!(name.as_str(), "Gangnam");
///
/// // Blank names are rejected
/// assert!(StationName::new("   ".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationName(String);

impl StationName {
    /// Create a station name, trimming surrounding whitespace.
    pub fn new(s: String) -> Result<Self, InvalidStationName> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStationName {
                reason: "name cannot be empty",
            });
        }
        if trimmed.len() == s.len() {
            Ok(StationName(s))
        } else {
            Ok(StationName(trimmed.to_string()))
        }
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named point on one or more lines.
///
/// Two stations are equal iff their ids are equal; the name plays no part
/// in identity.
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    name: StationName,
}

impl Station {
    /// Creates a station with a storage-assigned id.
    pub fn new(id: StationId, name: StationName) -> Self {
        Self { id, name }
    }

    /// Returns the station id.
    pub fn id(&self) -> StationId {
        self.id
    }

    /// Returns the station name.
    pub fn name(&self) -> &StationName {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> StationName {
        StationName::new(s.to_string()).unwrap()
    }

    #[test]
    fn new_valid_name() {
        assert!(StationName::new("Gangnam".to_string()).is_ok());
        assert!(StationName::new("Seoul Nat'l Univ.".to_string()).is_ok());
        assert!(StationName::new("강남역".to_string()).is_ok());
    }

    #[test]
    fn reject_blank() {
        assert!(StationName::new("".to_string()).is_err());
        assert!(StationName::new(" \t\n".to_string()).is_err());
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(name("  Gyodae ").as_str(), "Gyodae");
    }

    #[test]
    fn error_display() {
        let err = StationName::new(String::new()).unwrap_err();
        assert_eq!(err.to_string(), "invalid station name: name cannot be empty");
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", StationId(7)), "7");
        assert_eq!(format!("{:?}", StationId(7)), "StationId(7)");
        assert_eq!(format!("{}", name("Sinchon")), "Sinchon");
        assert_eq!(format!("{:?}", name("Sinchon")), "StationName(Sinchon)");
    }

    #[test]
    fn equality_is_by_id() {
        let a = Station::new(StationId(1), name("Gangnam"));
        let renamed = Station::new(StationId(1), name("Gangnam Station"));
        let other = Station::new(StationId(2), name("Gangnam"));
        assert_eq!(a, renamed);
        assert_ne!(a, other);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Station::new(StationId(1), name("Gangnam")));
        assert!(set.contains(&Station::new(StationId(1), name("Elsewhere"))));
        assert!(!set.contains(&Station::new(StationId(2), name("Gangnam"))));
    }

    #[test]
    fn id_serializes_as_number() {
        let json = serde_json::to_string(&StationId(42)).unwrap();
        assert_eq!(json, "42");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any name with a visible character is accepted
        #[test]
        fn nonblank_always_valid(s in "[a-zA-Z0-9]{1,20}") {
            prop_assert!(StationName::new(s).is_ok());
        }

        /// Whitespace-only names are always rejected
        #[test]
        fn whitespace_rejected(s in "[ \t]{0,10}") {
            prop_assert!(StationName::new(s).is_err());
        }
    }
}
