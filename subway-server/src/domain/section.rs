//! Section types.
//!
//! A `Section` is a directed, weighted edge between two adjacent stations on
//! a line. `Sections` is the unordered set a line owns; the path order is
//! reconstructed on demand by [`Path`](super::Path).

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::{LineError, LineId, StationId};

/// Strictly positive distance between two adjacent stations.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Distance;
///
/// let d = Distance::new(10).unwrap();
/// assert_eq!(d.get(), 10);
///
/// // Zero and negative distances are rejected
/// assert!(Distance::new(0).is_err());
/// assert!(Distance::new(-3).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Distance(u64);

impl Distance {
    /// Create a distance, rejecting zero and negative values.
    pub fn new(value: i64) -> Result<Self, LineError> {
        if value <= 0 {
            return Err(LineError::InvalidSection("distance must be positive"));
        }
        Ok(Distance(value.unsigned_abs()))
    }

    /// Returns the raw distance.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Returns what is left of `self` after carving out `part`.
    ///
    /// Fails with `DistanceTooLarge` unless `part < self`, so the remainder
    /// is always positive.
    pub fn split(self, part: Distance) -> Result<Distance, LineError> {
        if part.0 >= self.0 {
            return Err(LineError::DistanceTooLarge {
                requested: part.0,
                existing: self.0,
            });
        }
        Ok(Distance(self.0 - part.0))
    }

    /// Returns the combined length of two consecutive distances.
    pub fn merge(self, other: Distance) -> Distance {
        Distance(self.0.saturating_add(other.0))
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance({})", self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed edge from an upstream to a downstream station.
///
/// # Invariants
///
/// - `up_station != down_station`
/// - `distance > 0` (enforced by [`Distance`])
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    line: LineId,
    up_station: StationId,
    down_station: StationId,
    distance: Distance,
}

impl Section {
    /// Creates a section belonging to `line`.
    pub fn new(
        line: LineId,
        up_station: StationId,
        down_station: StationId,
        distance: Distance,
    ) -> Result<Self, LineError> {
        if up_station == down_station {
            return Err(LineError::InvalidSection(
                "up and down stations must differ",
            ));
        }
        Ok(Self {
            line,
            up_station,
            down_station,
            distance,
        })
    }

    /// Creates a section whose endpoints the caller has already checked.
    pub(super) fn between(
        line: LineId,
        up_station: StationId,
        down_station: StationId,
        distance: Distance,
    ) -> Self {
        debug_assert_ne!(up_station, down_station);
        Self {
            line,
            up_station,
            down_station,
            distance,
        }
    }

    /// Returns the id of the owning line.
    pub fn line(&self) -> LineId {
        self.line
    }

    /// Returns the upstream station.
    pub fn up_station(&self) -> StationId {
        self.up_station
    }

    /// Returns the downstream station.
    pub fn down_station(&self) -> StationId {
        self.down_station
    }

    /// Returns the section length.
    pub fn distance(&self) -> Distance {
        self.distance
    }
}

/// The unordered section set of a line.
///
/// Keyed by upstream station, which gives O(1) "what comes after this
/// station" lookups. A station can be the upstream endpoint of at most one
/// section, so the key is unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    by_up: HashMap<StationId, Section>,
}

impl Sections {
    /// Creates a set holding one section.
    pub(super) fn single(section: Section) -> Self {
        let mut sections = Self::default();
        sections.insert(section);
        sections
    }

    /// Builds a set from loose sections.
    ///
    /// Rejects sets where a station is the upstream or downstream endpoint of
    /// more than one section. Path connectivity is checked separately.
    pub fn from_vec(sections: Vec<Section>) -> Result<Self, LineError> {
        let mut by_up = HashMap::with_capacity(sections.len());
        let mut downs = HashSet::with_capacity(sections.len());

        for section in sections {
            if !downs.insert(section.down_station) {
                return Err(LineError::CorruptPath(
                    "station is downstream of more than one section",
                ));
            }
            if by_up.insert(section.up_station, section).is_some() {
                return Err(LineError::CorruptPath(
                    "station is upstream of more than one section",
                ));
            }
        }

        Ok(Self { by_up })
    }

    /// Returns the number of sections.
    pub fn len(&self) -> usize {
        self.by_up.len()
    }

    /// Returns true if there are no sections.
    pub fn is_empty(&self) -> bool {
        self.by_up.is_empty()
    }

    /// Iterates the sections in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.by_up.values()
    }

    /// Returns the section whose upstream endpoint is `station`.
    pub fn starting_at(&self, station: StationId) -> Option<&Section> {
        self.by_up.get(&station)
    }

    /// Returns the section whose downstream endpoint is `station`.
    pub fn ending_at(&self, station: StationId) -> Option<&Section> {
        self.by_up.values().find(|s| s.down_station == station)
    }

    /// Returns true if `station` is an endpoint of any section.
    pub fn contains_station(&self, station: StationId) -> bool {
        self.by_up.contains_key(&station) || self.ending_at(station).is_some()
    }

    pub(super) fn insert(&mut self, section: Section) {
        self.by_up.insert(section.up_station, section);
    }

    pub(super) fn remove_starting_at(&mut self, station: StationId) -> Option<Section> {
        self.by_up.remove(&station)
    }
}
