//! Line types and topology mutation.
//!
//! A `Line` owns a set of sections that always forms exactly one simple
//! path. Every mutation is planned and validated against the current
//! sections first, applied to a scratch copy, checked by the path
//! materializer, and only then swapped in. A rejected call leaves the line
//! untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Distance, LineError, Path, Section, Sections, StationId};

/// Storage-assigned line identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated line that has not been assigned an id yet.
///
/// Storage turns it into a [`Line`] with [`NewLine::into_line`] once the id
/// is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLine {
    name: String,
    color: String,
    up_station: StationId,
    down_station: StationId,
    distance: Distance,
}

impl NewLine {
    /// Validates a line with its initial section.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if `name` or `color` is blank
    /// - `InvalidSection` if `distance <= 0` or the stations are equal
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        up_station: StationId,
        down_station: StationId,
        distance: i64,
    ) -> Result<Self, LineError> {
        let name = name.into();
        let color = color.into();
        validate_details(&name, &color)?;

        let distance = Distance::new(distance)?;
        if up_station == down_station {
            return Err(LineError::InvalidSection(
                "up and down stations must differ",
            ));
        }

        Ok(Self {
            name,
            color,
            up_station,
            down_station,
            distance,
        })
    }

    /// Returns the upstream station of the initial section.
    pub fn up_station(&self) -> StationId {
        self.up_station
    }

    /// Returns the downstream station of the initial section.
    pub fn down_station(&self) -> StationId {
        self.down_station
    }

    /// Attaches the storage-assigned id.
    pub fn into_line(self, id: LineId) -> Line {
        let section = Section::between(id, self.up_station, self.down_station, self.distance);
        Line {
            id,
            name: self.name,
            color: self.color,
            sections: Sections::single(section),
        }
    }
}

/// A transit line: a single unbranching path of stations.
///
/// # Invariants
///
/// - At least one section
/// - Exactly one start station (never downstream) and one end station
///   (never upstream); every other station has one incoming and one
///   outgoing section
/// - No station is the upstream (or downstream) endpoint of two sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    sections: Sections,
}

/// A validated change to the section set.
///
/// `remove` lists sections by upstream station; removals are applied before
/// insertions.
#[derive(Debug)]
struct Splice {
    remove: Vec<StationId>,
    insert: Vec<Section>,
}

impl Line {
    /// Rebuilds a line from sections loaded out of storage.
    ///
    /// # Errors
    ///
    /// Returns `CorruptPath` if the sections do not form one simple path.
    pub fn from_sections(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        sections: Vec<Section>,
    ) -> Result<Self, LineError> {
        let name = name.into();
        let color = color.into();
        validate_details(&name, &color)?;

        if sections.iter().any(|s| s.line() != id) {
            return Err(LineError::CorruptPath("section belongs to another line"));
        }
        let sections = Sections::from_vec(sections)?;
        Path::materialize(&sections)?;

        Ok(Self {
            id,
            name,
            color,
            sections,
        })
    }

    /// Returns the line id.
    pub fn id(&self) -> LineId {
        self.id
    }

    /// Returns the line name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the unordered section set.
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Returns the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if `station` is on the line.
    pub fn contains_station(&self, station: StationId) -> bool {
        self.sections.contains_station(station)
    }

    /// Changes the name and color. The topology is untouched.
    pub fn rename(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<(), LineError> {
        let name = name.into();
        let color = color.into();
        validate_details(&name, &color)?;
        self.name = name;
        self.color = color;
        Ok(())
    }

    /// Returns the sections in travel order.
    pub fn path(&self) -> Result<Path<'_>, LineError> {
        Path::materialize(&self.sections)
    }

    /// Returns the stations in travel order.
    pub fn ordered_stations(&self) -> Result<Vec<StationId>, LineError> {
        Ok(self.path()?.stations())
    }

    /// Inserts a section while keeping the line a single path.
    ///
    /// Exactly one station must already be on the line:
    ///
    /// - `up` is the last station: append `up -> down`
    /// - `down` is the first station: prepend `up -> down`
    /// - `up` starts an existing section `up -> d (D)`: split it into
    ///   `up -> down (distance)` and `down -> d (D - distance)`
    /// - `down` ends an existing section `u -> down (D)`: split it into
    ///   `u -> up (D - distance)` and `up -> down (distance)`
    ///
    /// # Errors
    ///
    /// - `InvalidSection` for a non-positive distance or `up == down`
    /// - `BothEndpointsAlreadyPresent` / `NoSharedEndpoint`
    /// - `DistanceTooLarge` when a split would not leave a positive remainder
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_server::domain::{LineId, NewLine, StationId};
    ///
    /// let (a, b, c) = (StationId(1), StationId(2), StationId(3));
    /// let mut line = NewLine::new("Shinbundang", "red", a, b, 10)
    ///     .unwrap()
    ///     .into_line(LineId(1));
    ///
    /// line.add_section(a, c, 4).unwrap();
    /// assert_eq!(line.ordered_stations().unwrap(), vec![a, c, b]);
    /// ```
    pub fn add_section(
        &mut self,
        up: StationId,
        down: StationId,
        distance: i64,
    ) -> Result<(), LineError> {
        let distance = Distance::new(distance)?;
        let new = Section::new(self.id, up, down, distance)?;
        let splice = self.plan_insertion(new)?;
        self.commit(splice)
    }

    /// Removes a station, merging its two neighbouring sections if it is
    /// interior.
    ///
    /// # Errors
    ///
    /// - `StationNotInPath` if the station is not on the line
    /// - `SingleSectionRemaining` if the line has only one section
    pub fn remove_station(&mut self, station: StationId) -> Result<(), LineError> {
        let splice = self.plan_removal(station)?;
        self.commit(splice)
    }

    fn plan_insertion(&self, new: Section) -> Result<Splice, LineError> {
        let (up, down) = (new.up_station(), new.down_station());

        match (self.contains_station(up), self.contains_station(down)) {
            (true, true) => Err(LineError::BothEndpointsAlreadyPresent { up, down }),
            (false, false) => Err(LineError::NoSharedEndpoint { up, down }),
            (true, false) => match self.sections.starting_at(up) {
                Some(existing) => {
                    let rest = existing.distance().split(new.distance())?;
                    let tail = Section::new(self.id, down, existing.down_station(), rest)?;
                    Ok(Splice {
                        remove: vec![up],
                        insert: vec![new, tail],
                    })
                }
                // up is the end of the line
                None => Ok(Splice {
                    remove: Vec::new(),
                    insert: vec![new],
                }),
            },
            (false, true) => match self.sections.ending_at(down) {
                Some(existing) => {
                    let rest = existing.distance().split(new.distance())?;
                    let head = Section::new(self.id, existing.up_station(), up, rest)?;
                    Ok(Splice {
                        remove: vec![existing.up_station()],
                        insert: vec![head, new],
                    })
                }
                // down is the start of the line
                None => Ok(Splice {
                    remove: Vec::new(),
                    insert: vec![new],
                }),
            },
        }
    }

    fn plan_removal(&self, station: StationId) -> Result<Splice, LineError> {
        let incoming = self.sections.ending_at(station);
        let outgoing = self.sections.starting_at(station);

        match (incoming, outgoing) {
            (None, None) => Err(LineError::StationNotInPath(station)),
            _ if self.sections.len() <= 1 => Err(LineError::SingleSectionRemaining),
            (None, Some(first)) => Ok(Splice {
                remove: vec![first.up_station()],
                insert: Vec::new(),
            }),
            (Some(last), None) => Ok(Splice {
                remove: vec![last.up_station()],
                insert: Vec::new(),
            }),
            (Some(before), Some(after)) => {
                let merged = Section::new(
                    self.id,
                    before.up_station(),
                    after.down_station(),
                    before.distance().merge(after.distance()),
                )?;
                Ok(Splice {
                    remove: vec![before.up_station(), after.up_station()],
                    insert: vec![merged],
                })
            }
        }
    }

    fn commit(&mut self, splice: Splice) -> Result<(), LineError> {
        let mut next = self.sections.clone();
        for up in splice.remove {
            next.remove_starting_at(up);
        }
        for section in splice.insert {
            next.insert(section);
        }

        Path::materialize(&next)?;
        self.sections = next;
        Ok(())
    }
}

fn validate_details(name: &str, color: &str) -> Result<(), LineError> {
    if name.trim().is_empty() {
        return Err(LineError::InvalidName("name cannot be empty"));
    }
    if color.trim().is_empty() {
        return Err(LineError::InvalidName("color cannot be empty"));
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone)]
    enum Op {
        Add { up: u64, down: u64, distance: i64 },
        Remove { station: u64 },
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0u64..10, 0u64..10, -2i64..30)
                .prop_map(|(up, down, distance)| Op::Add { up, down, distance }),
            1 => (0u64..10).prop_map(|station| Op::Remove { station }),
        ]
    }

    fn assert_single_path(line: &Line) -> Result<(), TestCaseError> {
        let path = line.path().map_err(|e| TestCaseError::fail(e.to_string()))?;
        let stations = path.stations();

        prop_assert!(line.section_count() >= 1);
        prop_assert_eq!(stations.len(), line.section_count() + 1);

        let unique: HashSet<_> = stations.iter().collect();
        prop_assert_eq!(unique.len(), stations.len());

        for (pair, section) in stations.windows(2).zip(path.sections()) {
            prop_assert_eq!(pair[0], section.up_station());
            prop_assert_eq!(pair[1], section.down_station());
            prop_assert!(section.distance().get() > 0);
        }
        Ok(())
    }

    proptest! {
        /// Any sequence of mutations keeps one simple path, and rejected
        /// mutations leave the line exactly as it was
        #[test]
        fn mutations_preserve_path(ops in proptest::collection::vec(op(), 0..40)) {
            let mut line = NewLine::new("L", "red", StationId(0), StationId(1), 20)
                .unwrap()
                .into_line(LineId(1));

            for op in ops {
                let before = line.clone();
                let result = match op {
                    Op::Add { up, down, distance } => {
                        line.add_section(StationId(up), StationId(down), distance)
                    }
                    Op::Remove { station } => line.remove_station(StationId(station)),
                };

                if result.is_err() {
                    prop_assert_eq!(&line, &before);
                }
                assert_single_path(&line)?;
            }
        }

        /// Splitting a section conserves its length
        #[test]
        fn split_conserves_distance(total in 2i64..1000, k in 1i64..1000, upstream in any::<bool>()) {
            prop_assume!(k < total);
            let (a, b, c) = (StationId(1), StationId(2), StationId(3));
            let mut line = NewLine::new("L", "red", a, b, total).unwrap().into_line(LineId(1));

            if upstream {
                line.add_section(a, c, k).unwrap();
            } else {
                line.add_section(c, b, k).unwrap();
            }

            let path = line.path().unwrap();
            let lengths: Vec<u64> = path.sections().iter().map(|s| s.distance().get()).collect();
            prop_assert_eq!(lengths.len(), 2);
            prop_assert!(lengths.contains(&(k as u64)));
            prop_assert_eq!(lengths.iter().sum::<u64>(), total as u64);
        }

        /// Removing an interior station yields the sum of its two sections
        #[test]
        fn merge_conserves_distance(d1 in 1i64..1000, d2 in 1i64..1000) {
            let (a, b, c) = (StationId(1), StationId(2), StationId(3));
            let mut line = NewLine::new("L", "red", a, b, d1).unwrap().into_line(LineId(1));
            line.add_section(b, c, d2).unwrap();

            line.remove_station(b).unwrap();

            let path = line.path().unwrap();
            prop_assert_eq!(path.sections().len(), 1);
            prop_assert_eq!(path.sections()[0].distance().get(), (d1 + d2) as u64);
            prop_assert_eq!(path.stations(), vec![a, c]);
        }
    }
}
