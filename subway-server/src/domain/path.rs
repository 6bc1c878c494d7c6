//! Path materialization.
//!
//! Reconstructs the ordered station sequence of a line from its unordered
//! section set.

use std::collections::HashSet;

use super::{LineError, Section, Sections, StationId};

/// The sections of a line in travel order, from path start to path end.
///
/// # Invariants
///
/// - At least one section
/// - Consecutive sections connect (downstream of one = upstream of next)
/// - No station appears twice
#[derive(Debug, Clone)]
pub struct Path<'a> {
    sections: Vec<&'a Section>,
}

impl<'a> Path<'a> {
    /// Orders `sections` into a single path.
    ///
    /// Starts at the only station that is never a downstream endpoint and
    /// follows upstream links from there. Iteration is bounded by
    /// `sections.len() + 1`; anything other than one simple path covering
    /// every section yields `CorruptPath`.
    pub fn materialize(sections: &'a Sections) -> Result<Self, LineError> {
        if sections.is_empty() {
            return Err(LineError::CorruptPath("line has no sections"));
        }

        let downstream: HashSet<StationId> = sections.iter().map(|s| s.down_station()).collect();
        let mut starts = sections
            .iter()
            .map(|s| s.up_station())
            .filter(|station| !downstream.contains(station));

        let start = starts
            .next()
            .ok_or(LineError::CorruptPath("no start station"))?;
        if starts.next().is_some() {
            return Err(LineError::CorruptPath("more than one start station"));
        }

        let mut ordered = Vec::with_capacity(sections.len());
        let mut current = start;
        for _ in 0..=sections.len() {
            let Some(section) = sections.starting_at(current) else {
                break;
            };
            ordered.push(section);
            current = section.down_station();
        }

        // Shorter: a disconnected remainder. Longer: a cycle after the start.
        if ordered.len() != sections.len() {
            return Err(LineError::CorruptPath("sections are not one connected path"));
        }

        Ok(Path { sections: ordered })
    }

    /// Returns the first station.
    pub fn start(&self) -> StationId {
        self.sections[0].up_station()
    }

    /// Returns the sections in travel order.
    pub fn sections(&self) -> &[&'a Section] {
        &self.sections
    }

    /// Returns the stations in travel order.
    ///
    /// Always one longer than the section count.
    pub fn stations(&self) -> Vec<StationId> {
        let mut stations = Vec::with_capacity(self.sections.len() + 1);
        stations.push(self.start());
        stations.extend(self.sections.iter().map(|s| s.down_station()));
        stations
    }

    /// Returns the sum of all section distances.
    pub fn total_distance(&self) -> u64 {
        self.sections.iter().map(|s| s.distance().get()).sum()
    }
}
