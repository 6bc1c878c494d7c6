//! Storage collaborator.
//!
//! Loads and saves stations and lines by identifier, assigning ids on first
//! save. The domain never calls this directly; the service layer loads a
//! line, mutates it in memory and saves it back.

mod error;
mod memory;

use std::future::Future;

use crate::domain::{Line, LineId, NewLine, Station, StationId, StationName};

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;

/// Persistence for stations.
pub trait StationRepository {
    /// Saves a new station and returns it with its assigned id.
    fn insert_station(&self, name: StationName) -> impl Future<Output = StoreResult<Station>> + Send;

    /// Loads a station by id.
    fn find_station(&self, id: StationId) -> impl Future<Output = StoreResult<Option<Station>>> + Send;

    /// Loads every station, ordered by id.
    fn find_all_stations(&self) -> impl Future<Output = StoreResult<Vec<Station>>> + Send;

    /// Deletes a station. Fails with `NotFound` for unknown ids.
    fn delete_station(&self, id: StationId) -> impl Future<Output = StoreResult<()>> + Send;
}

/// Persistence for lines together with their sections.
pub trait LineRepository {
    /// Saves a new line and returns it with its assigned id.
    fn insert_line(&self, line: NewLine) -> impl Future<Output = StoreResult<Line>> + Send;

    /// Loads a line by id.
    fn find_line(&self, id: LineId) -> impl Future<Output = StoreResult<Option<Line>>> + Send;

    /// Loads every line, ordered by id.
    fn find_all_lines(&self) -> impl Future<Output = StoreResult<Vec<Line>>> + Send;

    /// Replaces a stored line. Fails with `NotFound` for unknown ids.
    fn save_line(&self, line: Line) -> impl Future<Output = StoreResult<Line>> + Send;

    /// Deletes a line and its sections. Fails with `NotFound` for unknown ids.
    fn delete_line(&self, id: LineId) -> impl Future<Output = StoreResult<()>> + Send;

    /// Returns true if any line's path contains `station`.
    fn line_uses_station(&self, station: StationId) -> impl Future<Output = StoreResult<bool>> + Send;
}
