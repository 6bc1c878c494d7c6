//! In-process storage.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Line, LineId, NewLine, Station, StationId, StationName};

use super::error::{StoreError, StoreResult};
use super::{LineRepository, StationRepository};

#[derive(Debug, Default)]
struct Tables {
    stations: BTreeMap<StationId, Station>,
    lines: BTreeMap<LineId, Line>,
    last_station_id: u64,
    last_line_id: u64,
}

/// Thread-safe in-memory store for stations and lines.
///
/// Ids start at 1 and are never reused. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StationRepository for MemoryStore {
    async fn insert_station(&self, name: StationName) -> StoreResult<Station> {
        let mut guard = self.inner.write().await;
        guard.last_station_id += 1;
        let station = Station::new(StationId(guard.last_station_id), name);
        guard.stations.insert(station.id(), station.clone());
        Ok(station)
    }

    async fn find_station(&self, id: StationId) -> StoreResult<Option<Station>> {
        let guard = self.inner.read().await;
        Ok(guard.stations.get(&id).cloned())
    }

    async fn find_all_stations(&self) -> StoreResult<Vec<Station>> {
        let guard = self.inner.read().await;
        Ok(guard.stations.values().cloned().collect())
    }

    async fn delete_station(&self, id: StationId) -> StoreResult<()> {
        let mut guard = self.inner.write().await;
        guard
            .stations
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound {
                entity: "station",
                id: id.0,
            })
    }
}

impl LineRepository for MemoryStore {
    async fn insert_line(&self, line: NewLine) -> StoreResult<Line> {
        let mut guard = self.inner.write().await;
        guard.last_line_id += 1;
        let line = line.into_line(LineId(guard.last_line_id));
        guard.lines.insert(line.id(), line.clone());
        Ok(line)
    }

    async fn find_line(&self, id: LineId) -> StoreResult<Option<Line>> {
        let guard = self.inner.read().await;
        Ok(guard.lines.get(&id).cloned())
    }

    async fn find_all_lines(&self) -> StoreResult<Vec<Line>> {
        let guard = self.inner.read().await;
        Ok(guard.lines.values().cloned().collect())
    }

    async fn save_line(&self, line: Line) -> StoreResult<Line> {
        let mut guard = self.inner.write().await;
        let Some(slot) = guard.lines.get_mut(&line.id()) else {
            return Err(StoreError::NotFound {
                entity: "line",
                id: line.id().0,
            });
        };
        *slot = line.clone();
        Ok(line)
    }

    async fn delete_line(&self, id: LineId) -> StoreResult<()> {
        let mut guard = self.inner.write().await;
        guard
            .lines
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound {
                entity: "line",
                id: id.0,
            })
    }

    async fn line_uses_station(&self, station: StationId) -> StoreResult<bool> {
        let guard = self.inner.read().await;
        Ok(guard.lines.values().any(|l| l.contains_station(station)))
    }
}
