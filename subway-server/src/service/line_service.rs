//! Line use cases.

use tracing::{debug, info};

use crate::domain::{Line, LineId, NewLine, Section, Station, StationId};
use crate::store::{LineRepository, StationRepository};

use super::WriteLock;
use super::error::{ServiceError, ServiceResult};

/// A line with its path resolved against stored stations.
#[derive(Debug, Clone)]
pub struct LineView {
    /// The line itself
    pub line: Line,

    /// Stations in travel order
    pub stations: Vec<Station>,

    /// Sections in travel order
    pub sections: Vec<Section>,

    /// Sum of all section distances
    pub total_distance: u64,
}

/// Creates, edits and reshapes lines.
pub struct LineService<S> {
    store: S,
    lock: WriteLock,
}

impl<S> LineService<S>
where
    S: LineRepository + StationRepository + Send + Sync,
{
    pub(crate) fn new(store: S, lock: WriteLock) -> Self {
        Self { store, lock }
    }

    /// Saves a new line after checking both initial stations exist.
    pub async fn create_line(&self, line: NewLine) -> ServiceResult<LineView> {
        let _guard = self.lock.lock().await;

        self.require_station(line.up_station()).await?;
        self.require_station(line.down_station()).await?;

        let line = self.store.insert_line(line).await?;
        info!(line = %line.id(), name = line.name(), "line created");
        self.view(line).await
    }

    /// Lists every line, ordered by id.
    pub async fn list_lines(&self) -> ServiceResult<Vec<LineView>> {
        let lines = self.store.find_all_lines().await?;
        let mut views = Vec::with_capacity(lines.len());
        for line in lines {
            views.push(self.view(line).await?);
        }
        Ok(views)
    }

    /// Loads one line.
    pub async fn get_line(&self, id: LineId) -> ServiceResult<LineView> {
        let line = self.load(id).await?;
        self.view(line).await
    }

    /// Changes a line's name and color.
    pub async fn update_line(
        &self,
        id: LineId,
        name: String,
        color: String,
    ) -> ServiceResult<LineView> {
        let _guard = self.lock.lock().await;

        let mut line = self.load(id).await?;
        line.rename(name, color)?;
        let line = self.store.save_line(line).await?;
        info!(line = %id, name = line.name(), color = line.color(), "line updated");
        self.view(line).await
    }

    /// Deletes a line and all of its sections.
    pub async fn delete_line(&self, id: LineId) -> ServiceResult<()> {
        let _guard = self.lock.lock().await;

        self.load(id).await?;
        self.store.delete_line(id).await?;
        info!(line = %id, "line deleted");
        Ok(())
    }

    /// Inserts a section into a line.
    pub async fn add_section(
        &self,
        id: LineId,
        up: StationId,
        down: StationId,
        distance: i64,
    ) -> ServiceResult<LineView> {
        let _guard = self.lock.lock().await;

        let mut line = self.load(id).await?;
        self.require_station(up).await?;
        self.require_station(down).await?;

        if let Err(e) = line.add_section(up, down, distance) {
            debug!(line = %id, %up, %down, distance, error = %e, "section rejected");
            return Err(e.into());
        }

        let line = self.store.save_line(line).await?;
        info!(
            line = %id,
            %up,
            %down,
            distance,
            sections = line.section_count(),
            "section added"
        );
        self.view(line).await
    }

    /// Removes a station from a line, merging its neighbouring sections.
    pub async fn remove_station(&self, id: LineId, station: StationId) -> ServiceResult<()> {
        let _guard = self.lock.lock().await;

        let mut line = self.load(id).await?;
        if let Err(e) = line.remove_station(station) {
            debug!(line = %id, %station, error = %e, "station removal rejected");
            return Err(e.into());
        }

        let line = self.store.save_line(line).await?;
        info!(
            line = %id,
            %station,
            sections = line.section_count(),
            "station removed from line"
        );
        Ok(())
    }

    async fn load(&self, id: LineId) -> ServiceResult<Line> {
        self.store
            .find_line(id)
            .await?
            .ok_or(ServiceError::LineNotFound(id))
    }

    async fn require_station(&self, id: StationId) -> ServiceResult<Station> {
        self.store
            .find_station(id)
            .await?
            .ok_or(ServiceError::StationNotFound(id))
    }

    async fn view(&self, line: Line) -> ServiceResult<LineView> {
        let (station_ids, sections, total_distance) = {
            let path = line.path()?;
            let sections: Vec<Section> = path.sections().iter().map(|s| (*s).clone()).collect();
            (path.stations(), sections, path.total_distance())
        };

        let mut stations = Vec::with_capacity(station_ids.len());
        for id in station_ids {
            stations.push(self.require_station(id).await?);
        }

        Ok(LineView {
            line,
            stations,
            sections,
            total_distance,
        })
    }
}
