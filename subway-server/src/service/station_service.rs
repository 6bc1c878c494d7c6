//! Station use cases.

use tracing::{debug, info};

use crate::domain::{Station, StationId, StationName};
use crate::store::{LineRepository, StationRepository};

use super::WriteLock;
use super::error::{ServiceError, ServiceResult};

/// Creates, lists and deletes stations.
pub struct StationService<S> {
    store: S,
    lock: WriteLock,
}

impl<S> StationService<S>
where
    S: StationRepository + LineRepository + Send + Sync,
{
    pub(crate) fn new(store: S, lock: WriteLock) -> Self {
        Self { store, lock }
    }

    /// Validates the name and saves a new station.
    pub async fn create_station(&self, name: String) -> ServiceResult<Station> {
        let name = StationName::new(name)?;
        let station = self.store.insert_station(name).await?;
        info!(station = %station.id(), name = %station.name(), "station created");
        Ok(station)
    }

    /// Lists every station, ordered by id.
    pub async fn list_stations(&self) -> ServiceResult<Vec<Station>> {
        Ok(self.store.find_all_stations().await?)
    }

    /// Deletes a station that no line runs through.
    pub async fn delete_station(&self, id: StationId) -> ServiceResult<()> {
        let _guard = self.lock.lock().await;

        if self.store.find_station(id).await?.is_none() {
            return Err(ServiceError::StationNotFound(id));
        }
        if self.store.line_uses_station(id).await? {
            debug!(station = %id, "refusing to delete station in use");
            return Err(ServiceError::StationInUse(id));
        }

        self.store.delete_station(id).await?;
        info!(station = %id, "station deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewLine;
    use crate::service::Services;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn create_and_list() {
        let services = Services::new(MemoryStore::new());
        services
            .stations
            .create_station("Gangnam".into())
            .await
            .unwrap();
        services
            .stations
            .create_station(" Gyodae ".into())
            .await
            .unwrap();

        let names: Vec<String> = services
            .stations
            .list_stations()
            .await
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["Gangnam", "Gyodae"]);
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let services = Services::new(MemoryStore::new());
        let err = services
            .stations
            .create_station("  ".into())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidStation(_)));
    }

    #[tokio::test]
    async fn delete_unused_station() {
        let services = Services::new(MemoryStore::new());
        let station = services
            .stations
            .create_station("Sinchon".into())
            .await
            .unwrap();

        services.stations.delete_station(station.id()).await.unwrap();
        assert!(services.stations.list_stations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_station() {
        let services = Services::new(MemoryStore::new());
        assert_eq!(
            services.stations.delete_station(StationId(3)).await,
            Err(ServiceError::StationNotFound(StationId(3)))
        );
    }

    #[tokio::test]
    async fn delete_station_on_a_line() {
        let services = Services::new(MemoryStore::new());
        let a = services.stations.create_station("A".into()).await.unwrap();
        let b = services.stations.create_station("B".into()).await.unwrap();
        let line = NewLine::new("L", "red", a.id(), b.id(), 10).unwrap();
        services.lines.create_line(line).await.unwrap();

        assert_eq!(
            services.stations.delete_station(a.id()).await,
            Err(ServiceError::StationInUse(a.id()))
        );
        assert_eq!(services.stations.list_stations().await.unwrap().len(), 2);
    }
}
