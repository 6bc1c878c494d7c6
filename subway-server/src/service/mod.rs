//! Use-case services.
//!
//! Load entities from storage, run the domain operation in memory and save
//! the result. All writes go through one shared lock, so at most one
//! mutation is in flight at a time and a load-mutate-save cycle is never
//! interleaved with another.

mod error;
mod line_service;
mod station_service;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::store::{LineRepository, StationRepository};

pub use error::{ServiceError, ServiceResult};
pub use line_service::{LineService, LineView};
pub use station_service::StationService;

/// Serializes writes across services sharing a store.
pub(crate) type WriteLock = Arc<Mutex<()>>;

/// The station and line services over one shared store.
pub struct Services<S> {
    pub stations: StationService<S>,
    pub lines: LineService<S>,
}

impl<S> Services<S>
where
    S: Clone + StationRepository + LineRepository + Send + Sync,
{
    /// Create both services over `store` with a shared write lock.
    pub fn new(store: S) -> Self {
        let lock = WriteLock::default();
        Self {
            stations: StationService::new(store.clone(), lock.clone()),
            lines: LineService::new(store, lock),
        }
    }
}
