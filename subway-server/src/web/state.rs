//! Application state for the web layer.

use std::sync::Arc;

use crate::service::{LineService, Services, StationService};
use crate::store::MemoryStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station use cases
    pub stations: Arc<StationService<MemoryStore>>,

    /// Line and section use cases
    pub lines: Arc<LineService<MemoryStore>>,
}

impl AppState {
    /// Create a new app state over `store`.
    pub fn new(store: MemoryStore) -> Self {
        let Services { stations, lines } = Services::new(store);
        Self {
            stations: Arc::new(stations),
            lines: Arc::new(lines),
        }
    }
}
