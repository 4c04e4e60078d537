//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedPlanner;
use crate::network::NetworkData;

/// Shared application state.
///
/// Built once at startup; this is the explicit dependency container the
/// handlers pull their collaborators from.
#[derive(Clone)]
pub struct AppState {
    /// The read-only network arena
    pub network: Arc<NetworkData>,

    /// Planning context with response caching
    pub planner: Arc<CachedPlanner>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Arc<NetworkData>, planner: CachedPlanner) -> Self {
        Self {
            network,
            planner: Arc::new(planner),
        }
    }
}
