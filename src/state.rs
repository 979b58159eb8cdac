// src/state.rs
use std::sync::Arc;

use crate::services::connectivity::{ConnectivityProbe, DatabaseEnv, UnconfiguredProbe};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub probe: Arc<dyn ConnectivityProbe>,
    pub database_env: DatabaseEnv,
}

impl AppState {
    pub fn new(probe: Arc<dyn ConnectivityProbe>, database_env: DatabaseEnv) -> Self {
        Self { probe, database_env }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(UnconfiguredProbe), DatabaseEnv::default())
    }
}
