use std::sync::Arc;

use crate::scoring::aggregator::{MergePolicy, ScoreAggregator};
use crate::store::ExpertiseStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend. Built in `main`; there is no process-wide instance.
    pub store: Arc<dyn ExpertiseStore>,
    pub aggregator: ScoreAggregator,
}

impl AppState {
    pub fn new(store: Arc<dyn ExpertiseStore>, policy: MergePolicy) -> Self {
        let aggregator = ScoreAggregator::new(store.clone(), policy);
        Self { store, aggregator }
    }
}
