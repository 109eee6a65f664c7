use std::sync::Arc;

use crate::{bank::BankCatalog, config::Config};
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<BankCatalog>,
    pub config: Config,
}

impl FromRef<AppState> for Arc<BankCatalog> {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
