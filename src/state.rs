use std::sync::Arc;

use crate::config::Config;
use crate::store::QuestionStore;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<QuestionStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = Arc::new(QuestionStore::new(&config));
        Self { store, config }
    }
}

impl FromRef<AppState> for Arc<QuestionStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
