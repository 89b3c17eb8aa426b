use crate::{config::Config, store::DynQuestionStore};
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub store: DynQuestionStore,
    pub config: Config,
}

impl FromRef<AppState> for DynQuestionStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
