use std::sync::Arc;

use crate::{
    config::Config,
    services::{generation_service::GenerationService, model_service::GeminiModel},
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model = Arc::new(GeminiModel::new(config.google_api_key.clone()));
        let generation_service = Arc::new(GenerationService::new(model));

        Self {
            generation_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_from_config() {
        let state = AppState::new(Config::test_config());
        assert_eq!(state.config.web_server_port, 8080);
    }
}
