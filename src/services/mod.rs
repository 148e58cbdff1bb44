pub mod generation_service;
pub mod model_service;
