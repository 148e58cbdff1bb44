use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::GenerateQuestionRequest, response::GenerateQuestionResponse},
};

/// Levels the submitted passage and generates one multiple-choice
/// question for it. Blocks on a single backend round trip.
#[post("/api/generate")]
pub async fn generate_question(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let output = state.generation_service.generate(request).await?;
    Ok(HttpResponse::Ok().json(GenerateQuestionResponse { output }))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
