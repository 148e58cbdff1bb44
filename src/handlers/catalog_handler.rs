use actix_web::{get, web, HttpResponse};

use crate::{
    catalog::SKILL_CATALOG,
    errors::AppError,
    models::dto::response::{DomainListResponse, SubtestListResponse},
};

/// Values for the first selector.
#[get("/api/catalog/subtests")]
pub async fn get_subtests() -> HttpResponse {
    HttpResponse::Ok().json(SubtestListResponse {
        subtests: SKILL_CATALOG.subtests(),
    })
}

/// Values for the second selector, dependent on the chosen subtest.
#[get("/api/catalog/subtests/{subtest}/domains")]
pub async fn get_domains(subtest: web::Path<String>) -> Result<HttpResponse, AppError> {
    let domains = SKILL_CATALOG.domains(&subtest)?;
    Ok(HttpResponse::Ok().json(DomainListResponse { domains }))
}
