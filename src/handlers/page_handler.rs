use actix_web::{get, http::header::ContentType, HttpResponse};

/// The single interactive page. Selector values are fetched from the
/// catalog endpoints so the form can never submit a combination the
/// catalog does not know.
#[get("/")]
pub async fn index_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("../../static/index.html"))
}
