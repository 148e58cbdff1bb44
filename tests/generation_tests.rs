use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;

use satgen_server::{
    catalog::{SKILL_CATALOG, MAX_SCORE_BAND, MIN_SCORE_BAND},
    errors::{AppError, AppResult},
    models::dto::request::GenerateQuestionRequest,
    services::{
        generation_service::{render_prompt, GenerationService},
        model_service::CompletionModel,
    },
};

/// Backend double that records every invocation and replays a canned
/// response.
struct CountingModel {
    calls: AtomicUsize,
    response: AppResult<String>,
}

impl CountingModel {
    fn returning(text: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            response: Ok(text.to_string()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            response: Err(AppError::GenerationBackend(message.to_string())),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionModel for CountingModel {
    async fn complete(&self, _model: &str, _temperature: f32, _prompt: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

fn request(subtest: &str, domain: &str, score_band: u8) -> GenerateQuestionRequest {
    GenerateQuestionRequest {
        original_text: "Photosynthesis converts light into chemical energy.".to_string(),
        subtest: subtest.to_string(),
        domain: domain.to_string(),
        score_band,
    }
}

#[actix_web::test]
async fn every_catalog_pair_generates_across_all_bands() {
    let model = CountingModel::returning("output");
    let service = GenerationService::new(model.clone());

    let mut requests = 0;
    for subtest in SKILL_CATALOG.subtests() {
        for domain in SKILL_CATALOG.domains(subtest).unwrap() {
            for band in MIN_SCORE_BAND..=MAX_SCORE_BAND {
                service
                    .generate(request(subtest, domain, band))
                    .await
                    .unwrap_or_else(|e| {
                        panic!("{}/{}/{} failed: {}", subtest, domain, band, e)
                    });
                requests += 1;
            }
        }
    }

    // 2 subtests x 4 domains x 7 bands
    assert_eq!(requests, 56);
    assert_eq!(model.calls(), 56);
}

#[actix_web::test]
async fn backend_response_is_forwarded_byte_for_byte() {
    let canned = "Leveled Text: ...\nQuestion: ...\nChoices: ...\nFeedback: ...";
    let model = CountingModel::returning(canned);
    let service = GenerationService::new(model.clone());

    let output = service.generate(request("Math", "Algebra", 3)).await.unwrap();

    assert_eq!(output.as_bytes(), canned.as_bytes());
    assert_eq!(model.calls(), 1);
}

#[actix_web::test]
async fn invalid_triple_never_reaches_backend() {
    let model = CountingModel::returning("output");
    let service = GenerationService::new(model.clone());

    let err = service
        .generate(request("Math", "Nonexistent", 3))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidSelection(_)));
    assert_eq!(model.calls(), 0);
}

#[actix_web::test]
async fn out_of_range_band_never_reaches_backend() {
    let model = CountingModel::returning("output");
    let service = GenerationService::new(model.clone());

    for band in [0u8, 8] {
        let err = service
            .generate(request("Math", "Algebra", band))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidSelection(_)));
    }

    assert_eq!(model.calls(), 0);
}

#[actix_web::test]
async fn backend_failure_is_surfaced_without_retry() {
    let model = CountingModel::failing("connection refused");
    let service = GenerationService::new(model.clone());

    let err = service.generate(request("Math", "Algebra", 3)).await.unwrap_err();

    assert!(matches!(err, AppError::GenerationBackend(_)));
    assert_eq!(model.calls(), 1);
}

#[test]
fn rendered_payload_contains_text_and_skill_verbatim() {
    let req = request("Math", "Algebra", 3);
    let skill = SKILL_CATALOG.resolve_skill("Math", "Algebra", 3).unwrap();

    let payload = render_prompt(&req, skill);

    assert!(payload.contains("Photosynthesis converts light into chemical energy."));
    assert!(payload.contains(skill));
}
