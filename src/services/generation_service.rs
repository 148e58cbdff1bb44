use std::sync::Arc;

use crate::{
    catalog::SKILL_CATALOG,
    constants::prompts::{GEMINI_MODEL, QUESTION_GENERATOR_TEMPLATE, SAMPLING_TEMPERATURE},
    errors::AppResult,
    models::dto::request::GenerateQuestionRequest,
    services::model_service::CompletionModel,
};

/// Turns a generation request into one instruction payload and obtains
/// the backend's completion. Stateless; every call is a single-shot
/// resolve -> render -> dispatch transaction.
pub struct GenerationService {
    model: Arc<dyn CompletionModel>,
}

impl GenerationService {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Resolves the target skill, renders the fixed template, and
    /// dispatches it to the completion backend. The backend's text is
    /// returned verbatim; the requested headings ("Leveled Text:",
    /// "Question:", ...) are advisory and not checked here.
    ///
    /// An invalid (subtest, domain, score_band) triple fails before the
    /// backend is ever contacted. A backend failure is surfaced as-is;
    /// there is no retry.
    pub async fn generate(&self, request: GenerateQuestionRequest) -> AppResult<String> {
        let skill =
            SKILL_CATALOG.resolve_skill(&request.subtest, &request.domain, request.score_band)?;

        let prompt = render_prompt(&request, skill);

        log::info!(
            "dispatching generation request: {} / {} / band {}",
            request.subtest,
            request.domain,
            request.score_band
        );

        self.model
            .complete(GEMINI_MODEL, SAMPLING_TEMPERATURE, &prompt)
            .await
    }
}

/// Substitutes the five template fields. The user's passage goes in
/// last so placeholder-like sequences inside it are never expanded.
pub fn render_prompt(request: &GenerateQuestionRequest, skill: &str) -> String {
    QUESTION_GENERATOR_TEMPLATE
        .replace("{score_band}", &request.score_band.to_string())
        .replace("{skill}", skill)
        .replace("{subtest}", &request.subtest)
        .replace("{domain}", &request.domain)
        .replace("{text}", &request.original_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::AppError,
        services::model_service::MockCompletionModel,
        test_utils::fixtures::{algebra_request, request_for},
    };

    #[actix_web::test]
    async fn test_generate_returns_backend_output_unmodified() {
        let canned = "Leveled Text: ...\nQuestion: ...\nChoices: ...\nFeedback: ...";

        let mut model = MockCompletionModel::new();
        model
            .expect_complete()
            .times(1)
            .returning(move |_, _, _| Ok(canned.to_string()));

        let service = GenerationService::new(Arc::new(model));
        let output = service.generate(algebra_request()).await.unwrap();

        assert_eq!(output, canned);
    }

    #[actix_web::test]
    async fn test_generate_passes_fixed_model_and_temperature() {
        let mut model = MockCompletionModel::new();
        model
            .expect_complete()
            .withf(|model, temperature, _| {
                model == GEMINI_MODEL && (temperature - SAMPLING_TEMPERATURE).abs() < f32::EPSILON
            })
            .times(1)
            .returning(|_, _, _| Ok("ok".to_string()));

        let service = GenerationService::new(Arc::new(model));
        service.generate(algebra_request()).await.unwrap();
    }

    #[actix_web::test]
    async fn test_generate_invalid_selection_skips_backend() {
        let mut model = MockCompletionModel::new();
        model.expect_complete().times(0);

        let service = GenerationService::new(Arc::new(model));
        let err = service
            .generate(request_for("Math", "Nonexistent", 3))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidSelection(_)));
    }

    #[actix_web::test]
    async fn test_generate_backend_failure_not_retried() {
        let mut model = MockCompletionModel::new();
        model
            .expect_complete()
            .times(1)
            .returning(|_, _, _| Err(AppError::GenerationBackend("connection refused".into())));

        let service = GenerationService::new(Arc::new(model));
        let err = service.generate(algebra_request()).await.unwrap_err();

        assert!(matches!(err, AppError::GenerationBackend(_)));
    }

    #[test]
    fn test_render_prompt_substitutes_fields_verbatim() {
        let request = request_for("Math", "Algebra", 3);
        let skill = SKILL_CATALOG.resolve_skill("Math", "Algebra", 3).unwrap();

        let prompt = render_prompt(&request, skill);

        assert!(prompt.contains("Photosynthesis converts light into chemical energy."));
        assert!(prompt.contains(skill));
        assert!(prompt.contains("**Score Band 3**"));
        assert!(prompt.contains("the **Math** section's **Algebra** domain"));
        assert!(!prompt.contains("{text}"));
        assert!(!prompt.contains("{skill}"));
    }

    #[test]
    fn test_render_prompt_leaves_placeholders_in_user_text_alone() {
        let mut request = algebra_request();
        request.original_text = "A passage mentioning {skill} literally.".to_string();

        let prompt = render_prompt(&request, "solve linear equations");

        assert!(prompt.contains("A passage mentioning {skill} literally."));
    }
}
