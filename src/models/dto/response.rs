use serde::Serialize;

/// Raw backend output, forwarded without parsing or validation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateQuestionResponse {
    pub output: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubtestListResponse {
    pub subtests: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainListResponse {
    pub domains: Vec<&'static str>,
}
