#[cfg(test)]
pub mod fixtures {
    use crate::models::dto::request::GenerateQuestionRequest;

    /// The sample passage used across tests.
    pub const SAMPLE_TEXT: &str = "Photosynthesis converts light into chemical energy.";

    pub fn request_for(subtest: &str, domain: &str, score_band: u8) -> GenerateQuestionRequest {
        GenerateQuestionRequest {
            original_text: SAMPLE_TEXT.to_string(),
            subtest: subtest.to_string(),
            domain: domain.to_string(),
            score_band,
        }
    }

    /// A known-valid request: Math / Algebra / band 3.
    pub fn algebra_request() -> GenerateQuestionRequest {
        request_for("Math", "Algebra", 3)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_request_is_well_formed() {
        let request = algebra_request();
        assert_eq!(request.subtest, "Math");
        assert_eq!(request.domain, "Algebra");
        assert_eq!(request.score_band, 3);
        assert!(!request.original_text.is_empty());
    }
}
