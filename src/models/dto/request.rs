use serde::Deserialize;
use validator::Validate;

/// One user action: level a passage and generate a question for it.
/// Lives only for the duration of the request; nothing is persisted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuestionRequest {
    #[validate(length(min = 1, message = "original_text must not be empty"))]
    pub original_text: String,

    pub subtest: String,

    pub domain: String,

    #[validate(range(min = 1, max = 7, message = "score_band must be between 1 and 7"))]
    pub score_band: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes_validation() {
        let request = GenerateQuestionRequest {
            original_text: "Some passage.".to_string(),
            subtest: "Math".to_string(),
            domain: "Algebra".to_string(),
            score_band: 3,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_text_fails_validation() {
        let request = GenerateQuestionRequest {
            original_text: String::new(),
            subtest: "Math".to_string(),
            domain: "Algebra".to_string(),
            score_band: 3,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_out_of_range_band_fails_validation() {
        let request = GenerateQuestionRequest {
            original_text: "Some passage.".to_string(),
            subtest: "Math".to_string(),
            domain: "Algebra".to_string(),
            score_band: 8,
        };
        assert!(request.validate().is_err());
    }
}
