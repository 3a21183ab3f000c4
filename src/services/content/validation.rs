//! Validation for content generation requests.

use crate::error::{GeminiError, GeminiResult, RequestError, ValidationDetail};
use crate::types::GenerateContentRequest;

/// Validate a generate content request before it is sent.
pub fn validate_generate_request(request: &GenerateContentRequest) -> GeminiResult<()> {
    let mut details = Vec::new();

    if request.contents.is_empty() {
        details.push(ValidationDetail {
            field: "contents".to_string(),
            description: "Contents array cannot be empty".to_string(),
        });
    }

    for (idx, content) in request.contents.iter().enumerate() {
        if content.parts.is_empty() {
            details.push(ValidationDetail {
                field: format!("contents[{idx}].parts"),
                description: "Content must have at least one part".to_string(),
            });
        }
    }

    if details.is_empty() {
        Ok(())
    } else {
        Err(GeminiError::Request(RequestError::ValidationError {
            message: "Invalid generate content request".to_string(),
            details,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Content, Role};

    #[test]
    fn test_prompt_request_is_valid() {
        let request = GenerateContentRequest::from_prompt("anything");
        assert!(validate_generate_request(&request).is_ok());
    }

    #[test]
    fn test_empty_contents_rejected() {
        let request = GenerateContentRequest { contents: vec![] };
        match validate_generate_request(&request) {
            Err(GeminiError::Request(RequestError::ValidationError { details, .. })) => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "contents");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_content_without_parts_rejected() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some(Role::User),
                parts: vec![],
            }],
        };
        match validate_generate_request(&request) {
            Err(GeminiError::Request(RequestError::ValidationError { details, .. })) => {
                assert_eq!(details[0].field, "contents[0].parts");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
