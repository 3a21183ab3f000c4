//! Endpoint paths for the Gemini API.

/// Base path for models endpoints.
pub const MODELS: &str = "/models";

/// Constructs the `generateContent` path for a model.
///
/// Accepts both bare names (`gemini-pro`) and resource names
/// (`models/gemini-pro`).
///
/// ```
/// use integrations_summarizer::transport::endpoints;
///
/// assert_eq!(
///     endpoints::generate_content("gemini-pro"),
///     "/models/gemini-pro:generateContent"
/// );
/// ```
pub fn generate_content(model: &str) -> String {
    let name = model.strip_prefix("models/").unwrap_or(model);
    format!("{MODELS}/{name}:generateContent")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_content_path() {
        assert_eq!(
            generate_content("gemini-pro"),
            "/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_generate_content_path_with_resource_name() {
        assert_eq!(
            generate_content("models/gemini-1.5-flash"),
            "/models/gemini-1.5-flash:generateContent"
        );
    }
}
