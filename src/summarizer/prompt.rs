//! The summarization prompt.

/// Instructions placed ahead of the text to summarize.
pub const PROMPT_INSTRUCTIONS: &str = "\
Please summarize the following text concisely while maintaining key information.
Format the response in markdown with:
- A brief overview as a heading
- Key points as a bulleted list
- Any important quotes in blockquotes
- Use bold and italic for emphasis where appropriate

Text to summarize:
";

/// Builds the prompt for `text`. The text is appended unchanged.
pub fn build_prompt(text: &str) -> String {
    let mut prompt = String::with_capacity(PROMPT_INSTRUCTIONS.len() + text.len());
    prompt.push_str(PROMPT_INSTRUCTIONS);
    prompt.push_str(text);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prompt_layout() {
        let prompt = build_prompt("Hello world");

        assert_eq!(
            prompt,
            "Please summarize the following text concisely while maintaining key information.\n\
             Format the response in markdown with:\n\
             - A brief overview as a heading\n\
             - Key points as a bulleted list\n\
             - Any important quotes in blockquotes\n\
             - Use bold and italic for emphasis where appropriate\n\
             \n\
             Text to summarize:\n\
             Hello world"
        );
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let prompt = build_prompt("  padded\n\n");
        assert!(prompt.ends_with("Text to summarize:\n  padded\n\n"));
    }
}
