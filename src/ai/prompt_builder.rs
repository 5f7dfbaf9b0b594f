use std::borrow::Cow;

use serde_json::{Value, json};

/// Character budget for the inference-profile path.
pub const PROFILE_MAX_CHARS: usize = 24_000;

/// Character budget for direct model invocation.
pub const DIRECT_MAX_CHARS: usize = 150_000;

pub const PROFILE_MAX_TOKENS: u32 = 1000;
pub const DIRECT_MAX_TOKENS: u32 = 4000;
pub const TEMPERATURE: f64 = 0.2;
pub const TOP_P: f64 = 0.9;

/// Protocol tag required by Anthropic models on Bedrock.
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

pub const TRUNCATION_MARKER: &str = "...";

/// Cuts `content` to at most `budget` characters, appending an ellipsis when
/// anything was dropped.
#[must_use]
pub fn truncate_chars(content: &str, budget: usize) -> Cow<'_, str> {
    match content.char_indices().nth(budget) {
        Some((idx, _)) => Cow::Owned(format!("{}{TRUNCATION_MARKER}", &content[..idx])),
        None => Cow::Borrowed(content),
    }
}

#[must_use]
pub fn build_summary_prompt(document: &str) -> String {
    format!(
        "Please provide a comprehensive summary of the following document.\n\
         Focus on the main points, key findings, and important details.\n\
         The summary should be well-structured and capture the essence of the document.\n\
         \n\
         DOCUMENT:\n\
         {document}\n\
         \n\
         SUMMARY:\n"
    )
}

/// Free-form prompt/parameters request body.
#[must_use]
pub fn completion_request(prompt: &str) -> Value {
    json!({
        "prompt": prompt,
        "max_tokens": PROFILE_MAX_TOKENS,
        "temperature": TEMPERATURE,
        "top_p": TOP_P,
    })
}

/// Anthropic messages request body with a single user turn.
#[must_use]
pub fn chat_request(prompt: &str, max_tokens: u32) -> Value {
    json!({
        "anthropic_version": ANTHROPIC_VERSION,
        "max_tokens": max_tokens,
        "temperature": TEMPERATURE,
        "messages": [
            { "role": "user", "content": prompt }
        ],
    })
}
