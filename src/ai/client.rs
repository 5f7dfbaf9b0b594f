//! Bedrock summarization client
//!
//! Two independent ways of turning a document into a summary. Neither returns
//! an error: failures come back as sentinel-prefixed text that the caller
//! inspects to decide whether to fall back.

use serde_json::Value;
#[cfg(feature = "debug-logs")]
use tracing::debug;
use tracing::{error, info, warn};

use super::extract::{DIRECT_EXTRACTORS, Extractor, PRIMARY_EXTRACTORS, RETRY_EXTRACTORS, extract_first};
use super::prompt_builder::{
    DIRECT_MAX_CHARS, DIRECT_MAX_TOKENS, PROFILE_MAX_CHARS, PROFILE_MAX_TOKENS,
    build_summary_prompt, chat_request, completion_request, truncate_chars,
};
use crate::clients::ModelInvoker;
use crate::errors::SummaryError;

pub const PROFILE_ERROR_PREFIX: &str = "Error generating summary: ";
pub const DIRECT_ERROR_PREFIX: &str = "Direct model invocation failed: ";

pub const PROFILE_UNAVAILABLE_MESSAGE: &str = "The AI model was unable to generate a summary for this document. Please check the model configuration and try again.";

pub const DIRECT_UNEXPECTED_FORMAT_MESSAGE: &str =
    "Direct model invocation did not return expected response format.";

pub struct BedrockSummarizer<'a> {
    invoker: &'a dyn ModelInvoker,
}

impl<'a> BedrockSummarizer<'a> {
    #[must_use]
    pub fn new(invoker: &'a dyn ModelInvoker) -> Self {
        Self { invoker }
    }

    /// Summarizes through an inference profile with the free-form prompt request,
    /// retrying once with the chat format if the response shape is unknown.
    pub async fn summarize_with_profile(&self, profile_id: &str, document: &str) -> String {
        info!(model_id = profile_id, "Generating summary using inference profile");
        match self.try_profile(profile_id, document).await {
            Ok(summary) => summary,
            Err(e) => {
                error!("Error in summarize_with_profile: {}", e);
                format!("{PROFILE_ERROR_PREFIX}{e}")
            }
        }
    }

    async fn try_profile(&self, profile_id: &str, document: &str) -> Result<String, SummaryError> {
        let prompt = build_summary_prompt(&truncate_chars(document, PROFILE_MAX_CHARS));

        let body = self.invoke_json(profile_id, &completion_request(&prompt)).await?;
        let mut summary = found(PRIMARY_EXTRACTORS, &body);

        if summary.is_none() {
            warn!("No summary found in response, trying alternative request format");
            summary = match self
                .invoke_json(profile_id, &chat_request(&prompt, PROFILE_MAX_TOKENS))
                .await
            {
                Ok(alt) => found(RETRY_EXTRACTORS, &alt),
                Err(e) => {
                    warn!("Alternative request format failed: {}", e);
                    None
                }
            };
        }

        Ok(summary.map_or_else(
            || {
                warn!("Could not extract summary from response");
                PROFILE_UNAVAILABLE_MESSAGE.to_string()
            },
            |s| s.trim().to_string(),
        ))
    }

    /// Summarizes by invoking `model_id` directly with the chat format.
    pub async fn summarize_direct(&self, model_id: &str, document: &str) -> String {
        info!(model_id, "Generating summary using direct model invocation");
        match self.try_direct(model_id, document).await {
            Ok(summary) => summary,
            Err(e) => {
                error!("Direct model invocation failed: {}", e);
                format!("{DIRECT_ERROR_PREFIX}{e}")
            }
        }
    }

    async fn try_direct(&self, model_id: &str, document: &str) -> Result<String, SummaryError> {
        let prompt = build_summary_prompt(&truncate_chars(document, DIRECT_MAX_CHARS));
        let body = self
            .invoke_json(model_id, &chat_request(&prompt, DIRECT_MAX_TOKENS))
            .await?;

        Ok(match found(DIRECT_EXTRACTORS, &body) {
            Some(summary) => summary.trim().to_string(),
            None => {
                warn!(response = %body, "Unexpected response format");
                DIRECT_UNEXPECTED_FORMAT_MESSAGE.to_string()
            }
        })
    }

    async fn invoke_json(&self, model_id: &str, request: &Value) -> Result<Value, SummaryError> {
        #[cfg(feature = "debug-logs")]
        debug!("Request body for {}: {}", model_id, request);

        let raw = self
            .invoker
            .invoke_model(model_id, serde_json::to_vec(request)?)
            .await?;
        let body: Value = serde_json::from_slice(&raw)?;

        #[cfg(feature = "debug-logs")]
        debug!("Response body from {}: {}", model_id, body);

        Ok(body)
    }
}

fn found(extractors: &[Extractor], body: &Value) -> Option<String> {
    extract_first(extractors, body).map(|(name, text)| {
        info!("Found summary in '{}' field", name);
        text
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays canned responses and records every request.
    struct CannedInvoker {
        responses: Mutex<VecDeque<Result<Value, String>>>,
        requests: Mutex<Vec<(String, Value)>>,
    }

    impl CannedInvoker {
        fn new(responses: Vec<Result<Value, String>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<(String, Value)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ModelInvoker for CannedInvoker {
        async fn invoke_model(
            &self,
            model_id: &str,
            body: Vec<u8>,
        ) -> Result<Vec<u8>, SummaryError> {
            let request: Value = serde_json::from_slice(&body).unwrap();
            self.requests
                .lock()
                .unwrap()
                .push((model_id.to_string(), request));
            match self.responses.lock().unwrap().pop_front() {
                Some(Ok(value)) => Ok(serde_json::to_vec(&value).unwrap()),
                Some(Err(msg)) => Err(SummaryError::InferenceError(msg)),
                None => Err(SummaryError::InferenceError("no canned response".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_profile_generation_field() {
        let invoker = CannedInvoker::new(vec![Ok(json!({ "generation": "  A short report about X.\n" }))]);
        let summary = BedrockSummarizer::new(&invoker)
            .summarize_with_profile("profile-arn", "document")
            .await;
        assert_eq!(summary, "A short report about X.");

        let requests = invoker.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "profile-arn");
        assert!(requests[0].1["prompt"].as_str().unwrap().contains("document"));
    }

    #[tokio::test]
    async fn test_profile_content_list_of_strings() {
        let invoker = CannedInvoker::new(vec![Ok(json!({ "content": ["Hello", " world"] }))]);
        let summary = BedrockSummarizer::new(&invoker)
            .summarize_with_profile("p", "doc")
            .await;
        assert_eq!(summary, "Hello world");
    }

    #[tokio::test]
    async fn test_profile_retries_with_chat_format() {
        let invoker = CannedInvoker::new(vec![
            Ok(json!({ "unknown": true })),
            Ok(json!({ "choices": [ { "message": { "content": "retried summary" } } ] })),
        ]);
        let summary = BedrockSummarizer::new(&invoker)
            .summarize_with_profile("p", "doc")
            .await;
        assert_eq!(summary, "retried summary");

        let requests = invoker.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].0, "p");
        assert_eq!(requests[1].1["anthropic_version"], "bedrock-2023-05-31");
        assert_eq!(requests[1].1["max_tokens"], 1000);
    }

    #[tokio::test]
    async fn test_profile_retry_failure_falls_back_to_fixed_sentence() {
        let invoker = CannedInvoker::new(vec![
            Ok(json!({ "unknown": true })),
            Err("throttled".to_string()),
        ]);
        let summary = BedrockSummarizer::new(&invoker)
            .summarize_with_profile("p", "doc")
            .await;
        assert_eq!(summary, PROFILE_UNAVAILABLE_MESSAGE);
    }

    #[tokio::test]
    async fn test_profile_invocation_error_is_prefixed() {
        let invoker = CannedInvoker::new(vec![Err("access denied".to_string())]);
        let summary = BedrockSummarizer::new(&invoker)
            .summarize_with_profile("p", "doc")
            .await;
        assert!(summary.starts_with(PROFILE_ERROR_PREFIX));
        assert!(summary.contains("access denied"));
        assert_eq!(invoker.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_profile_truncates_document() {
        let invoker = CannedInvoker::new(vec![Ok(json!({ "generation": "ok" }))]);
        let document = "x".repeat(PROFILE_MAX_CHARS + 10);
        BedrockSummarizer::new(&invoker)
            .summarize_with_profile("p", &document)
            .await;

        let prompt = invoker.requests()[0].1["prompt"].as_str().unwrap().to_string();
        let expected = format!("{}...", "x".repeat(PROFILE_MAX_CHARS));
        assert!(prompt.contains(&expected));
        assert!(!prompt.contains(&"x".repeat(PROFILE_MAX_CHARS + 1)));
    }

    #[tokio::test]
    async fn test_direct_anthropic_response() {
        let invoker = CannedInvoker::new(vec![Ok(json!({
            "content": [ { "type": "text", "text": "Direct summary. " } ],
            "stop_reason": "end_turn"
        }))]);
        let summary = BedrockSummarizer::new(&invoker)
            .summarize_direct("anthropic.claude", "doc")
            .await;
        assert_eq!(summary, "Direct summary.");

        let requests = invoker.requests();
        assert_eq!(requests[0].0, "anthropic.claude");
        assert_eq!(requests[0].1["max_tokens"], 4000);
        assert!(
            requests[0].1["messages"][0]["content"]
                .as_str()
                .unwrap()
                .contains("DOCUMENT:\ndoc")
        );
    }

    #[tokio::test]
    async fn test_direct_joins_content_blocks_with_space() {
        let invoker = CannedInvoker::new(vec![Ok(json!({
            "content": [
                { "type": "text", "text": "First part." },
                { "type": "text", "text": "Second part." }
            ]
        }))]);
        let summary = BedrockSummarizer::new(&invoker)
            .summarize_direct("m", "doc")
            .await;
        assert_eq!(summary, "First part. Second part.");
    }

    #[tokio::test]
    async fn test_direct_blank_content_is_unexpected_format() {
        let invoker = CannedInvoker::new(vec![Ok(json!({ "content": "   " }))]);
        let summary = BedrockSummarizer::new(&invoker)
            .summarize_direct("m", "doc")
            .await;
        assert_eq!(summary, DIRECT_UNEXPECTED_FORMAT_MESSAGE);
    }

    #[tokio::test]
    async fn test_direct_unexpected_format() {
        let invoker = CannedInvoker::new(vec![Ok(json!({ "generation": "not looked at" }))]);
        let summary = BedrockSummarizer::new(&invoker)
            .summarize_direct("m", "doc")
            .await;
        assert_eq!(summary, DIRECT_UNEXPECTED_FORMAT_MESSAGE);
    }

    #[tokio::test]
    async fn test_direct_error_is_prefixed() {
        let invoker = CannedInvoker::new(vec![Err("model not found".to_string())]);
        let summary = BedrockSummarizer::new(&invoker)
            .summarize_direct("m", "doc")
            .await;
        assert!(summary.starts_with(DIRECT_ERROR_PREFIX));
        assert!(summary.contains("model not found"));
    }

    #[tokio::test]
    async fn test_direct_invalid_json_is_prefixed() {
        struct Garbage;

        #[async_trait]
        impl ModelInvoker for Garbage {
            async fn invoke_model(&self, _: &str, _: Vec<u8>) -> Result<Vec<u8>, SummaryError> {
                Ok(b"not json".to_vec())
            }
        }

        let summary = BedrockSummarizer::new(&Garbage).summarize_direct("m", "doc").await;
        assert!(summary.starts_with(DIRECT_ERROR_PREFIX));
    }
}
