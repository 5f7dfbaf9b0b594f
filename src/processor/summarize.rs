use tracing::{info, warn};

use crate::ai::BedrockSummarizer;
use crate::clients::ModelInvoker;
use crate::core::config::AppConfig;

/// Leading text that marks a summarization attempt as failed.
pub const FAILURE_SENTINELS: [&str; 2] = ["Error", "Unable"];

/// Whether a primary-path result should be replaced by direct invocation.
#[must_use]
pub fn needs_fallback(summary: &str) -> bool {
    summary.is_empty() || FAILURE_SENTINELS.iter().any(|s| summary.starts_with(s))
}

/// Summarizes through the inference profile when one is configured, then
/// through direct model invocation if that produced nothing usable.
///
/// Always returns text; when both paths fail it is the direct path's own
/// failure message.
pub async fn summarize_document(
    config: &AppConfig,
    invoker: &dyn ModelInvoker,
    document: &str,
) -> String {
    let summarizer = BedrockSummarizer::new(invoker);

    let mut summary = String::new();
    if let Some(profile) = &config.inference_profile {
        summary = summarizer.summarize_with_profile(profile, document).await;
    }

    if needs_fallback(&summary) {
        warn!("Inference profile method failed or not available. Trying direct model invocation");
        summary = summarizer.summarize_direct(&config.model_id, document).await;
    }

    info!(chars = summary.chars().count(), "Summary generated");
    summary
}
