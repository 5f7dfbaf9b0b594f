use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::{deliver, summarize};
use crate::core::context::AppContext;
use crate::core::models::HandlerResponse;
use crate::errors::SummaryError;
use crate::event::parse_upload_event;

/// Outcome of a fully processed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedDocument {
    pub document_id: String,
    pub summary_length: usize,
}

pub use self::function_handler as handler;

/// Lambda handler for S3 upload notifications.
///
/// Processing failures never surface as `Err`; they become a 500 response.
pub async fn function_handler(
    ctx: &AppContext,
    event: LambdaEvent<Value>,
) -> Result<HandlerResponse, Error> {
    Ok(process_event(ctx, &event.payload).await)
}

/// Runs one invocation against a raw event payload and converts the outcome
/// into the response returned to the runtime.
pub async fn process_event(ctx: &AppContext, payload: &Value) -> HandlerResponse {
    info!("Received event: {}", payload);

    match process_document(ctx, payload).await {
        Ok(done) => HandlerResponse::success(&done.document_id, done.summary_length),
        Err(e) => {
            error!("Error processing document: {}", e);
            HandlerResponse::failure(&e.to_string())
        }
    }
}

#[tracing::instrument(level = "info", skip_all, fields(document_id = tracing::field::Empty))]
async fn process_document(
    ctx: &AppContext,
    payload: &Value,
) -> Result<ProcessedDocument, SummaryError> {
    let location = parse_upload_event(payload)?;
    info!(bucket = %location.bucket, key = %location.key, "Processing document");

    let document_id = Uuid::new_v4().to_string();
    tracing::Span::current().record("document_id", document_id.as_str());

    let content = ctx
        .objects
        .get_object_text(&location.bucket, &location.key)
        .await?;

    let summary =
        summarize::summarize_document(&ctx.config, ctx.models.as_ref(), &content).await;

    deliver::store_summary(
        ctx.summaries.as_ref(),
        &document_id,
        &location.key,
        &summary,
    )
    .await?;

    deliver::send_notification(
        ctx.notifier.as_ref(),
        &ctx.config.topic_arn,
        &document_id,
        &location.key,
    )
    .await?;

    Ok(ProcessedDocument {
        document_id,
        summary_length: summary.chars().count(),
    })
}
