use tracing::info;

use crate::clients::{Notifier, SummaryStore};
use crate::core::models::{NOTIFICATION_SUBJECT, NotificationMessage, SummaryRecord};
use crate::errors::SummaryError;

/// Persists the summary record for `document_id`.
pub async fn store_summary(
    store: &dyn SummaryStore,
    document_id: &str,
    document_key: &str,
    summary: &str,
) -> Result<SummaryRecord, SummaryError> {
    let record = SummaryRecord::new(document_id, document_key, summary);
    store.put_summary(&record).await?;
    info!(document_id, "AI-generated summary stored");
    Ok(record)
}

/// Publishes the "summary ready" message for `document_id`.
pub async fn send_notification(
    notifier: &dyn Notifier,
    topic_arn: &str,
    document_id: &str,
    document_key: &str,
) -> Result<NotificationMessage, SummaryError> {
    let message = NotificationMessage::new(document_id, document_key);
    let payload = serde_json::to_string(&message)?;
    notifier
        .publish(topic_arn, &payload, NOTIFICATION_SUBJECT)
        .await?;
    info!(document_id, "Notification sent");
    Ok(message)
}
