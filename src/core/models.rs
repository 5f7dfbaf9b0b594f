use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Label stored with every summary, whichever path produced it.
pub const SUMMARY_METHOD: &str = "Claude 3.7 Sonnet";

pub const NOTIFICATION_TEXT: &str =
    "AI-powered document summary is ready (using Claude 3.7 Sonnet)";

pub const NOTIFICATION_SUBJECT: &str = "AI Document Summary Notification";

pub const SUCCESS_MESSAGE: &str = "Document processed successfully with AI summarization";

/// Bucket and decoded key of the uploaded object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLocation {
    pub bucket: String,
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SummaryRecord {
    pub document_id: String,
    pub document_key: String,
    pub summary: String,
    pub created_at: String,
    pub summary_method: String,
}

impl SummaryRecord {
    pub fn new(document_id: &str, document_key: &str, summary: &str) -> Self {
        Self {
            document_id: document_id.to_string(),
            document_key: document_key.to_string(),
            summary: summary.to_string(),
            created_at: Local::now().to_rfc3339(),
            summary_method: SUMMARY_METHOD.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationMessage {
    pub document_id: String,
    pub document_key: String,
    pub message: String,
    pub timestamp: String,
}

impl NotificationMessage {
    pub fn new(document_id: &str, document_key: &str) -> Self {
        Self {
            document_id: document_id.to_string(),
            document_key: document_key.to_string(),
            message: NOTIFICATION_TEXT.to_string(),
            timestamp: Local::now().to_rfc3339(),
        }
    }
}

/// Result returned to the Lambda runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    #[must_use]
    pub fn success(document_id: &str, summary_length: usize) -> Self {
        Self {
            status_code: 200,
            body: json!({
                "message": SUCCESS_MESSAGE,
                "document_id": document_id,
                "summary_length": summary_length,
            })
            .to_string(),
        }
    }

    #[must_use]
    pub fn failure(error: &str) -> Self {
        Self {
            status_code: 500,
            body: json!({ "message": format!("Error processing document: {error}") }).to_string(),
        }
    }
}
