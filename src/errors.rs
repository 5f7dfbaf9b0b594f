use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Failed to parse upload event: {0}")]
    EventError(String),

    #[error("Failed to read document from S3: {0}")]
    StorageError(String),

    #[error("Failed to invoke Bedrock model: {0}")]
    InferenceError(String),

    #[error("Failed to store summary in DynamoDB: {0}")]
    PersistenceError(String),

    #[error("Failed to publish SNS notification: {0}")]
    NotificationError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("JSON error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
