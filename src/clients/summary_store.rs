use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::core::models::SummaryRecord;
use crate::errors::SummaryError;

#[async_trait]
pub trait SummaryStore: Send + Sync {
    async fn put_summary(&self, record: &SummaryRecord) -> Result<(), SummaryError>;
}

pub struct DynamoSummaryStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoSummaryStore {
    #[must_use]
    pub fn new(client: DynamoClient, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl SummaryStore for DynamoSummaryStore {
    async fn put_summary(&self, record: &SummaryRecord) -> Result<(), SummaryError> {
        let s = |v: &str| AttributeValue::S(v.to_string());

        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("DocumentId", s(&record.document_id))
            .item("DocumentKey", s(&record.document_key))
            .item("Summary", s(&record.summary))
            .item("CreatedAt", s(&record.created_at))
            .item("SummaryMethod", s(&record.summary_method))
            .send()
            .await
            .map_err(|e| {
                SummaryError::PersistenceError(format!(
                    "dynamodb put_item: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        Ok(())
    }
}
