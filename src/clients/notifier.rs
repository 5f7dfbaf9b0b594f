use async_trait::async_trait;
use aws_sdk_sns::Client as SnsClient;
use aws_sdk_sns::error::DisplayErrorContext;

use crate::errors::SummaryError;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, topic_arn: &str, message: &str, subject: &str)
    -> Result<(), SummaryError>;
}

pub struct SnsNotifier {
    client: SnsClient,
}

impl SnsNotifier {
    #[must_use]
    pub fn new(client: SnsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(
        &self,
        topic_arn: &str,
        message: &str,
        subject: &str,
    ) -> Result<(), SummaryError> {
        self.client
            .publish()
            .topic_arn(topic_arn)
            .message(message)
            .subject(subject)
            .send()
            .await
            .map_err(|e| {
                SummaryError::NotificationError(format!("sns publish: {}", DisplayErrorContext(&e)))
            })?;
        Ok(())
    }
}
