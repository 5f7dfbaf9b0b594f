use aws_config::SdkConfig;

use super::config::AppConfig;
use crate::clients::{
    BedrockModelInvoker, DynamoSummaryStore, ModelInvoker, Notifier, ObjectStore,
    S3ObjectStore, SnsNotifier, SummaryStore,
};

/// Everything an invocation needs, built once per process and shared by
/// warm invocations.
pub struct AppContext {
    pub config: AppConfig,
    pub objects: Box<dyn ObjectStore>,
    pub models: Box<dyn ModelInvoker>,
    pub summaries: Box<dyn SummaryStore>,
    pub notifier: Box<dyn Notifier>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        objects: Box<dyn ObjectStore>,
        models: Box<dyn ModelInvoker>,
        summaries: Box<dyn SummaryStore>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            objects,
            models,
            summaries,
            notifier,
        }
    }

    /// Wires the aws-sdk implementations from a loaded shared config.
    pub fn from_aws(config: AppConfig, shared: &SdkConfig) -> Self {
        let summaries = DynamoSummaryStore::new(
            aws_sdk_dynamodb::Client::new(shared),
            &config.table_name,
        );
        Self::new(
            config,
            Box::new(S3ObjectStore::new(aws_sdk_s3::Client::new(shared))),
            Box::new(BedrockModelInvoker::new(aws_sdk_bedrockruntime::Client::new(
                shared,
            ))),
            Box::new(summaries),
            Box::new(SnsNotifier::new(aws_sdk_sns::Client::new(shared))),
        )
    }
}
