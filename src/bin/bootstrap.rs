// This is the Lambda bootstrap entry point for the document processor

use docsum::core::{config::AppConfig, context::AppContext};
use docsum::errors::SummaryError;
use docsum::processor::handler;
use lambda_runtime::{Error, run, service_fn};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    docsum::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        let err = SummaryError::ConfigError(e);
        error!("Config error: {}", err);
        Error::from(err)
    })?;
    info!(
        table = %config.table_name,
        topic = %config.topic_arn,
        inference_profile = config.inference_profile.as_deref().unwrap_or(""),
        model_id = %config.model_id,
        "Document processor starting"
    );

    // Clients are shared by every warm invocation of this process
    let shared_config = aws_config::from_env().load().await;
    let ctx = AppContext::from_aws(config, &shared_config);

    run(service_fn(|event| handler(&ctx, event))).await
}
