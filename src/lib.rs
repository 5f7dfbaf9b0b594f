//! docsum - An S3-triggered Lambda that summarizes uploaded documents with Amazon Bedrock.
//!
//! On each upload notification the processor:
//! 1. Reads the uploaded text object from S3
//! 2. Asks Bedrock for a summary, first through an inference profile (if one is
//!    configured) and then by invoking the model directly when that fails
//! 3. Stores the summary in DynamoDB
//! 4. Publishes a "summary ready" notification to SNS
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - Bedrock Runtime `InvokeModel` for summarization
//! - DynamoDB for summary records and SNS for notifications
//! - Tokio for async runtime
//!
//! All AWS access goes through the traits in [`clients`], held by an
//! [`core::context::AppContext`] that is built once per process.
//!
//! # Example
//!
//! ```no_run
//! use docsum::core::{config::AppConfig, context::AppContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     // Set up structured logging
//!     docsum::setup_logging();
//!
//!     let config = AppConfig::new("DocumentSummaries", "arn:aws:sns:us-east-1:123456789012:summaries")
//!         .with_inference_profile("us.anthropic.claude-3-7-sonnet-20250219-v1:0");
//!     let shared = aws_config::from_env().load().await;
//!     let ctx = AppContext::from_aws(config, &shared);
//!
//!     lambda_runtime::run(lambda_runtime::service_fn(|event| {
//!         docsum::processor::handler(&ctx, event)
//!     }))
//!     .await
//! }
//! ```

// Module declarations
pub mod ai;
pub mod clients;
pub mod core;
pub mod errors;
pub mod event;
pub mod processor;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`).
/// Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// docsum::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
