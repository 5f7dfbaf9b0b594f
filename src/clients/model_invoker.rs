use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;

use crate::errors::SummaryError;

#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Sends a raw JSON request body to `model_id` and returns the raw response body.
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, SummaryError>;
}

/// `InvokeModel` on Bedrock Runtime. `model_id` may be a foundation model id
/// or an inference profile id/ARN.
pub struct BedrockModelInvoker {
    client: BedrockClient,
}

impl BedrockModelInvoker {
    #[must_use]
    pub fn new(client: BedrockClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ModelInvoker for BedrockModelInvoker {
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, SummaryError> {
        let resp = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| SummaryError::InferenceError(DisplayErrorContext(&e).to_string()))?;

        Ok(resp.body.into_inner())
    }
}
