use std::env;

/// Model used for direct invocation when `MODEL_ID` is not set.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-7-sonnet-20250219-v1:0";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub table_name: String,
    pub topic_arn: String,
    /// Inference profile for the primary summarization path. `None` skips it.
    pub inference_profile: Option<String>,
    pub model_id: String,
}

impl AppConfig {
    pub fn new(table_name: &str, topic_arn: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            topic_arn: topic_arn.to_string(),
            inference_profile: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }

    #[must_use]
    pub fn with_inference_profile(mut self, profile: &str) -> Self {
        self.inference_profile = Some(profile.to_string()).filter(|p| !p.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_model_id(mut self, model_id: &str) -> Self {
        self.model_id = model_id.to_string();
        self
    }

    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| format!("{}: environment variable not found", name))
        };

        Ok(Self {
            table_name: required("TABLE_NAME")?,
            topic_arn: required("TOPIC_ARN")?,
            inference_profile: lookup("INFERENCE_PROFILE").filter(|v| !v.trim().is_empty()),
            model_id: lookup("MODEL_ID")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
        })
    }
}
