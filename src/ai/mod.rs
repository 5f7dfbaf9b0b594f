//! All Bedrock/LLM functionality

pub mod client;
pub mod extract;
pub mod prompt_builder;

// Re-export main types for convenience
pub use client::BedrockSummarizer;
pub use prompt_builder::truncate_chars;
