//! Bedrock agent access and completion assembly

pub mod client;
pub mod completion;

// Re-export main types for convenience
pub use client::{AgentRuntime, BedrockAgentClient, CompletionStream, ResponseFragment};
pub use completion::collect_completion;
