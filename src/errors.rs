use thiserror::Error;

/// Failures that turn an invocation into a 500 response.
///
/// The `Display` text is what callers see in the `details` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("Failed to invoke Bedrock agent: {0}")]
    Invoke(String),

    #[error("Failed to read agent response stream: {0}")]
    Stream(String),

    #[error("Failed to decode response fragment: {0}")]
    Decode(String),
}

impl From<std::str::Utf8Error> for AgentError {
    fn from(error: std::str::Utf8Error) -> Self {
        AgentError::Decode(error.to_string())
    }
}
