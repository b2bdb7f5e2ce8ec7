//! agent-relay - forwards a prompt from a web client to an Amazon Bedrock agent.
//!
//! A single API Lambda receives an API Gateway proxy event, invokes the
//! configured Bedrock agent once with a fresh session, buffers the streamed
//! completion and answers with one JSON response.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - `aws-sdk-bedrockagentruntime` for the `InvokeAgent` call
//! - Tokio and `futures` for consuming the completion stream
//!
//! # Example
//!
//! ```no_run
//! use agent_relay::agent::BedrockAgentClient;
//! use agent_relay::core::config::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     agent_relay::setup_logging();
//!
//!     let agent = BedrockAgentClient::from_config(&ClientConfig::from_env()).await;
//!     let agent = &agent;
//!     lambda_runtime::run(lambda_runtime::service_fn(move |event: lambda_runtime::LambdaEvent<serde_json::Value>| async move {
//!         agent_relay::api::handler(agent, event).await
//!     }))
//!     .await
//! }
//! ```

// Module declarations
pub mod agent;
pub mod api;
pub mod core;
pub mod errors;

pub use agent::{AgentRuntime, BedrockAgentClient};
pub use errors::AgentError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Log level comes from `RUST_LOG`, defaulting to `info`. Safe to call more
/// than once; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// agent_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
