//! API Lambda handler - relays one prompt to the Bedrock agent.
//!
//! This module handles:
//! - Body extraction and prompt defaulting
//! - A single `InvokeAgent` call on a fresh session
//! - Mapping the assembled completion (or any failure) to a proxy response

use super::{helpers, parsing};
use crate::agent::{AgentRuntime, collect_completion};
use crate::core::config::AgentConfig;
use crate::core::models::{AgentInvocation, InvocationRequest};
use crate::errors::AgentError;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// Agent settings are read from the environment on every invocation, so a
/// missing `AGENT_ID` or `AGENT_ALIAS_ID` becomes a 500 response rather than
/// a start-up failure.
///
/// # Errors
///
/// Never returns `Err`; failures are reported as a 500 response payload.
#[tracing::instrument(level = "info", skip(agent, event), fields(request_id = %event.context.request_id))]
pub async fn function_handler<A>(agent: &A, event: LambdaEvent<Value>) -> Result<Value, Error>
where
    A: AgentRuntime + ?Sized,
{
    Ok(handle_invocation(agent, AgentConfig::from_env(), &event.payload).await)
}

/// Runs one request through the agent and builds the proxy response.
pub async fn handle_invocation<A>(
    agent: &A,
    config: Result<AgentConfig, AgentError>,
    payload: &Value,
) -> Value
where
    A: AgentRuntime + ?Sized,
{
    match relay(agent, config, payload).await {
        Ok(completion) => helpers::ok_completion(&completion),
        Err(e) => {
            error!("Error: {}", e);
            helpers::internal_error(&e.to_string())
        }
    }
}

async fn relay<A>(
    agent: &A,
    config: Result<AgentConfig, AgentError>,
    payload: &Value,
) -> Result<String, AgentError>
where
    A: AgentRuntime + ?Sized,
{
    let request = InvocationRequest::parse(parsing::extract_body(payload).as_deref());
    let config = config?;

    let invocation = AgentInvocation {
        agent_id: config.agent_id,
        agent_alias_id: config.agent_alias_id,
        session_id: Uuid::new_v4().to_string(),
        input_text: request.effective_prompt().to_string(),
    };

    info!(
        agent_id = %invocation.agent_id,
        agent_alias_id = %invocation.agent_alias_id,
        session_id = %invocation.session_id,
        "Attempting to invoke agent"
    );

    let completion = agent.invoke_agent(&invocation).await?;
    collect_completion(completion).await
}
