//! Bedrock Agents runtime client
//!
//! Wraps `InvokeAgent` behind [`AgentRuntime`] and turns the SDK event
//! receiver into a plain stream of [`ResponseFragment`]s.

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockagentruntime::Client;
use aws_sdk_bedrockagentruntime::error::DisplayErrorContext;
use aws_sdk_bedrockagentruntime::types::ResponseStream;
use futures::stream::{self, BoxStream, StreamExt};
use tracing::{debug, info};

use crate::core::config::{ClientConfig, FALLBACK_REGION};
use crate::core::models::AgentInvocation;
use crate::errors::AgentError;

/// One element of the agent's completion stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseFragment {
    /// UTF-8 encoded text, absent for events that carry none.
    pub bytes: Option<Vec<u8>>,
}

impl ResponseFragment {
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self {
            bytes: Some(text.as_bytes().to_vec()),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Ordered, finite, single-pass sequence of fragments.
pub type CompletionStream = BoxStream<'static, Result<ResponseFragment, AgentError>>;

/// A remote agent that answers a prompt with a streamed completion.
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    /// Starts one exchange and returns its completion stream.
    ///
    /// # Errors
    ///
    /// Returns `AgentError::Invoke` if the call is rejected before any
    /// fragment is produced.
    async fn invoke_agent(
        &self,
        invocation: &AgentInvocation,
    ) -> Result<CompletionStream, AgentError>;
}

/// [`AgentRuntime`] backed by `aws-sdk-bedrockagentruntime`.
#[derive(Debug, Clone)]
pub struct BedrockAgentClient {
    client: Client,
}

impl BedrockAgentClient {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Loads the shared AWS config and builds the SDK client.
    ///
    /// Region order: `AGENT_REGION`, the SDK default chain, then `eu-west-1`.
    pub async fn from_config(config: &ClientConfig) -> Self {
        let region = RegionProviderChain::first_try(config.region.clone().map(Region::new))
            .or_default_provider()
            .or_else(Region::new(FALLBACK_REGION));

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        info!(
            region = ?sdk_config.region(),
            "Initialized Bedrock agent runtime client"
        );

        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl AgentRuntime for BedrockAgentClient {
    async fn invoke_agent(
        &self,
        invocation: &AgentInvocation,
    ) -> Result<CompletionStream, AgentError> {
        let output = self
            .client
            .invoke_agent()
            .agent_id(&invocation.agent_id)
            .agent_alias_id(&invocation.agent_alias_id)
            .session_id(&invocation.session_id)
            .input_text(&invocation.input_text)
            .send()
            .await
            .map_err(|e| AgentError::Invoke(DisplayErrorContext(&e).to_string()))?;

        let fragments = stream::unfold(Some(output.completion), |receiver| async move {
            let mut receiver = receiver?;
            match receiver.recv().await {
                Ok(Some(event)) => Some((Ok(fragment_from_event(event)), Some(receiver))),
                Ok(None) => None,
                // Yield the error once, then end the stream.
                Err(e) => Some((
                    Err(AgentError::Stream(DisplayErrorContext(&e).to_string())),
                    None,
                )),
            }
        });

        Ok(fragments.boxed())
    }
}

fn fragment_from_event(event: ResponseStream) -> ResponseFragment {
    match event {
        ResponseStream::Chunk(part) => ResponseFragment {
            bytes: part.bytes().map(|b| b.as_ref().to_vec()),
        },
        other => {
            debug!(event = ?other, "Skipping non-chunk agent event");
            ResponseFragment::empty()
        }
    }
}
