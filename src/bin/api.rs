use agent_relay::agent::BedrockAgentClient;
use agent_relay::core::config::ClientConfig;
use agent_relay::api::handler;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    agent_relay::setup_logging();

    // Built once per execution environment and shared by every invocation.
    let agent = BedrockAgentClient::from_config(&ClientConfig::from_env()).await;
    let agent = &agent;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(agent, event).await
    }))
    .await
}
