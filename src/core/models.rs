use serde::Deserialize;
use serde_json::Value;

/// Prompt used when the body carries none.
pub const DEFAULT_PROMPT: &str = "Hello!";

/// Inbound request body sent by the web client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InvocationRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

impl InvocationRequest {
    /// Parses a raw body, never failing.
    ///
    /// Anything that is not a JSON object, and a `prompt` that is not a
    /// string, both yield an empty request.
    #[must_use]
    pub fn parse(body: Option<&str>) -> Self {
        body.and_then(|b| serde_json::from_str::<Value>(b).ok())
            .filter(Value::is_object)
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }

    /// The prompt to send, falling back to [`DEFAULT_PROMPT`].
    #[must_use]
    pub fn effective_prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }
}

/// One `InvokeAgent` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentInvocation {
    pub agent_id: String,
    pub agent_alias_id: String,
    pub session_id: String,
    pub input_text: String,
}
