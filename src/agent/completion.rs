//! Assembles an agent completion stream into a single reply.

use futures::StreamExt;

use super::client::CompletionStream;
use crate::errors::AgentError;

/// Drains the stream in order and concatenates every text payload.
///
/// Fragments without bytes (or with zero bytes) are skipped. Each payload is
/// decoded as strict UTF-8 on its own.
///
/// # Errors
///
/// Returns the first stream error, or `AgentError::Decode` for a payload
/// that is not valid UTF-8. Text gathered before the failure is dropped.
pub async fn collect_completion(mut stream: CompletionStream) -> Result<String, AgentError> {
    let mut completion = String::new();

    while let Some(fragment) = stream.next().await {
        let Some(bytes) = fragment?.bytes.filter(|b| !b.is_empty()) else {
            continue;
        };
        completion.push_str(std::str::from_utf8(&bytes)?);
    }

    Ok(completion)
}
