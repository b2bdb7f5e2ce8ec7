use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tracing::warn;

/// Returns the request body of an API Gateway proxy event as text.
///
/// Handles `isBase64Encoded` bodies. A missing, `null` or undecodable body
/// yields `None`.
#[must_use]
pub fn extract_body(payload: &Value) -> Option<String> {
    let body = payload.get("body").and_then(Value::as_str)?;

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !is_base64 {
        return Some(body.to_string());
    }

    let decoded = STANDARD
        .decode(body)
        .map_err(|e| e.to_string())
        .and_then(|bytes| String::from_utf8(bytes).map_err(|e| e.to_string()));

    match decoded {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Failed to decode base64 body: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_plain_body() {
        let payload = json!({ "body": "{\"prompt\":\"Hi\"}" });
        assert_eq!(
            extract_body(&payload).as_deref(),
            Some("{\"prompt\":\"Hi\"}")
        );
    }

    #[test]
    fn test_extract_base64_body() {
        let encoded = STANDARD.encode("{\"prompt\":\"Hi\"}");
        let payload = json!({ "body": encoded, "isBase64Encoded": true });
        assert_eq!(
            extract_body(&payload).as_deref(),
            Some("{\"prompt\":\"Hi\"}")
        );
    }

    #[test]
    fn test_extract_missing_or_null_body() {
        assert_eq!(extract_body(&json!({})), None);
        assert_eq!(extract_body(&json!({ "body": null })), None);
    }

    #[test]
    fn test_extract_invalid_base64_body() {
        let payload = json!({ "body": "not base64!!", "isBase64Encoded": true });
        assert_eq!(extract_body(&payload), None);
    }
}
