//! Response builders for the API Gateway proxy integration.

use serde_json::{Value, json};

/// `error` value of every failure response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

fn response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": {
            "Content-Type": "application/json",
            "Access-Control-Allow-Origin": "*"
        },
        "body": body.to_string()
    })
}

/// Returns a 200 OK response carrying the assembled agent reply.
#[must_use]
pub fn ok_completion(completion: &str) -> Value {
    response(200, &json!({ "response": completion }))
}

/// Returns a 500 response with the failure description in `details`.
///
/// Carries the same CORS header as the success response so browsers can
/// read the error.
#[must_use]
pub fn internal_error(details: &str) -> Value {
    response(
        500,
        &json!({ "error": INTERNAL_ERROR_MESSAGE, "details": details }),
    )
}
