//! Client error types and server error payload extraction

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Fallback shown when a server error carries no usable payload
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the session credential was rejected by the server
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// Raw response body carried by this error, if any
    fn body(&self) -> Option<&str> {
        match self {
            Self::BadRequest(body)
            | Self::AuthenticationFailed(body)
            | Self::Forbidden(body)
            | Self::NotFound(body) => Some(body),
            Self::ServerError { message, .. } => Some(message),
            Self::Request(_) | Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }

    /// Flatten the server error payload into display messages
    pub fn messages(&self, default_message: &str) -> Vec<String> {
        extract_errors(self.body(), default_message)
    }
}

/// Extract and flatten error messages from a server error payload.
///
/// The API reports failures in three shapes: a flat `errors` array, a
/// field-keyed `errors` object of arrays (validation), or a single
/// `message` field. Anything else falls back to `default_message`.
pub fn extract_errors(body: Option<&str>, default_message: &str) -> Vec<String> {
    let data = match body.and_then(|b| serde_json::from_str::<JsonValue>(b).ok()) {
        Some(data) => data,
        None => return vec![default_message.to_string()],
    };

    match data.get("errors") {
        Some(JsonValue::Array(items)) => items.iter().map(stringify).collect(),
        // Field-keyed validation errors, flattened in key enumeration order
        Some(JsonValue::Object(fields)) => fields
            .values()
            .flat_map(|value| match value {
                JsonValue::Array(items) => items.iter().map(stringify).collect::<Vec<_>>(),
                other => vec![stringify(other)],
            })
            .collect(),
        _ => match data.get("message").and_then(JsonValue::as_str) {
            Some(message) => vec![message.to_string()],
            None => vec![default_message.to_string()],
        },
    }
}

fn stringify(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_error_array() {
        let body = r#"{"errors": ["a", "b"]}"#;
        assert_eq!(extract_errors(Some(body), "default"), vec!["a", "b"]);
    }

    #[test]
    fn flattens_field_keyed_errors_in_key_order() {
        let body = r#"{"errors": {"field1": ["x"], "field2": ["y", "z"]}}"#;
        assert_eq!(extract_errors(Some(body), "default"), vec!["x", "y", "z"]);
    }

    #[test]
    fn field_order_follows_enumeration_not_lexical_order() {
        let body = r#"{"errors": {"zeta": ["first"], "alpha": ["second"]}}"#;
        assert_eq!(
            extract_errors(Some(body), "default"),
            vec!["first", "second"]
        );
    }

    #[test]
    fn falls_back_to_message_field() {
        let body = r#"{"message": "bad"}"#;
        assert_eq!(extract_errors(Some(body), "default"), vec!["bad"]);
    }

    #[test]
    fn errors_key_takes_precedence_over_message() {
        let body = r#"{"errors": ["a"], "message": "bad"}"#;
        assert_eq!(extract_errors(Some(body), "default"), vec!["a"]);
    }

    #[test]
    fn missing_body_yields_default() {
        assert_eq!(extract_errors(None, "default"), vec!["default"]);
    }

    #[test]
    fn unparseable_body_yields_default() {
        assert_eq!(
            extract_errors(Some("<html>502</html>"), "default"),
            vec!["default"]
        );
    }

    #[test]
    fn client_error_exposes_flattened_messages() {
        let err = ClientError::from_status(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"errors": {"name": ["name is taken"]}}"#.to_string(),
        );
        assert_eq!(err.messages("default"), vec!["name is taken"]);
    }

    #[test]
    fn auth_failure_is_flagged_expired() {
        let err = ClientError::from_status(
            reqwest::StatusCode::UNAUTHORIZED,
            r#"{"message": "invalid key"}"#.to_string(),
        );
        assert!(err.is_auth_expired());
        assert_eq!(err.messages("default"), vec!["invalid key"]);
    }
}
