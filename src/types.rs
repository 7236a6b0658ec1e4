//! Common types used throughout supacrud
//!
//! Shared type definitions and aliases used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// HEAD request
    HEAD,
    /// GET request
    #[default]
    GET,
    /// OPTIONS request
    OPTIONS,
    /// POST request
    POST,
    /// PUT request
    PUT,
    /// PATCH request
    PATCH,
    /// DELETE request
    DELETE,
}

impl Method {
    /// All methods, in the order PostgREST documents them
    pub const ALL: [Method; 7] = [
        Method::HEAD,
        Method::GET,
        Method::OPTIONS,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
    ];

    /// The method name as it appears on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Method::HEAD => "HEAD",
            Method::GET => "GET",
            Method::OPTIONS => "OPTIONS",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::PATCH => "PATCH",
            Method::DELETE => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::HEAD => reqwest::Method::HEAD,
            Method::GET => reqwest::Method::GET,
            Method::OPTIONS => reqwest::Method::OPTIONS,
            Method::POST => reqwest::Method::POST,
            Method::PUT => reqwest::Method::PUT,
            Method::PATCH => reqwest::Method::PATCH,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// Decoded outcome of a single HTTP attempt
///
/// Carries any HTTP response, success or not; the retry executor decides
/// what to do with non-2xx statuses. An empty body decodes to JSON null.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded JSON body (object, array, or null for empty bodies)
    pub body: JsonValue,
}

impl ApiResponse {
    /// Create a response from a status and body
    pub fn new(status: u16, body: JsonValue) -> Self {
        Self { status, body }
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `message` field of an error body, when the server provided one
    pub fn error_message(&self) -> Option<&str> {
        match &self.body {
            JsonValue::Object(map) => map.get("message").and_then(JsonValue::as_str),
            JsonValue::String(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_display_and_conversion() {
        assert_eq!(Method::PATCH.to_string(), "PATCH");
        assert_eq!(reqwest::Method::from(Method::DELETE), reqwest::Method::DELETE);
        assert_eq!(Method::ALL.len(), 7);
    }

    #[test]
    fn test_method_serde() {
        let m: Method = serde_json::from_str("\"POST\"").unwrap();
        assert_eq!(m, Method::POST);
        assert_eq!(serde_json::to_string(&Method::GET).unwrap(), "\"GET\"");
    }

    #[test]
    fn test_response_is_success() {
        assert!(ApiResponse::new(200, json!(null)).is_success());
        assert!(ApiResponse::new(204, json!(null)).is_success());
        assert!(!ApiResponse::new(199, json!(null)).is_success());
        assert!(!ApiResponse::new(404, json!(null)).is_success());
        assert!(!ApiResponse::new(500, json!(null)).is_success());
    }

    #[test]
    fn test_error_message_extraction() {
        let resp = ApiResponse::new(400, json!({"message": "bad request"}));
        assert_eq!(resp.error_message(), Some("bad request"));

        let resp = ApiResponse::new(502, json!("upstream down"));
        assert_eq!(resp.error_message(), Some("upstream down"));

        let resp = ApiResponse::new(500, json!(null));
        assert_eq!(resp.error_message(), None);

        let resp = ApiResponse::new(422, json!({"hint": "no message field"}));
        assert_eq!(resp.error_message(), None);
    }
}
