//! Credentials and header application
//!
//! Supabase authenticates every PostgREST request with two headers: the
//! project `apikey` (anon key) and an `Authorization: Bearer` token
//! (service-role key for privileged access). Both are opaque strings
//! injected at construction and immutable afterwards.

use crate::error::{Error, Result};
use reqwest::RequestBuilder;

/// Header name for the project API key
pub const APIKEY_HEADER: &str = "apikey";

/// Immutable credential pair attached to every outgoing request
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: String,
    bearer_token: String,
}

impl Credentials {
    /// Create credentials, rejecting empty keys
    pub fn new(api_key: impl Into<String>, bearer_token: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let bearer_token = bearer_token.into();

        if api_key.is_empty() {
            return Err(Error::config("api_key must be a non-empty string"));
        }
        if bearer_token.is_empty() {
            return Err(Error::config("bearer_token must be a non-empty string"));
        }

        Ok(Self {
            api_key,
            bearer_token,
        })
    }

    /// The project API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Apply authentication headers to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(APIKEY_HEADER, &self.api_key)
            .bearer_auth(&self.bearer_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_accept_non_empty_keys() {
        let creds = Credentials::new("anon", "service-role").unwrap();
        assert_eq!(creds.api_key(), "anon");
    }

    #[test]
    fn test_credentials_reject_empty_api_key() {
        let err = Credentials::new("", "service-role").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn test_credentials_reject_empty_bearer_token() {
        let err = Credentials::new("anon", "").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("bearer_token"));
    }
}
