//! HTTP requester
//!
//! Owns the base URL, credentials, and retry executor. Composes request URLs
//! safely (exactly one separator between base and path, no escaping the base
//! origin), attaches the standard Supabase headers, and normalizes every
//! outcome into an [`ApiResponse`] or a terminal error.

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::retry::RetryExecutor;
use crate::types::{ApiResponse, JsonValue, Method};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Preference header asking PostgREST to return the affected rows
const PREFER_FULL_REPRESENTATION: &str = "return=representation";

/// The single component interface of the request layer
#[async_trait]
pub trait Requester: Send + Sync {
    /// Perform one logical request, retrying transient failures per policy.
    /// `path` is relative to the base URL and may carry a query string.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&JsonValue>,
        full_representation: bool,
    ) -> Result<ApiResponse>;
}

/// [`Requester`] backed by reqwest and the retry executor
#[derive(Debug, Clone)]
pub struct HttpRequester {
    base_url: Url,
    credentials: Credentials,
    client: Client,
    executor: RetryExecutor,
}

impl HttpRequester {
    /// Build a requester from a validated configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::config(format!("invalid base_url: {e}")))?;
        if base_url.host_str().is_none() {
            return Err(Error::config("base_url must include a host"));
        }

        let credentials = Credentials::new(config.anon_key.clone(), config.service_role_key.clone())?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("supacrud/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        let executor = RetryExecutor::new(config.retry)?;

        Ok(Self {
            base_url,
            credentials,
            client,
            executor,
        })
    }

    /// The base URL requests are issued against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join `path` onto the base URL with exactly one separator, rejecting
    /// anything that would leave the base origin or path prefix.
    pub(crate) fn build_url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
            return Err(Error::validation(
                "path must be relative to the base URL, not an absolute URL",
            ));
        }

        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let url = Url::parse(&joined)
            .map_err(|e| Error::validation(format!("invalid request path '{path}': {e}")))?;

        // URL parsing normalizes dot segments, so a traversal attempt shows
        // up here as a changed origin or a path outside the base prefix.
        // The prefix comparison stops at a segment boundary so a sibling
        // like /rest/v1-evil does not pass for a base of /rest/v1.
        let same_origin = url.scheme() == self.base_url.scheme()
            && url.host_str() == self.base_url.host_str()
            && url.port_or_known_default() == self.base_url.port_or_known_default();
        let base_path = self.base_url.path().trim_end_matches('/');
        let within_base =
            url.path() == base_path || url.path().starts_with(&format!("{base_path}/"));
        if !same_origin || !within_base {
            return Err(Error::validation(format!(
                "path '{path}' escapes the configured base URL"
            )));
        }

        Ok(url)
    }

    /// One HTTP attempt. Transport failures and undecodable success bodies
    /// come back as transport-class errors for the executor to classify.
    async fn attempt(
        &self,
        method: Method,
        url: &Url,
        body: Option<&JsonValue>,
        full_representation: bool,
    ) -> Result<ApiResponse> {
        let mut req = self
            .client
            .request(method.into(), url.clone())
            .header(CONTENT_TYPE, "application/json");
        if full_representation {
            req = req.header("Prefer", PREFER_FULL_REPRESENTATION);
        }
        req = self.credentials.apply(req);
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| Error::transport(format!("transport error: {e}")))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("failed to read response body: {e}")))?;

        Ok(ApiResponse::new(status, decode_body(status, &text)?))
    }
}

/// Decode a response body. Empty bodies are JSON null; a malformed 2xx body
/// is a transport-class failure; malformed error bodies are kept verbatim so
/// their text survives into the terminal error message.
fn decode_body(status: u16, text: &str) -> Result<JsonValue> {
    if text.trim().is_empty() {
        return Ok(JsonValue::Null);
    }
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(e) if (200..300).contains(&status) => {
            Err(Error::transport(format!("malformed JSON in response: {e}")))
        }
        Err(_) => Ok(JsonValue::String(text.to_string())),
    }
}

#[async_trait]
impl Requester for HttpRequester {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&JsonValue>,
        full_representation: bool,
    ) -> Result<ApiResponse> {
        let url = self.build_url(path)?;
        debug!("executing {method} {url}");

        self.executor
            .run(method, url.as_str(), || {
                self.attempt(method, &url, body, full_representation)
            })
            .await
    }
}
