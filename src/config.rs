//! Client configuration
//!
//! Mirrors the environment bootstrap contract of a Supabase project: a REST
//! base URL plus the anon and service-role keys. The retry policy and request
//! timeout ride along so the whole client is assembled from one value.

use crate::error::{Error, Result};
use crate::retry::RetryPolicy;
use std::time::Duration;

/// Environment variable holding the REST base URL
pub const ENV_BASE_URL: &str = "SUPABASE_URL";
/// Environment variable holding the anon key
pub const ENV_ANON_KEY: &str = "SUPABASE_ANON_KEY";
/// Environment variable holding the service-role key
pub const ENV_SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`crate::Supacrud`] client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the PostgREST endpoint, e.g. `https://x.supabase.co/rest/v1`
    pub base_url: String,
    /// Project anon key, sent as the `apikey` header
    pub anon_key: String,
    /// Service-role key, sent as the bearer token
    pub service_role_key: String,
    /// Per-request timeout handed to the HTTP transport
    pub timeout: Duration,
    /// Retry policy for transient failures
    pub retry: RetryPolicy,
}

impl ClientConfig {
    /// Create a config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load configuration from `SUPABASE_URL`, `SUPABASE_ANON_KEY`, and
    /// `SUPABASE_SERVICE_ROLE_KEY`
    pub fn from_env() -> Result<Self> {
        let require = |name: &str| {
            std::env::var(name)
                .map_err(|_| Error::config(format!("environment variable {name} is not set")))
        };

        Self::builder()
            .base_url(require(ENV_BASE_URL)?)
            .anon_key(require(ENV_ANON_KEY)?)
            .service_role_key(require(ENV_SERVICE_ROLE_KEY)?)
            .build()
    }

    /// Check the invariants the requester relies on
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::config("base_url must be a non-empty string"));
        }
        if self.anon_key.is_empty() {
            return Err(Error::config("anon_key must be a non-empty string"));
        }
        if self.service_role_key.is_empty() {
            return Err(Error::config("service_role_key must be a non-empty string"));
        }
        if self.timeout.is_zero() {
            return Err(Error::config("timeout must be greater than zero"));
        }
        self.retry.validate()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            anon_key: String::new(),
            service_role_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the anon key
    pub fn anon_key(mut self, key: impl Into<String>) -> Self {
        self.config.anon_key = key.into();
        self
    }

    /// Set the service-role key
    pub fn service_role_key(mut self, key: impl Into<String>) -> Self {
        self.config.service_role_key = key.into();
        self
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the retry policy
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.config.retry = policy;
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<ClientConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
