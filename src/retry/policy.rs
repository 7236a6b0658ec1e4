//! Retry policy configuration
//!
//! Pure configuration, validated at construction and immutable afterwards.
//! Classification is an allow-list: a status retries only when it appears in
//! `retryable_status_codes` and the request method appears in
//! `retryable_methods`.

use crate::error::{Error, Result};
use crate::types::Method;
use std::time::Duration;

/// Status codes retried by default: rate limiting, server errors, and the
/// Cloudflare 52x family Supabase deployments sit behind.
pub const DEFAULT_RETRYABLE_STATUS_CODES: [u16; 12] = [
    429, 500, 502, 503, 504, 520, 521, 522, 523, 524, 525, 526,
];

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_BACKOFF_FACTOR: f64 = 1.0;
const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(120);

/// Immutable parameters governing whether and how a failed attempt is retried
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempt budget, counted 1..=max_attempts
    pub max_attempts: u32,
    /// Base of the exponential backoff schedule; the sleep after attempt `i`
    /// is `backoff_factor ^ i` seconds
    pub backoff_factor: f64,
    /// Cap on any single sleep
    pub max_backoff: Duration,
    /// Statuses worth retrying (allow-list)
    pub retryable_status_codes: Vec<u16>,
    /// Methods worth retrying
    pub retryable_methods: Vec<Method>,
    /// When attempts are exhausted: raise an error (true, the default) or
    /// hand the last response back to the caller
    pub raise_on_status: bool,
    /// Overall retry budget; checked before each sleep so callers are not
    /// forced to wait through the full backoff schedule
    pub retry_deadline: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            max_backoff: DEFAULT_MAX_BACKOFF,
            retryable_status_codes: DEFAULT_RETRYABLE_STATUS_CODES.to_vec(),
            retryable_methods: Method::ALL.to_vec(),
            raise_on_status: true,
            retry_deadline: None,
        }
    }
}

impl RetryPolicy {
    /// Create a policy builder
    pub fn builder() -> RetryPolicyBuilder {
        RetryPolicyBuilder::default()
    }

    /// Check the invariants the rest of the crate relies on
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts < 1 {
            return Err(Error::config("max_attempts must be at least 1"));
        }
        if !(self.backoff_factor > 0.0 && self.backoff_factor.is_finite()) {
            return Err(Error::config("backoff_factor must be a positive number"));
        }
        if self.retryable_status_codes.is_empty() {
            return Err(Error::config(
                "retryable_status_codes must not be empty when retries are enabled",
            ));
        }
        if self.retryable_methods.is_empty() {
            return Err(Error::config(
                "retryable_methods must not be empty when retries are enabled",
            ));
        }
        Ok(())
    }

    /// Whether an HTTP failure with this status and method should be retried
    pub fn should_retry(&self, status: u16, method: Method) -> bool {
        self.retryable_status_codes.contains(&status) && self.retries_method(method)
    }

    /// Whether transport-level failures on this method should be retried
    pub fn retries_method(&self, method: Method) -> bool {
        self.retryable_methods.contains(&method)
    }

    /// Sleep duration between attempt `attempt` and the next one.
    /// Attempts are counted from 1.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let secs = self.backoff_factor.powi(attempt as i32);
        let delay = Duration::from_secs_f64(secs.min(self.max_backoff.as_secs_f64()));
        std::cmp::min(delay, self.max_backoff)
    }
}

/// Builder for [`RetryPolicy`]
#[derive(Debug, Default)]
pub struct RetryPolicyBuilder {
    policy: RetryPolicy,
}

impl RetryPolicyBuilder {
    /// Set the total attempt budget
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.policy.max_attempts = attempts;
        self
    }

    /// Set the backoff factor
    pub fn backoff_factor(mut self, factor: f64) -> Self {
        self.policy.backoff_factor = factor;
        self
    }

    /// Cap individual sleeps
    pub fn max_backoff(mut self, max: Duration) -> Self {
        self.policy.max_backoff = max;
        self
    }

    /// Replace the retryable status allow-list
    pub fn retryable_status_codes(mut self, codes: impl Into<Vec<u16>>) -> Self {
        self.policy.retryable_status_codes = codes.into();
        self
    }

    /// Replace the retryable method list
    pub fn retryable_methods(mut self, methods: impl Into<Vec<Method>>) -> Self {
        self.policy.retryable_methods = methods.into();
        self
    }

    /// Return the last response instead of raising once attempts run out
    pub fn return_last_response(mut self) -> Self {
        self.policy.raise_on_status = false;
        self
    }

    /// Bound the total time spent sleeping between attempts
    pub fn retry_deadline(mut self, deadline: Duration) -> Self {
        self.policy.retry_deadline = Some(deadline);
        self
    }

    /// Validate and build the policy
    pub fn build(self) -> Result<RetryPolicy> {
        self.policy.validate()?;
        Ok(self.policy)
    }
}
