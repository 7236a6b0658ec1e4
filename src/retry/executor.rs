//! Retry executor
//!
//! Runs a single logical operation (one HTTP attempt per invocation) under a
//! [`RetryPolicy`]. Classification rules:
//!
//! - 2xx response: return immediately
//! - non-2xx response: retryable iff the status is in the policy's allow-list
//!   and the method is retryable; otherwise terminal
//! - transport failure (connect error, timeout, undecodable 2xx body):
//!   retryable as long as the method is retryable
//!
//! Sleeps use `tokio::time::sleep`, so a waiting retry loop never blocks
//! other tasks. An optional deadline is checked before each sleep so an
//! exhausted time budget ends the loop early instead of waiting out the full
//! schedule.

use super::policy::RetryPolicy;
use crate::error::{Error, Result};
use crate::types::{ApiResponse, Method};
use std::future::Future;
use std::time::Instant;
use tracing::{debug, warn};

const GENERIC_FAILURE: &str = "Supabase request failed";

/// Drives one HTTP attempt at a time under a retry policy
#[derive(Debug, Clone)]
pub struct RetryExecutor {
    policy: RetryPolicy,
}

impl RetryExecutor {
    /// Create an executor from a validated policy
    pub fn new(policy: RetryPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// The policy this executor runs under
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run `operation` until it succeeds, fails terminally, or the attempt
    /// budget is spent. Each invocation of `operation` performs exactly one
    /// HTTP attempt; transport failures must arrive as
    /// `Error::Request { status_code: None, .. }`.
    pub async fn run<F, Fut>(
        &self,
        method: Method,
        url: &str,
        mut operation: F,
    ) -> Result<ApiResponse>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<ApiResponse>>,
    {
        let deadline = self.policy.retry_deadline.map(|d| Instant::now() + d);
        let mut attempt: u32 = 1;

        loop {
            match operation().await {
                Ok(response) if response.is_success() => {
                    debug!(
                        "{method} {url} succeeded with {} on attempt {attempt}",
                        response.status
                    );
                    return Ok(response);
                }
                Ok(response) => {
                    if !self.policy.should_retry(response.status, method) {
                        return Err(self.terminal(&response, url));
                    }
                    if attempt >= self.policy.max_attempts || self.out_of_time(deadline, attempt) {
                        return self.exhausted(response, url);
                    }
                    warn!(
                        "{method} {url} returned {}, attempt {attempt}/{}, retrying in {:?}",
                        response.status,
                        self.policy.max_attempts,
                        self.policy.backoff_delay(attempt)
                    );
                }
                Err(err) => {
                    if !self.policy.retries_method(method)
                        || attempt >= self.policy.max_attempts
                        || self.out_of_time(deadline, attempt)
                    {
                        return Err(with_url(err, url));
                    }
                    warn!(
                        "{method} {url} failed ({err}), attempt {attempt}/{}, retrying in {:?}",
                        self.policy.max_attempts,
                        self.policy.backoff_delay(attempt)
                    );
                }
            }

            tokio::time::sleep(self.policy.backoff_delay(attempt)).await;
            attempt += 1;
        }
    }

    /// Would sleeping after `attempt` overrun the deadline?
    fn out_of_time(&self, deadline: Option<Instant>, attempt: u32) -> bool {
        deadline.is_some_and(|d| Instant::now() + self.policy.backoff_delay(attempt) > d)
    }

    fn terminal(&self, response: &ApiResponse, url: &str) -> Error {
        let message = response
            .error_message()
            .unwrap_or(GENERIC_FAILURE)
            .to_string();
        Error::request(message, Some(response.status), Some(url.to_string()))
    }

    fn exhausted(&self, response: ApiResponse, url: &str) -> Result<ApiResponse> {
        if self.policy.raise_on_status {
            Err(self.terminal(&response, url))
        } else {
            Ok(response)
        }
    }
}

/// Attach the target URL to a transport error that lacks one
fn with_url(err: Error, url: &str) -> Error {
    match err {
        Error::Request {
            message,
            status_code,
            url: None,
        } => Error::request(message, status_code, Some(url.to_string())),
        other => other,
    }
}
