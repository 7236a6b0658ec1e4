//! Retry policy and executor
//!
//! The retry layer is split into pure configuration ([`RetryPolicy`]) and the
//! loop that drives it ([`RetryExecutor`]). The executor takes a
//! zero-argument operation producing one HTTP attempt, classifies each
//! outcome, and sleeps according to the policy's backoff schedule until the
//! operation succeeds, a non-retryable failure occurs, or attempts are
//! exhausted.

mod executor;
mod policy;

pub use executor::RetryExecutor;
pub use policy::{RetryPolicy, RetryPolicyBuilder, DEFAULT_RETRYABLE_STATUS_CODES};
