//! Bounded retry for fallible async operations
//!
//! A [`RetryPolicy`] caps the number of attempts and optionally waits between
//! them. The default policy makes three attempts back to back, which is what
//! notification delivery uses.
//!
//! # Example
//!
//! ```rust,ignore
//! use application::retry::{RetryPolicy, with_retry};
//!
//! let outcome = with_retry(&RetryPolicy::default(), || async {
//!     notifier.send_text("hello").await
//! })
//! .await;
//! println!("delivered after {} attempt(s)", outcome.attempts);
//! ```

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ApplicationError;

/// How often and how patiently an operation is retried
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one (default: 3)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the first retry in milliseconds (default: 0, no delay)
    #[serde(default)]
    pub delay_ms: u64,

    /// Factor applied to the delay after every retry (default: 1.0)
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,

    /// Upper bound for a single delay in milliseconds (default: 10000)
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,
}

const fn default_max_attempts() -> u32 {
    3
}

const fn default_multiplier() -> f64 {
    1.0
}

const fn default_max_delay() -> u64 {
    10_000
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_ms: 0,
            multiplier: default_multiplier(),
            max_delay_ms: default_max_delay(),
        }
    }
}

impl RetryPolicy {
    /// Retry up to `max_attempts` times without waiting
    #[must_use]
    pub const fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            delay_ms: 0,
            multiplier: 1.0,
            max_delay_ms: 10_000,
        }
    }

    /// Wait between attempts, growing the delay exponentially
    #[must_use]
    pub const fn with_backoff(mut self, delay_ms: u64, multiplier: f64) -> Self {
        self.delay_ms = delay_ms;
        self.multiplier = multiplier;
        self
    }

    /// Attempts actually made; a zero bound still runs the operation once
    #[must_use]
    pub fn effective_attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay before retry number `retry` (0-indexed)
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        if self.delay_ms == 0 {
            return Duration::ZERO;
        }
        let base = (self.delay_ms as f64) * self.multiplier.powi(retry as i32);
        let capped = base.min(self.max_delay_ms as f64).max(0.0);
        Duration::from_millis(capped as u64)
    }

    /// Validate the policy
    ///
    /// # Errors
    ///
    /// Returns an error if the policy is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }
        if self.multiplier < 1.0 {
            return Err("multiplier must be at least 1.0".to_string());
        }
        Ok(())
    }
}

/// Trait for errors that can be checked for retryability
pub trait Retryable {
    /// Returns true if this error is retryable
    fn is_retryable(&self) -> bool;
}

impl Retryable for ApplicationError {
    fn is_retryable(&self) -> bool {
        Self::is_retryable(self)
    }
}

/// Retry result containing either success or the last error
#[derive(Debug)]
pub struct RetryResult<T, E> {
    /// The result of the operation
    pub result: Result<T, E>,
    /// Number of attempts made (1 = no retries, 2 = one retry, etc.)
    pub attempts: u32,
    /// Total time spent including retries
    pub total_duration: Duration,
}

impl<T, E> RetryResult<T, E> {
    /// Check if the operation succeeded
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Convert to standard Result, discarding metadata
    pub fn into_result(self) -> Result<T, E> {
        self.result
    }
}

/// Execute an async operation with retry logic
///
/// Every failed attempt is logged. A non-retryable error ends the loop
/// immediately; otherwise the operation runs until it succeeds or the
/// policy's attempt bound is reached.
#[allow(clippy::cast_possible_truncation)]
pub async fn with_retry<F, Fut, T, E>(policy: &RetryPolicy, mut operation: F) -> RetryResult<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + std::fmt::Display,
{
    let start = std::time::Instant::now();
    let max_attempts = policy.effective_attempts();
    let mut attempts = 0u32;

    loop {
        attempts += 1;

        match operation().await {
            Ok(value) => {
                if attempts > 1 {
                    debug!(
                        attempts = attempts,
                        duration_ms = start.elapsed().as_millis() as u64,
                        "Operation succeeded after retries"
                    );
                }
                return RetryResult {
                    result: Ok(value),
                    attempts,
                    total_duration: start.elapsed(),
                };
            },
            Err(err) => {
                if !err.is_retryable() {
                    warn!(
                        attempt = attempts,
                        error = %err,
                        "Operation failed with non-retryable error"
                    );
                    return RetryResult {
                        result: Err(err),
                        attempts,
                        total_duration: start.elapsed(),
                    };
                }

                if attempts >= max_attempts {
                    warn!(
                        attempt = attempts,
                        max_attempts = max_attempts,
                        error = %err,
                        "Operation failed, no attempts left"
                    );
                    return RetryResult {
                        result: Err(err),
                        attempts,
                        total_duration: start.elapsed(),
                    };
                }

                let delay = policy.delay_for_retry(attempts - 1);
                warn!(
                    attempt = attempts,
                    max_attempts = max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Operation failed, retrying"
                );

                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            },
        }
    }
}
