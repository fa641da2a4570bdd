//! Retry and circuit breaking for calls against the database.
//!
//! `Resilience` wraps an async operation with a `RetryPolicy` and a shared
//! `CircuitBreaker`. Errors decide for themselves whether they are worth retrying through
//! the `Transient` trait: a missing row is an answer, a dropped connection is not.

pub mod circuit_breaker;
pub mod retry;

use std::{fmt, future::Future, time::Duration};
use thiserror::Error;
use tokio::time::{sleep, timeout};

use self::{
    circuit_breaker::{CircuitBreaker, CircuitBreakerConfig},
    retry::RetryPolicy,
};

/// Classifies an error as retryable.
pub trait Transient {
    fn is_transient(&self) -> bool;
}

/// Why a resilient call did not produce a value.
#[derive(Error, Debug)]
pub enum ResilienceError<E> {
    /// The circuit breaker rejected the call without running it.
    #[error("Circuit breaker '{0}' is open")]
    CircuitOpen(&'static str),

    /// The last attempt exceeded the per-attempt timeout.
    #[error("Attempt timed out after {0:?}")]
    Timeout(Duration),

    /// The operation itself failed.
    #[error("{0}")]
    Inner(E),
}

/// Retry policy and circuit breaker applied together to one kind of call.
///
/// Clones share the circuit breaker.
#[derive(Clone)]
pub struct Resilience {
    retry: RetryPolicy,
    breaker: CircuitBreaker,
}

impl Resilience {
    /// Creates a new decorator with a closed circuit breaker named `name`.
    pub fn new(name: &'static str, retry: RetryPolicy, breaker: CircuitBreakerConfig) -> Self {
        Self {
            retry,
            breaker: CircuitBreaker::new(name, breaker),
        }
    }

    pub fn circuit_breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    /// Runs `operation` until it succeeds, fails permanently, or the retry budget is spent.
    ///
    /// Each attempt first asks the circuit breaker for a permit; a rejected attempt ends the
    /// call with `CircuitOpen` without invoking `operation`. Non-transient errors are
    /// returned immediately and are not counted by the breaker.
    ///
    /// # Returns
    /// - `Ok(T)` - An attempt succeeded
    /// - `Err(ResilienceError::Inner)` - A non-transient error, or the last transient one
    /// - `Err(ResilienceError::Timeout)` - The last attempt timed out
    /// - `Err(ResilienceError::CircuitOpen)` - The breaker rejected an attempt
    pub async fn call<T, E, F, Fut>(&self, mut operation: F) -> Result<T, ResilienceError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Transient + fmt::Display,
    {
        let mut attempt = 0;

        loop {
            attempt += 1;

            let Some(permit) = self.breaker.try_acquire() else {
                return Err(ResilienceError::CircuitOpen(self.breaker.name()));
            };

            // A cancelled attempt drops `permit`, which hands the slot back uncounted.
            let failure = match timeout(self.retry.attempt_timeout, operation()).await {
                Ok(Ok(value)) => {
                    permit.record_success();
                    return Ok(value);
                }
                Ok(Err(err)) if !err.is_transient() => {
                    drop(permit);
                    return Err(ResilienceError::Inner(err));
                }
                Ok(Err(err)) => ResilienceError::Inner(err),
                Err(_) => ResilienceError::Timeout(self.retry.attempt_timeout),
            };

            permit.record_failure();

            if !self.retry.allows_retry_after(attempt) {
                tracing::warn!(
                    breaker = self.breaker.name(),
                    attempts = attempt,
                    "Retries exhausted: {}",
                    failure
                );
                return Err(failure);
            }

            tracing::warn!(
                breaker = self.breaker.name(),
                attempt,
                wait = ?self.retry.wait,
                "Attempt failed, retrying: {}",
                failure
            );
            sleep(self.retry.wait).await;
        }
    }

    /// Like `call`, but degrades exhaustion, timeouts and an open circuit to `Ok(None)`.
    ///
    /// Only non-transient errors reach the caller. `None` therefore means "the service is
    /// degraded", never "the value does not exist".
    pub async fn call_or_fallback<T, E, F, Fut>(&self, operation: F) -> Result<Option<T>, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Transient + fmt::Display,
    {
        match self.call(operation).await {
            Ok(value) => Ok(Some(value)),
            Err(ResilienceError::Inner(err)) if !err.is_transient() => Err(err),
            Err(err) => {
                tracing::warn!(
                    breaker = self.breaker.name(),
                    "Falling back to empty result: {}",
                    err
                );
                Ok(None)
            }
        }
    }
}
