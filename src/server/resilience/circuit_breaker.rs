//! Count-based circuit breaker.
//!
//! # States
//! - Closed: calls pass through, outcomes fill a sliding window
//! - Open: calls are rejected until `open_wait` has elapsed
//! - Half-Open: a limited number of probe calls decide between Closed and Open
//! - Forced-Open: calls are rejected until `reset` is called
//!
//! ```text
//! Closed → Open: failure rate >= threshold over at least `minimum_calls` outcomes
//! Open → Half-Open: first call after `open_wait`
//! Half-Open → Closed: probe failure rate below threshold
//! Half-Open → Open: probe failure rate at or above threshold
//! ```
//!
//! Every state change starts a new generation. A `Permit` remembers the generation it was
//! issued in, and outcomes from an older generation are ignored.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};
use tokio::time::Instant;

/// Tuning for a `CircuitBreaker`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitBreakerConfig {
    /// Failure percentage (1..=100) at which the circuit opens.
    pub failure_rate_threshold: u8,
    /// Number of most recent outcomes considered while closed.
    pub sliding_window_size: usize,
    /// Outcomes required before the failure rate is evaluated.
    pub minimum_calls: usize,
    /// How long the circuit stays open before probing.
    pub open_wait: Duration,
    /// Probe calls admitted while half-open.
    pub half_open_calls: usize,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_rate_threshold: 50,
            sliding_window_size: 10,
            minimum_calls: 5,
            open_wait: Duration::from_secs(10),
            half_open_calls: 3,
        }
    }
}

/// Externally visible state of a circuit breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    Closed,
    Open,
    HalfOpen,
    ForcedOpen,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Closed,
    Open { until: Instant },
    HalfOpen { admitted: usize },
    ForcedOpen,
}

struct BreakerInner {
    phase: Phase,
    generation: u64,
    /// `true` marks a failed call.
    outcomes: VecDeque<bool>,
}

impl BreakerInner {
    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.generation += 1;
        self.outcomes.clear();
    }
}

/// Circuit breaker shared by every clone.
///
/// Callers ask for a `Permit` with `try_acquire`, run the protected call, then report the
/// outcome through the permit. A permit dropped without an outcome hands its slot back, so
/// a cancelled or panicking call never holds a half-open probe slot.
#[derive(Clone)]
pub struct CircuitBreaker {
    name: &'static str,
    config: CircuitBreakerConfig,
    inner: Arc<Mutex<BreakerInner>>,
}

/// Permission to run one call through a `CircuitBreaker`.
#[must_use = "dropping a permit releases it without recording an outcome"]
pub struct Permit {
    breaker: CircuitBreaker,
    generation: u64,
    settled: bool,
}

impl Permit {
    pub fn record_success(mut self) {
        self.settled = true;
        self.breaker.record(self.generation, false);
    }

    pub fn record_failure(mut self) {
        self.settled = true;
        self.breaker.record(self.generation, true);
    }
}

impl Drop for Permit {
    fn drop(&mut self) {
        if !self.settled {
            self.breaker.release(self.generation);
        }
    }
}

impl CircuitBreaker {
    /// Creates a closed circuit breaker.
    ///
    /// `minimum_calls` is clamped into `1..=sliding_window_size` and `half_open_calls` to at
    /// least 1, otherwise the breaker could never change state.
    pub fn new(name: &'static str, mut config: CircuitBreakerConfig) -> Self {
        config.sliding_window_size = config.sliding_window_size.max(1);
        config.minimum_calls = config.minimum_calls.clamp(1, config.sliding_window_size);
        config.half_open_calls = config.half_open_calls.max(1);
        config.failure_rate_threshold = config.failure_rate_threshold.clamp(1, 100);

        Self {
            name,
            config,
            inner: Arc::new(Mutex::new(BreakerInner {
                phase: Phase::Closed,
                generation: 0,
                outcomes: VecDeque::new(),
            })),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> CircuitState {
        match self.lock().phase {
            Phase::Closed => CircuitState::Closed,
            Phase::Open { .. } => CircuitState::Open,
            Phase::HalfOpen { .. } => CircuitState::HalfOpen,
            Phase::ForcedOpen => CircuitState::ForcedOpen,
        }
    }

    /// Asks for permission to run one call.
    ///
    /// # Returns
    /// - `Some(Permit)` - The call may proceed; report its outcome through the permit
    /// - `None` - The circuit is open, the call must not touch the protected resource
    pub fn try_acquire(&self) -> Option<Permit> {
        let mut inner = self.lock();
        let phase = inner.phase;

        match phase {
            Phase::Closed => {}
            Phase::ForcedOpen => return None,
            Phase::Open { until } => {
                if Instant::now() < until {
                    return None;
                }

                tracing::info!(breaker = self.name, "Circuit half-open, admitting probe calls");
                inner.enter(Phase::HalfOpen { admitted: 1 });
            }
            Phase::HalfOpen { admitted } => {
                if admitted >= self.config.half_open_calls {
                    return None;
                }

                inner.phase = Phase::HalfOpen {
                    admitted: admitted + 1,
                };
            }
        }

        Some(Permit {
            breaker: self.clone(),
            generation: inner.generation,
            settled: false,
        })
    }

    /// Opens the circuit until `reset` is called.
    pub fn force_open(&self) {
        tracing::warn!(breaker = self.name, "Circuit forced open");
        self.lock().enter(Phase::ForcedOpen);
    }

    /// Closes the circuit and forgets all recorded outcomes.
    pub fn reset(&self) {
        self.lock().enter(Phase::Closed);
    }

    fn lock(&self) -> MutexGuard<'_, BreakerInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn release(&self, generation: u64) {
        let mut inner = self.lock();

        if inner.generation != generation {
            return;
        }

        if let Phase::HalfOpen { admitted } = inner.phase {
            inner.phase = Phase::HalfOpen {
                admitted: admitted.saturating_sub(1),
            };
        }
    }

    fn record(&self, generation: u64, failed: bool) {
        let mut inner = self.lock();

        // Late result of a call admitted before the last state change.
        if inner.generation != generation {
            return;
        }

        let phase = inner.phase;
        match phase {
            Phase::Closed => {
                inner.outcomes.push_back(failed);
                while inner.outcomes.len() > self.config.sliding_window_size {
                    inner.outcomes.pop_front();
                }

                if inner.outcomes.len() >= self.config.minimum_calls
                    && self.exceeds_threshold(&inner.outcomes)
                {
                    self.trip(&mut inner);
                }
            }
            Phase::HalfOpen { .. } => {
                inner.outcomes.push_back(failed);

                if inner.outcomes.len() >= self.config.half_open_calls {
                    if self.exceeds_threshold(&inner.outcomes) {
                        self.trip(&mut inner);
                    } else {
                        tracing::info!(breaker = self.name, "Circuit closed");
                        inner.enter(Phase::Closed);
                    }
                }
            }
            Phase::Open { .. } | Phase::ForcedOpen => {}
        }
    }

    fn exceeds_threshold(&self, outcomes: &VecDeque<bool>) -> bool {
        let failures = outcomes.iter().filter(|failed| **failed).count();
        let rate = failures * 100 / outcomes.len().max(1);

        rate >= usize::from(self.config.failure_rate_threshold)
    }

    fn trip(&self, inner: &mut BreakerInner) {
        tracing::warn!(
            breaker = self.name,
            open_for = ?self.config.open_wait,
            "Failure rate threshold reached, circuit opened"
        );
        inner.enter(Phase::Open {
            until: Instant::now() + self.config.open_wait,
        });
    }
}
