use std::{net::SocketAddr, str::FromStr, time::Duration};

use crate::server::{
    error::{config::ConfigError, AppError},
    resilience::{circuit_breaker::CircuitBreakerConfig, retry::RetryPolicy},
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Retry bounds for the roll number lookup.
    pub lookup_retry: RetryPolicy,
    /// Circuit breaker tuning for the roll number lookup.
    pub lookup_circuit_breaker: CircuitBreakerConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_source(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from any variable source, `from_env` passes the process
    /// environment.
    fn from_source<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let retry_defaults = RetryPolicy::default();
        let breaker_defaults = CircuitBreakerConfig::default();

        let max_attempts: u32 = parse_or(&var, "LOOKUP_MAX_ATTEMPTS", retry_defaults.max_attempts)?;
        if max_attempts == 0 {
            return Err(invalid("LOOKUP_MAX_ATTEMPTS", "0", "must be at least 1"));
        }

        let failure_rate_threshold: u8 = parse_or(
            &var,
            "LOOKUP_FAILURE_RATE_THRESHOLD",
            breaker_defaults.failure_rate_threshold,
        )?;
        if !(1..=100).contains(&failure_rate_threshold) {
            return Err(invalid(
                "LOOKUP_FAILURE_RATE_THRESHOLD",
                &failure_rate_threshold.to_string(),
                "must be a percentage between 1 and 100",
            ));
        }

        let sliding_window_size: usize = parse_or(
            &var,
            "LOOKUP_SLIDING_WINDOW_SIZE",
            breaker_defaults.sliding_window_size,
        )?;
        if sliding_window_size == 0 {
            return Err(invalid("LOOKUP_SLIDING_WINDOW_SIZE", "0", "must be at least 1"));
        }

        Ok(Self {
            database_url: var("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: parse_or(
                &var,
                "BIND_ADDRESS",
                SocketAddr::from_str(DEFAULT_BIND_ADDRESS).map_err(|e| {
                    invalid("BIND_ADDRESS", DEFAULT_BIND_ADDRESS, &e.to_string())
                })?,
            )?,
            lookup_retry: RetryPolicy::new(
                max_attempts,
                millis_or(&var, "LOOKUP_RETRY_WAIT_MS", retry_defaults.wait)?,
                millis_or(&var, "LOOKUP_ATTEMPT_TIMEOUT_MS", retry_defaults.attempt_timeout)?,
            ),
            lookup_circuit_breaker: CircuitBreakerConfig {
                failure_rate_threshold,
                sliding_window_size,
                minimum_calls: parse_or(
                    &var,
                    "LOOKUP_MINIMUM_CALLS",
                    breaker_defaults.minimum_calls,
                )?,
                open_wait: millis_or(&var, "LOOKUP_OPEN_WAIT_MS", breaker_defaults.open_wait)?,
                half_open_calls: parse_or(
                    &var,
                    "LOOKUP_HALF_OPEN_CALLS",
                    breaker_defaults.half_open_calls,
                )?,
            },
        })
    }
}

fn invalid(name: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parses an optional variable, falling back to `default` when it is unset.
fn parse_or<F, T>(var: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match var(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| invalid(name, &raw, &e.to_string())),
    }
}

fn millis_or<F>(var: &F, name: &str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let default_ms = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);

    parse_or(var, name, default_ms).map(Duration::from_millis)
}
