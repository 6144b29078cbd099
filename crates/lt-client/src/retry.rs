//! Retry budget and backoff for version discovery.
//!
//! Business requests are never retried; only the discovery bootstrap uses this.

use rand::Rng;
use std::time::Duration;

/// Default number of discovery attempts.
pub const DEFAULT_DISCOVERY_ATTEMPTS: u32 = 5;

/// Configuration for discovery retries.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of discovery attempts (including the first one).
    pub max_attempts: u32,
    /// Initial delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Backoff strategy to use.
    pub backoff: BackoffStrategy,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_DISCOVERY_ATTEMPTS,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            backoff: BackoffStrategy::Immediate,
        }
    }
}

impl RetryConfig {
    /// Set the maximum number of attempts.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the initial delay.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the maximum delay.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Set the backoff strategy.
    pub fn with_backoff(mut self, backoff: BackoffStrategy) -> Self {
        self.backoff = backoff;
        self
    }

    /// Single discovery attempt, no retries.
    pub fn single_attempt() -> Self {
        Self {
            max_attempts: 1,
            ..Default::default()
        }
    }

    /// Delay to wait after the given failed attempt (0-indexed).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.backoff
            .delay(attempt, self.initial_delay, self.max_delay)
    }
}

/// Backoff strategy for determining retry delays.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BackoffStrategy {
    /// Retry immediately.
    #[default]
    Immediate,
    /// Constant delay between retries.
    Constant,
    /// Linear increase in delay (delay * attempt).
    Linear,
    /// Exponential increase in delay (delay * factor^attempt).
    Exponential { factor: f64 },
    /// Exponential with random jitter to avoid thundering herd.
    ExponentialWithJitter { factor: f64 },
}

impl BackoffStrategy {
    /// Calculate the delay for a given attempt number (0-indexed).
    pub fn delay(&self, attempt: u32, initial_delay: Duration, max_delay: Duration) -> Duration {
        match self {
            BackoffStrategy::Immediate => Duration::ZERO,
            BackoffStrategy::Constant => std::cmp::min(initial_delay, max_delay),
            BackoffStrategy::Linear => {
                std::cmp::min(initial_delay.saturating_mul(attempt.saturating_add(1)), max_delay)
            }
            BackoffStrategy::Exponential { factor } => {
                let secs = initial_delay.as_secs_f64() * factor.powi(exponent(attempt));
                capped(secs, max_delay)
            }
            BackoffStrategy::ExponentialWithJitter { factor } => {
                let base_delay = initial_delay.as_secs_f64() * factor.powi(exponent(attempt));

                // Add jitter: random value between 0 and base_delay
                let jitter = if base_delay.is_finite() {
                    rand::rng().random::<f64>() * base_delay
                } else {
                    0.0
                };

                capped(base_delay + jitter, max_delay)
            }
        }
    }
}

fn exponent(attempt: u32) -> i32 {
    i32::try_from(attempt).unwrap_or(i32::MAX)
}

/// Clamp float seconds to `[0, max_delay]`. NaN and negative values mean no delay.
fn capped(secs: f64, max_delay: Duration) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs.min(max_delay.as_secs_f64())).unwrap_or(max_delay)
}
