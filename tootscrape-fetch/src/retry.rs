//! Retry strategies for HTTP requests.

use std::time::Duration;

use async_trait::async_trait;

/// Strategy for retrying failed requests.
///
/// A request is attempted `max_retries + 1` times. Before attempt `n + 2`
/// the client waits `backoff_factor * 2^n` seconds; there is no wait after
/// the final attempt, no cap, and no jitter.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryStrategy {
    /// Number of retries after the first attempt.
    pub max_retries: u32,
    /// Base delay in seconds.
    pub backoff_factor: f64,
}

impl RetryStrategy {
    /// Creates a new retry strategy.
    pub fn new(max_retries: u32, backoff_factor: f64) -> Self {
        Self {
            max_retries,
            backoff_factor,
        }
    }

    /// Total number of attempts, first one included.
    pub fn total_attempts(&self) -> u64 {
        u64::from(self.max_retries) + 1
    }

    /// Calculates the delay after the failed attempt with the given
    /// zero-based index.
    ///
    /// Negative or non-finite factors yield a zero delay.
    pub fn delay_for_attempt(&self, attempt_index: u32) -> Duration {
        let secs = self.backoff_factor * 2f64.powf(f64::from(attempt_index));
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
    }

    /// All delays a persistently failing request will sleep through, in
    /// order.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        (0..self.max_retries).map(|index| self.delay_for_attempt(index))
    }
}

// ============================================================================
// Sleeper
// ============================================================================

/// Waits out backoff delays.
///
/// The client sleeps through this trait so tests can observe delays
/// without waiting in real time.
#[async_trait]
pub trait Sleeper: Send + Sync + std::fmt::Debug {
    /// Suspends for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
