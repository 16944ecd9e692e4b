// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::{config::defaults, Error, ErrorKind, Result, TimeService};
use slog_scope::{debug, warn};
use std::time::Duration;

/// The classified result of one attempt.
#[derive(Debug)]
pub enum Outcome<T> {
    Success(T),
    Retryable(Error),
    Fatal(Error),
}

/// Re-runs an operation with a fixed delay while it fails with one designated [`ErrorKind`].
///
/// `max_attempts` counts every invocation including the first one, so `max_attempts == 5`
/// allows up to 4 retries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Retry {
    max_attempts: u32,
    delay: Duration,
    retryable: ErrorKind,
}

impl Default for Retry {
    fn default() -> Self {
        Self::new(defaults::MAX_ATTEMPTS, defaults::RETRY_DELAY)
    }
}

impl Retry {
    /// Retries stale responses. `max_attempts` is raised to 1 if zero.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self::on(ErrorKind::StaleResponse, max_attempts, delay)
    }

    pub fn on(retryable: ErrorKind, max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
            retryable,
        }
    }

    /// Runs the operation exactly once.
    pub fn none() -> Self {
        Self::new(1, Duration::from_secs(0))
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn retryable(&self) -> ErrorKind {
        self.retryable
    }

    pub fn classify<T>(&self, result: Result<T>) -> Outcome<T> {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) if error.kind() == self.retryable => Outcome::Retryable(error),
            Err(error) => Outcome::Fatal(error),
        }
    }

    pub fn execute<T, F>(&self, time: &dyn TimeService, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Result<T>,
    {
        let mut attempt = 1;
        loop {
            match self.classify(operation()) {
                Outcome::Success(value) => return Ok(value),
                Outcome::Retryable(error) if attempt < self.max_attempts => {
                    debug!(
                        "attempt {}/{} failed: {}, retrying in {:?}",
                        attempt, self.max_attempts, error, self.delay
                    );
                    time.sleep_blocking(self.delay);
                    attempt += 1;
                }
                Outcome::Retryable(error) => {
                    warn!("giving up after {} attempts: {}", attempt, error);
                    return Err(error);
                }
                Outcome::Fatal(error) => return Err(error),
            }
        }
    }
}
