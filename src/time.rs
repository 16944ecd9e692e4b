// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

//! Clock abstraction used by the retry and transaction wait loops, so tests can simulate time
//! instead of sleeping.

use std::{
    fmt::Debug,
    thread,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

pub trait TimeService: Debug + Send + Sync {
    /// Current wall clock time as a duration since the unix epoch.
    fn now(&self) -> Duration;

    /// Blocks the calling thread for `duration`.
    fn sleep_blocking(&self, duration: Duration);
}

/// Delegates to the system clock and [`std::thread::sleep`].
#[derive(Copy, Clone, Debug, Default)]
pub struct RealTimeService;

impl RealTimeService {
    pub fn new() -> Self {
        Self {}
    }
}

impl TimeService for RealTimeService {
    fn now(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }

    fn sleep_blocking(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[cfg(any(test, feature = "testing"))]
pub use mock::MockTimeService;

#[cfg(any(test, feature = "testing"))]
mod mock {
    use super::TimeService;
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    /// A simulated clock: sleeping advances `now` instantly and is recorded.
    #[derive(Clone, Debug, Default)]
    pub struct MockTimeService {
        inner: Arc<Mutex<Inner>>,
    }

    #[derive(Debug, Default)]
    struct Inner {
        now: Duration,
        sleeps: Vec<Duration>,
    }

    impl MockTimeService {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn advance(&self, duration: Duration) {
            self.inner.lock().unwrap().now += duration;
        }

        /// Every duration passed to `sleep_blocking`, in call order.
        pub fn sleeps(&self) -> Vec<Duration> {
            self.inner.lock().unwrap().sleeps.clone()
        }
    }

    impl TimeService for MockTimeService {
        fn now(&self) -> Duration {
            self.inner.lock().unwrap().now
        }

        fn sleep_blocking(&self, duration: Duration) {
            let mut inner = self.inner.lock().unwrap();
            inner.now += duration;
            inner.sleeps.push(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_time_service_advances_on_sleep() {
        let time = MockTimeService::new();
        assert_eq!(Duration::from_secs(0), time.now());

        time.sleep_blocking(Duration::from_millis(200));
        time.advance(Duration::from_secs(1));
        time.sleep_blocking(Duration::from_millis(300));

        assert_eq!(Duration::from_millis(1500), time.now());
        assert_eq!(
            vec![Duration::from_millis(200), Duration::from_millis(300)],
            time.sleeps()
        );
    }

    #[test]
    fn test_real_time_service_is_after_epoch() {
        assert!(RealTimeService::new().now() > Duration::from_secs(0));
    }
}
