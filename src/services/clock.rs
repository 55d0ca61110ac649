// Time sources

use super::traits::Clock;
use chrono::{DateTime, Utc};

/// Wall clock
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
///
/// Usage:
///     let frozen = Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap();
///     let clock = FixedClock::new(frozen);
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
