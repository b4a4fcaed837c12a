//! Sources of "now" for the scheduler.
//!
//! Scheduling never reads wall-clock time directly; it asks a [`Clock`]. Tests and
//! replays use [`FixedClock`] or [`SimulatedClock`] to control the current date.

use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that only moves when told to, for stepping through days of study.
#[derive(Debug)]
pub struct SimulatedClock {
    current: Cell<DateTime<Utc>>,
}

impl SimulatedClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Cell::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.current.set(self.current.get() + by);
    }

    /// Advances the simulated date by 24 hours.
    pub fn advance_day(&self) {
        self.advance(Duration::days(1));
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> DateTime<Utc> {
        self.current.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_does_not_move() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let clock = FixedClock(t);
        assert_eq!(clock.now(), t);
        assert_eq!(clock.now(), t);
    }

    #[test]
    fn test_simulated_clock_advance_day() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let clock = SimulatedClock::new(t);
        clock.advance_day();
        assert_eq!(clock.now(), t + Duration::days(1));

        clock.advance(Duration::minutes(10));
        assert_eq!(clock.now(), t + Duration::days(1) + Duration::minutes(10));
    }

    #[test]
    fn test_clock_through_reference() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        fn read(clock: impl Clock) -> DateTime<Utc> {
            clock.now()
        }

        let clock = SimulatedClock::new(t);
        clock.advance_day();
        assert_eq!(read(&clock), t + Duration::days(1));
    }
}
