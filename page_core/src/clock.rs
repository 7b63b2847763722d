//! # Time Source
//!
//! The only dynamic value on the page is the footer year. Document assembly
//! takes an explicit clock instead of reading ambient time, so rendering is
//! deterministic under test; [`SystemClock`] is the default for real renders.
//!
//! ## Example
//!
//! ```rust
//! use page_core::clock::{Clock, FixedClock};
//!
//! let clock = FixedClock::for_year(2030);
//! assert_eq!(clock.year(), 2030);
//! ```

use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Source of the current time.
pub trait Clock {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Calendar year of [`now`](Clock::now)
    fn year(&self) -> i32 {
        self.now().year()
    }
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed time source for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        FixedClock(instant)
    }

    /// Clock pinned to January 1st of the given year.
    pub fn for_year(year: i32) -> Self {
        let instant = Utc
            .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_default();
        FixedClock(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
