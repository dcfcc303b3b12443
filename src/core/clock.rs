use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

/// Number of instant fields in a [`UniqueSeed`].
pub const SEED_FIELDS: usize = 7;

/// Instant fields that seed the leading positions of a unique key id.
///
/// Order: sub-second milliseconds, second, minute, hour (0-23), day of month,
/// ISO-8601 week number, ISO-8601 week-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueSeed(pub [u32; SEED_FIELDS]);

impl UniqueSeed {
    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        let week = at.iso_week();
        Self([
            at.timestamp_subsec_millis(),
            at.second(),
            at.minute(),
            at.hour(),
            at.day(),
            week.week(),
            week.year().unsigned_abs(),
        ])
    }

    pub fn fields(&self) -> &[u32; SEED_FIELDS] {
        &self.0
    }
}

/// Source of the current instant for unique-mode generation.
pub trait Clock {
    fn seed(&self) -> UniqueSeed;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn seed(&self) -> UniqueSeed {
        UniqueSeed::from_datetime(&Local::now())
    }
}

/// Always reports the same instant. Used to pin unique-mode output in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub UniqueSeed);

impl FixedClock {
    pub fn at<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self(UniqueSeed::from_datetime(at))
    }
}

impl Clock for FixedClock {
    fn seed(&self) -> UniqueSeed {
        self.0
    }
}
