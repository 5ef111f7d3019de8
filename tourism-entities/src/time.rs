use std::{fmt, ops::Add};

use time::{
    format_description::well_known::Rfc3339, macros::format_description, Duration,
    OffsetDateTime,
};

pub use time::Date;

/// A point in time (UTC) with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self::from_millis(Self(OffsetDateTime::now_utc()).as_millis())
    }

    pub fn from_millis(millis: i64) -> Self {
        Self(OffsetDateTime::UNIX_EPOCH + Duration::milliseconds(millis))
    }

    pub fn as_millis(self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }

    pub fn from_secs(secs: i64) -> Self {
        Self(OffsetDateTime::UNIX_EPOCH + Duration::seconds(secs))
    }

    pub fn as_secs(self) -> i64 {
        self.0.unix_timestamp()
    }

    pub fn date(self) -> Date {
        self.0.date()
    }

    /// The first millisecond of the given day.
    pub fn start_of_day(date: Date) -> Self {
        Self(date.midnight().assume_utc())
    }

    /// The last millisecond of the given day.
    pub fn end_of_day(date: Date) -> Self {
        Self::start_of_day(date) + Duration::days(1) - Duration::milliseconds(1)
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self, time::error::Parse> {
        OffsetDateTime::parse(s, &Rfc3339).map(|dt| Self::from_millis(Self(dt).as_millis()))
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs)
    }
}

impl std::ops::Sub<Duration> for Timestamp {
    type Output = Self;
    fn sub(self, rhs: Duration) -> Self {
        Self(self.0 - rhs)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatted = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

/// Parse a calendar date in the format `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))
}

/// Format a calendar date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Number of whole days between two dates, negative if `to` is before `from`.
pub fn days_between(from: Date, to: Date) -> i64 {
    (to - from).whole_days()
}
