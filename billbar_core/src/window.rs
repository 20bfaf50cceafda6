use crate::error::{BillingError, Result};
use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

/// Half-open interval `[start, end)` queried as a single bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end <= start {
            return Err(BillingError::InvalidWindow(format!(
                "end {} is not after start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// From midnight UTC on the first of `now`'s month up to `now`.
    ///
    /// Sub-second precision is dropped so the period is a whole number of
    /// seconds.
    pub fn month_to_date(now: DateTime<Utc>) -> Result<Self> {
        let end = now.with_nanosecond(0).unwrap_or(now);
        let start = Utc
            .with_ymd_and_hms(end.year(), end.month(), 1, 0, 0, 0)
            .single()
            .ok_or_else(|| {
                BillingError::InvalidWindow(format!("no month start for {}", end))
            })?;
        Self::new(start, end)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Bucket width in seconds: always the whole window.
    pub fn period_secs(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }
}
