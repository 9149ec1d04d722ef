use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{AnalyticsError, Result};

// ---------------------------------------------------------------------------
// Granularity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    /// Pick a granularity from the span length: under a day is hourly, up to
    /// 31 days is daily, anything longer is monthly.
    pub fn for_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let span = end.signed_duration_since(start).num_seconds();
        if span < config::HOURLY_MAX_SPAN_SECS {
            Granularity::Hourly
        } else if span <= config::DAILY_MAX_SPAN_DAYS * 24 * 3600 {
            Granularity::Daily
        } else {
            Granularity::Monthly
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Hourly => "hourly",
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PeriodSpec: half-open reporting interval plus bucket size
// ---------------------------------------------------------------------------

/// A reporting period `[start, end)` and the bucket size to report it in.
///
/// Calendar-aligned periods (a local day, month, year, or the last N days)
/// are built through [`StoreCalendar`](crate::calendar::StoreCalendar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSpec {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub granularity: Granularity,
}

impl PeriodSpec {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, granularity: Granularity) -> Self {
        Self {
            start,
            end,
            granularity,
        }
    }

    /// Build a period whose granularity follows [`Granularity::for_range`].
    pub fn auto(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::new(start, end, Granularity::for_range(start, end))
    }

    pub fn with_granularity(self, granularity: Granularity) -> Self {
        Self {
            granularity,
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(AnalyticsError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
