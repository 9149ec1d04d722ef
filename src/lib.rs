//! Sales analytics for point-of-sale transaction records.
//!
//! Turns flat lists of payment records into the figures a merchant dashboard
//! shows: time-bucketed sales, period-over-period changes, payment-method and
//! order-channel breakdowns, hourly and weekday profiles. All aggregation is
//! pure and synchronous over records already in memory; every local-time
//! decision uses the store's configured UTC offset.
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use sales_analytics::SalesAnalytics;
//!
//! let analytics = SalesAnalytics::builder().build().unwrap();
//! let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let period = analytics.calendar().day(day).unwrap();
//!
//! let buckets = analytics.buckets().bucketize(&[], &period).unwrap();
//! assert_eq!(buckets.len(), 1);
//! assert_eq!(buckets[0].total_sales, 0);
//! ```

pub mod aggregate;
pub mod calendar;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;

pub use aggregate::{bucketize, compare, compare_periods, split_by_dimension};
pub use calendar::StoreCalendar;
pub use error::{AnalyticsError, Result};
pub use models::{
    Bucket, BucketSummary, Granularity, PaymentMethod, PercentChange, PeriodComparison,
    PeriodSpec, TransactionRecord, TransactionStatus,
};

use std::fmt;

use chrono::{FixedOffset, Weekday};

// ---------------------------------------------------------------------------
// SalesAnalyticsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SalesAnalytics`] instance.
///
/// Use [`SalesAnalytics::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SalesAnalyticsBuilder::build).
pub struct SalesAnalyticsBuilder {
    offset_secs: i32,
    week_start: Weekday,
}

impl Default for SalesAnalyticsBuilder {
    fn default() -> Self {
        Self {
            offset_secs: config::DEFAULT_UTC_OFFSET_SECS,
            week_start: config::DEFAULT_WEEK_START,
        }
    }
}

impl SalesAnalyticsBuilder {
    /// Set the store's UTC offset.
    ///
    /// Day, week and month boundaries follow this offset. Defaults to
    /// UTC+09:00. The offset is fixed all year, so zones with daylight saving
    /// time are not modelled.
    pub fn utc_offset(mut self, offset: FixedOffset) -> Self {
        self.offset_secs = offset.local_minus_utc();
        self
    }

    /// Set the store's UTC offset in whole hours east of UTC.
    pub fn utc_offset_hours(mut self, hours: i32) -> Self {
        self.offset_secs = hours.saturating_mul(3600);
        self
    }

    /// Set the first day of the week for weekly buckets and weekday profiles.
    ///
    /// Defaults to Monday.
    pub fn week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Build the analytics entry point.
    ///
    /// Fails with `InvalidArgument` when the offset is 24 hours or more.
    pub fn build(self) -> Result<SalesAnalytics> {
        let offset = FixedOffset::east_opt(self.offset_secs).ok_or_else(|| {
            AnalyticsError::InvalidArgument(format!(
                "UTC offset of {} seconds is out of range",
                self.offset_secs
            ))
        })?;
        Ok(SalesAnalytics {
            calendar: StoreCalendar::new(offset, self.week_start),
        })
    }
}

// ---------------------------------------------------------------------------
// SalesAnalytics
// ---------------------------------------------------------------------------

/// The main entry point.
///
/// Holds the store calendar and hands out lightweight aggregation interfaces
/// that borrow it. Immutable once built, so one instance can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct SalesAnalytics {
    calendar: StoreCalendar,
}

impl SalesAnalytics {
    /// Create a new builder for configuring the store calendar.
    pub fn builder() -> SalesAnalyticsBuilder {
        SalesAnalyticsBuilder::default()
    }

    /// The store calendar, also used to build calendar-aligned periods.
    pub fn calendar(&self) -> &StoreCalendar {
        &self.calendar
    }

    // -- Aggregation accessors ----------------------------------------------

    /// Time-bucketed sales totals.
    pub fn buckets(&self) -> aggregate::BucketAggregator<'_> {
        aggregate::BucketAggregator::new(&self.calendar)
    }

    /// Hour-of-day and weekday sales profiles.
    pub fn profiles(&self) -> aggregate::ProfileAggregator<'_> {
        aggregate::ProfileAggregator::new(&self.calendar)
    }

    /// The merchant dashboard summary.
    pub fn dashboard(&self) -> aggregate::DashboardAggregator<'_> {
        aggregate::DashboardAggregator::new(&self.calendar)
    }
}

impl fmt::Display for SalesAnalytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SalesAnalytics(calendar={})", self.calendar)
    }
}
