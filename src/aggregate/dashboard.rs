//! Merchant dashboard figures relative to "now" on the store calendar.

use chrono::{DateTime, Utc};

use crate::calendar::{month_start, shift_days, StoreCalendar};
use crate::config;
use crate::error::Result;
use crate::models::{validate_all, DashboardSummary, Granularity, PeriodSpec, TransactionRecord};

use super::buckets::{approved_total, fill_buckets};
use super::compare::compare;

pub struct DashboardAggregator<'a> {
    calendar: &'a StoreCalendar,
}

impl<'a> DashboardAggregator<'a> {
    pub fn new(calendar: &'a StoreCalendar) -> Self {
        Self { calendar }
    }

    /// See [`dashboard`].
    pub fn summary(
        &self,
        records: &[TransactionRecord],
        now: DateTime<Utc>,
    ) -> Result<DashboardSummary> {
        dashboard(self.calendar, records, now)
    }
}

/// Build the dashboard summary for the store-local day containing `now`.
///
/// `records` should cover at least the previous calendar month; anything
/// missing simply counts as no sales.
pub fn dashboard(
    calendar: &StoreCalendar,
    records: &[TransactionRecord],
    now: DateTime<Utc>,
) -> Result<DashboardSummary> {
    let valid = validate_all(records)?;
    let today = calendar.local_date(now)?;

    let today_sales = approved_total(&valid, &calendar.day(today)?);
    let yesterday_sales = approved_total(&valid, &calendar.day(shift_days(today, -1)?)?);
    let last_week_same_day_sales =
        approved_total(&valid, &calendar.day(shift_days(today, -7)?)?);

    let this_month = month_start(today);
    let month_to_date = PeriodSpec::new(
        calendar.midnight(this_month)?,
        calendar.midnight(shift_days(today, 1)?)?,
        Granularity::Daily,
    );
    let last_month = PeriodSpec::new(
        calendar.midnight(month_start(shift_days(this_month, -1)?))?,
        calendar.midnight(this_month)?,
        Granularity::Daily,
    );
    let month_to_date_sales = approved_total(&valid, &month_to_date);
    let last_month_sales = approved_total(&valid, &last_month);

    let trend = calendar.last_days(today, config::DASHBOARD_TREND_DAYS)?;
    let recent_days = fill_buckets(calendar, &valid, &trend)?;

    tracing::debug!(
        "dashboard for {}: today {}, month to date {}",
        today,
        today_sales,
        month_to_date_sales
    );

    Ok(DashboardSummary {
        date: today,
        today_sales,
        yesterday_sales,
        yesterday_change: compare(today_sales, yesterday_sales),
        last_week_same_day_sales,
        last_week_change: compare(today_sales, last_week_same_day_sales),
        month_to_date_sales,
        last_month_sales,
        month_change: compare(month_to_date_sales, last_month_sales),
        recent_days,
    })
}
