use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Bucket: sales totals for one time slot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    /// Time key of the slot on the store calendar, e.g. `2025-01-01` or `2025-01-01 09:00`.
    pub label: String,
    /// Local start of the slot, carrying the store offset.
    pub start: DateTime<FixedOffset>,
    pub total_sales: u64,
    pub approved_count: u64,
    pub average_order_value: u64,
    pub cancelled_count: u64,
    pub cancelled_amount: u64,
    /// Approved sales that came in through delivery orders.
    pub delivery_sales: u64,
}

impl Bucket {
    pub fn new(label: String, start: DateTime<FixedOffset>) -> Self {
        Self {
            label,
            start,
            total_sales: 0,
            approved_count: 0,
            average_order_value: 0,
            cancelled_count: 0,
            cancelled_amount: 0,
            delivery_sales: 0,
        }
    }

    /// Approved sales taken at the counter.
    pub fn store_sales(&self) -> u64 {
        self.total_sales.saturating_sub(self.delivery_sales)
    }

    /// Share of transactions in this slot that were cancelled, in percent with
    /// one decimal place. Zero when the slot has no transactions.
    pub fn cancel_rate(&self) -> f64 {
        crate::aggregate::percent_of(
            self.cancelled_count,
            self.approved_count + self.cancelled_count,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.approved_count == 0 && self.cancelled_count == 0
    }
}

/// Buckets in ascending chronological order, one per slot in the period.
pub type BucketSummary = Vec<Bucket>;

// ---------------------------------------------------------------------------
// PercentChange / PeriodComparison
// ---------------------------------------------------------------------------

/// Signed percentage change, rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PercentChange(f64);

impl PercentChange {
    pub(crate) fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_increase(&self) -> bool {
        self.0 > 0.0
    }

    pub fn is_decrease(&self) -> bool {
        self.0 < 0.0
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.1}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodComparison {
    pub current_total: u64,
    pub previous_total: u64,
    pub change: PercentChange,
}

// ---------------------------------------------------------------------------
// Totals / Share: dimension breakdowns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub amount: u64,
    pub count: u64,
}

impl Totals {
    pub fn add(&mut self, amount: u64) {
        self.amount += amount;
        self.count += 1;
    }

    /// Average amount per transaction, rounded half-up.
    pub fn average(&self) -> u64 {
        crate::aggregate::average(self.amount, self.count)
    }
}

/// One group of a breakdown with its share of the grand total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share<K> {
    pub key: K,
    pub totals: Totals,
    /// Percent of the grand amount, one decimal place.
    pub percentage: f64,
}

// ---------------------------------------------------------------------------
// Profiles: sales folded by hour of day or day of week
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourSlot {
    /// Local hour of day, 0 to 23.
    pub hour: u32,
    pub total_sales: u64,
    pub approved_count: u64,
    pub average_order_value: u64,
    /// Slot total divided by the number of local days in the period.
    pub average_daily_sales: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdaySlot {
    pub weekday: Weekday,
    pub total_sales: u64,
    pub approved_count: u64,
    pub average_order_value: u64,
    /// Slot total divided by how often this weekday occurs in the period.
    pub average_daily_sales: u64,
    pub days_in_period: u32,
}

// ---------------------------------------------------------------------------
// DashboardSummary: the merchant dashboard figures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Local store date the summary was computed for.
    pub date: NaiveDate,
    pub today_sales: u64,
    pub yesterday_sales: u64,
    pub yesterday_change: PercentChange,
    pub last_week_same_day_sales: u64,
    pub last_week_change: PercentChange,
    /// From the first of the month up to and including today.
    pub month_to_date_sales: u64,
    pub last_month_sales: u64,
    pub month_change: PercentChange,
    /// Daily buckets, oldest first, today last.
    pub recent_days: Vec<Bucket>,
}
