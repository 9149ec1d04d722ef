//! Pure aggregation over in-memory transaction records.
//!
//! Each module exposes free functions taking a [`StoreCalendar`](crate::calendar::StoreCalendar)
//! where local time matters, plus a lightweight borrowing wrapper handed out by
//! [`SalesAnalytics`](crate::SalesAnalytics). Nothing here performs I/O or
//! keeps state between calls.

pub mod buckets;
pub mod compare;
pub mod dashboard;
pub mod dimension;
pub mod profile;

pub use buckets::{bucketize, BucketAggregator};
pub use compare::{compare, compare_periods};
pub use dashboard::{dashboard, DashboardAggregator};
pub use dimension::{by_order_channel, by_payment_method, shares, split_by_dimension};
pub use profile::{hour_profile, weekday_profile, ProfileAggregator};

/// `total / count` rounded half-up, or 0 when `count` is 0.
pub(crate) fn average(total: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    let (total, count) = (u128::from(total), u128::from(count));
    ((2 * total + count) / (2 * count)) as u64
}

/// `part / whole * 100` rounded to one decimal place, or 0 when `whole` is 0.
pub(crate) fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_to_tenth(part as f64 * 100.0 / whole as f64)
}

/// Round to one decimal place. A result of `-0.0` comes back as `0.0`.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}
