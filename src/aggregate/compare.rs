//! Period-over-period percentage change.

use crate::models::{Bucket, PercentChange, PeriodComparison};

/// Percentage change from `previous` to `current`, one decimal place.
///
/// A previous total of zero has no meaningful ratio: any current sales count
/// as `+100.0`, and no sales on either side as `0.0`. Never fails.
pub fn compare(current: u64, previous: u64) -> PercentChange {
    if previous == 0 {
        return PercentChange::new(if current > 0 { 100.0 } else { 0.0 });
    }
    let diff = current as f64 - previous as f64;
    PercentChange::new(super::round_to_tenth(diff * 100.0 / previous as f64))
}

impl PeriodComparison {
    pub fn new(current_total: u64, previous_total: u64) -> Self {
        Self {
            current_total,
            previous_total,
            change: compare(current_total, previous_total),
        }
    }
}

/// Compare the sales totals of two bucketed periods.
pub fn compare_periods(current: &[Bucket], previous: &[Bucket]) -> PeriodComparison {
    let sum = |buckets: &[Bucket]| buckets.iter().map(|b| b.total_sales).sum::<u64>();
    PeriodComparison::new(sum(current), sum(previous))
}
