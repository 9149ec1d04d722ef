//! Time-bucketed sales totals.

use crate::calendar::StoreCalendar;
use crate::error::Result;
use crate::models::{
    validate_all, Bucket, BucketSummary, PeriodSpec, TransactionRecord, TransactionStatus,
    ValidRecord,
};

// ---------------------------------------------------------------------------
// BucketAggregator
// ---------------------------------------------------------------------------

/// Bucketing interface bound to a store calendar.
pub struct BucketAggregator<'a> {
    calendar: &'a StoreCalendar,
}

impl<'a> BucketAggregator<'a> {
    pub fn new(calendar: &'a StoreCalendar) -> Self {
        Self { calendar }
    }

    /// See [`bucketize`].
    pub fn bucketize(
        &self,
        records: &[TransactionRecord],
        period: &PeriodSpec,
    ) -> Result<BucketSummary> {
        bucketize(self.calendar, records, period)
    }

    /// Bucket `records` over `period` and return `(label, cancel rate)` pairs.
    pub fn cancel_rates(
        &self,
        records: &[TransactionRecord],
        period: &PeriodSpec,
    ) -> Result<Vec<(String, f64)>> {
        Ok(self
            .bucketize(records, period)?
            .into_iter()
            .map(|b| {
                let rate = b.cancel_rate();
                (b.label, rate)
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// bucketize
// ---------------------------------------------------------------------------

/// Fold `records` into one bucket per calendar slot of `period`.
///
/// Slots with no matching records are zero-filled, so the result always has
/// one entry per slot intersecting `[start, end)`. Approved records add to the
/// sales figures; cancelled ones only to the cancelled figures. Records outside
/// the period are ignored.
///
/// Fails with `InvalidRange` when `start > end` and with `Validation` on the
/// first malformed record; no partial summary is returned.
pub fn bucketize(
    calendar: &StoreCalendar,
    records: &[TransactionRecord],
    period: &PeriodSpec,
) -> Result<BucketSummary> {
    period.validate()?;
    let valid = validate_all(records)?;
    fill_buckets(calendar, &valid, period)
}

pub(crate) fn fill_buckets(
    calendar: &StoreCalendar,
    records: &[ValidRecord<'_>],
    period: &PeriodSpec,
) -> Result<BucketSummary> {
    let slots = calendar.slots(period)?;
    let mut buckets = slots
        .iter()
        .map(|slot| {
            Ok(Bucket::new(
                calendar.label(*slot, period.granularity),
                calendar.to_fixed(*slot)?,
            ))
        })
        .collect::<Result<Vec<Bucket>>>()?;

    for record in records.iter().filter(|r| period.contains(r.timestamp)) {
        let slot = calendar.truncate(record.timestamp, period.granularity)?;
        let Ok(index) = slots.binary_search(&slot) else {
            continue;
        };
        let bucket = &mut buckets[index];
        match record.status {
            TransactionStatus::Approved => {
                bucket.total_sales += record.amount;
                bucket.approved_count += 1;
                if record.record.is_delivery {
                    bucket.delivery_sales += record.amount;
                }
            }
            TransactionStatus::Cancelled => {
                bucket.cancelled_count += 1;
                bucket.cancelled_amount += record.amount;
            }
        }
    }

    for bucket in &mut buckets {
        bucket.average_order_value = super::average(bucket.total_sales, bucket.approved_count);
    }

    tracing::debug!(
        "bucketized {} records into {} {} buckets",
        records.len(),
        buckets.len(),
        period.granularity
    );
    Ok(buckets)
}

/// Sum of approved amounts falling inside `period`.
pub(crate) fn approved_total(records: &[ValidRecord<'_>], period: &PeriodSpec) -> u64 {
    records
        .iter()
        .filter(|r| r.is_approved() && period.contains(r.timestamp))
        .map(|r| r.amount)
        .sum()
}
