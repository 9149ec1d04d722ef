//! Group-and-sum breakdowns (payment method, order channel, ...).

use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::{validate_all, OrderChannel, PaymentMethod, Share, Totals, TransactionRecord};

/// Sum approved records per key returned by `key_fn`.
///
/// Only keys with at least one approved record appear in the result; the
/// caller owns the full domain of the dimension. Every record is validated
/// first, cancelled ones included.
pub fn split_by_dimension<K, F>(
    records: &[TransactionRecord],
    mut key_fn: F,
) -> Result<BTreeMap<K, Totals>>
where
    K: Ord,
    F: FnMut(&TransactionRecord) -> K,
{
    let valid = validate_all(records)?;
    let mut groups: BTreeMap<K, Totals> = BTreeMap::new();
    for record in valid.iter().filter(|r| r.is_approved()) {
        groups
            .entry(key_fn(record.record))
            .or_default()
            .add(record.amount);
    }
    tracing::debug!(
        "split {} records into {} groups",
        records.len(),
        groups.len()
    );
    Ok(groups)
}

pub fn by_payment_method(
    records: &[TransactionRecord],
) -> Result<BTreeMap<PaymentMethod, Totals>> {
    split_by_dimension(records, |r| r.payment_method)
}

pub fn by_order_channel(records: &[TransactionRecord]) -> Result<BTreeMap<OrderChannel, Totals>> {
    split_by_dimension(records, TransactionRecord::channel)
}

/// Turn a breakdown into shares of its grand total, largest amount first.
/// Ties keep key order.
pub fn shares<K: Ord + Clone>(breakdown: &BTreeMap<K, Totals>) -> Vec<Share<K>> {
    let grand: u64 = breakdown.values().map(|t| t.amount).sum();
    let mut shares: Vec<Share<K>> = breakdown
        .iter()
        .map(|(key, totals)| Share {
            key: key.clone(),
            totals: *totals,
            percentage: super::percent_of(totals.amount, grand),
        })
        .collect();
    // Stable sort keeps the BTreeMap key order among equal amounts.
    shares.sort_by(|a, b| b.totals.amount.cmp(&a.totals.amount));
    shares
}
