use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Approved,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    Card,
    Transfer,
    MobilePay,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Card,
        PaymentMethod::Transfer,
        PaymentMethod::MobilePay,
        PaymentMethod::Cash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::MobilePay => "mobile-pay",
            PaymentMethod::Cash => "cash",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an order was placed: at the counter or through a delivery platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderChannel {
    Store,
    Delivery,
}

// ---------------------------------------------------------------------------
// TransactionRecord: one payment as delivered by the upstream API
// ---------------------------------------------------------------------------

/// A single payment record.
///
/// `amount`, `timestamp` and `status` are optional because upstream payloads
/// can carry nulls; such records are rejected when aggregated, never skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub amount: Option<i64>,
    pub timestamp: Option<DateTime<Utc>>,
    pub status: Option<TransactionStatus>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub is_delivery: bool,
}

impl TransactionRecord {
    pub fn approved(
        id: impl Into<String>,
        amount: i64,
        timestamp: DateTime<Utc>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: id.into(),
            amount: Some(amount),
            timestamp: Some(timestamp),
            status: Some(TransactionStatus::Approved),
            payment_method,
            is_delivery: false,
        }
    }

    pub fn cancelled(
        id: impl Into<String>,
        amount: i64,
        timestamp: DateTime<Utc>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            status: Some(TransactionStatus::Cancelled),
            ..Self::approved(id, amount, timestamp, payment_method)
        }
    }

    /// Mark the record as a delivery order.
    pub fn delivery(mut self) -> Self {
        self.is_delivery = true;
        self
    }

    pub fn channel(&self) -> OrderChannel {
        if self.is_delivery {
            OrderChannel::Delivery
        } else {
            OrderChannel::Store
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == Some(TransactionStatus::Approved)
    }

    /// Check structural constraints and return a view with the optional
    /// fields resolved.
    pub fn validate(&self) -> Result<ValidRecord<'_>> {
        let amount = self
            .amount
            .ok_or_else(|| AnalyticsError::validation(&self.id, "missing amount"))?;
        let amount = u64::try_from(amount).map_err(|_| {
            AnalyticsError::validation(&self.id, format!("negative amount {}", amount))
        })?;
        let timestamp = self
            .timestamp
            .ok_or_else(|| AnalyticsError::validation(&self.id, "missing timestamp"))?;
        let status = self
            .status
            .ok_or_else(|| AnalyticsError::validation(&self.id, "missing status"))?;

        Ok(ValidRecord {
            record: self,
            amount,
            timestamp,
            status,
        })
    }
}

// ---------------------------------------------------------------------------
// ValidRecord: a record that passed validation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct ValidRecord<'a> {
    pub record: &'a TransactionRecord,
    pub amount: u64,
    pub timestamp: DateTime<Utc>,
    pub status: TransactionStatus,
}

impl ValidRecord<'_> {
    pub fn is_approved(&self) -> bool {
        self.status == TransactionStatus::Approved
    }
}

/// Validate every record, stopping at the first malformed one.
pub fn validate_all(records: &[TransactionRecord]) -> Result<Vec<ValidRecord<'_>>> {
    records
        .iter()
        .map(|r| {
            r.validate().inspect_err(|e| {
                tracing::warn!("rejecting transaction record: {}", e);
            })
        })
        .collect()
}
