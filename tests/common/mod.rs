//! Shared fixtures for the sales analytics integration tests.
//!
//! Provides calendar setups (a UTC store and a UTC+09:00 store), timestamp
//! helpers and a small week of sample payments.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sales_analytics::{PaymentMethod, SalesAnalytics, TransactionRecord};

/// A store on UTC, so local wall-clock equals the timestamps written in tests.
pub fn utc_store() -> SalesAnalytics {
    SalesAnalytics::builder().utc_offset_hours(0).build().unwrap()
}

/// A store on UTC+09:00 (the builder default).
pub fn kst_store() -> SalesAnalytics {
    SalesAnalytics::builder().build().unwrap()
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn approved(id: &str, amount: i64, at: DateTime<Utc>) -> TransactionRecord {
    TransactionRecord::approved(id, amount, at, PaymentMethod::Card)
}

pub fn cancelled(id: &str, amount: i64, at: DateTime<Utc>) -> TransactionRecord {
    TransactionRecord::cancelled(id, amount, at, PaymentMethod::Card)
}

/// Payments spread over 2025-01-06 (Mon) to 2025-01-08 (Wed), UTC.
pub fn sample_week() -> Vec<TransactionRecord> {
    vec![
        approved("p-001", 4500, utc(2025, 1, 6, 9, 10)),
        TransactionRecord::approved("p-002", 12000, utc(2025, 1, 6, 12, 30), PaymentMethod::Cash),
        TransactionRecord::approved(
            "p-003",
            8000,
            utc(2025, 1, 6, 18, 45),
            PaymentMethod::MobilePay,
        )
        .delivery(),
        cancelled("p-004", 3000, utc(2025, 1, 7, 10, 0)),
        approved("p-005", 6500, utc(2025, 1, 7, 12, 5)),
        TransactionRecord::approved(
            "p-006",
            15000,
            utc(2025, 1, 8, 19, 20),
            PaymentMethod::Transfer,
        )
        .delivery(),
        approved("p-007", 2500, utc(2025, 1, 8, 9, 55)),
    ]
}
