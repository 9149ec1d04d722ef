use chrono::{FixedOffset, Offset, Utc, Weekday};

/// Default store offset in seconds east of UTC (UTC+09:00).
pub const DEFAULT_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// Week buckets and weekday profiles start on this day unless configured.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Mon;

/// Number of daily buckets in the dashboard trend (today included).
pub const DASHBOARD_TREND_DAYS: u32 = 7;

/// Spans shorter than this are bucketed hourly by
/// [`Granularity::for_range`](crate::models::Granularity::for_range).
pub const HOURLY_MAX_SPAN_SECS: i64 = 24 * 3600;

/// Spans up to this many days are bucketed daily; longer spans go monthly.
pub const DAILY_MAX_SPAN_DAYS: i64 = 31;

pub fn default_utc_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}
