//! Store calendar, period and builder tests.

mod common;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc, Weekday};
use common::{date, utc};
use sales_analytics::{AnalyticsError, Granularity, PeriodSpec, SalesAnalytics};

// ---------------------------------------------------------------------------
// Granularity selection
// ---------------------------------------------------------------------------

#[test]
fn granularity_follows_span_length() {
    let start = utc(2025, 1, 1, 0, 0);
    assert_eq!(
        Granularity::for_range(start, start + Duration::hours(6)),
        Granularity::Hourly
    );
    assert_eq!(
        Granularity::for_range(start, start + Duration::days(1)),
        Granularity::Daily
    );
    assert_eq!(
        Granularity::for_range(start, start + Duration::days(31)),
        Granularity::Daily
    );
    assert_eq!(
        Granularity::for_range(start, start + Duration::days(32)),
        Granularity::Monthly
    );
}

#[test]
fn period_is_half_open() {
    let period = PeriodSpec::auto(utc(2025, 1, 1, 0, 0), utc(2025, 1, 2, 0, 0));
    assert!(period.contains(utc(2025, 1, 1, 0, 0)));
    assert!(period.contains(utc(2025, 1, 1, 23, 59)));
    assert!(!period.contains(utc(2025, 1, 2, 0, 0)));
}

// ---------------------------------------------------------------------------
// Calendar-aligned periods
// ---------------------------------------------------------------------------

#[test]
fn day_starts_at_store_midnight() {
    let analytics = common::kst_store();
    let period = analytics.calendar().day(date(2025, 1, 1)).unwrap();
    assert_eq!(period.start, utc(2024, 12, 31, 15, 0));
    assert_eq!(period.end, utc(2025, 1, 1, 15, 0));
    assert_eq!(period.granularity, Granularity::Daily);
}

#[test]
fn month_of_covers_leap_february() {
    let analytics = common::utc_store();
    let calendar = analytics.calendar();
    let period = calendar.month_of(date(2024, 2, 14)).unwrap();

    assert_eq!(period.start, utc(2024, 2, 1, 0, 0));
    assert_eq!(period.end, utc(2024, 3, 1, 0, 0));
    assert_eq!(calendar.slots(&period).unwrap().len(), 29);
}

#[test]
fn year_of_has_twelve_monthly_slots() {
    let analytics = common::utc_store();
    let calendar = analytics.calendar();
    let period = calendar.year_of(date(2025, 7, 4)).unwrap();

    assert_eq!(period.granularity, Granularity::Monthly);
    let buckets = analytics.buckets().bucketize(&[], &period).unwrap();
    assert_eq!(buckets.len(), 12);
    assert_eq!(buckets[0].label, "2025-01");
    assert_eq!(buckets[11].label, "2025-12");
}

#[test]
fn last_days_ends_inclusive() {
    let analytics = common::utc_store();
    let calendar = analytics.calendar();
    let period = calendar.last_days(date(2025, 3, 2), 7).unwrap();

    assert_eq!(period.start, utc(2025, 2, 24, 0, 0));
    assert_eq!(period.end, utc(2025, 3, 3, 0, 0));
    assert_eq!(calendar.slots(&period).unwrap().len(), 7);
}

#[test]
fn last_days_requires_a_day() {
    let analytics = common::utc_store();
    let err = analytics
        .calendar()
        .last_days(date(2025, 3, 2), 0)
        .unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidArgument(_)));
}

#[test]
fn date_range_rejects_reversed_dates() {
    let analytics = common::utc_store();
    let err = analytics
        .calendar()
        .date_range(date(2025, 3, 2), date(2025, 3, 1))
        .unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidRange { .. }));
}

#[test]
fn last_days_beyond_the_calendar_is_an_error() {
    let analytics = common::utc_store();
    let err = analytics
        .calendar()
        .last_days(date(2025, 1, 1), u32::MAX)
        .unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidArgument(_)));
}

#[test]
fn periods_at_the_calendar_edges_are_errors() {
    let analytics = common::kst_store();
    let calendar = analytics.calendar();

    assert!(calendar.day(NaiveDate::MAX).is_err());
    assert!(calendar.day(NaiveDate::MIN).is_err());
    assert!(calendar.date_range(NaiveDate::MAX, NaiveDate::MAX).is_err());
    assert!(calendar.month_of(NaiveDate::MAX).is_err());
    assert!(calendar.local(DateTime::<Utc>::MAX_UTC).is_err());

    let summary = analytics.dashboard().summary(&[], DateTime::<Utc>::MAX_UTC);
    assert!(matches!(summary, Err(AnalyticsError::InvalidArgument(_))));
}

#[test]
fn single_date_range_is_one_daily_slot() {
    let analytics = common::utc_store();
    let calendar = analytics.calendar();
    let period = calendar.date_range(date(2025, 3, 1), date(2025, 3, 1)).unwrap();
    assert_eq!(period.granularity, Granularity::Daily);
    assert_eq!(calendar.slots(&period).unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Week start
// ---------------------------------------------------------------------------

#[test]
fn weekdays_follow_configured_week_start() {
    let analytics = SalesAnalytics::builder()
        .week_start(Weekday::Sun)
        .build()
        .unwrap();
    let calendar = analytics.calendar();

    assert_eq!(calendar.days_since_week_start(Weekday::Sun), 0);
    assert_eq!(calendar.days_since_week_start(Weekday::Sat), 6);
    assert_eq!(
        calendar.weekdays(),
        [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ]
    );
}

#[test]
fn weekly_buckets_start_on_sunday_when_configured() {
    let analytics = SalesAnalytics::builder()
        .utc_offset_hours(0)
        .week_start(Weekday::Sun)
        .build()
        .unwrap();
    // Wednesday
    let period = PeriodSpec::new(
        utc(2025, 1, 8, 0, 0),
        utc(2025, 1, 9, 0, 0),
        Granularity::Weekly,
    );
    let buckets = analytics.buckets().bucketize(&[], &period).unwrap();

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].start.date_naive(), date(2025, 1, 5));
    // 2025-01-05..11 is mostly ISO week 2
    assert_eq!(buckets[0].label, "2025-W02");
}

#[test]
fn week_labels_agree_across_week_starts() {
    let period = PeriodSpec::new(
        utc(2025, 1, 8, 0, 0),
        utc(2025, 1, 9, 0, 0),
        Granularity::Weekly,
    );
    let labels: Vec<String> = [Weekday::Mon, Weekday::Sun, Weekday::Sat]
        .into_iter()
        .map(|start| {
            let analytics = SalesAnalytics::builder()
                .utc_offset_hours(0)
                .week_start(start)
                .build()
                .unwrap();
            let buckets = analytics.buckets().bucketize(&[], &period).unwrap();
            buckets[0].label.clone()
        })
        .collect();

    assert_eq!(labels, vec!["2025-W02", "2025-W02", "2025-W02"]);
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[test]
fn builder_defaults_to_kst_and_monday() {
    let analytics = SalesAnalytics::builder().build().unwrap();
    let calendar = analytics.calendar();
    assert_eq!(calendar.offset(), FixedOffset::east_opt(9 * 3600).unwrap());
    assert_eq!(calendar.week_start(), Weekday::Mon);
    assert_eq!(
        analytics.to_string(),
        "SalesAnalytics(calendar=UTC+09:00 (week starts Mon))"
    );
}

#[test]
fn builder_accepts_negative_offsets() {
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    let analytics = SalesAnalytics::builder().utc_offset(offset).build().unwrap();
    let period = analytics.calendar().day(date(2025, 1, 1)).unwrap();
    assert_eq!(period.start, utc(2025, 1, 1, 5, 0));
}

#[test]
fn builder_rejects_out_of_range_offset() {
    let err = SalesAnalytics::builder()
        .utc_offset_hours(24)
        .build()
        .unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidArgument(_)));
}
