//! Sales folded by local hour of day and by day of week.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::calendar::StoreCalendar;
use crate::error::Result;
use crate::models::{
    validate_all, Granularity, HourSlot, PeriodSpec, Totals, TransactionRecord, ValidRecord,
    WeekdaySlot,
};

// ---------------------------------------------------------------------------
// ProfileAggregator
// ---------------------------------------------------------------------------

pub struct ProfileAggregator<'a> {
    calendar: &'a StoreCalendar,
}

impl<'a> ProfileAggregator<'a> {
    pub fn new(calendar: &'a StoreCalendar) -> Self {
        Self { calendar }
    }

    /// See [`hour_profile`].
    pub fn hours(
        &self,
        records: &[TransactionRecord],
        period: &PeriodSpec,
    ) -> Result<Vec<HourSlot>> {
        hour_profile(self.calendar, records, period)
    }

    /// See [`weekday_profile`].
    pub fn weekdays(
        &self,
        records: &[TransactionRecord],
        period: &PeriodSpec,
    ) -> Result<Vec<WeekdaySlot>> {
        weekday_profile(self.calendar, records, period)
    }
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// Approved sales in `period` per local hour of day, always 24 slots.
///
/// The period's own granularity is ignored; daily averages divide by the
/// number of local days the period touches.
pub fn hour_profile(
    calendar: &StoreCalendar,
    records: &[TransactionRecord],
    period: &PeriodSpec,
) -> Result<Vec<HourSlot>> {
    period.validate()?;
    let valid = validate_all(records)?;
    let days = local_days(calendar, period)?.len() as u64;

    let mut totals = [Totals::default(); 24];
    for record in approved_in(&valid, period) {
        let hour = calendar.local(record.timestamp)?.hour() as usize;
        totals[hour].add(record.amount);
    }

    Ok(totals
        .iter()
        .enumerate()
        .map(|(hour, t)| HourSlot {
            hour: hour as u32,
            total_sales: t.amount,
            approved_count: t.count,
            average_order_value: t.average(),
            average_daily_sales: super::average(t.amount, days),
        })
        .collect())
}

/// Approved sales in `period` per local weekday, seven slots starting at the
/// calendar's week start.
pub fn weekday_profile(
    calendar: &StoreCalendar,
    records: &[TransactionRecord],
    period: &PeriodSpec,
) -> Result<Vec<WeekdaySlot>> {
    period.validate()?;
    let valid = validate_all(records)?;

    let mut occurrences = [0u32; 7];
    for day in local_days(calendar, period)? {
        occurrences[calendar.days_since_week_start(day.weekday()) as usize] += 1;
    }

    let mut totals = [Totals::default(); 7];
    for record in approved_in(&valid, period) {
        let weekday = calendar.local_date(record.timestamp)?.weekday();
        totals[calendar.days_since_week_start(weekday) as usize].add(record.amount);
    }

    Ok(calendar
        .weekdays()
        .iter()
        .zip(totals.iter().zip(occurrences))
        .map(|(weekday, (t, days))| WeekdaySlot {
            weekday: *weekday,
            total_sales: t.amount,
            approved_count: t.count,
            average_order_value: t.average(),
            average_daily_sales: super::average(t.amount, u64::from(days)),
            days_in_period: days,
        })
        .collect())
}

fn local_days(calendar: &StoreCalendar, period: &PeriodSpec) -> Result<Vec<NaiveDateTime>> {
    calendar.slots(&period.with_granularity(Granularity::Daily))
}

fn approved_in<'r, 'a>(
    records: &'r [ValidRecord<'a>],
    period: &'r PeriodSpec,
) -> impl Iterator<Item = &'r ValidRecord<'a>> {
    records
        .iter()
        .filter(move |r| r.is_approved() && period.contains(r.timestamp))
}
