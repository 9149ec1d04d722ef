//! Store-local calendar arithmetic.
//!
//! Every bucket boundary is computed on the merchant's configured UTC offset,
//! not on UTC and not on whatever zone the viewer happens to be in, so that
//! "today" on a dashboard means the store's business day.

use std::fmt;

use chrono::{
    DateTime, Datelike, Days, Duration, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime,
    Timelike, Utc, Weekday,
};

use crate::config;
use crate::error::{AnalyticsError, Result};
use crate::models::{Granularity, PeriodSpec};

/// The merchant's calendar: a fixed UTC offset and the first day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCalendar {
    offset: FixedOffset,
    week_start: Weekday,
}

impl Default for StoreCalendar {
    fn default() -> Self {
        Self::new(config::default_utc_offset(), config::DEFAULT_WEEK_START)
    }
}

impl StoreCalendar {
    pub fn new(offset: FixedOffset, week_start: Weekday) -> Self {
        Self { offset, week_start }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    // -- Instant <-> local wall clock ---------------------------------------

    pub fn local(&self, instant: DateTime<Utc>) -> Result<NaiveDateTime> {
        instant
            .naive_utc()
            .checked_add_signed(self.offset_duration())
            .ok_or_else(|| out_of_range(instant))
    }

    pub fn local_date(&self, instant: DateTime<Utc>) -> Result<NaiveDate> {
        Ok(self.local(instant)?.date())
    }

    /// Convert a store wall-clock time back to an instant. A fixed offset has
    /// no gaps or folds, so only the ends of the calendar can fail.
    pub fn to_utc(&self, local: NaiveDateTime) -> Result<DateTime<Utc>> {
        local
            .checked_sub_signed(self.offset_duration())
            .map(|utc| utc.and_utc())
            .ok_or_else(|| out_of_range(local))
    }

    pub fn to_fixed(&self, local: NaiveDateTime) -> Result<DateTime<FixedOffset>> {
        Ok(self.to_utc(local)?.with_timezone(&self.offset))
    }

    pub fn midnight(&self, date: NaiveDate) -> Result<DateTime<Utc>> {
        self.to_utc(date.and_time(NaiveTime::MIN))
    }

    fn offset_duration(&self) -> Duration {
        Duration::seconds(i64::from(self.offset.local_minus_utc()))
    }

    // -- Truncation and stepping --------------------------------------------

    /// Local start of the slot containing `instant`.
    pub fn truncate(
        &self,
        instant: DateTime<Utc>,
        granularity: Granularity,
    ) -> Result<NaiveDateTime> {
        self.truncate_local(self.local(instant)?, granularity)
    }

    pub fn truncate_local(
        &self,
        local: NaiveDateTime,
        granularity: Granularity,
    ) -> Result<NaiveDateTime> {
        let date = local.date();
        let day_start = date.and_time(NaiveTime::MIN);
        let slot = match granularity {
            Granularity::Hourly => day_start + Duration::hours(i64::from(local.hour())),
            Granularity::Daily => day_start,
            Granularity::Weekly => {
                let back = i64::from(self.days_since_week_start(date.weekday()));
                shift_days(date, -back)?.and_time(NaiveTime::MIN)
            }
            Granularity::Monthly => month_start(date).and_time(NaiveTime::MIN),
        };
        Ok(slot)
    }

    /// Local start of the slot following `slot_start`. `None` only when the
    /// calendar runs out of representable dates.
    pub fn next(
        &self,
        slot_start: NaiveDateTime,
        granularity: Granularity,
    ) -> Option<NaiveDateTime> {
        match granularity {
            Granularity::Hourly => slot_start.checked_add_signed(Duration::hours(1)),
            Granularity::Daily => slot_start.checked_add_signed(Duration::days(1)),
            Granularity::Weekly => slot_start.checked_add_signed(Duration::weeks(1)),
            Granularity::Monthly => slot_start.checked_add_months(Months::new(1)),
        }
    }

    /// Local slot starts of every slot that intersects `[start, end)`, in
    /// ascending order. An empty period has no slots.
    pub fn slots(&self, period: &PeriodSpec) -> Result<Vec<NaiveDateTime>> {
        period.validate()?;
        let mut slots = Vec::new();
        if period.is_empty() {
            return Ok(slots);
        }

        let mut cursor = Some(self.truncate(period.start, period.granularity)?);
        while let Some(slot) = cursor {
            if self.to_utc(slot)? >= period.end {
                break;
            }
            slots.push(slot);
            cursor = self.next(slot, period.granularity);
        }
        Ok(slots)
    }

    /// Display key of a slot. Weeks take the ISO week of their fourth day,
    /// which holds most of the slot whatever the week start.
    pub fn label(&self, slot_start: NaiveDateTime, granularity: Granularity) -> String {
        match granularity {
            Granularity::Hourly => slot_start.format("%Y-%m-%d %H:00").to_string(),
            Granularity::Daily => slot_start.format("%Y-%m-%d").to_string(),
            Granularity::Weekly => {
                let date = slot_start.date();
                let mid = date.checked_add_days(Days::new(3)).unwrap_or(date);
                mid.format("%G-W%V").to_string()
            }
            Granularity::Monthly => slot_start.format("%Y-%m").to_string(),
        }
    }

    /// Position of `weekday` counted from the configured week start (0..7).
    pub fn days_since_week_start(&self, weekday: Weekday) -> u32 {
        (weekday.num_days_from_monday() + 7 - self.week_start.num_days_from_monday()) % 7
    }

    /// Weekdays in display order, starting at the configured week start.
    pub fn weekdays(&self) -> [Weekday; 7] {
        let mut days = [self.week_start; 7];
        for (i, day) in days.iter_mut().enumerate().skip(1) {
            *day = weekday_after(self.week_start, i);
        }
        days
    }

    // -- Calendar-aligned periods -------------------------------------------

    /// One local day, bucketed daily.
    pub fn day(&self, date: NaiveDate) -> Result<PeriodSpec> {
        Ok(PeriodSpec::new(
            self.midnight(date)?,
            self.midnight(shift_days(date, 1)?)?,
            Granularity::Daily,
        ))
    }

    /// Local dates `first..=last`, with the granularity picked from the span.
    pub fn date_range(&self, first: NaiveDate, last: NaiveDate) -> Result<PeriodSpec> {
        if first > last {
            return Err(AnalyticsError::InvalidRange {
                start: self.midnight(first)?,
                end: self.midnight(last)?,
            });
        }
        Ok(PeriodSpec::auto(
            self.midnight(first)?,
            self.midnight(shift_days(last, 1)?)?,
        ))
    }

    /// The whole local month containing `date`, bucketed daily.
    pub fn month_of(&self, date: NaiveDate) -> Result<PeriodSpec> {
        let first = month_start(date);
        let next = first
            .checked_add_months(Months::new(1))
            .ok_or_else(|| out_of_range(first))?;
        Ok(PeriodSpec::new(
            self.midnight(first)?,
            self.midnight(next)?,
            Granularity::Daily,
        ))
    }

    /// The whole local year containing `date`, bucketed monthly.
    pub fn year_of(&self, date: NaiveDate) -> Result<PeriodSpec> {
        let first = date.with_ordinal(1).ok_or_else(|| out_of_range(date))?;
        let next = first
            .checked_add_months(Months::new(12))
            .ok_or_else(|| out_of_range(first))?;
        Ok(PeriodSpec::new(
            self.midnight(first)?,
            self.midnight(next)?,
            Granularity::Monthly,
        ))
    }

    /// The `days` local days ending with `last` (inclusive), bucketed daily.
    pub fn last_days(&self, last: NaiveDate, days: u32) -> Result<PeriodSpec> {
        if days == 0 {
            return Err(AnalyticsError::InvalidArgument(
                "last_days requires at least one day".to_string(),
            ));
        }
        let first = last
            .checked_sub_days(Days::new(u64::from(days - 1)))
            .ok_or_else(|| {
                AnalyticsError::InvalidArgument(format!(
                    "{} days before {} is out of range",
                    days, last
                ))
            })?;
        Ok(PeriodSpec::new(
            self.midnight(first)?,
            self.midnight(shift_days(last, 1)?)?,
            Granularity::Daily,
        ))
    }
}

impl fmt::Display for StoreCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTC{} (week starts {})", self.offset, self.week_start)
    }
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// `date` moved by `days` (negative goes back), failing at the ends of the
/// calendar.
pub fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    let step = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(step)
    } else {
        date.checked_sub_days(step)
    };
    shifted.ok_or_else(|| {
        AnalyticsError::InvalidArgument(format!(
            "{} shifted by {} days is out of range",
            date, days
        ))
    })
}

fn out_of_range(value: impl fmt::Display) -> AnalyticsError {
    AnalyticsError::InvalidArgument(format!(
        "{} is outside the supported calendar range",
        value
    ))
}

fn weekday_after(weekday: Weekday, n: usize) -> Weekday {
    (0..n).fold(weekday, |day, _| day.succ())
}
