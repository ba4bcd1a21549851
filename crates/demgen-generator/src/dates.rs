//! Date sequence generation.
//!
//! A series starts at an aligned start date and advances one period at a
//! time. Month-based frequencies are computed from the anchor month rather
//! than by repeated addition, so a series anchored on the 31st returns to
//! the 31st whenever the target month has one.

use chrono::{Datelike, Days, Months, NaiveDate};
use demgen_core::{ConfigError, Frequency, TimeSettings};

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 31,
    }
}

fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
}

/// `day` of the month `months` after `month_start`, clamped to the month's length.
fn day_in_month_after(month_start: NaiveDate, day: u32, months: u32) -> Option<NaiveDate> {
    let target = month_start.checked_add_months(Months::new(months))?;
    let day = day.min(days_in_month(target.year(), target.month()));
    target.with_day(day)
}

fn overflow(time: &TimeSettings) -> ConfigError {
    ConfigError::DateOverflow {
        start: time.start_date.to_string(),
        periods: time.period_count,
    }
}

/// Compute the first date of the series.
///
/// Weekly series move forward (0-6 days) to the configured weekday.
/// Monthly series move to the configured day of the current month, rolling
/// one month forward when that day is before the start date. Days past the
/// end of a short month clamp to its last day. Other frequencies start on
/// the configured date.
pub fn aligned_start(time: &TimeSettings) -> Result<NaiveDate, ConfigError> {
    let start = time.start_date;

    match (time.frequency, time.weekly_day, time.monthly_day) {
        (Frequency::Weekly, Some(weekday), _) => {
            let current = start.weekday().num_days_from_sunday();
            let diff = (weekday + 7 - current) % 7;
            start
                .checked_add_days(Days::new(u64::from(diff)))
                .ok_or_else(|| overflow(time))
        }
        (Frequency::Monthly, _, Some(day)) => {
            let month_start = first_of_month(start).ok_or_else(|| overflow(time))?;
            let candidate =
                day_in_month_after(month_start, day, 0).ok_or_else(|| overflow(time))?;
            if candidate < start {
                day_in_month_after(month_start, day, 1).ok_or_else(|| overflow(time))
            } else {
                Ok(candidate)
            }
        }
        _ => Ok(start),
    }
}

/// Generate the ordered dates of a series: exactly `period_count` strictly
/// increasing dates starting at the aligned start.
pub fn generate_date_range(time: &TimeSettings) -> Result<Vec<NaiveDate>, ConfigError> {
    time.validate()?;

    let first = aligned_start(time)?;
    let count = time.period_count;

    let months_per_period = match time.frequency {
        Frequency::Daily | Frequency::Weekly => None,
        Frequency::Monthly => Some(1),
        Frequency::Quarterly => Some(3),
        Frequency::Yearly => Some(12),
    };

    let dates = match months_per_period {
        None => {
            let step = if time.frequency == Frequency::Weekly { 7 } else { 1 };
            (0..u64::from(count))
                .map(|i| first.checked_add_days(Days::new(i * step)))
                .collect::<Option<Vec<_>>>()
        }
        Some(step) => {
            let anchor_day = match (time.frequency, time.monthly_day) {
                (Frequency::Monthly, Some(day)) => day,
                _ => first.day(),
            };
            let month_start = first_of_month(first).ok_or_else(|| overflow(time))?;
            (0..count)
                .map(|i| {
                    i.checked_mul(step)
                        .and_then(|months| day_in_month_after(month_start, anchor_day, months))
                })
                .collect::<Option<Vec<_>>>()
        }
    };

    dates.ok_or_else(|| overflow(time))
}
