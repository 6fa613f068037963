// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar increments for time axes.
//!
//! A [`CalendarRule`] pairs an [`Increment`] (how to get from one tick to the
//! next) with a [`Normalize`] (where the first bucket starts). [`LATTICE`]
//! lists the rules from finest to coarsest; the time ticker walks it in that
//! order.
//!
//! Dates are rebuilt from year/month/day fields and out-of-range fields roll
//! over: month 13 is January of the next year and day 32 is a day in the
//! following month. Weekly steps do not roll over. Once a step would pass day
//! 28 they restart at day 1 of the next month, so every month starts a fresh
//! run of weeks.

use core::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};

/// Advances a tick instant to the next one. The result is always at midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Increment {
    /// Add `n` days.
    Days(i32),
    /// Add 7 days, restarting at the next month's first day after day 28.
    Weekly,
    /// Add 14 days, restarting at the next month's first day after day 28.
    TwoWeekly,
    /// First day of the month `n` months later.
    Months(i32),
    /// January 1st, `n` years later.
    Years(i32),
}

/// Snaps an instant down to the start of its bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Normalize {
    /// Midnight of the same day.
    StartOfDay,
    /// First day of the month.
    StartOfMonth,
    /// January 1st of the year.
    StartOfYear,
    /// January 1st of the year rounded down to a multiple of `n`.
    StartOfYears(i32),
}

/// One granularity of time-axis ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CalendarRule {
    /// Step between ticks.
    pub increment: Increment,
    /// Start of the first bucket.
    pub normalize: Normalize,
}

const fn rule(increment: Increment, normalize: Normalize) -> CalendarRule {
    CalendarRule {
        increment,
        normalize,
    }
}

/// All rules, finest first.
///
/// Multi-month steps start at January so that e.g. quarters line up with the year.
pub const LATTICE: [CalendarRule; 14] = [
    rule(Increment::Days(1), Normalize::StartOfDay),
    rule(Increment::Days(2), Normalize::StartOfMonth),
    rule(Increment::Weekly, Normalize::StartOfMonth),
    rule(Increment::TwoWeekly, Normalize::StartOfMonth),
    rule(Increment::Months(1), Normalize::StartOfMonth),
    rule(Increment::Months(2), Normalize::StartOfYear),
    rule(Increment::Months(3), Normalize::StartOfYear),
    rule(Increment::Months(4), Normalize::StartOfYear),
    rule(Increment::Months(6), Normalize::StartOfYear),
    rule(Increment::Years(1), Normalize::StartOfYear),
    rule(Increment::Years(2), Normalize::StartOfYears(2)),
    rule(Increment::Years(5), Normalize::StartOfYears(5)),
    rule(Increment::Years(10), Normalize::StartOfYears(10)),
    rule(Increment::Years(20), Normalize::StartOfYears(20)),
];

impl Increment {
    /// Returns the next tick after `t`, or `None` past the end of the calendar.
    pub fn apply(self, t: NaiveDateTime) -> Option<NaiveDateTime> {
        let (year, month, day) = fields(t);
        match self {
            Self::Days(n) => civil(year, month, day.checked_add(n)?),
            Self::Weekly => week_step(year, month, day + 7),
            Self::TwoWeekly => week_step(year, month, day + 14),
            Self::Months(n) => civil(year, month.checked_add(n)?, 1),
            Self::Years(n) => civil(year.checked_add(n)?, 1, 1),
        }
    }
}

impl Normalize {
    /// Returns the start of the bucket containing `t`.
    pub fn apply(self, t: NaiveDateTime) -> Option<NaiveDateTime> {
        let (year, month, day) = fields(t);
        match self {
            Self::StartOfDay => civil(year, month, day),
            Self::StartOfMonth => civil(year, month, 1),
            Self::StartOfYear => civil(year, 1, 1),
            // Truncating division: years before 0 round toward 0.
            Self::StartOfYears(n) => civil(year.checked_div(n)? * n, 1, 1),
        }
    }
}

impl CalendarRule {
    /// The bucket start of `t` and the instant one increment later.
    pub fn first_bucket(&self, t: NaiveDateTime) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = self.normalize.apply(t)?;
        Some((start, self.increment.apply(start)?))
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(n) => write!(f, "daily({n})"),
            Self::Weekly => f.write_str("weekly"),
            Self::TwoWeekly => f.write_str("two-weekly"),
            Self::Months(n) => write!(f, "monthly({n})"),
            Self::Years(n) => write!(f, "yearly({n})"),
        }
    }
}

fn fields(t: NaiveDateTime) -> (i32, i32, i32) {
    // Month and day are at most 31, so the casts are lossless.
    (t.year(), t.month() as i32, t.day() as i32)
}

fn week_step(year: i32, month: i32, day: i32) -> Option<NaiveDateTime> {
    if day > 28 {
        civil(year, month + 1, 1)
    } else {
        civil(year, month, day)
    }
}

/// Midnight of `year-month-day`, rolling overflowing months and days forward.
fn civil(year: i32, month: i32, day: i32) -> Option<NaiveDateTime> {
    let month0 = month - 1;
    let year = year.checked_add(month0.div_euclid(12))?;
    let month = u32::try_from(month0.rem_euclid(12) + 1).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first.checked_add_signed(TimeDelta::try_days(i64::from(day) - 1)?)?;
    date.and_hms_opt(0, 0, 0)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use chrono::Timelike;

    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn lattice_runs_from_days_to_decades() {
        let increments: std::vec::Vec<_> = LATTICE.iter().map(|r| r.increment).collect();
        assert_eq!(
            increments,
            [
                Increment::Days(1),
                Increment::Days(2),
                Increment::Weekly,
                Increment::TwoWeekly,
                Increment::Months(1),
                Increment::Months(2),
                Increment::Months(3),
                Increment::Months(4),
                Increment::Months(6),
                Increment::Years(1),
                Increment::Years(2),
                Increment::Years(5),
                Increment::Years(10),
                Increment::Years(20),
            ]
        );
        assert_eq!(LATTICE[0].normalize, Normalize::StartOfDay);
        assert_eq!(LATTICE[4].normalize, Normalize::StartOfMonth);
        assert_eq!(LATTICE[5].normalize, Normalize::StartOfYear);
        assert_eq!(LATTICE[13].normalize, Normalize::StartOfYears(20));
    }

    #[test]
    fn days_roll_into_next_month_and_drop_time_of_day() {
        let t = at(2024, 1, 31).with_hour(13).unwrap();
        assert_eq!(Increment::Days(1).apply(t), Some(at(2024, 2, 1)));
        assert_eq!(Increment::Days(2).apply(at(2024, 2, 28)), Some(at(2024, 3, 1)));
        assert_eq!(Increment::Days(2).apply(at(2023, 2, 28)), Some(at(2023, 3, 2)));
    }

    #[test]
    fn weeks_restart_each_month() {
        assert_eq!(Increment::Weekly.apply(at(2024, 1, 15)), Some(at(2024, 1, 22)));
        assert_eq!(Increment::Weekly.apply(at(2024, 1, 22)), Some(at(2024, 2, 1)));
        assert_eq!(Increment::Weekly.apply(at(2024, 12, 22)), Some(at(2025, 1, 1)));
        assert_eq!(Increment::TwoWeekly.apply(at(2024, 3, 1)), Some(at(2024, 3, 15)));
        assert_eq!(Increment::TwoWeekly.apply(at(2024, 3, 15)), Some(at(2024, 4, 1)));
    }

    #[test]
    fn months_and_years_land_on_first_days() {
        assert_eq!(Increment::Months(1).apply(at(2024, 1, 31)), Some(at(2024, 2, 1)));
        assert_eq!(Increment::Months(6).apply(at(2024, 9, 1)), Some(at(2025, 3, 1)));
        assert_eq!(Increment::Years(5).apply(at(2024, 6, 30)), Some(at(2029, 1, 1)));
    }

    #[test]
    fn normalization_snaps_down() {
        let t = at(2024, 6, 10).with_minute(30).unwrap();
        assert_eq!(Normalize::StartOfDay.apply(t), Some(at(2024, 6, 10)));
        assert_eq!(Normalize::StartOfMonth.apply(t), Some(at(2024, 6, 1)));
        assert_eq!(Normalize::StartOfYear.apply(t), Some(at(2024, 1, 1)));
        assert_eq!(Normalize::StartOfYears(5).apply(t), Some(at(2020, 1, 1)));
        assert_eq!(Normalize::StartOfYears(20).apply(t), Some(at(2020, 1, 1)));
        assert_eq!(Normalize::StartOfYears(10).apply(at(1999, 12, 31)), Some(at(1990, 1, 1)));
    }

    #[test]
    fn first_bucket_pairs_start_and_next() {
        let (start, next) = LATTICE[6].first_bucket(at(2024, 5, 17)).unwrap();
        assert_eq!(start, at(2024, 1, 1));
        assert_eq!(next, at(2024, 4, 1));
    }

    #[test]
    fn end_of_calendar_is_none() {
        let last = NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(Increment::Years(20).apply(last), None);
        assert_eq!(Increment::Days(1).apply(last), None);
    }

    #[test]
    fn rules_display_their_step() {
        assert_eq!(std::format!("{}", Increment::Months(3)), "monthly(3)");
        assert_eq!(std::format!("{}", Increment::TwoWeekly), "two-weekly");
    }
}
