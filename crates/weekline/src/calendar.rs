//! Fixed-context calendar arithmetic.
//!
//! Provides pure functions over instants (`DateTime<Utc>`) against an
//! immutable [`CalendarContext`]: fixed-format date-string parsing and
//! formatting, day-boundary computation, week-ending-Sunday computation,
//! and day offsets. All functions take explicit inputs (no system clock
//! access) — the caller provides every instant, keeping these functions
//! testable and deterministic.
//!
//! # Week convention
//!
//! The calendar's native week *begins* on Sunday; this module treats the
//! week as *ending* on Sunday. [`CalendarContext::next_sunday`] carries
//! the compensation between the two conventions.
//!
//! # Operations
//!
//! - [`CalendarContext::parse_full_date`] / [`CalendarContext::format_full_date`] — fixed 19-character date strings
//! - [`CalendarContext::beginning_of_day`] / [`CalendarContext::next_day_start`] / [`CalendarContext::end_of_day`] — day boundaries
//! - [`CalendarContext::add_days`] / [`CalendarContext::yesterday`] — calendar-aware day offsets
//! - [`CalendarContext::next_sunday`] / [`CalendarContext::is_same_week`] — week boundaries
//! - [`is_after`] — strict instant comparison

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
    Weekday,
};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{Result, WeeklineError};

/// The fixed date-string pattern, `yyyy-MM-dd HH:mm:ss` in strftime form.
pub const FULL_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Length in characters of a string matching [`FULL_DATE_FORMAT`].
pub const FULL_DATE_LEN: usize = 19;

// ── Calendar context ────────────────────────────────────────────────────────

/// The immutable (calendar system, timezone, week convention) tuple all
/// date arithmetic is performed against.
///
/// Construct one context at process start and share it. The type is
/// `Copy` and holds no interior mutability, so concurrent reads are safe
/// and two calls computing a day boundary for the same instant against
/// the same context always agree. The Gregorian calendar and the
/// week-ends-on-Sunday convention are fixed; only the timezone varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarContext {
    tz: Tz,
}

impl CalendarContext {
    /// The default context: Gregorian calendar pinned to GMT.
    ///
    /// GMT has no daylight-saving transitions, so every local-time
    /// reconstruction in this context is exact.
    pub const GMT: CalendarContext = CalendarContext { tz: Tz::GMT };

    /// Create a context for an explicit timezone.
    pub const fn new(tz: Tz) -> Self {
        CalendarContext { tz }
    }

    /// Create a context from an IANA timezone name.
    ///
    /// # Errors
    ///
    /// Returns [`WeeklineError::InvalidTimezone`] if the name is not a
    /// valid IANA timezone.
    pub fn from_name(name: &str) -> Result<Self> {
        let tz = name
            .parse::<Tz>()
            .map_err(|_| WeeklineError::InvalidTimezone(format!("'{}'", name)))?;
        Ok(CalendarContext { tz })
    }

    /// The timezone this context extracts and rebuilds calendar fields in.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    // ── Fixed-format parsing and formatting ─────────────────────────────

    /// Parse a fixed-format date string, e.g. `"2014-11-17 19:39:12"`.
    ///
    /// Only the first [`FULL_DATE_LEN`] characters are interpreted;
    /// trailing content (fractional seconds, timezone suffixes) is
    /// discarded without validation. The pattern is space-separated, so
    /// ISO 8601 `T`-separated input does not match and is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`WeeklineError::InputTooShort`] when the input has fewer
    /// than [`FULL_DATE_LEN`] characters, and
    /// [`WeeklineError::InvalidDatetime`] when the truncated text does
    /// not match the pattern (non-numeric fields, invalid day-of-month,
    /// wrong separators).
    ///
    /// # Examples
    ///
    /// ```
    /// use weekline::CalendarContext;
    ///
    /// let ctx = CalendarContext::GMT;
    /// let instant = ctx.parse_full_date("2014-11-17 19:39:12").unwrap();
    /// assert_eq!(ctx.format_full_date(instant), "2014-11-17 19:39:12");
    /// ```
    pub fn parse_full_date(&self, input: &str) -> Result<DateTime<Utc>> {
        let truncated: String = input.chars().take(FULL_DATE_LEN).collect();
        let len = truncated.chars().count();
        if len < FULL_DATE_LEN {
            return Err(WeeklineError::InputTooShort {
                expected: FULL_DATE_LEN,
                got: len,
            });
        }
        let naive = NaiveDateTime::parse_from_str(&truncated, FULL_DATE_FORMAT)
            .map_err(|e| WeeklineError::InvalidDatetime(format!("'{}': {}", truncated, e)))?;
        Ok(self.rebuild(naive))
    }

    /// Render an instant as a 19-character fixed-format string in the
    /// context timezone.
    ///
    /// Round-trips with [`CalendarContext::parse_full_date`] for any
    /// instant whose sub-second component is zero; the format carries no
    /// sub-second precision.
    pub fn format_full_date(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.tz)
            .format(FULL_DATE_FORMAT)
            .to_string()
    }

    // ── Day boundaries ──────────────────────────────────────────────────

    /// The start (00:00:00) of the instant's calendar day in the context
    /// timezone. Only the year/month/day fields survive; time-of-day is
    /// discarded, not rounded.
    pub fn beginning_of_day(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let local = instant.with_timezone(&self.tz);
        self.start_of_date(local.date_naive())
    }

    /// The start of the calendar day after the instant's day: the
    /// beginning of the day advanced by one calendar day, correct across
    /// month and year boundaries.
    pub fn next_day_start(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let local = instant.with_timezone(&self.tz);
        self.start_of_date(local.date_naive() + Duration::days(1))
    }

    /// The last representable second (23:59:59) of the instant's
    /// calendar day: [`CalendarContext::next_day_start`] minus one
    /// second, one second being the fixed format's resolution.
    pub fn end_of_day(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let local = instant.with_timezone(&self.tz);
        self.end_of_date(local.date_naive())
    }

    /// Start, end, and next start of the instant's calendar day.
    pub fn day_bounds(&self, instant: DateTime<Utc>) -> DayBounds {
        let next_start = self.next_day_start(instant);
        DayBounds {
            start: self.beginning_of_day(instant),
            end: next_start - Duration::seconds(1),
            next_start,
        }
    }

    // ── Day offsets ─────────────────────────────────────────────────────

    /// Shift an instant by `days` calendar days (negative shifts
    /// backwards), preserving the local time-of-day.
    ///
    /// The date is moved in the context timezone and the wall-clock time
    /// re-attached, so a day is a calendar day rather than a fixed
    /// 86 400 seconds. Under GMT the two agree; in a DST-observing
    /// context the wall-clock time survives the transition.
    pub fn add_days(&self, instant: DateTime<Utc>, days: i64) -> DateTime<Utc> {
        let local = instant.with_timezone(&self.tz);
        let shifted = local.date_naive() + Duration::days(days);
        self.rebuild(shifted.and_time(local.time()))
    }

    /// One calendar day before the instant, preserving time-of-day.
    /// Equivalent to `add_days(instant, -1)`.
    pub fn yesterday(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        self.add_days(instant, -1)
    }

    // ── Week boundaries ─────────────────────────────────────────────────

    /// The end (23:59:59) of the Sunday that closes the instant's week.
    ///
    /// If the instant already falls on a Sunday the result is that same
    /// day's end. Otherwise the weekday field is forced to Sunday, which
    /// lands on the *preceding* Sunday (the calendar's native week
    /// begins on Sunday), and the result is that day's end advanced by
    /// exactly seven days, reaching the Sunday that ends the current
    /// week.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekline::CalendarContext;
    ///
    /// let ctx = CalendarContext::GMT;
    /// let wed = ctx.parse_full_date("2024-01-03 10:00:00").unwrap();
    /// assert_eq!(ctx.format_full_date(ctx.next_sunday(wed)), "2024-01-07 23:59:59");
    /// ```
    pub fn next_sunday(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let local = instant.with_timezone(&self.tz);
        if local.weekday() == Weekday::Sun {
            return self.end_of_day(instant);
        }
        // Compensate for the calendar-native week start: one week past
        // the preceding Sunday is the Sunday ending the current week.
        let preceding_end = self.end_of_date(preceding_sunday(local.date_naive()));
        self.add_days(preceding_end, 7)
    }

    /// Whether `instant` still sits within or before the week that ends
    /// at `test_instant`'s week-ending Sunday.
    ///
    /// This is a directional check (true iff `next_sunday(test_instant)`
    /// is strictly after `instant`), not a symmetric same-ISO-week
    /// predicate.
    pub fn is_same_week(&self, instant: DateTime<Utc>, test_instant: DateTime<Utc>) -> bool {
        is_after(self.next_sunday(test_instant), instant)
    }

    // ── Internal helpers ────────────────────────────────────────────────

    /// 00:00:00 of `date` in the context timezone, as an instant.
    fn start_of_date(&self, date: NaiveDate) -> DateTime<Utc> {
        self.rebuild(date.and_time(NaiveTime::MIN))
    }

    /// 23:59:59 of `date`: the following day's start minus one second.
    fn end_of_date(&self, date: NaiveDate) -> DateTime<Utc> {
        self.start_of_date(date + Duration::days(1)) - Duration::seconds(1)
    }

    /// Re-localize a wall-clock datetime in the context timezone.
    ///
    /// Folds (fall back) resolve to the earlier occurrence; gaps (spring
    /// forward) resolve one hour later, past the transition. GMT has
    /// neither, so resolution there is always exact.
    fn rebuild(&self, naive: NaiveDateTime) -> DateTime<Utc> {
        match self.tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earlier, _) => earlier.with_timezone(&Utc),
            LocalResult::None => {
                let past_gap = self
                    .tz
                    .from_local_datetime(&(naive + Duration::hours(1)))
                    .earliest();
                match past_gap {
                    Some(dt) => dt.with_timezone(&Utc),
                    None => Utc.from_utc_datetime(&naive),
                }
            }
        }
    }
}

// ── Structured results ──────────────────────────────────────────────────────

/// The boundaries of one calendar day: its start, its last second, and
/// the start of the following day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayBounds {
    /// 00:00:00 of the day.
    pub start: DateTime<Utc>,
    /// 23:59:59 of the day, one second before `next_start`.
    pub end: DateTime<Utc>,
    /// 00:00:00 of the following day.
    pub next_start: DateTime<Utc>,
}

// ── Comparisons ─────────────────────────────────────────────────────────────

/// Strict ordering on the time axis: true iff `a` is after `b`.
pub fn is_after(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a > b
}

// ── Week-start compensation ─────────────────────────────────────────────────

/// The Sunday on or before `date`. Forcing the weekday field to Sunday
/// moves backwards because the calendar-native week begins on Sunday.
fn preceding_sunday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

// ── Tests ───────────────────────────────────────────────────────────────────
