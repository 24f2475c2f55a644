//! Time, date and duration validators
//!
//! Instants are compared as absolute points in time, so values in different
//! time zones compare correctly. Calendar checks ([`same_day`],
//! [`weekday`], ...) read each value in its own zone.
//!
//! Checks relative to "now" take a [`Clock`]. The `*_now` forms use
//! [`SystemClock`]; tests pass a [`FixedClock`] instead.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use nebula_check::validators::time::{self, FixedClock};
//!
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
//! let expires = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
//!
//! let v = time::future(&expires, &clock, "expires_at");
//! assert_eq!(v.error().unwrap().to_string(), "expires_at: must be in the future");
//! ```

use std::borrow::Cow;
use std::fmt::{Display, Write as _};

use chrono::{
    DateTime, Datelike, FixedOffset, SecondsFormat, TimeDelta, TimeZone, Utc, Weekday,
};

use crate::foundation::Validation;

// ============================================================================
// CLOCK
// ============================================================================

/// Source of the current instant for now-relative checks.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    pub fn new<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self(instant.with_timezone(&Utc))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

fn rfc3339<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// ============================================================================
// ABSOLUTE COMPARISONS
// ============================================================================

/// Validates that `value` is strictly before `t`.
pub fn before<Tz, Tz2>(
    value: &DateTime<Tz>,
    t: &DateTime<Tz2>,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    Tz: TimeZone,
    Tz2: TimeZone,
    Tz2::Offset: Display,
{
    Validation::check(value.naive_utc() < t.naive_utc(), field, &["before"], || {
        format!("must be before {}", rfc3339(t))
    })
}

/// Validates that `value` is strictly after `t`.
pub fn after<Tz, Tz2>(
    value: &DateTime<Tz>,
    t: &DateTime<Tz2>,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    Tz: TimeZone,
    Tz2: TimeZone,
    Tz2::Offset: Display,
{
    Validation::check(value.naive_utc() > t.naive_utc(), field, &["after"], || {
        format!("must be after {}", rfc3339(t))
    })
}

/// Validates that `value` is at or before `t`.
pub fn before_or_equal<Tz, Tz2>(
    value: &DateTime<Tz>,
    t: &DateTime<Tz2>,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    Tz: TimeZone,
    Tz2: TimeZone,
    Tz2::Offset: Display,
{
    Validation::check(value.naive_utc() <= t.naive_utc(), field, &["lte"], || {
        format!("must be before or equal to {}", rfc3339(t))
    })
}

/// Validates that `value` is at or after `t`.
pub fn after_or_equal<Tz, Tz2>(
    value: &DateTime<Tz>,
    t: &DateTime<Tz2>,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    Tz: TimeZone,
    Tz2: TimeZone,
    Tz2::Offset: Display,
{
    Validation::check(value.naive_utc() >= t.naive_utc(), field, &["gte"], || {
        format!("must be after or equal to {}", rfc3339(t))
    })
}

/// Validates `start <= value <= end`. Records `after` and `before`.
pub fn between<Tz, Tz2>(
    value: &DateTime<Tz>,
    start: &DateTime<Tz2>,
    end: &DateTime<Tz2>,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    Tz: TimeZone,
    Tz2: TimeZone,
    Tz2::Offset: Display,
{
    let v = value.naive_utc();
    let ok = v >= start.naive_utc() && v <= end.naive_utc();
    Validation::check(ok, field, &["after", "before"], || {
        format!("must be between {} and {}", rfc3339(start), rfc3339(end))
    })
}

/// Validates `start < value < end`. Records `gt` and `lt`.
pub fn between_exclusive<Tz, Tz2>(
    value: &DateTime<Tz>,
    start: &DateTime<Tz2>,
    end: &DateTime<Tz2>,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    Tz: TimeZone,
    Tz2: TimeZone,
    Tz2::Offset: Display,
{
    let v = value.naive_utc();
    let ok = v > start.naive_utc() && v < end.naive_utc();
    Validation::check(ok, field, &["gt", "lt"], || {
        format!(
            "must be between {} and {} (exclusive)",
            rfc3339(start),
            rfc3339(end)
        )
    })
}

// ============================================================================
// RELATIVE TO NOW
// ============================================================================

/// Validates that `value` is strictly before the clock's now.
pub fn past<Tz: TimeZone>(
    value: &DateTime<Tz>,
    clock: &impl Clock,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    let ok = value.naive_utc() < clock.now().naive_utc();
    Validation::check(ok, field, &["past"], || "must be in the past")
}

/// Validates that `value` is strictly after the clock's now.
pub fn future<Tz: TimeZone>(
    value: &DateTime<Tz>,
    clock: &impl Clock,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    let ok = value.naive_utc() > clock.now().naive_utc();
    Validation::check(ok, field, &["future"], || "must be in the future")
}

/// Validates that `value` is not after the clock's now.
pub fn not_future<Tz: TimeZone>(
    value: &DateTime<Tz>,
    clock: &impl Clock,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    let ok = value.naive_utc() <= clock.now().naive_utc();
    Validation::check(ok, field, &["pastoreq"], || "must not be in the future")
}

/// Validates that `value` is not before the clock's now.
pub fn not_past<Tz: TimeZone>(
    value: &DateTime<Tz>,
    clock: &impl Clock,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    let ok = value.naive_utc() >= clock.now().naive_utc();
    Validation::check(ok, field, &["futureoreq"], || "must not be in the past")
}

/// [`past`] against the system clock.
pub fn past_now<Tz: TimeZone>(value: &DateTime<Tz>, field: impl Into<Cow<'static, str>>) -> Validation {
    past(value, &SystemClock, field)
}

/// [`future`] against the system clock.
pub fn future_now<Tz: TimeZone>(
    value: &DateTime<Tz>,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    future(value, &SystemClock, field)
}

/// [`not_future`] against the system clock.
pub fn not_future_now<Tz: TimeZone>(
    value: &DateTime<Tz>,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    not_future(value, &SystemClock, field)
}

/// [`not_past`] against the system clock.
pub fn not_past_now<Tz: TimeZone>(
    value: &DateTime<Tz>,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    not_past(value, &SystemClock, field)
}

/// Validates that `value` is at most `window` away from the clock's now,
/// in either direction.
pub fn within<Tz: TimeZone>(
    value: &DateTime<Tz>,
    window: TimeDelta,
    clock: &impl Clock,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    let distance = (value.naive_utc() - clock.now().naive_utc()).abs();
    Validation::check(distance <= window, field, &["within"], || {
        format!("must be within {} of now", render_duration(window))
    })
}

/// [`within`] against the system clock.
pub fn within_now<Tz: TimeZone>(
    value: &DateTime<Tz>,
    window: TimeDelta,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    within(value, window, &SystemClock, field)
}

/// Validates that `value` is at most `window` away from `reference`.
pub fn within_of<Tz, Tz2>(
    value: &DateTime<Tz>,
    window: TimeDelta,
    reference: &DateTime<Tz2>,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    Tz: TimeZone,
    Tz2: TimeZone,
{
    let distance = (value.naive_utc() - reference.naive_utc()).abs();
    Validation::check(distance <= window, field, &["within"], || {
        format!("must be within {} of reference time", render_duration(window))
    })
}

// ============================================================================
// CALENDAR
// ============================================================================

/// Validates that `value` falls on the same calendar date as `reference`.
pub fn same_day<Tz, Tz2>(
    value: &DateTime<Tz>,
    reference: &DateTime<Tz2>,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    Tz: TimeZone,
    Tz2: TimeZone,
{
    let ok = value.date_naive() == reference.date_naive();
    Validation::check(ok, field, &["sameday"], || "must be on the same day")
}

/// Validates that `value` falls in the same year and month as `reference`.
pub fn same_month<Tz, Tz2>(
    value: &DateTime<Tz>,
    reference: &DateTime<Tz2>,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    Tz: TimeZone,
    Tz2: TimeZone,
{
    let ok = value.year() == reference.year() && value.month() == reference.month();
    Validation::check(ok, field, &["samemonth"], || "must be in the same month")
}

/// Validates that `value` falls in the same year as `reference`.
pub fn same_year<Tz, Tz2>(
    value: &DateTime<Tz>,
    reference: &DateTime<Tz2>,
    field: impl Into<Cow<'static, str>>,
) -> Validation
where
    Tz: TimeZone,
    Tz2: TimeZone,
{
    Validation::check(value.year() == reference.year(), field, &["sameyear"], || {
        "must be in the same year"
    })
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Validates that `value` falls on `day`.
pub fn weekday<Tz: TimeZone>(
    value: &DateTime<Tz>,
    day: Weekday,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(value.weekday() == day, field, &["weekday"], || {
        format!("must be on a {}", weekday_name(day))
    })
}

/// Validates that `value` falls on one of `days`.
pub fn weekday_in<Tz: TimeZone>(
    value: &DateTime<Tz>,
    days: &[Weekday],
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(days.contains(&value.weekday()), field, &["weekday"], || {
        "must be on an allowed weekday"
    })
}

/// Validates that `value` is a Monday through Friday.
pub fn not_weekend<Tz: TimeZone>(
    value: &DateTime<Tz>,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(!is_weekend(value.weekday()), field, &["notweekend"], || {
        "must not be on a weekend"
    })
}

/// Validates that `value` is a Saturday or Sunday.
pub fn weekend<Tz: TimeZone>(value: &DateTime<Tz>, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(is_weekend(value.weekday()), field, &["weekend"], || {
        "must be on a weekend"
    })
}

/// Validates that `value` carries exactly the UTC offset `offset`.
///
/// Two instants that are equal but expressed in different offsets fail.
pub fn in_offset(
    value: &DateTime<FixedOffset>,
    offset: FixedOffset,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(*value.offset() == offset, field, &["timezone"], || {
        format!("must be in timezone {offset}")
    })
}

// ============================================================================
// DURATIONS
// ============================================================================

/// Renders a duration as `1h30m0s`, `2m5s`, `1.5s`, `250ms` or `0s`.
fn render_duration(d: TimeDelta) -> String {
    let mut out = String::new();
    if d < TimeDelta::zero() {
        out.push('-');
    }
    let d = d.abs();
    let secs = d.num_seconds();
    let nanos = d.subsec_nanos();

    if secs == 0 {
        match nanos {
            0 => out.push_str("0s"),
            n if n >= 1_000_000 => write_scaled(&mut out, n.unsigned_abs(), 1_000_000, "ms"),
            n if n >= 1_000 => write_scaled(&mut out, n.unsigned_abs(), 1_000, "µs"),
            n => {
                let _ = write!(out, "{n}ns");
            }
        }
        return out;
    }

    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        let _ = write!(out, "{h}h{m}m");
    } else if m > 0 {
        let _ = write!(out, "{m}m");
    }
    let _ = write!(out, "{s}");
    if nanos > 0 {
        let frac = format!("{nanos:09}");
        let _ = write!(out, ".{}", frac.trim_end_matches('0'));
    }
    out.push('s');
    out
}

/// Writes `nanos / unit` with the remainder as a trimmed decimal fraction.
fn write_scaled(out: &mut String, nanos: u32, unit: u32, suffix: &str) {
    let _ = write!(out, "{}", nanos / unit);
    let rest = nanos % unit;
    if rest > 0 {
        let width = unit.ilog10() as usize;
        let frac = format!("{rest:0width$}");
        let _ = write!(out, ".{}", frac.trim_end_matches('0'));
    }
    out.push_str(suffix);
}

/// Validates `value >= min`.
pub fn min_duration(
    value: TimeDelta,
    min: TimeDelta,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(value >= min, field, &["min"], || {
        format!("must be at least {}", render_duration(min))
    })
}

/// Validates `value <= max`.
pub fn max_duration(
    value: TimeDelta,
    max: TimeDelta,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(value <= max, field, &["max"], || {
        format!("must be at most {}", render_duration(max))
    })
}

/// Validates `min <= value <= max`. Records `min` and `max`.
pub fn duration_between(
    value: TimeDelta,
    min: TimeDelta,
    max: TimeDelta,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(value >= min && value <= max, field, &["min", "max"], || {
        format!(
            "must be between {} and {}",
            render_duration(min),
            render_duration(max)
        )
    })
}

/// Validates `value > 0`.
pub fn duration_positive(value: TimeDelta, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value > TimeDelta::zero(), field, &["gt"], || "must be positive")
}

/// Validates `value >= 0`.
pub fn duration_non_negative(value: TimeDelta, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value >= TimeDelta::zero(), field, &["gte"], || {
        "must not be negative"
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    fn noon() -> FixedClock {
        FixedClock::new(at(2024, 6, 1, 12))
    }

    #[test]
    fn test_before_after_render_rfc3339() {
        let deadline = at(2024, 1, 1, 0);
        let v = before(&at(2024, 2, 1, 0), &deadline, "sent_at");
        assert_eq!(
            v.error().unwrap().to_string(),
            "sent_at: must be before 2024-01-01T00:00:00Z"
        );
        assert!(after(&at(2024, 2, 1, 0), &deadline, "f").passed());
        assert!(before(&deadline, &deadline, "f").failed());
        assert!(before_or_equal(&deadline, &deadline, "f").passed());
        assert!(after_or_equal(&deadline, &deadline, "f").passed());
        assert_eq!(before_or_equal(&deadline, &deadline, "f").validators(), ["lte"]);
    }

    #[test]
    fn test_comparison_across_offsets() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        // 13:00+02:00 is 11:00Z, which is before noon UTC.
        let local = plus_two.with_ymd_and_hms(2024, 6, 1, 13, 0, 0).unwrap();
        assert!(before(&local, &at(2024, 6, 1, 12), "f").passed());
        assert!(past(&local, &noon(), "f").passed());
    }

    #[test]
    fn test_now_relative_with_fixed_clock() {
        let clock = noon();
        let now = clock.now();
        assert!(past(&at(2024, 5, 1, 0), &clock, "f").passed());
        assert!(past(&now, &clock, "f").failed());
        assert!(not_future(&now, &clock, "f").passed());
        assert!(future(&now, &clock, "f").failed());
        assert!(not_past(&now, &clock, "f").passed());

        let v = not_past(&at(2024, 5, 1, 0), &clock, "f");
        assert_eq!(v.error().unwrap().to_string(), "f: must not be in the past");
        assert_eq!(v.validators(), ["futureoreq"]);
    }

    #[test]
    fn test_now_forms_use_system_clock() {
        assert!(past_now(&at(2000, 1, 1, 0), "f").passed());
        assert!(future_now(&at(2000, 1, 1, 0), "f").failed());
        assert!(not_future_now(&at(2000, 1, 1, 0), "f").passed());
        assert!(not_past_now(&at(2000, 1, 1, 0), "f").failed());
        assert!(within_now(&Utc::now(), TimeDelta::minutes(5), "f").passed());
    }

    #[test]
    fn test_between_inclusive_and_exclusive() {
        let (start, end) = (at(2024, 1, 1, 0), at(2024, 12, 31, 0));
        assert!(between(&start, &start, &end, "f").passed());
        assert!(between_exclusive(&start, &start, &end, "f").failed());
        let v = between_exclusive(&at(2025, 1, 1, 0), &start, &end, "f");
        assert_eq!(
            v.error().unwrap().to_string(),
            "f: must be between 2024-01-01T00:00:00Z and 2024-12-31T00:00:00Z (exclusive)"
        );
        assert_eq!(v.validators(), ["gt", "lt"]);
    }

    #[test]
    fn test_within() {
        let clock = noon();
        let v = within(&at(2024, 6, 1, 14), TimeDelta::hours(1), &clock, "f");
        assert_eq!(v.error().unwrap().to_string(), "f: must be within 1h0m0s of now");
        assert!(within(&at(2024, 6, 1, 11), TimeDelta::hours(1), &clock, "f").passed());

        let v = within_of(&at(2024, 6, 3, 0), TimeDelta::days(1), &at(2024, 6, 1, 0), "f");
        assert_eq!(
            v.error().unwrap().to_string(),
            "f: must be within 24h0m0s of reference time"
        );
    }

    #[test]
    fn test_calendar() {
        let reference = at(2024, 6, 1, 0);
        assert!(same_day(&at(2024, 6, 1, 23), &reference, "f").passed());
        assert!(same_day(&at(2024, 6, 2, 0), &reference, "f").failed());
        assert!(same_month(&at(2024, 6, 30, 0), &reference, "f").passed());
        assert!(same_month(&at(2023, 6, 1, 0), &reference, "f").failed());
        assert!(same_year(&at(2024, 1, 1, 0), &reference, "f").passed());
    }

    #[test]
    fn test_weekdays() {
        // 2024-06-01 is a Saturday.
        let saturday = at(2024, 6, 1, 0);
        assert!(weekend(&saturday, "f").passed());
        assert!(not_weekend(&saturday, "f").failed());
        assert_eq!(
            weekday(&saturday, Weekday::Mon, "f").error().unwrap().to_string(),
            "f: must be on a Monday"
        );
        assert!(weekday_in(&saturday, &[Weekday::Sat, Weekday::Sun], "f").passed());
        assert!(weekday_in(&saturday, &[], "f").failed());
    }

    #[test]
    fn test_in_offset() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let plus_five = FixedOffset::east_opt(5 * 3600).unwrap();
        let v = utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert!(in_offset(&v, utc, "f").passed());
        let failed = in_offset(&v, plus_five, "f");
        assert_eq!(failed.error().unwrap().to_string(), "f: must be in timezone +05:00");
        assert_eq!(failed.validators(), ["timezone"]);
    }

    #[rstest]
    #[case::zero(TimeDelta::zero(), "0s")]
    #[case::millis(TimeDelta::milliseconds(250), "250ms")]
    #[case::seconds(TimeDelta::seconds(42), "42s")]
    #[case::fractional(TimeDelta::milliseconds(1500), "1.5s")]
    #[case::minutes(TimeDelta::seconds(125), "2m5s")]
    #[case::hours(TimeDelta::minutes(90), "1h30m0s")]
    #[case::negative(TimeDelta::seconds(-3), "-3s")]
    #[case::fractional_millis(TimeDelta::microseconds(1500), "1.5ms")]
    #[case::fractional_micros(TimeDelta::nanoseconds(1500), "1.5µs")]
    #[case::long_fraction(TimeDelta::nanoseconds(1_000_250), "1.00025ms")]
    #[case::nanos(TimeDelta::nanoseconds(7), "7ns")]
    #[case::negative_millis(TimeDelta::microseconds(-2500), "-2.5ms")]
    fn test_render_duration(#[case] d: TimeDelta, #[case] expected: &str) {
        assert_eq!(render_duration(d), expected);
    }

    #[test]
    fn test_max_duration_renders_sub_millisecond_limit() {
        let v = max_duration(TimeDelta::milliseconds(5), TimeDelta::microseconds(1500), "d");
        assert_eq!(v.error().unwrap().to_string(), "d: must be at most 1.5ms");
    }

    #[test]
    fn test_durations() {
        let v = min_duration(TimeDelta::seconds(30), TimeDelta::minutes(1), "timeout");
        assert_eq!(v.error().unwrap().to_string(), "timeout: must be at least 1m0s");
        assert!(max_duration(TimeDelta::seconds(30), TimeDelta::minutes(1), "f").passed());
        assert_eq!(
            duration_between(TimeDelta::zero(), TimeDelta::seconds(1), TimeDelta::seconds(5), "f")
                .validators(),
            ["min", "max"]
        );
        assert!(duration_positive(TimeDelta::zero(), "f").failed());
        assert!(duration_non_negative(TimeDelta::zero(), "f").passed());
        assert!(duration_non_negative(TimeDelta::seconds(-1), "f").failed());
    }
}
