//! Property tests for the age engine.

use agecalc::age::days_in_month;
use agecalc::calculate_age;
use agecalc::zodiac::{SIGNS, zodiac_sign};
use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use proptest::prelude::*;

/// Any instant between 1900-01-01 and roughly 2100.
fn instant() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..200 * 366 * 86_400).prop_map(|secs| {
        NaiveDate::from_ymd_opt(1900, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + TimeDelta::seconds(secs)
    })
}

fn time_string() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{h:02}:{m:02}"))
}

/// Birth instant at minute precision, plus a `now` at or after it.
fn birth_and_now() -> impl Strategy<Value = (NaiveDate, String, NaiveDateTime)> {
    (instant(), time_string(), 0i64..120 * 366 * 86_400_000).prop_map(|(day, time, millis)| {
        let date = day.date();
        let (h, m) = time.split_once(':').unwrap();
        let born = date
            .and_hms_opt(h.parse().unwrap(), m.parse().unwrap(), 0)
            .unwrap();
        (date, time, born + TimeDelta::milliseconds(millis))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: calendar age stays within its documented bounds once born.
    #[test]
    fn property_calendar_age_bounds((date, time, now) in birth_and_now()) {
        let age = calculate_age(date, &time, now).age;

        prop_assert!(age.years >= 0);
        prop_assert!((0..=11).contains(&age.months));
        prop_assert!(age.days <= 30);

        // Borrowing only falls short when the birth day is longer than the
        // month before `now`'s month.
        let (prev_year, prev_month) = if now.month() == 1 {
            (now.year() - 1, 12)
        } else {
            (now.year(), now.month() - 1)
        };
        if date.day() <= days_in_month(prev_year, prev_month) {
            prop_assert!(age.days >= 0);
        } else {
            prop_assert!(age.days >= -3);
        }
    }

    /// PROPERTY: totals are a floor-division chain starting at whole seconds.
    #[test]
    fn property_totals_floor_chain((date, time, now) in birth_and_now()) {
        let result = calculate_age(date, &time, now);
        let age = result.age;
        let millis = (now - result.date_of_birth).num_milliseconds();

        prop_assert_eq!(age.total_seconds, millis.div_euclid(1000));
        prop_assert_eq!(age.total_minutes, age.total_seconds.div_euclid(60));
        prop_assert_eq!(age.total_hours, age.total_minutes.div_euclid(60));
        prop_assert_eq!(age.total_days, age.total_hours.div_euclid(24));
        prop_assert_eq!(age.total_weeks, age.total_days.div_euclid(7));
    }

    /// PROPERTY: the countdown target is never behind `now` and at most one
    /// year ahead.
    #[test]
    fn property_countdown_target((date, time, now) in birth_and_now()) {
        let next = calculate_age(date, &time, now).next_birthday;
        let target = next.target_instant;

        prop_assert!(target >= now);
        prop_assert!(target.year() == now.year() || target.year() == now.year() + 1);
        prop_assert!((0..24).contains(&next.hours));
        prop_assert!((0..60).contains(&next.minutes));
        prop_assert!((0..60).contains(&next.seconds));
        prop_assert!(next.days <= 366);

        let left = (target - now).num_milliseconds().div_euclid(1000);
        prop_assert_eq!(
            next.days * 86_400 + next.hours * 3600 + next.minutes * 60 + next.seconds,
            left
        );
    }

    /// PROPERTY: identical inputs give identical results.
    #[test]
    fn property_engine_is_deterministic((date, time, now) in birth_and_now()) {
        prop_assert_eq!(calculate_age(date, &time, now), calculate_age(date, &time, now));
    }

    /// PROPERTY: any string as birth time never panics and lands on a valid time.
    #[test]
    fn property_time_parsing_never_panics(date in instant(), time in ".{0,12}") {
        let result = calculate_age(date.date(), &time, date + TimeDelta::days(400));
        prop_assert_eq!(result.date_of_birth.date(), date.date());
    }

    /// PROPERTY: every (month, day) maps to exactly one of the twelve signs.
    #[test]
    fn property_zodiac_is_total(month in 1u32..=12, day in 1u32..=31) {
        let sign = zodiac_sign(month, day);
        prop_assert_eq!(SIGNS.iter().filter(|s| **s == sign).count(), 1);
    }
}
