mod helpers;

use chrono::{Datelike, NaiveDate, Weekday};
use helpers::date;
use prazos::*;

fn calculator() -> BusinessDayDeadlineCalculator {
    BusinessDayDeadlineCalculator::new(HolidaySet::brazilian_national())
}

// ========================================
// Reference scenarios
// ========================================

#[test]
fn test_business_days_from_new_year() {
    let result = calculator()
        .calculate_from_input(Some("2024-01-01"), Some(5), CountingMode::Business)
        .unwrap();

    assert_eq!(result.due_date, date(2024, 1, 8));
    assert_eq!(result.due_date.weekday(), Weekday::Mon);
}

#[test]
fn test_calendar_days_from_new_year() {
    let result = calculator()
        .calculate_from_input(Some("2024-01-01"), Some(5), CountingMode::Calendar)
        .unwrap();

    assert_eq!(result.due_date, date(2024, 1, 6));
    assert_eq!(Locale::PtBr.weekday_name(result.due_date.weekday()), "sábado");
    assert_eq!(Locale::EnUs.weekday_name(result.due_date.weekday()), "Saturday");
}

#[test]
fn test_tiradentes_on_sunday() {
    let result = calculator()
        .calculate_from_input(Some("2024-04-19"), Some(1), CountingMode::Business)
        .unwrap();

    assert_eq!(result.due_date, date(2024, 4, 22));
}

#[test]
fn test_zero_and_negative_day_counts() {
    for mode in [CountingMode::Business, CountingMode::Calendar] {
        assert_eq!(
            calculator().calculate_from_input(Some("2024-01-01"), Some(0), mode),
            Err(DeadlineError::InvalidDayCount)
        );
        assert_eq!(
            calculator().calculate_from_input(Some("2024-01-01"), Some(-3), mode),
            Err(DeadlineError::InvalidDayCount)
        );
    }
}

#[test]
fn test_missing_or_unparseable_start_date() {
    for raw in [None, Some(""), Some("  "), Some("not a date"), Some("2024-13-01")] {
        assert_eq!(
            calculator().calculate_from_input(raw, Some(5), CountingMode::Business),
            Err(DeadlineError::MissingStartDate)
        );
    }
}

// ========================================
// Properties over a span of start dates
// ========================================

fn start_dates() -> impl Iterator<Item = NaiveDate> {
    // Two full years, covering every fixed holiday on every weekday offset
    date(2023, 1, 1).iter_days().take(731)
}

#[test]
fn test_calendar_mode_adds_exact_day_count() {
    let calc = calculator();
    for start in start_dates().step_by(3) {
        for count in [1_i64, 2, 5, 15, 30, 365] {
            let result = calc
                .calculate(Some(start), Some(count), CountingMode::Calendar)
                .unwrap();
            assert_eq!((result.due_date - start).num_days(), count);
        }
    }
}

#[test]
fn test_business_mode_never_lands_on_weekend_or_holiday() {
    let calc = calculator();
    let holidays = HolidaySet::brazilian_national();
    for start in start_dates() {
        for count in [1_i64, 5, 15] {
            let due = calc
                .calculate(Some(start), Some(count), CountingMode::Business)
                .unwrap()
                .due_date;
            assert!(
                !matches!(due.weekday(), Weekday::Sat | Weekday::Sun),
                "{} + {} landed on {:?}",
                start,
                count,
                due.weekday()
            );
            assert!(!holidays.contains(&due), "{} + {} landed on holiday {}", start, count, due);
        }
    }
}

#[test]
fn test_business_mode_counts_exactly_day_count_business_days() {
    let calc = calculator();
    for start in start_dates() {
        for count in [1_i64, 3, 15, 30] {
            let result = calc
                .calculate(Some(start), Some(count), CountingMode::Business)
                .unwrap();
            assert!(result.due_date > start);

            let counted = start
                .iter_days()
                .skip(1)
                .take_while(|d| *d <= result.due_date)
                .filter(|d| calc.is_business_day(d))
                .count() as i64;
            assert_eq!(counted, count, "start {}", start);

            let advanced = (result.due_date - start).num_days();
            assert_eq!(result.skipped_days, advanced - count);
        }
    }
}

#[test]
fn test_result_is_strictly_after_start() {
    let calc = calculator();
    for start in start_dates().step_by(7) {
        for mode in [CountingMode::Business, CountingMode::Calendar] {
            let result = calc.calculate(Some(start), Some(1), mode).unwrap();
            assert!(result.due_date > start);
        }
    }
}

#[test]
fn test_repeated_calls_agree() {
    let calc = calculator();
    let first = calc.calculate_from_input(Some("2024-12-20"), Some(10), CountingMode::Business);
    let second = calc.calculate_from_input(Some("2024-12-20"), Some(10), CountingMode::Business);
    assert_eq!(first, second);
}

// ========================================
// Injected holiday sets
// ========================================

#[test]
fn test_empty_holiday_set_only_skips_weekends() {
    let calc = BusinessDayDeadlineCalculator::new(HolidaySet::empty());

    // 2024-12-24 is a Tuesday; Christmas counts when no holidays are configured
    let result = calc
        .calculate(Some(date(2024, 12, 24)), Some(1), CountingMode::Business)
        .unwrap();
    assert_eq!(result.due_date, date(2024, 12, 25));

    let result = calculator()
        .calculate(Some(date(2024, 12, 24)), Some(1), CountingMode::Business)
        .unwrap();
    assert_eq!(result.due_date, date(2024, 12, 26));
}

#[test]
fn test_synthetic_holiday_set() {
    let holidays = HolidaySet::from_holidays(vec![FixedHoliday::new(
        MonthDay::new(3, 5).unwrap(),
        "Aniversário da comarca",
    )])
    .unwrap();
    let calc = BusinessDayDeadlineCalculator::new(holidays);

    // 2024-03-04 is a Monday
    let result = calc
        .calculate(Some(date(2024, 3, 4)), Some(1), CountingMode::Business)
        .unwrap();
    assert_eq!(result.due_date, date(2024, 3, 6));
    assert_eq!(result.skipped_days, 1);
}

#[test]
fn test_leap_day_holiday_only_matches_leap_years() {
    let holidays = HolidaySet::from_holidays(vec![FixedHoliday::new(
        MonthDay::new(2, 29).unwrap(),
        "Dia bissexto",
    )])
    .unwrap();
    let calc = BusinessDayDeadlineCalculator::new(holidays);

    // 2024-02-28 is a Wednesday, 2024-02-29 a Thursday
    let result = calc
        .calculate(Some(date(2024, 2, 28)), Some(1), CountingMode::Business)
        .unwrap();
    assert_eq!(result.due_date, date(2024, 3, 1));

    // 2023-02-28 is a Tuesday and 2023 has no leap day
    let result = calc
        .calculate(Some(date(2023, 2, 28)), Some(1), CountingMode::Business)
        .unwrap();
    assert_eq!(result.due_date, date(2023, 3, 1));
}

#[test]
fn test_iteration_limit_is_a_distinct_error() {
    let every_day: Vec<FixedHoliday> = date(2024, 1, 1)
        .iter_days()
        .take(366)
        .map(|d| FixedHoliday::new(MonthDay::of(&d), "feriado"))
        .collect();
    let calc = BusinessDayDeadlineCalculator::new(HolidaySet::from_holidays(every_day).unwrap());

    let err = calc
        .calculate(Some(date(2024, 6, 1)), Some(10), CountingMode::Business)
        .unwrap_err();
    assert_eq!(err, DeadlineError::IterationLimitExceeded { limit: 100 });
    assert!(!err.is_validation());
    assert_eq!(err.code(), "iteration_limit_exceeded");
}
