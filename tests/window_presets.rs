use chrono::NaiveDate;
use defter::error::EngineError;
use defter::window::{DatePreset, DateWindow, format_date, resolve_window};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn this_month_runs_from_first_of_month_to_today() {
    let today = d(2024, 3, 15);
    let window = resolve_window("this-month", None, None, today).unwrap();
    assert_eq!(window.from, d(2024, 3, 1));
    assert_eq!(window.to, d(2024, 3, 15));
}

#[test]
fn last_30_days_counts_back_from_today() {
    let today = d(2024, 3, 15);
    let window = resolve_window("last-30-days", None, None, today).unwrap();
    assert_eq!(window.from, d(2024, 2, 14));
    assert_eq!(window.to, today);
}

#[test]
fn custom_uses_explicit_bounds() {
    let today = d(2024, 3, 15);
    let window = resolve_window("custom", Some(d(2024, 1, 1)), Some(d(2024, 1, 31)), today).unwrap();
    assert_eq!(window, DateWindow::new(d(2024, 1, 1), d(2024, 1, 31)).unwrap());
}

#[test]
fn custom_with_from_after_to_is_an_invalid_range() {
    let err = resolve_window(
        "custom",
        Some(d(2024, 2, 2)),
        Some(d(2024, 2, 1)),
        d(2024, 3, 15),
    )
    .unwrap_err();
    assert!(matches!(err, EngineError::InvalidRange(_)));
}

#[test]
fn custom_without_bounds_is_an_invalid_range() {
    let err = resolve_window("custom", Some(d(2024, 2, 2)), None, d(2024, 3, 15)).unwrap_err();
    assert!(matches!(err, EngineError::InvalidRange(_)));
}

#[test]
fn unrecognized_preset_is_an_error_not_a_fallback() {
    let err = resolve_window("this-year", None, None, d(2024, 3, 15)).unwrap_err();
    assert_eq!(err, EngineError::UnknownPreset("this-year".to_string()));
}

#[test]
fn window_bounds_are_inclusive_at_date_granularity() {
    let window = DateWindow::new(d(2024, 3, 1), d(2024, 3, 31)).unwrap();
    assert!(window.contains(d(2024, 3, 1)));
    assert!(window.contains(d(2024, 3, 31)));
    assert!(!window.contains(d(2024, 2, 29)));
    assert!(!window.contains(d(2024, 4, 1)));
}

#[test]
fn preset_enum_resolves_without_tokens() {
    let today = d(2024, 12, 5);
    assert_eq!(
        DatePreset::ThisMonth.window(today),
        DateWindow::new(d(2024, 12, 1), today).unwrap()
    );
    assert_eq!(
        DatePreset::Last30Days.window(today),
        DateWindow::new(d(2024, 11, 5), today).unwrap()
    );
}

#[test]
fn dates_render_in_short_month_form() {
    assert_eq!(format_date(d(2024, 3, 5)), "Mar 5, 2024");
}
