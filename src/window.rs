//! Date presets and inclusive date windows.
//!
//! The preset set is closed: an unrecognized token is a construction-time
//! error, never a silent fallback window. `today` is always an explicit
//! parameter so queries stay deterministic and testable.

use chrono::{Datelike, Duration, NaiveDate, Utc};

use crate::domain::LedgerRecord;
use crate::error::{EngineError, Result};

/// Inclusive `[from, to]` calendar-date window. Compared at date
/// granularity, not time-of-day. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(EngineError::InvalidRange(format!(
                "from {from} is after to {to}"
            )));
        }
        Ok(Self { from, to })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
    ThisMonth,
    Last30Days,
    Custom(DateWindow),
}

impl DatePreset {
    /// Resolves the preset against an explicit `today`.
    pub fn window(&self, today: NaiveDate) -> DateWindow {
        match self {
            DatePreset::ThisMonth => DateWindow {
                from: NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap(),
                to: today,
            },
            DatePreset::Last30Days => DateWindow {
                from: today - Duration::days(30),
                to: today,
            },
            DatePreset::Custom(window) => *window,
        }
    }
}

/// Builds a window from a raw preset token plus optional explicit bounds.
///
/// Explicit bounds are only consulted for `"custom"`; any other recognized
/// token ignores them. Unknown tokens fail with `UnknownPreset`.
pub fn resolve_window(
    preset: &str,
    explicit_from: Option<NaiveDate>,
    explicit_to: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<DateWindow> {
    match preset {
        "this-month" => Ok(DatePreset::ThisMonth.window(today)),
        "last-30-days" => Ok(DatePreset::Last30Days.window(today)),
        "custom" => {
            let (Some(from), Some(to)) = (explicit_from, explicit_to) else {
                return Err(EngineError::InvalidRange(
                    "custom preset requires explicit from and to bounds".to_string(),
                ));
            };
            DateWindow::new(from, to)
        }
        other => Err(EngineError::UnknownPreset(other.to_string())),
    }
}

/// Keeps records dated inside the window, both ends inclusive.
pub fn filter_by_window(records: &[LedgerRecord], window: DateWindow) -> Vec<LedgerRecord> {
    let mut out = Vec::new();
    for r in records {
        if window.contains(r.date) {
            out.push(r.clone());
        }
    }
    out
}

/// Current UTC calendar date, for callers without their own clock.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Renders a date as e.g. `Mar 15, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
