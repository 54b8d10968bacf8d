//! Date conversion and month arithmetic.
//!
//! Tasks are stored with ISO `YYYY-MM-DD` dates (sortable as text) while the
//! user-facing format is `DD.MM.YYYY`. All conversion between the two happens
//! here, at the boundary, and round-trips exactly for every valid calendar
//! date.

use crate::error::{Result, StoreError};
use chrono::{Local, NaiveDate};

/// Sortable storage format.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d";

/// User-facing format for entry, display, and export.
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Parse a `DD.MM.YYYY` date as entered by the user.
pub fn parse_display_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DISPLAY_FORMAT)
        .map_err(|_| StoreError::InvalidDate(s.to_string()))
}

/// Format a date for display and export.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parse the `YYYY-MM-DD` form used in the database.
pub fn parse_storage_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, STORAGE_FORMAT).map_err(|_| StoreError::InvalidDate(s.to_string()))
}

/// Format a date for storage.
pub fn format_storage_date(date: NaiveDate) -> String {
    date.format(STORAGE_FORMAT).to_string()
}

/// Half-open `[first-of-month, first-of-next-month)` bounds for a month.
/// December rolls over to January of the following year.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| StoreError::InvalidDate(format!("{year}-{month:02}")))?;
    let (end_year, end_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(end_year, end_month, 1)
        .ok_or_else(|| StoreError::InvalidDate(format!("{end_year}-{end_month:02}")))?;
    Ok((start, end))
}

/// A (year, month) pair with rollover navigation at the 1-12 boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    /// Create a cursor, rejecting months outside 1-12.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(StoreError::InvalidDate(format!("{year}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    /// Cursor for the local current month.
    pub fn current() -> Self {
        use chrono::Datelike;
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// The following month.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Half-open date bounds for this month.
    pub fn bounds(self) -> Result<(NaiveDate, NaiveDate)> {
        month_bounds(self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_round_trips() {
        for input in ["15.03.2025", "01.01.2000", "29.02.2024", "31.12.1999"] {
            let parsed = parse_display_date(input).unwrap();
            assert_eq!(format_display_date(parsed), input);
        }
    }

    #[test]
    fn display_and_storage_agree() {
        let date = parse_display_date("15.03.2025").unwrap();
        assert_eq!(format_storage_date(date), "2025-03-15");
        assert_eq!(parse_storage_date("2025-03-15").unwrap(), date);
    }

    #[test]
    fn rejects_garbage_dates() {
        for input in ["", "tomorrow", "2025-03-15", "32.01.2025", "29.02.2023"] {
            assert!(matches!(
                parse_display_date(input),
                Err(StoreError::InvalidDate(_))
            ));
        }
    }

    #[test]
    fn month_bounds_are_half_open() {
        let (start, end) = month_bounds(2024, 2).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn month_bounds_roll_over_december() {
        let (start, end) = month_bounds(2024, 12).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn month_bounds_reject_invalid_month() {
        assert!(month_bounds(2024, 0).is_err());
        assert!(month_bounds(2024, 13).is_err());
    }

    #[test]
    fn cursor_navigation_rolls_over_both_ways() {
        let dec = MonthCursor::new(2024, 12).unwrap();
        assert_eq!(dec.next(), MonthCursor { year: 2025, month: 1 });

        let jan = MonthCursor::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), MonthCursor { year: 2024, month: 12 });

        let jun = MonthCursor::new(2025, 6).unwrap();
        assert_eq!(jun.next().prev(), jun);
    }

    #[test]
    fn cursor_rejects_out_of_range_month() {
        assert!(MonthCursor::new(2025, 0).is_err());
        assert!(MonthCursor::new(2025, 13).is_err());
    }
}
