//! Month-grid arithmetic for the calendar view
//!
//! The view always shows six full weeks, Sunday-first, padding the first and last rows
//! with days from the adjacent months. Only the arithmetic lives here; rendering is the
//! UI's business.

use chrono::{Datelike, Duration, NaiveDate};

/// Number of cells in the fixed-size month grid (6 weeks of 7 days)
pub const GRID_CELLS: usize = 42;

/// One cell of the month grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    /// `false` for the leading/trailing cells borrowed from the adjacent months
    pub in_month: bool,
}

/// Build the display grid for a month (`month` is 1-based).
///
/// Returns an empty grid for an out-of-range year/month pair.
pub fn month_grid(year: i32, month: u32) -> Vec<GridDay> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        None => return Vec::new(),
        Some(first) => first,
    };
    let offset = first.weekday().num_days_from_sunday() as i64;
    let grid_start = first - Duration::days(offset);

    (0..GRID_CELLS as i64)
        .map(|cell| {
            let date = grid_start + Duration::days(cell);
            GridDay {
                date,
                in_month: date.year() == year && date.month() == month,
            }
        })
        .collect()
}

/// The (year, month) pair shown when navigating back from `(year, month)`
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The (year, month) pair shown when navigating forward from `(year, month)`
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}
