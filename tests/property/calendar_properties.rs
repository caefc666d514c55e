// Property-based tests for month grids and calendar navigation

use chrono::{Datelike, NaiveDate};
use harbor_booking::models::calendar::{render, CalendarState, DAYS_PER_WEEK, MAX_WEEK_ROWS};
use harbor_booking::utils::date::{days_in_month, first_weekday};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    /// Property: every day of the month appears exactly once
    #[test]
    fn prop_dated_cells_match_day_count(year in 1600..2400i32, month in 0..12u32) {
        let grid = render(month, year).unwrap();
        let dates: Vec<NaiveDate> = grid.dated_cells().filter_map(|c| c.date()).collect();
        let unique: HashSet<_> = dates.iter().collect();

        prop_assert_eq!(dates.len() as u32, days_in_month(year, month).unwrap());
        prop_assert_eq!(unique.len(), dates.len());
        prop_assert!(dates.iter().all(|d| d.month0() == month && d.year() == year));
    }

    /// Property: leading blanks equal the weekday of the 1st
    #[test]
    fn prop_leading_blanks_match_first_weekday(year in 1600..2400i32, month in 0..12u32) {
        let grid = render(month, year).unwrap();
        prop_assert_eq!(grid.leading_blanks() as u32, first_weekday(year, month).unwrap());
    }

    /// Property: at most 6 rows of at most 7 cells, no blanks after day 1
    #[test]
    fn prop_grid_shape(year in 1600..2400i32, month in 0..12u32) {
        let grid = render(month, year).unwrap();
        prop_assert!(grid.rows.len() <= MAX_WEEK_ROWS);
        prop_assert!(grid.rows.iter().all(|row| !row.is_empty() && row.len() <= DAYS_PER_WEEK));
        let blanks_after_first = grid.cells().skip(grid.leading_blanks()).filter(|c| c.is_blank()).count();
        prop_assert_eq!(blanks_after_first, 0);
        // Only the final row may be short
        for row in &grid.rows[..grid.rows.len() - 1] {
            prop_assert_eq!(row.len(), DAYS_PER_WEEK);
        }
    }

    /// Property: next then previous returns to the start, and vice versa
    #[test]
    fn prop_navigation_round_trip(year in 1600..2400i32, month in 0..12u32) {
        let start = CalendarState::new(month, year).unwrap();
        prop_assert_eq!(start.next_month().previous_month(), start);
        prop_assert_eq!(start.previous_month().next_month(), start);
    }

    /// Property: twelve steps forward land on the same month next year
    #[test]
    fn prop_twelve_steps_is_one_year(year in 1600..2400i32, month in 0..12u32) {
        let mut state = CalendarState::new(month, year).unwrap();
        for _ in 0..12 {
            state.go_to_next_month();
        }
        prop_assert_eq!((state.month(), state.year()), (month, year + 1));
    }

    /// Property: selecting a day yields its zero-padded ISO date
    #[test]
    fn prop_selection_iso_format(year in 1600..2400i32, month in 0..12u32, day in 1..=28u32) {
        let mut state = CalendarState::new(month, year).unwrap();
        let date = NaiveDate::from_ymd_opt(year, month + 1, day).unwrap();
        state.select_day(date).unwrap();
        prop_assert_eq!(
            state.selected_iso(),
            Some(format!("{:04}-{:02}-{:02}", year, month + 1, day))
        );
    }
}
