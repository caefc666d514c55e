// Scenario tests for month grid rendering and calendar navigation

use harbor_booking::models::calendar::{render, CalendarError, CalendarState, DayCell};
use test_case::test_case;

#[test_case(1, 2024, 29, "2024-02-29"; "leap february")]
#[test_case(1, 2023, 28, "2023-02-28"; "common february")]
#[test_case(0, 2025, 31, "2025-01-31"; "january")]
#[test_case(10, 2025, 30, "2025-11-30"; "november")]
fn test_last_dated_cell(month: u32, year: i32, count: usize, last_iso: &str) {
    let grid = render(month, year).unwrap();
    let dated: Vec<&DayCell> = grid.dated_cells().collect();
    assert_eq!(dated.len(), count);
    assert_eq!(dated.last().unwrap().iso().as_deref(), Some(last_iso));
}

#[test_case(0, 2025, 3; "january 2025 starts wednesday")]
#[test_case(8, 2024, 0; "september 2024 starts sunday")]
#[test_case(1, 2025, 6; "february 2025 starts saturday")]
fn test_leading_blanks(month: u32, year: i32, blanks: usize) {
    assert_eq!(render(month, year).unwrap().leading_blanks(), blanks);
}

#[test_case(11, 2024, 0, 2025; "december rolls forward")]
#[test_case(5, 2025, 6, 2025; "mid year")]
fn test_next_month(month: u32, year: i32, next_month: u32, next_year: i32) {
    let mut state = CalendarState::new(month, year).unwrap();
    state.go_to_next_month();
    assert_eq!((state.month(), state.year()), (next_month, next_year));
}

#[test_case(0, 2025, 11, 2024; "january rolls back")]
#[test_case(6, 2025, 5, 2025; "mid year")]
fn test_previous_month(month: u32, year: i32, prev_month: u32, prev_year: i32) {
    let mut state = CalendarState::new(month, year).unwrap();
    state.go_to_previous_month();
    assert_eq!((state.month(), state.year()), (prev_month, prev_year));
}

#[test]
fn test_first_row_holds_first_days() {
    let grid = render(0, 2025).unwrap();
    let first_row: Vec<Option<u32>> = grid.rows[0]
        .iter()
        .map(|cell| match cell {
            DayCell::Blank => None,
            DayCell::Day { day, .. } => Some(*day),
        })
        .collect();
    assert_eq!(first_row, vec![None, None, None, Some(1), Some(2), Some(3), Some(4)]);
}

#[test]
fn test_invalid_month_rejected() {
    assert_eq!(render(13, 2025).unwrap_err(), CalendarError::InvalidMonth(13));
}
