//! Calendar picker state and month grid.
//!
//! `CalendarState` is owned by the widget host and only changes through
//! navigation or day selection. `render` maps a (month, year) pair to a
//! `MonthGrid` description that the UI draws without holding any state of
//! its own.

use crate::utils::date::{
    days_in_month, first_of_month, first_weekday, iso_date, month_name, shift_month,
    WEEKDAY_LABELS,
};
use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

/// Columns per week row, Sunday through Saturday.
pub const DAYS_PER_WEEK: usize = 7;
/// Upper bound on week rows in any month.
pub const MAX_WEEK_ROWS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("month {0} is out of range (expected 0-11)")]
    InvalidMonth(u32),
    #[error("year {0} is out of the supported range")]
    InvalidYear(i32),
    #[error("blank cells cannot be selected")]
    BlankCell,
    #[error("{date} is not in the displayed month")]
    OutsideDisplayedMonth { date: NaiveDate },
}

/// One grid entry: either a blank placeholder or a day of the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    Blank,
    Day {
        day: u32,
        date: NaiveDate,
        selected: bool,
    },
}

impl DayCell {
    pub fn is_blank(&self) -> bool {
        matches!(self, DayCell::Blank)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DayCell::Blank => None,
            DayCell::Day { date, .. } => Some(*date),
        }
    }

    /// `YYYY-MM-DD` for dated cells.
    pub fn iso(&self) -> Option<String> {
        self.date().map(iso_date)
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, DayCell::Day { selected: true, .. })
    }
}

/// Rendered month. Rows stop at the last day of the month: the final row may
/// hold fewer than seven cells and no empty rows follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: u32,
    pub year: i32,
    pub rows: Vec<Vec<DayCell>>,
}

impl MonthGrid {
    /// Header text, e.g. "January 2025".
    pub fn title(&self) -> String {
        let name = month_name(self.month).unwrap_or("Unknown");
        format!("{} {}", name, self.year)
    }

    pub fn weekday_labels() -> [&'static str; DAYS_PER_WEEK] {
        WEEKDAY_LABELS
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.rows.iter().flatten()
    }

    pub fn dated_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells().filter(|cell| !cell.is_blank())
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells().take_while(|cell| cell.is_blank()).count()
    }

    pub fn selected_cell(&self) -> Option<&DayCell> {
        self.cells().find(|cell| cell.is_selected())
    }

    /// Cell at a (row, col) position, `None` past the rendered area.
    pub fn cell(&self, row: usize, col: usize) -> Option<&DayCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

/// Build the grid for a zero-based month.
///
/// Cells before the weekday of the 1st are blank. Each following cell carries
/// the next day until the month is exhausted, at which point rendering stops.
pub fn render(month: u32, year: i32) -> Result<MonthGrid, CalendarError> {
    render_with_selection(month, year, None)
}

fn render_with_selection(
    month: u32,
    year: i32,
    selected: Option<NaiveDate>,
) -> Result<MonthGrid, CalendarError> {
    if month > 11 {
        return Err(CalendarError::InvalidMonth(month));
    }
    let first_day = first_weekday(year, month).ok_or(CalendarError::InvalidYear(year))? as usize;
    let day_count = days_in_month(year, month).ok_or(CalendarError::InvalidYear(year))?;
    let first = first_of_month(year, month).ok_or(CalendarError::InvalidYear(year))?;

    let mut rows = Vec::with_capacity(MAX_WEEK_ROWS);
    let mut day = 1;

    'weeks: for week in 0..MAX_WEEK_ROWS {
        let mut row = Vec::with_capacity(DAYS_PER_WEEK);
        for col in 0..DAYS_PER_WEEK {
            if week == 0 && col < first_day {
                row.push(DayCell::Blank);
                continue;
            }
            if day > day_count {
                if !row.is_empty() {
                    rows.push(row);
                }
                break 'weeks;
            }
            let date = first.with_day(day).ok_or(CalendarError::InvalidYear(year))?;
            row.push(DayCell::Day {
                day,
                date,
                selected: selected == Some(date),
            });
            day += 1;
        }
        rows.push(row);
        if day > day_count {
            break;
        }
    }

    Ok(MonthGrid { month, year, rows })
}

/// Displayed month plus the single selected date.
///
/// The selection survives navigation; it is only marked in the grid while its
/// month is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    month: u32,
    year: i32,
    selected: Option<NaiveDate>,
}

impl CalendarState {
    pub fn new(month: u32, year: i32) -> Result<Self, CalendarError> {
        if month > 11 {
            return Err(CalendarError::InvalidMonth(month));
        }
        if first_of_month(year, month).is_none() {
            return Err(CalendarError::InvalidYear(year));
        }
        Ok(Self {
            month,
            year,
            selected: None,
        })
    }

    /// Mount-time state: this month, nothing selected.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    /// State displaying the month of `date`, nothing selected.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            month: date.month0(),
            year: date.year(),
            selected: None,
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Selected date as `YYYY-MM-DD`, the value the host form submits.
    pub fn selected_iso(&self) -> Option<String> {
        self.selected.map(iso_date)
    }

    pub fn previous_month(self) -> Self {
        self.shifted(-1)
    }

    pub fn next_month(self) -> Self {
        self.shifted(1)
    }

    pub fn go_to_previous_month(&mut self) {
        *self = self.previous_month();
    }

    pub fn go_to_next_month(&mut self) {
        *self = self.next_month();
    }

    /// Navigation stops at the edges of the supported date range.
    fn shifted(self, delta: i32) -> Self {
        match shift_month(self.month, self.year, delta)
            .filter(|&(month, year)| first_of_month(year, month).is_some())
        {
            Some((month, year)) => Self {
                month,
                year,
                ..self
            },
            None => {
                log::warn!(
                    "Cannot move calendar {} month(s) from {}-{:02}: outside supported range",
                    delta,
                    self.year,
                    self.month + 1
                );
                self
            }
        }
    }

    /// Select a day of the displayed month, replacing any earlier selection.
    pub fn select_day(&mut self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        if date.month0() != self.month || date.year() != self.year {
            return Err(CalendarError::OutsideDisplayedMonth { date });
        }
        if self.selected != Some(date) {
            log::debug!("Calendar selection changed to {}", iso_date(date));
        }
        self.selected = Some(date);
        Ok(date)
    }

    /// Select the date held by a rendered cell.
    pub fn select_cell(&mut self, cell: &DayCell) -> Result<NaiveDate, CalendarError> {
        match cell.date() {
            Some(date) => self.select_day(date),
            None => Err(CalendarError::BlankCell),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Grid for the displayed month with the selected day flagged.
    pub fn grid(&self) -> MonthGrid {
        match render_with_selection(self.month, self.year, self.selected) {
            Ok(grid) => grid,
            Err(err) => {
                log::warn!("Unable to render calendar month: {}", err);
                MonthGrid {
                    month: self.month,
                    year: self.year,
                    rows: Vec::new(),
                }
            }
        }
    }
}

impl Default for CalendarState {
    fn default() -> Self {
        Self::current()
    }
}
