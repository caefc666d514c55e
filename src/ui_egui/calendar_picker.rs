//! Inline month calendar used by the meeting form.
//!
//! The widget borrows the host's `CalendarState`, draws the grid produced by
//! `CalendarState::grid`, and feeds clicks back as navigation or selection.

use crate::models::calendar::{CalendarState, DayCell, MonthGrid, DAYS_PER_WEEK};
use chrono::NaiveDate;
use egui::{Color32, RichText};

pub struct CalendarPicker<'a> {
    state: &'a mut CalendarState,
    id_source: &'static str,
    today: Option<NaiveDate>,
}

impl<'a> CalendarPicker<'a> {
    pub fn new(state: &'a mut CalendarState) -> Self {
        Self {
            state,
            id_source: "calendar_picker_grid",
            today: None,
        }
    }

    pub fn id_source(mut self, id_source: &'static str) -> Self {
        self.id_source = id_source;
        self
    }

    /// Highlight this date when it is on screen.
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Draw the picker. Returns the newly selected date in the frame the user
    /// clicks a day.
    pub fn show(self, ui: &mut egui::Ui) -> Option<NaiveDate> {
        let Self {
            state,
            id_source,
            today,
        } = self;
        let grid = state.grid();

        let mut navigate: i32 = 0;
        ui.horizontal(|ui| {
            if ui
                .small_button("←")
                .on_hover_text("Previous month")
                .clicked()
            {
                navigate = -1;
            }
            ui.with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    ui.label(RichText::new(grid.title()).strong());
                },
            );
            if ui.small_button("→").on_hover_text("Next month").clicked() {
                navigate = 1;
            }
        });

        let clicked = render_grid(ui, &grid, id_source, today);

        match navigate {
            -1 => state.go_to_previous_month(),
            1 => state.go_to_next_month(),
            _ => {}
        }

        let cell = clicked?;
        match state.select_cell(&cell) {
            Ok(date) => Some(date),
            Err(err) => {
                log::warn!("Ignoring calendar click: {}", err);
                None
            }
        }
    }
}

fn render_grid(
    ui: &mut egui::Ui,
    grid: &MonthGrid,
    id_source: &'static str,
    today: Option<NaiveDate>,
) -> Option<DayCell> {
    let mut clicked = None;

    egui::Grid::new(id_source)
        .num_columns(DAYS_PER_WEEK)
        .spacing([4.0, 2.0])
        .min_col_width(32.0)
        .show(ui, |ui| {
            for name in MonthGrid::weekday_labels() {
                ui.label(RichText::new(name).small().strong());
            }
            ui.end_row();

            for row in &grid.rows {
                for cell in row {
                    match cell {
                        DayCell::Blank => {
                            ui.label("");
                        }
                        DayCell::Day {
                            day,
                            date,
                            selected,
                        } => {
                            let mut text = RichText::new(day.to_string());
                            if today == Some(*date) {
                                text = text.strong().color(Color32::from_rgb(50, 150, 50));
                            }
                            if ui.selectable_label(*selected, text).clicked() {
                                clicked = Some(*cell);
                            }
                        }
                    }
                }
                ui.end_row();
            }
        });

    clicked
}
