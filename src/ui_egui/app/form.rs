//! Meeting form: contact fields, the inline calendar and the submit flow.

use super::toast::ToastLevel;
use super::BookingApp;
use crate::services::booking::{BookingOutcome, BookingService};
use crate::ui_egui::calendar_picker::CalendarPicker;
use crate::utils::date::iso_date;
use chrono::{Local, NaiveDate};
use egui::RichText;
use std::time::Instant;

impl BookingApp {
    pub(super) fn render_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Book a Meeting");
        ui.add_space(8.0);

        let locked = self.booked_at.is_some();
        ui.add_enabled_ui(!locked, |ui| {
            egui::Grid::new("meeting_form_fields")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.text_edit_singleline(&mut self.form.name);
                    ui.end_row();

                    ui.label("Email");
                    ui.text_edit_singleline(&mut self.form.email);
                    ui.end_row();
                });

            ui.label("Agenda");
            ui.add(
                egui::TextEdit::multiline(&mut self.form.agenda)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(8.0);
            let picked = ui
                .group(|ui| {
                    CalendarPicker::new(&mut self.calendar)
                        .id_source("meeting_calendar")
                        .today(Local::now().date_naive())
                        .show(ui)
                })
                .inner;
            if let Some(date) = picked {
                self.on_date_picked(date);
            }

            let selected = match self.calendar.selected_iso() {
                Some(iso) => format!("Selected Date: {}", iso),
                None => "No date selected".to_string(),
            };
            ui.label(RichText::new(selected).italics());

            ui.add_space(8.0);
            if ui.button("Book Meeting").clicked() {
                self.submit();
            }
        });
    }

    /// A pick answers any outstanding "select a date" warning.
    pub(super) fn on_date_picked(&mut self, date: NaiveDate) {
        log::info!("Meeting date picked: {}", iso_date(date));
        self.toast_manager.dismiss(ToastLevel::Warning);
    }

    pub(super) fn submit(&mut self) {
        let service = BookingService::new(self.client.as_ref());
        match service.submit(&self.form, &self.calendar) {
            Err(err) => self.toast_manager.warning(err.to_string()),
            Ok(BookingOutcome::Booked) => {
                self.toast_manager.success("Meeting booked");
                self.booked_at = Some(Instant::now());
            }
            Ok(outcome) => {
                if let Some(message) = outcome.message() {
                    self.toast_manager.error(message);
                }
            }
        }
    }
}
