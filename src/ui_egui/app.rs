mod form;
mod success_popup;
mod toast;

use self::toast::ToastManager;
use crate::models::booking::MeetingForm;
use crate::models::calendar::CalendarState;
use crate::services::api::{HttpClient, ReqwestClient};
use crate::services::config::AppConfig;
use anyhow::Result;
use std::time::Instant;

pub struct BookingApp {
    config: AppConfig,
    /// Transport for the booking API
    client: Box<dyn HttpClient>,
    form: MeetingForm,
    /// Picker state, owned here for the lifetime of the form
    calendar: CalendarState,
    toast_manager: ToastManager,
    /// Set when a booking succeeds; the form resets once the popup times out
    booked_at: Option<Instant>,
}

impl eframe::App for BookingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_form(ui);
            });
        });

        self.render_success_popup(ctx);
        self.toast_manager.render(ctx);
    }
}

impl BookingApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self> {
        let client = ReqwestClient::new(&config.api_base_url, config.request_timeout())?;
        log::info!("Booking API at {}", client.base_url());
        Ok(Self::with_client(config, Box::new(client)))
    }

    pub fn with_client(config: AppConfig, client: Box<dyn HttpClient>) -> Self {
        let toast_manager = ToastManager::new(config.toast_duration());
        Self {
            config,
            client,
            form: MeetingForm::default(),
            calendar: CalendarState::current(),
            toast_manager,
            booked_at: None,
        }
    }

    /// Close the booking confirmation once `success_popup_secs` have passed
    /// since the booking, resetting the form. Returns true if it closed.
    fn expire_confirmation(&mut self, now: Instant) -> bool {
        let Some(booked_at) = self.booked_at else {
            return false;
        };
        if now.saturating_duration_since(booked_at) < self.config.success_popup_duration() {
            return false;
        }
        log::info!("Confirmation closed, resetting meeting form");
        self.reset();
        true
    }

    /// Back to the mount-time state: empty fields, this month, no selection.
    fn reset(&mut self) {
        self.form.clear();
        self.calendar = CalendarState::current();
        self.booked_at = None;
    }
}
