use super::BookingApp;
use egui::RichText;
use std::time::Instant;

impl BookingApp {
    /// Confirmation window shown after a successful booking. Closes itself
    /// and resets the form once the configured delay has passed.
    pub(super) fn render_success_popup(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if self.expire_confirmation(now) {
            return;
        }
        let Some(booked_at) = self.booked_at else {
            return;
        };

        let remaining = self
            .config
            .success_popup_duration()
            .saturating_sub(now.saturating_duration_since(booked_at));
        ctx.request_repaint_after(remaining);

        egui::Window::new("✅ Meeting Booked Successfully!")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_max_width(360.0);
                ui.label("Thank you for booking a meeting with Sell Harbor X.");
                ui.label(
                    "Our team will reach out shortly to finalize the time and next steps.",
                );
                ui.add_space(6.0);
                ui.label("• Personalized guidance on your case");
                ui.label("• Free initial consultation");
                ui.label("• Strategic roadmap & recommendations");
                ui.add_space(6.0);
                ui.label(RichText::new("Returning to a fresh form…").weak());
            });
    }
}
