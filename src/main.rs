// Harbor Booking
// Main entry point

use harbor_booking::services::config::AppConfig;
use harbor_booking::ui_egui::BookingApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Harbor Booking");

    let config = AppConfig::load().unwrap_or_else(|err| {
        log::error!("Failed to load configuration, using defaults: {err:?}");
        let mut config = AppConfig::default();
        config.apply_env_overrides();
        config
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Book a Meeting")
            .with_inner_size([520.0, 760.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Harbor Booking",
        options,
        Box::new(move |cc| Ok(Box::new(BookingApp::new(cc, config)?))),
    )
}
