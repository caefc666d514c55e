mod app;
pub mod calendar_picker;

pub use app::BookingApp;
