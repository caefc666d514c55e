use crate::models::booking::{FormError, MeetingForm, MeetingRequest};
use crate::models::calendar::CalendarState;
use crate::services::api::{ApiResponse, HttpClient, Method};

pub const BOOK_MEETING_PATH: &str = "/book-meeting";

pub const ALREADY_BOOKED_MESSAGE: &str = "You already booked for this date.";
pub const BOOKING_FAILED_MESSAGE: &str = "Booking failed.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Try later.";

/// What the user is told after a booking request went out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked,
    AlreadyBooked(String),
    Rejected(String),
    NetworkError(String),
}

impl BookingOutcome {
    pub fn is_booked(&self) -> bool {
        matches!(self, BookingOutcome::Booked)
    }

    /// Message for the failure variants.
    pub fn message(&self) -> Option<&str> {
        match self {
            BookingOutcome::Booked => None,
            BookingOutcome::AlreadyBooked(msg)
            | BookingOutcome::Rejected(msg)
            | BookingOutcome::NetworkError(msg) => Some(msg),
        }
    }

    fn from_response(response: &ApiResponse) -> Self {
        if response.is_success() {
            return BookingOutcome::Booked;
        }
        let detail = response.detail().map(str::to_string);
        if response.status == 409 {
            BookingOutcome::AlreadyBooked(
                detail.unwrap_or_else(|| ALREADY_BOOKED_MESSAGE.to_string()),
            )
        } else {
            BookingOutcome::Rejected(detail.unwrap_or_else(|| BOOKING_FAILED_MESSAGE.to_string()))
        }
    }
}

/// Meeting booking glue over the HTTP client capability.
pub struct BookingService<'a, C: HttpClient + ?Sized> {
    client: &'a C,
}

impl<'a, C: HttpClient + ?Sized> BookingService<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Validate against the picker's selection, then book. Validation errors
    /// return before any request is made.
    pub fn submit(
        &self,
        form: &MeetingForm,
        calendar: &CalendarState,
    ) -> Result<BookingOutcome, FormError> {
        let request = form.validate(calendar.selected()).map_err(|err| {
            log::info!("Meeting form rejected locally: {}", err);
            err
        })?;
        Ok(self.book(&request))
    }

    pub fn book(&self, request: &MeetingRequest) -> BookingOutcome {
        let body = match serde_json::to_value(request) {
            Ok(body) => body,
            Err(err) => {
                log::error!("Failed to encode meeting request: {}", err);
                return BookingOutcome::Rejected(BOOKING_FAILED_MESSAGE.to_string());
            }
        };

        match self.client.request(Method::Post, BOOK_MEETING_PATH, Some(body)) {
            Ok(response) => {
                let outcome = BookingOutcome::from_response(&response);
                if outcome.is_booked() {
                    log::info!("Meeting booked for {}", request.date);
                } else {
                    log::warn!(
                        "Meeting booking for {} refused with status {}",
                        request.date,
                        response.status
                    );
                }
                outcome
            }
            Err(err) => {
                log::error!("Booking request failed: {}", err);
                BookingOutcome::NetworkError(NETWORK_ERROR_MESSAGE.to_string())
            }
        }
    }
}
