use crate::utils::date::iso_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MISSING_DATE_MESSAGE: &str = "Please select a date for the meeting.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill all required fields.";

/// Local validation failures. Both are shown to the user and abort the submit
/// before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{}", MISSING_DATE_MESSAGE)]
    MissingDate,
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,
}

/// Text fields as typed into the meeting form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingForm {
    pub name: String,
    pub email: String,
    pub agenda: String,
}

impl MeetingForm {
    /// Build the request body, checking the date first.
    pub fn validate(&self, selected: Option<NaiveDate>) -> Result<MeetingRequest, FormError> {
        let date = selected.ok_or(FormError::MissingDate)?;

        let name = self.name.trim();
        let email = self.email.trim();
        let agenda = self.agenda.trim();
        if name.is_empty() || email.is_empty() || agenda.is_empty() {
            return Err(FormError::MissingFields);
        }

        Ok(MeetingRequest {
            name: name.to_string(),
            email: email.to_string(),
            agenda: agenda.to_string(),
            date: iso_date(date),
            phone: String::new(),
            time: String::new(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// JSON body of `POST /book-meeting`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub name: String,
    pub email: String,
    pub agenda: String,
    pub date: String,
    pub phone: String,
    pub time: String,
}
