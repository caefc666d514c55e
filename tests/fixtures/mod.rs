// Test fixtures - reusable test data
// Provides consistent dates, forms and a recording HTTP client

#![allow(dead_code)]

use chrono::NaiveDate;
use harbor_booking::models::booking::MeetingForm;
use harbor_booking::services::api::{ApiError, ApiResponse, HttpClient, Method};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2025 (a Wednesday)
    pub fn jan_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Returns Dec 31, 2024 (last day before a year rollover)
    pub fn new_years_eve_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }
}

/// A form with every required field filled
pub fn complete_form() -> MeetingForm {
    MeetingForm {
        name: "Priya Natarajan".to_string(),
        email: "priya@example.com".to_string(),
        agenda: "Marketplace listing review".to_string(),
    }
}

/// One request seen by `RecordingClient`
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Scripted reply for `RecordingClient`
pub enum Reply {
    Status(u16, Option<Value>),
    Unreachable,
}

/// HttpClient that records requests and answers from a script.
#[derive(Default)]
pub struct RecordingClient {
    pub requests: RefCell<Vec<RecordedRequest>>,
    replies: RefCell<VecDeque<Reply>>,
}

impl RecordingClient {
    pub fn replying(replies: Vec<Reply>) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            replies: RefCell::new(replies.into()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl HttpClient for RecordingClient {
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });

        match self.replies.borrow_mut().pop_front() {
            Some(Reply::Status(status, json)) => Ok(ApiResponse::new(status, json)),
            Some(Reply::Unreachable) | None => Err(ApiError::Transport {
                url: path.to_string(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )),
            }),
        }
    }
}
