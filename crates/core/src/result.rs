//! Request outcome types

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One candidate time window on a court, as reported by an availability
/// check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlot {
    pub court_id: String,
    pub court_name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
}

/// Outcome of one orchestrated voice request.
///
/// Constructed once per request, immutable, returned to the caller and
/// never persisted; the booking it may describe is persisted separately.
/// Business-rule failures are ordinary `success: false` values here, not
/// errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResult {
    pub success: bool,
    /// Human-readable, localized
    pub message: String,
    /// Present iff success and the command was a booking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    /// Present iff the command was an availability check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_slots: Option<Vec<AvailableSlot>>,
    /// Suggested follow-up actions, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<Vec<String>>,
}

impl BookingResult {
    /// A successful outcome with the given message
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            booking_id: None,
            available_slots: None,
            next_steps: None,
        }
    }

    /// A business-rule failure with the given message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            booking_id: None,
            available_slots: None,
            next_steps: None,
        }
    }

    pub fn with_booking_id(mut self, id: impl Into<String>) -> Self {
        self.booking_id = Some(id.into());
        self
    }

    pub fn with_slots(mut self, slots: Vec<AvailableSlot>) -> Self {
        self.available_slots = Some(slots);
        self
    }

    pub fn with_next_steps(mut self, steps: Vec<String>) -> Self {
        self.next_steps = Some(steps);
        self
    }
}
