//! Booking entities
//!
//! Storage-backed entities consumed through the repository ports. The core
//! never owns their persistence; it only reads and constructs them.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::CourtType;

/// A bookable court in the venue catalog.
///
/// Catalog order is meaningful: availability results and court selection
/// preserve it, they never rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Court {
    pub id: String,
    pub name: String,
    pub court_type: CourtType,
}

/// Booking lifecycle status. The only transition is confirmed → cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// A persisted court reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub court_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: BookingStatus,
    /// Owning user id
    pub booked_by: String,
    pub total_amount: f64,
    pub currency: String,
    pub purpose: String,
}

/// A club member, read-only from this core's perspective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}
