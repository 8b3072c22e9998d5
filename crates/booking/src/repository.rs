//! Repository ports
//!
//! One injected interface per entity kind. Every method is an async I/O
//! boundary; implementations must be safe to share across concurrent
//! requests.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use courtvoice_core::{Booking, BookingStatus, Court, CourtType, User};

use crate::RepositoryError;

/// Court catalog filter
#[derive(Debug, Clone, Default)]
pub struct CourtFilter {
    pub court_type: Option<CourtType>,
}

/// Booking lookup filter
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub user_id: Option<String>,
    pub status: Option<BookingStatus>,
    pub date: Option<NaiveDate>,
}

/// Data for a booking to be created
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub court_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub booked_by: String,
    pub status: BookingStatus,
    pub total_amount: f64,
    pub currency: String,
    pub purpose: String,
}

/// Partial update of a booking
#[derive(Debug, Clone, Default)]
pub struct BookingPatch {
    pub status: Option<BookingStatus>,
}

/// User lookup port
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError>;
}

/// Court catalog port. `find_many` preserves catalog order.
#[async_trait]
pub trait CourtRepository: Send + Sync {
    async fn find_many(&self, filter: &CourtFilter) -> Result<Vec<Court>, RepositoryError>;
}

/// Booking persistence port
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, data: NewBooking) -> Result<Booking, RepositoryError>;

    async fn find_many(&self, filter: &BookingFilter) -> Result<Vec<Booking>, RepositoryError>;

    async fn update(&self, id: &str, patch: BookingPatch) -> Result<Booking, RepositoryError>;

    /// Whether the court is free of confirmed bookings overlapping the
    /// window
    async fn is_court_available(
        &self,
        court_id: &str,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<bool, RepositoryError>;
}
