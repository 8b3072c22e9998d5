//! In-memory repository implementations
//!
//! Back the orchestrator in development and tests. Stores are `Vec`-based
//! so catalog and insertion order survive round trips.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use parking_lot::RwLock;

use courtvoice_core::{Booking, BookingStatus, Court, User};

use crate::repository::{
    BookingFilter, BookingPatch, BookingRepository, CourtFilter, CourtRepository, NewBooking,
    UserRepository,
};
use crate::RepositoryError;

/// In-memory user store
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    pub fn insert(&self, user: User) {
        self.users.write().push(user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.read().iter().find(|u| u.id == id).cloned())
    }
}

/// In-memory court catalog
#[derive(Debug, Default)]
pub struct InMemoryCourtRepository {
    courts: RwLock<Vec<Court>>,
}

impl InMemoryCourtRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courts(courts: Vec<Court>) -> Self {
        Self {
            courts: RwLock::new(courts),
        }
    }

    pub fn insert(&self, court: Court) {
        self.courts.write().push(court);
    }
}

#[async_trait]
impl CourtRepository for InMemoryCourtRepository {
    async fn find_many(&self, filter: &CourtFilter) -> Result<Vec<Court>, RepositoryError> {
        Ok(self
            .courts
            .read()
            .iter()
            .filter(|c| filter.court_type.map_or(true, |t| c.court_type == t))
            .cloned()
            .collect())
    }
}

/// In-memory booking store.
///
/// The availability predicate and `create` are separate calls, so two
/// concurrent bookings of the same window can both pass the check before
/// either is written. Real storage behind this port must enforce an
/// overlap constraint; this store mirrors the source system and does not.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, booking: Booking) {
        self.bookings.write().push(booking);
    }

    /// Snapshot of all stored bookings
    pub fn all(&self) -> Vec<Booking> {
        self.bookings.read().clone()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, data: NewBooking) -> Result<Booking, RepositoryError> {
        let booking = Booking {
            id: uuid::Uuid::new_v4().to_string(),
            court_id: data.court_id,
            date: data.date,
            start_time: data.start_time,
            end_time: data.end_time,
            status: data.status,
            booked_by: data.booked_by,
            total_amount: data.total_amount,
            currency: data.currency,
            purpose: data.purpose,
        };
        self.bookings.write().push(booking.clone());
        Ok(booking)
    }

    async fn find_many(&self, filter: &BookingFilter) -> Result<Vec<Booking>, RepositoryError> {
        Ok(self
            .bookings
            .read()
            .iter()
            .filter(|b| filter.user_id.as_deref().map_or(true, |u| b.booked_by == u))
            .filter(|b| filter.status.map_or(true, |s| b.status == s))
            .filter(|b| filter.date.map_or(true, |d| b.date == d))
            .cloned()
            .collect())
    }

    async fn update(&self, id: &str, patch: BookingPatch) -> Result<Booking, RepositoryError> {
        let mut bookings = self.bookings.write();
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("booking {id}")))?;

        if let Some(status) = patch.status {
            booking.status = status;
        }

        Ok(booking.clone())
    }

    async fn is_court_available(
        &self,
        court_id: &str,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<bool, RepositoryError> {
        let overlapping = self.bookings.read().iter().any(|b| {
            b.court_id == court_id
                && b.date == date
                && b.status == BookingStatus::Confirmed
                && b.start_time < end_time
                && start_time < b.end_time
        });
        Ok(!overlapping)
    }
}
