//! Booking orchestration core
//!
//! Drives one voice request end to end: resolve the user, resolve
//! candidate courts, check availability, create or cancel a reservation,
//! and assemble a localized [`courtvoice_core::BookingResult`].
//!
//! Persistence lives behind the repository ports; this crate ships
//! in-memory implementations for development and tests, and the
//! orchestrator never knows which one it is talking to.

pub mod availability;
pub mod error;
pub mod memory;
pub mod messages;
pub mod repository;
pub mod service;

pub use availability::AvailabilityChecker;
pub use error::RepositoryError;
pub use memory::{InMemoryBookingRepository, InMemoryCourtRepository, InMemoryUserRepository};
pub use repository::{
    BookingFilter, BookingPatch, BookingRepository, CourtFilter, CourtRepository, NewBooking,
    UserRepository,
};
pub use service::VoiceBookingService;
