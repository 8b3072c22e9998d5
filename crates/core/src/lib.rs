//! Core domain types for the court booking voice agent
//!
//! This crate provides the types shared across all other crates:
//! - Recognized voice commands
//! - Booking entities (courts, bookings, users)
//! - Request outcome types
//! - Supported response languages

pub mod booking;
pub mod command;
pub mod language;
pub mod result;

pub use booking::{Booking, BookingStatus, Court, User};
pub use command::{CourtType, VoiceCommand};
pub use language::Language;
pub use result::{AvailableSlot, BookingResult};
