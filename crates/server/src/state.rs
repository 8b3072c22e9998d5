//! Application state
//!
//! The composition root. The [`courtvoice_booking::VoiceBookingService`]
//! singleton is constructed exactly once here and handed to the tool
//! registry explicitly: no module-level globals, no import-time side
//! effects.

use std::sync::Arc;

use courtvoice_booking::{
    InMemoryBookingRepository, InMemoryCourtRepository, InMemoryUserRepository,
    VoiceBookingService,
};
use courtvoice_config::Settings;
use courtvoice_core::{Court, CourtType, Language, User};
use courtvoice_parser::CommandParser;
use courtvoice_speech::{MockSpeechBridge, SpeechBridge};
use courtvoice_tools::{create_registry, ToolRegistry, SELF_TEST_USER};

/// Shared state across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub tools: Arc<ToolRegistry>,
}

impl AppState {
    /// Build the full object graph from settings.
    ///
    /// Repositories are the in-memory implementations seeded with the demo
    /// catalog; production deployments swap them for storage-backed ones
    /// behind the same ports.
    pub fn new(config: Settings) -> Self {
        let users = Arc::new(InMemoryUserRepository::with_users(demo_users()));
        let courts = Arc::new(InMemoryCourtRepository::with_courts(demo_courts()));
        let bookings = Arc::new(InMemoryBookingRepository::new());

        let service = Arc::new(VoiceBookingService::new(
            users,
            courts,
            bookings,
            config.booking.clone(),
        ));

        let speech: Arc<dyn SpeechBridge> = Arc::new(MockSpeechBridge::new());

        let default_language = Language::from_tag(&config.speech.default_language)
            .unwrap_or_default();

        let tools = Arc::new(create_registry(
            Arc::new(CommandParser::new()),
            service,
            speech,
            config.speech.audio_format.clone(),
            default_language,
        ));

        Self {
            config: Arc::new(config),
            tools,
        }
    }
}

fn demo_users() -> Vec<User> {
    vec![
        User {
            id: "user-123".to_string(),
            name: "Иван Петров".to_string(),
        },
        User {
            id: SELF_TEST_USER.to_string(),
            name: "Self Test".to_string(),
        },
    ]
}

fn demo_courts() -> Vec<Court> {
    vec![
        Court {
            id: "court-1".to_string(),
            name: "Центральный".to_string(),
            court_type: CourtType::Indoor,
        },
        Court {
            id: "court-2".to_string(),
            name: "Панорама".to_string(),
            court_type: CourtType::Indoor,
        },
        Court {
            id: "court-3".to_string(),
            name: "Сад".to_string(),
            court_type: CourtType::Outdoor,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_registers_all_tools() {
        let state = AppState::new(Settings::default());
        assert_eq!(state.tools.len(), 4);
        assert!(state.tools.get("voice_booking").is_some());
        assert!(state.tools.get("self_test").is_some());
    }
}
