//! Recognized voice commands

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Court surface type, used as an optional booking filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourtType {
    Indoor,
    Outdoor,
}

impl std::fmt::Display for CourtType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourtType::Indoor => write!(f, "indoor"),
            CourtType::Outdoor => write!(f, "outdoor"),
        }
    }
}

/// A structured user intent derived from free text.
///
/// Closed union: one variant per supported intent, so adding a new command
/// forces every dispatch site to handle it. `date` is present on every
/// variant; the parser substitutes the current day when the utterance
/// names no date. An utterance matching no intent is `None` at the parser
/// boundary, not a variant here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum VoiceCommand {
    /// Reserve a court for a concrete time window
    BookCourt {
        date: NaiveDate,
        #[serde(skip_serializing_if = "Option::is_none")]
        time: Option<NaiveTime>,
        /// Requested duration in minutes; configured default when absent
        #[serde(skip_serializing_if = "Option::is_none")]
        duration_minutes: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        court_type: Option<CourtType>,
    },
    /// Report which courts are free on the given day
    CheckAvailability {
        date: NaiveDate,
        #[serde(skip_serializing_if = "Option::is_none")]
        time: Option<NaiveTime>,
        #[serde(skip_serializing_if = "Option::is_none")]
        court_type: Option<CourtType>,
    },
    /// Cancel the user's most relevant confirmed booking
    CancelBooking { date: NaiveDate },
}

impl VoiceCommand {
    /// The date the command refers to
    pub fn date(&self) -> NaiveDate {
        match self {
            VoiceCommand::BookCourt { date, .. }
            | VoiceCommand::CheckAvailability { date, .. }
            | VoiceCommand::CancelBooking { date } => *date,
        }
    }

    /// Wire tag of the command kind
    pub fn kind(&self) -> &'static str {
        match self {
            VoiceCommand::BookCourt { .. } => "book_court",
            VoiceCommand::CheckAvailability { .. } => "check_availability",
            VoiceCommand::CancelBooking { .. } => "cancel_booking",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_serializes_with_tag() {
        let command = VoiceCommand::BookCourt {
            date: NaiveDate::from_ymd_opt(2024, 12, 28).unwrap(),
            time: NaiveTime::from_hms_opt(14, 0, 0),
            duration_minutes: None,
            court_type: Some(CourtType::Indoor),
        };

        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["command"], "book_court");
        assert_eq!(json["date"], "2024-12-28");
        assert_eq!(json["courtType"], "indoor");
        assert!(json.get("durationMinutes").is_none());
    }

    #[test]
    fn command_round_trips() {
        let command = VoiceCommand::CancelBooking {
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        };
        let json = serde_json::to_string(&command).unwrap();
        let back: VoiceCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, command);
        assert_eq!(back.kind(), "cancel_booking");
    }
}
