//! Voice command parsing
//!
//! Turns free-text utterances into structured [`VoiceCommand`]s by scanning
//! for domain keywords and date/time patterns. Matching is locale-blind:
//! every keyword table covers Russian, English and Thai, and any mix of
//! them in one utterance is fine.
//!
//! The parser is a pure function over its input and reference date: no
//! I/O, no side effects, same input always yields the same output. An
//! utterance matching no intent yields `None`, which is a valid outcome,
//! not an error.

mod extract;
mod keywords;

use chrono::{NaiveDate, Utc};
use courtvoice_core::VoiceCommand;

use extract::{extract_court_type, extract_date, extract_duration, extract_time};
use keywords::{contains_any, AVAILABILITY_KEYWORDS, BOOKING_KEYWORDS, CANCEL_KEYWORDS};

/// Free-text to structured-command parser
#[derive(Debug, Default)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse an utterance against the current UTC date.
    ///
    /// Callers validate non-emptiness; the parser returns `None` for blank
    /// input rather than guessing.
    pub fn parse(&self, utterance: &str) -> Option<VoiceCommand> {
        self.parse_at(utterance, Utc::now().date_naive())
    }

    /// Parse an utterance, resolving relative dates ("tomorrow") against
    /// `today`. Deterministic for any fixed `today`.
    ///
    /// Intent scan order matters: cancellation first, then availability,
    /// then booking, so "cancel my booking" is a cancellation even though
    /// it contains a booking keyword. When no date phrase is found the
    /// command falls back to `today`.
    pub fn parse_at(&self, utterance: &str, today: NaiveDate) -> Option<VoiceCommand> {
        let text = utterance.trim();
        if text.is_empty() {
            return None;
        }
        let lower = text.to_lowercase();

        if contains_any(&lower, &CANCEL_KEYWORDS) {
            return Some(VoiceCommand::CancelBooking {
                date: extract_date(&lower, today).unwrap_or(today),
            });
        }

        if contains_any(&lower, &AVAILABILITY_KEYWORDS) {
            return Some(VoiceCommand::CheckAvailability {
                date: extract_date(&lower, today).unwrap_or(today),
                time: extract_time(&lower),
                court_type: extract_court_type(&lower),
            });
        }

        if contains_any(&lower, &BOOKING_KEYWORDS) {
            return Some(VoiceCommand::BookCourt {
                date: extract_date(&lower, today).unwrap_or(today),
                time: extract_time(&lower),
                duration_minutes: extract_duration(&lower),
                court_type: extract_court_type(&lower),
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveTime};
    use courtvoice_core::CourtType;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 27).unwrap()
    }

    #[test]
    fn parses_russian_booking_with_date_and_time() {
        let parser = CommandParser::new();
        let command = parser
            .parse_at("Забронируй корт на завтра в 14:00", today())
            .unwrap();

        assert_eq!(
            command,
            VoiceCommand::BookCourt {
                date: today() + Duration::days(1),
                time: NaiveTime::from_hms_opt(14, 0, 0),
                duration_minutes: None,
                court_type: None,
            }
        );
    }

    #[test]
    fn parses_english_booking_with_duration_and_type() {
        let parser = CommandParser::new();
        let command = parser
            .parse_at("Please book an indoor court today at 18:30 for 90 minutes", today())
            .unwrap();

        match command {
            VoiceCommand::BookCourt {
                date,
                time,
                duration_minutes,
                court_type,
            } => {
                assert_eq!(date, today());
                assert_eq!(time, NaiveTime::from_hms_opt(18, 30, 0));
                assert_eq!(duration_minutes, Some(90));
                assert_eq!(court_type, Some(CourtType::Indoor));
            }
            other => panic!("expected booking, got {other:?}"),
        }
    }

    #[test]
    fn parses_thai_booking() {
        let parser = CommandParser::new();
        let command = parser.parse_at("จองคอร์ตพรุ่งนี้เวลา 10:00", today()).unwrap();

        assert_eq!(command.kind(), "book_court");
        assert_eq!(command.date(), today() + Duration::days(1));
    }

    #[test]
    fn parses_availability_check() {
        let parser = CommandParser::new();
        let command = parser
            .parse_at("Какие корты свободны завтра?", today())
            .unwrap();

        assert_eq!(
            command,
            VoiceCommand::CheckAvailability {
                date: today() + Duration::days(1),
                time: None,
                court_type: None,
            }
        );
    }

    #[test]
    fn cancel_wins_over_booking_keyword() {
        let parser = CommandParser::new();
        let command = parser.parse_at("Cancel my booking for tomorrow", today()).unwrap();
        assert_eq!(command.kind(), "cancel_booking");
        assert_eq!(command.date(), today() + Duration::days(1));
    }

    #[test]
    fn unrelated_text_is_not_recognized() {
        let parser = CommandParser::new();
        assert_eq!(parser.parse_at("Какая сегодня погода?", today()), None);
        assert_eq!(parser.parse_at("hello there", today()), None);
    }

    #[test]
    fn date_falls_back_to_today() {
        let parser = CommandParser::new();
        let command = parser.parse_at("забронируй корт", today()).unwrap();
        assert_eq!(command.date(), today());
    }

    #[test]
    fn weekday_resolves_to_next_occurrence() {
        let parser = CommandParser::new();
        // 2024-12-27 is a Friday; "monday" means the coming Monday.
        let command = parser.parse_at("book a court on monday at 9:00", today()).unwrap();
        assert_eq!(command.date(), NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());

        // Naming today's weekday means a week ahead, not today.
        let command = parser.parse_at("book a court on friday", today()).unwrap();
        assert_eq!(command.date(), NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
    }

    #[test]
    fn explicit_iso_date_is_used() {
        let parser = CommandParser::new();
        let command = parser.parse_at("book a court on 2025-02-14 at 11:00", today()).unwrap();
        assert_eq!(command.date(), NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
    }

    #[test]
    fn parse_is_deterministic() {
        let parser = CommandParser::new();
        let inputs = [
            "Забронируй корт на завтра в 14:00",
            "what courts are free on monday",
            "ยกเลิกการจอง",
            "nonsense words here",
        ];
        for input in inputs {
            assert_eq!(parser.parse_at(input, today()), parser.parse_at(input, today()));
        }
    }

    #[test]
    fn parse_never_panics_on_odd_input() {
        let parser = CommandParser::new();
        let long = "x".repeat(10_000);
        let inputs: [&str; 7] = [
            "!!!???",
            "25:99",
            "в :   часов",
            "book book book book",
            "\u{1F3BE}\u{1F3BE}\u{1F3BE}",
            "забронируй ",
            &long,
        ];
        for input in inputs {
            let _ = parser.parse_at(input, today());
        }
    }
}
