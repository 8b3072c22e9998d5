//! The voice booking tools
//!
//! Four operations are exposed: `ping`, `parse_voice_command`,
//! `voice_booking` and `self_test`. `voice_booking` is the primary round
//! trip: parse → orchestrate → synthesize speech, composed into one
//! response payload.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};

use courtvoice_booking::{messages, VoiceBookingService};
use courtvoice_core::Language;
use courtvoice_parser::CommandParser;
use courtvoice_speech::{SpeechBridge, SynthesisOptions};

use crate::facade::{Tool, ToolError, ToolOutput};
use crate::schema::{InputSchema, PropertySchema, ToolSchema};

/// Server identifier stamped on ping and self-test responses
pub const SERVER_NAME: &str = "courtvoice-mcp";

/// User id the self-test books against; the composition root seeds it
pub const SELF_TEST_USER: &str = "self-test-user";

const DEFAULT_TEST_UTTERANCE: &str = "Book a court tomorrow at 14:00";

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

fn language_schema() -> PropertySchema {
    PropertySchema::enum_type(
        "Response locale",
        Language::TAGS.iter().map(|t| t.to_string()).collect(),
    )
}

fn language_from(input: &Value, default: Language) -> Language {
    input
        .get("language")
        .and_then(Value::as_str)
        .and_then(Language::from_tag)
        .unwrap_or(default)
}

/// Required non-empty string argument. Emptiness is a validation error
/// here at the facade, before any business logic runs.
fn required_str<'a>(input: &'a Value, field: &str) -> Result<&'a str, ToolError> {
    input
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ToolError::invalid_params(format!("{field} must be a non-empty string")))
}

/// Liveness probe
pub struct PingTool;

#[async_trait]
impl Tool for PingTool {
    fn name(&self) -> &str {
        "ping"
    }

    fn description(&self) -> &str {
        "Health probe for the voice booking tool server"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object().property(
                "message",
                PropertySchema::string("Echo text"),
                false,
            ),
        }
    }

    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError> {
        let message = input
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("ping");

        Ok(ToolOutput::json(json!({
            "success": true,
            "message": format!("{message}: server is alive"),
            "timestamp": now_rfc3339(),
            "server": SERVER_NAME,
        })))
    }
}

/// Parses an utterance without executing it
pub struct ParseVoiceCommandTool {
    parser: Arc<CommandParser>,
    default_language: Language,
}

impl ParseVoiceCommandTool {
    pub fn new(parser: Arc<CommandParser>, default_language: Language) -> Self {
        Self {
            parser,
            default_language,
        }
    }
}

#[async_trait]
impl Tool for ParseVoiceCommandTool {
    fn name(&self) -> &str {
        "parse_voice_command"
    }

    fn description(&self) -> &str {
        "Parse a free-text utterance into a structured booking command"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object()
                .property("text", PropertySchema::string("Utterance to parse"), true)
                .property("language", language_schema(), false),
        }
    }

    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError> {
        let text = required_str(&input, "text")?;
        let language = language_from(&input, self.default_language);

        let command = self.parser.parse(text);

        Ok(ToolOutput::json(json!({
            "success": true,
            "command": command,
            "originalText": text,
            "language": language.tag(),
            "timestamp": now_rfc3339(),
        })))
    }
}

/// The end-to-end round trip: parse, orchestrate, synthesize
pub struct VoiceBookingTool {
    parser: Arc<CommandParser>,
    service: Arc<VoiceBookingService>,
    speech: Arc<dyn SpeechBridge>,
    audio_format: String,
    default_language: Language,
}

impl VoiceBookingTool {
    pub fn new(
        parser: Arc<CommandParser>,
        service: Arc<VoiceBookingService>,
        speech: Arc<dyn SpeechBridge>,
        audio_format: impl Into<String>,
        default_language: Language,
    ) -> Self {
        Self {
            parser,
            service,
            speech,
            audio_format: audio_format.into(),
            default_language,
        }
    }
}

#[async_trait]
impl Tool for VoiceBookingTool {
    fn name(&self) -> &str {
        "voice_booking"
    }

    fn description(&self) -> &str {
        "Process a voice booking request end to end and synthesize the spoken reply"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object()
                .property("text", PropertySchema::string("Transcribed utterance"), true)
                .property("userId", PropertySchema::string("Requesting user id"), true)
                .property("sessionId", PropertySchema::string("Conversation session id"), true)
                .property("language", language_schema(), false),
        }
    }

    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError> {
        let text = required_str(&input, "text")?;
        let user_id = required_str(&input, "userId")?;
        let session_id = required_str(&input, "sessionId")?;
        let language = language_from(&input, self.default_language);

        // Unrecognized speech is not a transport error: escalate it as an
        // actionable payload with a usage hint.
        let Some(command) = self.parser.parse(text) else {
            return Ok(ToolOutput::json(json!({
                "success": false,
                "error": "Voice command not recognized",
                "suggestion": messages::usage_suggestion(language),
                "command": Value::Null,
                "originalText": text,
                "userId": user_id,
                "sessionId": session_id,
                "language": language.tag(),
                "timestamp": now_rfc3339(),
            })));
        };

        let result = self
            .service
            .process_voice_booking(&command, user_id, language)
            .await;

        let options = SynthesisOptions {
            language,
            format: self.audio_format.clone(),
        };
        let audio_response = match self.speech.text_to_voice(&result.message, &options).await {
            Ok(audio) => serde_json::to_value(audio).unwrap_or(Value::Null),
            Err(error) => {
                tracing::warn!(%error, "speech synthesis failed, replying with text only");
                Value::Null
            }
        };

        Ok(ToolOutput::json(json!({
            "success": result.success,
            "message": result.message,
            "bookingId": result.booking_id,
            "availableSlots": result.available_slots,
            "nextSteps": result.next_steps,
            "audioResponse": audio_response,
            "command": command,
            "originalText": text,
            "userId": user_id,
            "sessionId": session_id,
            "language": language.tag(),
            "timestamp": now_rfc3339(),
        })))
    }

    /// Speech synthesis may be slow on real backends
    fn timeout_secs(&self) -> u64 {
        45
    }
}

/// Operability self-check.
///
/// Diagnostic only, not on the production request path; its response shape
/// (`success`, per-stage results, `performance.responseTime`) is part of
/// the operational contract.
pub struct SelfTestTool {
    ping: Arc<PingTool>,
    parse: Arc<ParseVoiceCommandTool>,
    booking: Arc<VoiceBookingTool>,
}

impl SelfTestTool {
    pub fn new(
        ping: Arc<PingTool>,
        parse: Arc<ParseVoiceCommandTool>,
        booking: Arc<VoiceBookingTool>,
    ) -> Self {
        Self {
            ping,
            parse,
            booking,
        }
    }

    async fn run_ping(&self) -> Result<Value, ToolError> {
        Ok(self.ping.execute(json!({"message": "self-test"})).await?.payload)
    }

    async fn run_parse(&self, text: &str) -> Result<Value, ToolError> {
        Ok(self.parse.execute(json!({"text": text})).await?.payload)
    }

    async fn run_booking(&self, text: &str) -> Result<Value, ToolError> {
        let input = json!({
            "text": text,
            "userId": SELF_TEST_USER,
            "sessionId": format!("self-test-{}", uuid::Uuid::new_v4()),
        });
        Ok(self.booking.execute(input).await?.payload)
    }
}

#[async_trait]
impl Tool for SelfTestTool {
    fn name(&self) -> &str {
        "self_test"
    }

    fn description(&self) -> &str {
        "Run a diagnostic self-check of the tool server"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object()
                .property(
                    "testType",
                    PropertySchema::enum_type(
                        "Which check to run",
                        vec![
                            "ping".into(),
                            "parse_command".into(),
                            "voice_booking".into(),
                            "full_cycle".into(),
                        ],
                    ),
                    true,
                )
                .property("testData", PropertySchema::string("Override test utterance"), false),
        }
    }

    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError> {
        let started = Instant::now();
        let test_type = required_str(&input, "testType")?;
        let text = input
            .get("testData")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_TEST_UTTERANCE);

        let result = match test_type {
            "ping" => self.run_ping().await?,
            "parse_command" => self.run_parse(text).await?,
            "voice_booking" => self.run_booking(text).await?,
            "full_cycle" => {
                let ping = self.run_ping().await?;
                let parse = self.run_parse(text).await?;
                let booking = self.run_booking(text).await?;
                let all_successful = [&ping, &parse, &booking]
                    .iter()
                    .all(|stage| stage["success"] == Value::Bool(true));
                json!({
                    "ping": ping,
                    "parse": parse,
                    "booking": booking,
                    "allSuccessful": all_successful,
                })
            }
            other => {
                return Err(ToolError::invalid_params(format!(
                    "Unknown testType '{other}'"
                )))
            }
        };

        Ok(ToolOutput::json(json!({
            "success": true,
            "testType": test_type,
            "result": result,
            "performance": {
                "responseTime": started.elapsed().as_millis() as u64,
                "timestamp": now_rfc3339(),
            },
            "server": SERVER_NAME,
        })))
    }
}
