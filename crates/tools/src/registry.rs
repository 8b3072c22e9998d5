//! Tool registry and executor
//!
//! Central lookup for registered tools. Execution always validates input
//! against the tool's schema first and runs the tool under its own
//! timeout, so one stuck backend cannot wedge the transport.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use courtvoice_booking::VoiceBookingService;
use courtvoice_core::Language;
use courtvoice_parser::CommandParser;
use courtvoice_speech::SpeechBridge;

use crate::facade::{Tool, ToolError, ToolOutput};
use crate::schema::ToolSchema;
use crate::tools::{ParseVoiceCommandTool, PingTool, SelfTestTool, VoiceBookingTool};

/// Registered tools, keyed by name
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Declared schemas of every registered tool, in name order
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|tool| tool.schema()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Executes tools by name
#[async_trait]
pub trait ToolExecutor {
    async fn execute(&self, name: &str, input: Value) -> Result<ToolOutput, ToolError>;
}

#[async_trait]
impl ToolExecutor for ToolRegistry {
    async fn execute(&self, name: &str, input: Value) -> Result<ToolOutput, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::not_found(format!("Unknown tool: {name}")))?;

        tool.validate(&input)?;

        let timeout_secs = tool.timeout_secs();
        match tokio::time::timeout(Duration::from_secs(timeout_secs), tool.execute(input)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(tool = name, timeout_secs, "tool execution timed out");
                Err(ToolError::timeout(name, timeout_secs))
            }
        }
    }
}

/// Wire up the full tool set against one orchestrator instance.
///
/// The orchestrator singleton is constructed by the composition root and
/// passed in explicitly; the registry never builds its own collaborators.
pub fn create_registry(
    parser: Arc<CommandParser>,
    service: Arc<VoiceBookingService>,
    speech: Arc<dyn SpeechBridge>,
    audio_format: impl Into<String>,
    default_language: Language,
) -> ToolRegistry {
    let ping = Arc::new(PingTool);
    let parse = Arc::new(ParseVoiceCommandTool::new(parser.clone(), default_language));
    let booking = Arc::new(VoiceBookingTool::new(
        parser,
        service,
        speech,
        audio_format,
        default_language,
    ));
    let self_test = Arc::new(SelfTestTool::new(
        ping.clone(),
        parse.clone(),
        booking.clone(),
    ));

    let mut registry = ToolRegistry::new();
    registry.register(ping);
    registry.register(parse);
    registry.register(booking);
    registry.register(self_test);
    registry
}
