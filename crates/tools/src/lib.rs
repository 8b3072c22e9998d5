//! MCP-style tool layer for the voice booking pipeline
//!
//! Exposes the parser and orchestrator as independently callable tools
//! over a JSON request/response transport, for use by an LLM agent. Every
//! tool validates its input against a declared schema before any business
//! logic runs, reports failures as structured errors with JSON-RPC codes,
//! and stamps each response with an RFC-3339 timestamp.

pub mod facade;
pub mod registry;
pub mod schema;
pub mod tools;

pub use facade::{ErrorCode, Tool, ToolError, ToolOutput};
pub use registry::{create_registry, ToolExecutor, ToolRegistry};
pub use schema::{InputSchema, PropertySchema, ToolSchema};
pub use tools::{
    ParseVoiceCommandTool, PingTool, SelfTestTool, VoiceBookingTool, SELF_TEST_USER, SERVER_NAME,
};
