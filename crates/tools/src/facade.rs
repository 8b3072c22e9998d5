//! Tool trait and transport-level error/output types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::schema::ToolSchema;

/// JSON-RPC compatible error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ErrorCode {
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::InvalidRequest => -32600,
            ErrorCode::MethodNotFound => -32601,
            ErrorCode::InvalidParams => -32602,
            ErrorCode::InternalError => -32603,
        }
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = &'static str;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -32600 => Ok(ErrorCode::InvalidRequest),
            -32601 => Ok(ErrorCode::MethodNotFound),
            -32602 => Ok(ErrorCode::InvalidParams),
            -32603 => Ok(ErrorCode::InternalError),
            _ => Err("unknown error code"),
        }
    }
}

/// Structured tool error.
///
/// Schema violations and transport problems surface as these; business
/// outcomes never do; they ride inside a successful [`ToolOutput`] with
/// `success: false` in the payload.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("[{code:?}] {message}")]
pub struct ToolError {
    pub code: ErrorCode,
    pub message: String,
}

impl ToolError {
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidParams,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::MethodNotFound,
            message: message.into(),
        }
    }

    pub fn timeout(tool_name: &str, timeout_secs: u64) -> Self {
        Self {
            code: ErrorCode::InternalError,
            message: format!("Tool '{tool_name}' timed out after {timeout_secs}s"),
        }
    }
}

/// Tool output: a JSON payload plus a transport-level error flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    pub payload: Value,
    #[serde(default)]
    pub is_error: bool,
}

impl ToolOutput {
    pub fn json(value: impl Serialize) -> Self {
        Self {
            payload: serde_json::to_value(value).unwrap_or(Value::Null),
            is_error: false,
        }
    }
}

/// An externally callable operation
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn schema(&self) -> ToolSchema;

    /// Execute with already-validated input
    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError>;

    /// Validate input against the declared schema
    fn validate(&self, input: &Value) -> Result<(), ToolError> {
        self.schema().validate(input)
    }

    /// Per-tool execution timeout
    fn timeout_secs(&self) -> u64 {
        30
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_round_trip() {
        for code in [
            ErrorCode::InvalidRequest,
            ErrorCode::MethodNotFound,
            ErrorCode::InvalidParams,
            ErrorCode::InternalError,
        ] {
            let wire = i32::from(code);
            assert_eq!(ErrorCode::try_from(wire).unwrap(), code);
        }
        assert!(ErrorCode::try_from(-1).is_err());
    }

    #[test]
    fn invalid_params_has_jsonrpc_code() {
        let error = ToolError::invalid_params("text must not be empty");
        assert_eq!(i32::from(error.code), -32602);
        assert!(error.to_string().contains("text must not be empty"));
    }

    #[test]
    fn output_wraps_serializable_values() {
        let output = ToolOutput::json(serde_json::json!({"success": true}));
        assert!(!output.is_error);
        assert_eq!(output.payload["success"], true);
    }
}
