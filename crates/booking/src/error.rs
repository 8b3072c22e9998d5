//! Repository error types

use thiserror::Error;

/// Errors surfaced by repository ports.
///
/// These are system faults (backend unreachable, corrupt rows), never
/// business-rule outcomes: "user not found" or "no free court" are ordinary
/// `Ok` values at the port level.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}
