//! Error types for API message handling.

/// Errors that can occur while exchanging editing messages with the UI.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unknown gizmo part: {0}")]
    UnknownPart(String),
}
