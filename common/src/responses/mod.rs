//! JSON bodies returned by the HTTP surface.

use serde::Serialize;
use serde_json::Value;

/// `{ "status": ..., "message": ... }`, used by every webhook outcome except the handshake.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusMessage {
    pub status: String,
    pub message: String,
}

impl StatusMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Handshake echo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Challenge {
    pub challenge: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Health {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceIndex {
    pub message: String,
    pub endpoints: Vec<String>,
    pub status: String,
}
