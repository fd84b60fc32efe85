//! Failure kinds shared by the codec, the decoders and the emulator client.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Control server unreachable, or it answered with a non-success status.
    Network(String),
    /// Screen payload is not valid hex or has the wrong size.
    Decode(String),
    /// State payload is missing required fields or has the wrong types.
    MalformedPayload(String),
    /// Command argument outside the allowed set or range.
    Validation(String),
}

pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::Network(_) => "network",
            BridgeError::Decode(_) => "decode",
            BridgeError::MalformedPayload(_) => "malformed payload",
            BridgeError::Validation(_) => "validation",
        }
    }

    fn detail(&self) -> &str {
        match self {
            BridgeError::Network(s)
            | BridgeError::Decode(s)
            | BridgeError::MalformedPayload(s)
            | BridgeError::Validation(s) => s,
        }
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.kind(), self.detail())
    }
}

impl std::error::Error for BridgeError {}

impl From<serde_json::Error> for BridgeError {
    fn from(e: serde_json::Error) -> Self {
        BridgeError::MalformedPayload(e.to_string())
    }
}
