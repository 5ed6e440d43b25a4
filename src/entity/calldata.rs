use serde_json::Value;
use std::fmt;

use crate::entity::FetchError;

/// Characters stripped from `tx.data`: the `0x` prefix plus the 4-byte
/// (8 hex characters) function selector.
pub const CALLDATA_PAYLOAD_OFFSET: usize = 10;

/// Swap calldata with the selector removed, without `0x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalldataPayload(String);

impl CalldataPayload {
    /// Cuts the selector off a full `tx.data` hex string
    pub fn from_tx_data(tx_data: &str) -> Result<Self, FetchError> {
        if !tx_data.starts_with("0x") {
            return Err(FetchError::MalformedResponse(format!(
                "tx.data does not start with 0x: {:?}",
                tx_data
            )));
        }

        // get() also rejects an offset that is not a char boundary
        match tx_data.get(CALLDATA_PAYLOAD_OFFSET..) {
            Some(payload) => Ok(Self(payload.to_string())),
            None => Err(FetchError::MalformedResponse(format!(
                "tx.data is {} characters long, expected at least {}",
                tx_data.len(),
                CALLDATA_PAYLOAD_OFFSET
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the payload, optionally re-adding the `0x` prefix
    pub fn to_hex_string(&self, prefixed: bool) -> String {
        if prefixed {
            format!("0x{}", self.0)
        } else {
            self.0.clone()
        }
    }
}

impl fmt::Display for CalldataPayload {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body of a non-200 answer, kept as received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPayload {
    pub status: u16,
    pub body: String,
    pub description: Option<String>,
}

impl ErrorPayload {
    pub fn new(status: u16, body: String) -> Self {
        let description = describe_error_body(&body);
        Self {
            status,
            body,
            description,
        }
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "status {}: {}", self.status, description),
            // Multi-line bodies (HTML error pages) are folded onto one line
            None => write!(
                f,
                "status {}: {}",
                self.status,
                self.body.split_whitespace().collect::<Vec<_>>().join(" ")
            ),
        }
    }
}

// The API usually answers errors with JSON, but nothing guarantees it
fn describe_error_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    ["description", "error", "message"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}
