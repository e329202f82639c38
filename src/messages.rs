//! Message types for the HTTP control API.
//!
//! These types are `no_std` compatible; both the desktop server and the
//! on-device server deserialize them with `serde_json`.
//!
//! # Example
//!
//! ```
//! use quadseg::messages::{StatusReply, UpdateNumberRequest};
//!
//! let json = r#"{"number": 42}"#;
//! let req: UpdateNumberRequest = serde_json::from_str(json).unwrap();
//! assert_eq!(req.number, 42.0);
//!
//! let reply = serde_json::to_string(&StatusReply::ok()).unwrap();
//! assert_eq!(reply, r#"{"status":"OK"}"#);
//! ```

use serde::{Deserialize, Serialize};

extern crate alloc;
use alloc::string::String;

/// Reply status discriminant.
///
/// Serializes to the short uppercase form used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Request accepted and rendered.
    #[serde(rename = "OK")]
    Ok,
    /// Request rejected.
    #[serde(rename = "KO")]
    Ko,
}

/// Request to show a number on the display.
///
/// # JSON Example
///
/// ```json
/// {"number": 42}
/// ```
///
/// Fractional and negative values are accepted; the display shows the
/// truncated magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateNumberRequest {
    /// The value to display
    pub number: f64,
}

impl UpdateNumberRequest {
    /// Create a new update request.
    pub fn new(number: f64) -> Self {
        Self { number }
    }
}

/// JSON reply body for the update endpoint.
///
/// # JSON Examples
///
/// ```json
/// {"status":"OK"}
/// {"status":"KO","message":"No data found, or incorrect!"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReply {
    /// OK or KO
    pub status: Status,
    /// Human-readable rejection reason, present only for KO
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusReply {
    /// An accepted reply.
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            message: None,
        }
    }

    /// A rejected reply carrying a reason.
    pub fn ko(message: &str) -> Self {
        Self {
            status: Status::Ko,
            message: Some(message.into()),
        }
    }
}
