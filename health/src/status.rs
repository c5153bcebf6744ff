use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

/// The two-valued outcome of a health check.
///
/// Serializes to the conventional health-endpoint JSON shape:
/// `{"status":"UP","data":{...}}` or `{"status":"DOWN","error":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status")]
pub enum Status {
    #[serde(rename = "UP")]
    Up {
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<Value>,
    },
    #[serde(rename = "DOWN")]
    Down { error: String },
}

impl Status {
    pub fn up(data: Value) -> Self {
        Status::Up { data: Some(data) }
    }

    /// UP with no diagnostic payload, for checks that carry none.
    pub fn up_empty() -> Self {
        Status::Up { data: None }
    }

    pub fn down(error: &Error) -> Self {
        Status::Down {
            error: error.to_string(),
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, Status::Up { .. })
    }
}
