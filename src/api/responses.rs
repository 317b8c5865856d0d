// src/api/responses.rs
//! Wire shapes shared by Smartsheet API responses.

use serde::{Deserialize, Serialize};

/// Envelope returned by every write operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope<T> {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result_code: i64,
    pub result: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
}

impl<T> ResultEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.result_code == 0
    }
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_code: i64,
    pub message: String,
    #[serde(default)]
    pub ref_id: Option<String>,
}
