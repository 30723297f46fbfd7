//! Normalize remote response bodies into the client's result-or-error
//! contract.
//!
//! These are pure functions over body bytes; the HTTP exchange itself lives
//! in `client`.

use crate::error::ClientError;
use crate::types::{CalculationResult, ServiceInfo};
use crate::FALLBACK_ERROR;

/// Parse a success (2xx) calculation body.
pub fn parse_calculation(body: &[u8]) -> Result<CalculationResult, ClientError> {
    Ok(serde_json::from_slice(body)?)
}

/// Parse a success (2xx) service-info body.
pub fn parse_service_info(body: &[u8]) -> Result<ServiceInfo, ClientError> {
    Ok(serde_json::from_slice(body)?)
}

/// Extract the error message from a failure (non-2xx) body.
///
/// The endpoint reports failures as `{"error": "<message>"}`, surfaced
/// verbatim. A body that is not JSON, not an object, or lacks a string
/// `error` field yields the generic fallback instead; a failure is never
/// partial or ambiguous.
pub fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}
