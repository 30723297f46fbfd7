//! HTTP client for the tally basic-calc endpoint.
//!
//! The remote endpoint performs the arithmetic; this crate only constructs
//! the request, attaches the caller-provided credential when configured to,
//! and normalizes the response into a single result-or-error contract.
//! Exactly one attempt per call: no retry, no backoff, and no client-side
//! timeout beyond the transport's own behavior. Calls are independent and
//! may complete out of submission order; discarding stale responses is the
//! caller's concern.

mod client;
mod endpoint;
mod error;
mod response;
mod types;

pub use client::{CalcClient, SessionTokenProvider, TokenProvider};
pub use endpoint::{ClientConfig, Endpoint};
pub use error::ClientError;
pub use response::{error_message, parse_calculation, parse_service_info};
pub use types::{CalculationRequest, CalculationResult, Operation, ServiceInfo};

/// Path suffix for direct (cross-origin) calls against the API base URL.
pub const DIRECT_PATH: &str = "/v1/basic-calc";

/// Fixed same-origin path expected to sit behind a reverse proxy.
pub const PROXIED_PATH: &str = "/api/v1/basic-calc";

/// Fallback message when a failure response carries no usable `error` field.
pub const FALLBACK_ERROR: &str = "API error";
