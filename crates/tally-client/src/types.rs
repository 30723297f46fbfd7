use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four operations the remote endpoint implements.
///
/// Serialized as the exact lowercase strings the wire contract names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in the order a form would list them.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// The wire name of this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A two-operand calculation, serialized as `{"a":…,"b":…,"operation":"…"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub a: f64,
    pub b: f64,
    pub operation: Operation,
}

impl CalculationRequest {
    /// Build a request, rejecting non-finite operands.
    ///
    /// Only numeric well-formedness is checked here; range behavior
    /// (division by zero included) belongs to the remote endpoint.
    pub fn new(a: f64, b: f64, operation: Operation) -> Result<Self, ClientError> {
        if !a.is_finite() {
            return Err(ClientError::InvalidOperand { name: "a", value: a });
        }
        if !b.is_finite() {
            return Err(ClientError::InvalidOperand { name: "b", value: b });
        }
        Ok(CalculationRequest { a, b, operation })
    }
}

/// Successful calculation response. The value is whatever the endpoint
/// returned, never recomputed or verified client-side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub result: f64,
}

/// Deployment info returned by `GET` on the calculation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
}
