use serde::Serialize;

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Wire name of the offending field (e.g. `durationSeconds`).
    pub field: &'static str,
    /// Human-readable reason the constraint was violated.
    pub message: String,
}

/// Error returned when a brief fails normalization.
///
/// Carries every violated constraint, in field declaration order, so the
/// caller can surface all problems in a single round trip.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid brief: {} constraint violation(s)", .violations.len())]
pub struct InvalidBrief {
    pub violations: Vec<FieldViolation>,
}
