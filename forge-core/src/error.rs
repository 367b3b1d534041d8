//! Typed errors for the scoring/ranking/forecasting core.

use thiserror::Error;

/// Input-contract violations surfaced by the core.
///
/// All variants are caller errors: the core never converts one into a
/// default value or an infinite/NaN result. File I/O failure is not part of
/// this taxonomy — persistence lives in the CLI and degrades gracefully there.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForgeError {
    /// A task deadline of zero (or negative) hours would divide by zero in
    /// the scoring formula.
    #[error("invalid deadline: {deadline_hours}h (must be >= 1)")]
    InvalidDeadline { deadline_hours: i32 },

    /// More results were requested than the input can provide.
    #[error("insufficient data: requested {requested}, only {available} available")]
    InsufficientData { requested: usize, available: usize },

    /// A demand history did not have exactly 5 daily samples.
    #[error("malformed history for '{category}': {len} samples (expected 5)")]
    MalformedHistory { category: String, len: usize },
}
