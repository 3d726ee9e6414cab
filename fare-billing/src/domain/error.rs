//! Domain error types.
//!
//! These errors represent validation failures for individual values read
//! from the input tables. They are distinct from I/O and CSV errors.

/// Domain-level errors for value validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Zone text was not a positive decimal integer
    #[error("invalid zone {value:?}: {reason}")]
    InvalidZone { value: String, reason: &'static str },

    /// Timestamp text did not match `YYYY-MM-DDTHH:MM:SS`
    #[error("invalid timestamp {value:?}: expected YYYY-MM-DDTHH:MM:SS")]
    InvalidTimestamp { value: String },
}
