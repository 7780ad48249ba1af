//! Error types for the pool recommender
//!
//! Two failure tiers exist: construction-time validation errors abort a
//! recommendation call before any computation, while per-device data errors
//! only remove the offending device record from consideration.

use thiserror::Error;

/// Unified error type for the recommender
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("invalid RAID config: {raid_type} requires at least {minimum} devices per group, got {group_device_count}")]
    InvalidRaidConfig {
        raid_type: String,
        group_device_count: u64,
        minimum: u64,
    },

    #[error("requested capacity must be greater than zero")]
    ZeroCapacityRequest,

    // =========================================================================
    // Object Access Errors
    // =========================================================================
    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: String, found: String },

    #[error("field not found: {path}")]
    FieldNotFound { path: String },

    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: String,
    },

    // =========================================================================
    // Parse Errors
    // =========================================================================
    #[error("capacity parse error: {0}")]
    CapacityParse(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error is a construction-time validation failure.
    ///
    /// Validation failures are fatal to the whole recommendation call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidRaidConfig { .. } | Error::ZeroCapacityRequest
        )
    }

    /// Whether this error concerns a single device record.
    ///
    /// Per-device errors drop that record from consideration and never
    /// abort the batch.
    pub fn is_device_data(&self) -> bool {
        matches!(
            self,
            Error::KindMismatch { .. }
                | Error::FieldNotFound { .. }
                | Error::TypeMismatch { .. }
                | Error::CapacityParse(_)
        )
    }
}

/// Result type alias for the recommender
pub type Result<T> = std::result::Result<T, Error>;
