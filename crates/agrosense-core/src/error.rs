use thiserror::Error;

use crate::types::{SensorId, SubmissionKey, Timestamp};

#[derive(Debug, Error)]
pub enum AgroError {
    // ── Authorization ────────────────────────────────────────────────────────
    #[error("caller is not authorized for this operation")]
    Unauthorized,

    // ── Submission input validation ──────────────────────────────────────────
    #[error("farm id must be greater than zero")]
    InvalidFarmId,

    #[error("sensor id must be greater than zero")]
    InvalidSensorId,

    #[error("data hash must be {expected} characters, got {got}")]
    InvalidHash { expected: usize, got: usize },

    #[error("moisture {got} outside [{min}, {max}]")]
    InvalidMoisture { got: f64, min: f64, max: f64 },

    #[error("ph {got} outside [{min}, {max}]")]
    InvalidPh { got: f64, min: f64, max: f64 },

    #[error("nutrients {got} outside [{min}, {max}]")]
    InvalidNutrients { got: f64, min: f64, max: f64 },

    #[error("temperature {got} outside [{min}, {max}]")]
    InvalidTemperature { got: f64, min: f64, max: f64 },

    // ── Admission policy ─────────────────────────────────────────────────────
    #[error("oracle principal has not been configured")]
    OracleNotSet,

    #[error("sensor not registered: {0}")]
    SensorNotRegistered(SensorId),

    #[error("farm has reached its submission quota of {max}")]
    MaxSubmissionsExceeded { max: u64 },

    #[error("duplicate submission: {0}")]
    DuplicateSubmission(SubmissionKey),

    #[error("timestamp {got} not after farm's last accepted {last}")]
    TimestampInvalid { got: Timestamp, last: Timestamp },

    #[error("data validator rejected the submission")]
    ValidationFailed,

    // ── Reward claims ────────────────────────────────────────────────────────
    #[error("submission not found: {0}")]
    SubmissionNotFound(SubmissionKey),

    #[error("reward claim failed: already claimed or mint rejected")]
    RewardClaimFailed,

    // ── Configuration ────────────────────────────────────────────────────────
    #[error("config value must be greater than zero")]
    InvalidConfigValue,

    // ── Serialization / storage ──────────────────────────────────────────────
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("storage error: {0}")]
    Storage(String),

    // ── Programming-error guards ─────────────────────────────────────────────
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}
