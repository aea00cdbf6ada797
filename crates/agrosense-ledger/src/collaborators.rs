//! Capability interfaces for the external systems the core calls out to.
//!
//! Each collaborator exposes exactly one operation. Registry and validator
//! failures reject the submission; a token mint failure rejects the claim;
//! alert and analytics failures are logged and otherwise ignored (the
//! ledger write is the success boundary).

use thiserror::Error;

use agrosense_core::{FarmId, Metrics, Principal, SensorId};

/// A collaborator call that did not complete. The engine maps this to the
/// rejection appropriate to the call site; the message is for logs only.
#[derive(Debug, Error)]
#[error("collaborator call failed: {0}")]
pub struct CollabError(pub String);

pub type CollabResult<T> = Result<T, CollabError>;

/// Sensor identity registry. False or failure ⇒ SensorNotRegistered.
pub trait SensorRegistry {
    fn is_registered(&self, sensor_id: SensorId) -> CollabResult<bool>;
}

/// Semantic data-quality validation. False or failure ⇒ ValidationFailed.
pub trait DataValidator {
    fn validate_data(&self, metrics: &Metrics) -> CollabResult<bool>;
}

/// Reward token mint. Failure ⇒ RewardClaimFailed, no ledger mutation.
pub trait TokenContract {
    fn mint(&self, amount: u64, recipient: &Principal) -> CollabResult<()>;
}

/// Post-commit alerting. Best-effort; the result never affects the caller.
pub trait AlertSystem {
    fn trigger_alert(&self, farm_id: FarmId, sensor_id: SensorId, metrics: &Metrics)
        -> CollabResult<()>;
}

/// Post-commit analytics feed. Best-effort; the result never affects the caller.
pub trait AnalyticsEngine {
    fn update_analytics(&self, farm_id: FarmId, metrics: &Metrics) -> CollabResult<()>;
}
