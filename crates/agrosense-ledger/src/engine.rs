use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};

use agrosense_core::{
    AgroError, FarmId, Metrics, Principal, SensorId, Submission, SubmissionHistory,
    SubmissionKey, Timestamp, DATA_HASH_LEN,
};

use crate::collaborators::{
    AlertSystem, AnalyticsEngine, DataValidator, SensorRegistry, TokenContract,
};
use crate::db::LedgerDb;

/// The submission orchestration engine.
///
/// Validates soil readings against the admission policy and commits them to
/// the ledger; manages the exactly-once reward-claim transition. Every
/// operation runs under a process-wide write lock: the uniqueness, quota,
/// and ordering checks are read-then-write sequences that must not
/// interleave with another writer.
pub struct SubmissionEngine {
    pub db: Arc<LedgerDb>,
    write_lock: Mutex<()>,
}

impl SubmissionEngine {
    pub fn new(db: Arc<LedgerDb>) -> Self {
        Self { db, write_lock: Mutex::new(()) }
    }

    fn write_guard(&self) -> MutexGuard<'_, ()> {
        // A poisoned lock only means a previous caller panicked between
        // checks; the ledger itself is still consistent (every operation
        // commits in full or not at all), so recover the guard.
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Submit ───────────────────────────────────────────────────────────────

    /// Validate and admit one soil reading. Checks run cheapest-first; the
    /// first failure short-circuits with no state mutated. Returns the
    /// derived `SubmissionKey` on acceptance.
    #[allow(clippy::too_many_arguments)]
    pub fn submit(
        &self,
        caller: &Principal,
        farm_id: FarmId,
        sensor_id: SensorId,
        data_hash: &str,
        metrics: &Metrics,
        now: Timestamp,
        registry: &dyn SensorRegistry,
        validator: &dyn DataValidator,
        alerts: &dyn AlertSystem,
        analytics: &dyn AnalyticsEngine,
    ) -> Result<SubmissionKey, AgroError> {
        let _guard = self.write_guard();

        // ── Local input validation ────────────────────────────────────────────
        if farm_id == 0 {
            return Err(AgroError::InvalidFarmId);
        }
        if sensor_id == 0 {
            return Err(AgroError::InvalidSensorId);
        }
        if data_hash.len() != DATA_HASH_LEN {
            return Err(AgroError::InvalidHash {
                expected: DATA_HASH_LEN,
                got: data_hash.len(),
            });
        }
        metrics.validate()?;

        // ── Oracle gate ───────────────────────────────────────────────────────
        let config = self.db.get_config()?;
        if config.oracle_principal.is_none() {
            return Err(AgroError::OracleNotSet);
        }

        // ── Registry check ────────────────────────────────────────────────────
        match registry.is_registered(sensor_id) {
            Ok(true) => {}
            Ok(false) | Err(_) => return Err(AgroError::SensorNotRegistered(sensor_id)),
        }

        // ── Ledger-state checks, read freshest right before the write ─────────
        let farm_count = self.db.count_of(farm_id)?;
        if farm_count >= config.max_submissions_per_farm {
            return Err(AgroError::MaxSubmissionsExceeded {
                max: config.max_submissions_per_farm,
            });
        }

        let key = SubmissionKey::new(farm_id, sensor_id, now);
        if self.db.contains(&key) {
            return Err(AgroError::DuplicateSubmission(key));
        }

        // Ordering is farm-scoped: no two sensors on one farm may land on
        // the same tick. Absent history admits any timestamp.
        if let Some(history) = self.db.get_history(farm_id)? {
            if !history.admits(now) {
                return Err(AgroError::TimestampInvalid {
                    got: now,
                    last: history.last_submitted_at,
                });
            }
        }

        // ── Semantic validation ───────────────────────────────────────────────
        match validator.validate_data(metrics) {
            Ok(true) => {}
            Ok(false) | Err(_) => return Err(AgroError::ValidationFailed),
        }

        // ── Commit ────────────────────────────────────────────────────────────
        let submission = Submission::accepted(data_hash.to_owned(), *metrics, caller.clone());
        self.db.insert_submission(&key, &submission)?;
        info!(%key, submitter = %caller, "accepted submission");

        // The write above is the success boundary; notifications are
        // best-effort and never change the returned result.
        if let Err(e) = analytics.update_analytics(farm_id, metrics) {
            warn!(%key, error = %e, "analytics notification failed");
        }
        if let Err(e) = alerts.trigger_alert(farm_id, sensor_id, metrics) {
            warn!(%key, error = %e, "alert notification failed");
        }

        Ok(key)
    }

    // ── Claim reward ─────────────────────────────────────────────────────────

    /// Pay out the one-time reward for an accepted submission. The mint call
    /// happens before any ledger mutation, so a failed mint leaves the
    /// submission unclaimed and safely retryable.
    pub fn claim_reward(
        &self,
        caller: &Principal,
        farm_id: FarmId,
        sensor_id: SensorId,
        submitted_at: Timestamp,
        token: &dyn TokenContract,
    ) -> Result<(), AgroError> {
        let _guard = self.write_guard();

        let key = SubmissionKey::new(farm_id, sensor_id, submitted_at);
        let submission = self
            .db
            .get_submission(&key)?
            .ok_or(AgroError::SubmissionNotFound(key))?;

        if submission.submitter != *caller {
            return Err(AgroError::Unauthorized);
        }
        // Defensive: submit() always stores validated = true.
        if !submission.validated {
            return Err(AgroError::ValidationFailed);
        }
        if submission.reward_claimed {
            return Err(AgroError::RewardClaimFailed);
        }

        let reward = self.db.get_config()?.reward_per_submission;
        if token.mint(reward, caller).is_err() {
            return Err(AgroError::RewardClaimFailed);
        }

        self.db.mark_reward_claimed(&key)?;
        self.db.add_rewards_claimed(reward)?;
        info!(%key, recipient = %caller, reward, "reward claimed");
        Ok(())
    }

    // ── Read accessors ───────────────────────────────────────────────────────

    pub fn get_submission(
        &self,
        farm_id: FarmId,
        sensor_id: SensorId,
        submitted_at: Timestamp,
    ) -> Result<Option<Submission>, AgroError> {
        self.db
            .get_submission(&SubmissionKey::new(farm_id, sensor_id, submitted_at))
    }

    pub fn farm_submission_count(&self, farm_id: FarmId) -> Result<u64, AgroError> {
        self.db.count_of(farm_id)
    }

    pub fn farm_history(&self, farm_id: FarmId) -> Result<Option<SubmissionHistory>, AgroError> {
        self.db.get_history(farm_id)
    }

    pub fn total_submissions(&self) -> Result<u64, AgroError> {
        self.db.total_submissions()
    }

    pub fn total_rewards_claimed(&self) -> Result<u64, AgroError> {
        self.db.total_rewards_claimed()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
