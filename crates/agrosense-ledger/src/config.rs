use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use agrosense_core::{
    AgroError, Principal, DEFAULT_MAX_SUBMISSIONS_PER_FARM, DEFAULT_REWARD_PER_SUBMISSION,
};

use crate::db::LedgerDb;

// ── Config record ────────────────────────────────────────────────────────────

/// Process-wide policy knobs. Deployed with the oracle unset, which rejects
/// every submission until an administrator configures one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub oracle_principal: Option<Principal>,
    pub max_submissions_per_farm: u64,
    pub reward_per_submission: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            oracle_principal: None,
            max_submissions_per_farm: DEFAULT_MAX_SUBMISSIONS_PER_FARM,
            reward_per_submission: DEFAULT_REWARD_PER_SUBMISSION,
        }
    }
}

// ── ConfigStore ──────────────────────────────────────────────────────────────

/// Admin-gated mutation entry points over the persisted config record.
///
/// The administrative identity is fixed at construction (the deploying
/// principal); every setter rejects other callers with `Unauthorized`.
pub struct ConfigStore {
    db: Arc<LedgerDb>,
    admin: Principal,
}

impl ConfigStore {
    pub fn new(db: Arc<LedgerDb>, admin: Principal) -> Self {
        Self { db, admin }
    }

    /// Replace the oracle principal unconditionally. No validation of the
    /// new value beyond it being a well-formed identity.
    pub fn set_oracle_principal(
        &self,
        caller: &Principal,
        new_oracle: Principal,
    ) -> Result<(), AgroError> {
        self.require_admin(caller)?;
        let mut config = self.db.get_config()?;
        config.oracle_principal = Some(new_oracle.clone());
        self.db.put_config(&config)?;
        info!(oracle = %new_oracle, "oracle principal updated");
        Ok(())
    }

    /// Lower or raise the per-farm quota. Farms already at or above a new,
    /// lower max are unaffected until their next submission fails the quota
    /// check.
    pub fn set_max_submissions_per_farm(
        &self,
        caller: &Principal,
        new_max: u64,
    ) -> Result<(), AgroError> {
        self.require_admin(caller)?;
        if new_max == 0 {
            return Err(AgroError::InvalidConfigValue);
        }
        let mut config = self.db.get_config()?;
        config.max_submissions_per_farm = new_max;
        self.db.put_config(&config)?;
        info!(max = new_max, "per-farm quota updated");
        Ok(())
    }

    pub fn set_reward_per_submission(
        &self,
        caller: &Principal,
        new_reward: u64,
    ) -> Result<(), AgroError> {
        self.require_admin(caller)?;
        if new_reward == 0 {
            return Err(AgroError::InvalidConfigValue);
        }
        let mut config = self.db.get_config()?;
        config.reward_per_submission = new_reward;
        self.db.put_config(&config)?;
        info!(reward = new_reward, "reward per submission updated");
        Ok(())
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn oracle_principal(&self) -> Result<Option<Principal>, AgroError> {
        Ok(self.db.get_config()?.oracle_principal)
    }

    pub fn max_submissions_per_farm(&self) -> Result<u64, AgroError> {
        Ok(self.db.get_config()?.max_submissions_per_farm)
    }

    pub fn reward_per_submission(&self) -> Result<u64, AgroError> {
        Ok(self.db.get_config()?.reward_per_submission)
    }

    fn require_admin(&self, caller: &Principal) -> Result<(), AgroError> {
        if *caller != self.admin {
            return Err(AgroError::Unauthorized);
        }
        Ok(())
    }
}
