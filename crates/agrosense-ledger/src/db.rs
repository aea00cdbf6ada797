use std::path::Path;

use agrosense_core::{AgroError, FarmId, Submission, SubmissionHistory, SubmissionKey};

use crate::config::Config;

const META_CONFIG: &str = "config";
const META_SUBMISSION_COUNTER: &str = "submission_counter";
const META_TOTAL_REWARDS: &str = "total_rewards_claimed";

/// Persistent ledger database backed by sled (pure-Rust, no C dependencies).
///
/// Named trees (analogous to column families):
///   submissions — SubmissionKey bytes → bincode(Submission)
///   history     — FarmId BE bytes     → bincode(SubmissionHistory)
///   farm_counts — FarmId BE bytes     → u64 BE
///   meta        — utf8 key bytes      → bincode(Config) / u64 BE counters
pub struct LedgerDb {
    _db: sled::Db,
    submissions: sled::Tree,
    history: sled::Tree,
    farm_counts: sled::Tree,
    meta: sled::Tree,
}

impl LedgerDb {
    /// Open or create the ledger database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AgroError> {
        let db = sled::open(path).map_err(|e| AgroError::Storage(e.to_string()))?;
        let submissions = db.open_tree("submissions").map_err(|e| AgroError::Storage(e.to_string()))?;
        let history     = db.open_tree("history").map_err(|e| AgroError::Storage(e.to_string()))?;
        let farm_counts = db.open_tree("farm_counts").map_err(|e| AgroError::Storage(e.to_string()))?;
        let meta        = db.open_tree("meta").map_err(|e| AgroError::Storage(e.to_string()))?;
        Ok(Self { _db: db, submissions, history, farm_counts, meta })
    }

    // ── Submissions ──────────────────────────────────────────────────────────

    pub fn get_submission(&self, key: &SubmissionKey) -> Result<Option<Submission>, AgroError> {
        match self.submissions.get(key.to_bytes()).map_err(|e| AgroError::Storage(e.to_string()))? {
            Some(bytes) => {
                let sub = bincode::deserialize(&bytes)
                    .map_err(|e| AgroError::Serialization(e.to_string()))?;
                Ok(Some(sub))
            }
            None => Ok(None),
        }
    }

    pub fn contains(&self, key: &SubmissionKey) -> bool {
        self.submissions.contains_key(key.to_bytes()).unwrap_or(false)
    }

    /// Store an accepted submission and every record that moves with it:
    /// the farm count, the farm history, and the global acceptance counter.
    ///
    /// Callers must have pre-checked uniqueness; a present key here is a
    /// programming error, not a user-facing validation path.
    pub fn insert_submission(
        &self,
        key: &SubmissionKey,
        submission: &Submission,
    ) -> Result<(), AgroError> {
        if self.contains(key) {
            return Err(AgroError::InternalInvariantViolation(format!(
                "insert over existing submission key {key}"
            )));
        }

        let bytes = bincode::serialize(submission)
            .map_err(|e| AgroError::Serialization(e.to_string()))?;
        self.submissions
            .insert(key.to_bytes(), bytes)
            .map_err(|e| AgroError::Storage(e.to_string()))?;

        let count = self.count_of(key.farm_id)?;
        self.farm_counts
            .insert(key.farm_id.to_be_bytes(), (count + 1).to_be_bytes().as_ref())
            .map_err(|e| AgroError::Storage(e.to_string()))?;

        let history = self
            .get_history(key.farm_id)?
            .unwrap_or(SubmissionHistory { count: 0, last_submitted_at: 0 })
            .advanced(key.submitted_at);
        self.put_history(key.farm_id, &history)?;

        let total = self.total_submissions()?;
        self.put_counter(META_SUBMISSION_COUNTER, total + 1)?;
        Ok(())
    }

    /// Flip `reward_claimed` in place, leaving every other field unchanged.
    pub fn mark_reward_claimed(&self, key: &SubmissionKey) -> Result<(), AgroError> {
        let mut sub = self
            .get_submission(key)?
            .ok_or(AgroError::SubmissionNotFound(*key))?;
        if sub.reward_claimed {
            return Err(AgroError::RewardClaimFailed);
        }
        sub.reward_claimed = true;
        let bytes = bincode::serialize(&sub)
            .map_err(|e| AgroError::Serialization(e.to_string()))?;
        self.submissions
            .insert(key.to_bytes(), bytes)
            .map_err(|e| AgroError::Storage(e.to_string()))?;
        Ok(())
    }

    // ── Per-farm records ─────────────────────────────────────────────────────

    pub fn get_history(&self, farm_id: FarmId) -> Result<Option<SubmissionHistory>, AgroError> {
        match self.history.get(farm_id.to_be_bytes()).map_err(|e| AgroError::Storage(e.to_string()))? {
            Some(bytes) => {
                let h = bincode::deserialize(&bytes)
                    .map_err(|e| AgroError::Serialization(e.to_string()))?;
                Ok(Some(h))
            }
            None => Ok(None),
        }
    }

    fn put_history(&self, farm_id: FarmId, history: &SubmissionHistory) -> Result<(), AgroError> {
        let bytes = bincode::serialize(history)
            .map_err(|e| AgroError::Serialization(e.to_string()))?;
        self.history
            .insert(farm_id.to_be_bytes(), bytes)
            .map_err(|e| AgroError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Accepted-submission count for a farm; 0 if the farm is unseen.
    pub fn count_of(&self, farm_id: FarmId) -> Result<u64, AgroError> {
        match self.farm_counts.get(farm_id.to_be_bytes()).map_err(|e| AgroError::Storage(e.to_string()))? {
            Some(bytes) => {
                let mut arr = [0u8; 8];
                arr.copy_from_slice(&bytes);
                Ok(u64::from_be_bytes(arr))
            }
            None => Ok(0),
        }
    }

    // ── Global counters ──────────────────────────────────────────────────────

    pub fn total_submissions(&self) -> Result<u64, AgroError> {
        self.get_counter(META_SUBMISSION_COUNTER)
    }

    pub fn total_rewards_claimed(&self) -> Result<u64, AgroError> {
        self.get_counter(META_TOTAL_REWARDS)
    }

    /// Add one successful claim's reward to the cumulative accumulator.
    pub fn add_rewards_claimed(&self, amount: u64) -> Result<(), AgroError> {
        let total = self.total_rewards_claimed()?;
        self.put_counter(META_TOTAL_REWARDS, total + amount)
    }

    fn get_counter(&self, name: &str) -> Result<u64, AgroError> {
        match self.meta.get(name.as_bytes()).map_err(|e| AgroError::Storage(e.to_string()))? {
            Some(bytes) => {
                let mut arr = [0u8; 8];
                arr.copy_from_slice(&bytes);
                Ok(u64::from_be_bytes(arr))
            }
            None => Ok(0),
        }
    }

    fn put_counter(&self, name: &str, value: u64) -> Result<(), AgroError> {
        self.meta
            .insert(name.as_bytes(), value.to_be_bytes().as_ref())
            .map_err(|e| AgroError::Storage(e.to_string()))?;
        Ok(())
    }

    // ── Config ───────────────────────────────────────────────────────────────

    pub fn get_config(&self) -> Result<Config, AgroError> {
        match self.meta.get(META_CONFIG.as_bytes()).map_err(|e| AgroError::Storage(e.to_string()))? {
            Some(bytes) => bincode::deserialize(&bytes)
                .map_err(|e| AgroError::Serialization(e.to_string())),
            None => Ok(Config::default()),
        }
    }

    pub fn put_config(&self, config: &Config) -> Result<(), AgroError> {
        let bytes = bincode::serialize(config)
            .map_err(|e| AgroError::Serialization(e.to_string()))?;
        self.meta
            .insert(META_CONFIG.as_bytes(), bytes)
            .map_err(|e| AgroError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Flush all pending writes to disk.
    pub fn flush(&self) -> Result<(), AgroError> {
        self._db.flush().map_err(|e| AgroError::Storage(e.to_string()))?;
        Ok(())
    }
}
