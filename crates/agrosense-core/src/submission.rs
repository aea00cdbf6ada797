use serde::{Deserialize, Serialize};

use crate::metrics::Metrics;
use crate::types::{Principal, Timestamp};

// ── Submission ───────────────────────────────────────────────────────────────

/// One accepted soil reading. Created exactly once per `SubmissionKey`;
/// `validated` is set at creation and never changes afterwards, while
/// `reward_claimed` transitions false→true exactly once and never reverts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Hash of the raw sensor payload, computed off-system. 64 hex chars.
    pub data_hash: String,
    pub metrics: Metrics,
    /// The operator who submitted the reading; the only principal allowed
    /// to claim its reward.
    pub submitter: Principal,
    pub validated: bool,
    pub reward_claimed: bool,
}

impl Submission {
    /// A freshly admitted submission: validation has already passed, the
    /// reward is still unclaimed.
    pub fn accepted(data_hash: String, metrics: Metrics, submitter: Principal) -> Self {
        Self {
            data_hash,
            metrics,
            submitter,
            validated: true,
            reward_claimed: false,
        }
    }
}

// ── SubmissionHistory ────────────────────────────────────────────────────────

/// Per-farm acceptance history. `last_submitted_at` is strictly increasing
/// across accepted submissions for the farm; `count` equals the number of
/// accepted submissions. Absent history means zero prior submissions and
/// admits any timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionHistory {
    pub count: u64,
    pub last_submitted_at: Timestamp,
}

impl SubmissionHistory {
    /// History after one more acceptance at `at`.
    pub fn advanced(self, at: Timestamp) -> Self {
        Self { count: self.count + 1, last_submitted_at: at }
    }

    /// Whether a submission at `at` satisfies the farm's strict ordering.
    pub fn admits(&self, at: Timestamp) -> bool {
        at > self.last_submitted_at
    }
}
