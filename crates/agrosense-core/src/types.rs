use serde::{Deserialize, Serialize};
use std::fmt;

/// Farm identifier assigned off-system. Zero is never valid.
pub type FarmId = u64;

/// Sensor identifier assigned by the registry collaborator. Zero is never valid.
pub type SensorId = u64;

/// Monotonically increasing tick supplied by the execution environment.
/// The core never reads a clock itself; each operation receives one value.
pub type Timestamp = u64;

// ── Principal ────────────────────────────────────────────────────────────────

/// Opaque caller identity supplied by the runtime. The core compares
/// principals for equality and never inspects their contents.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal(pub String);

impl Principal {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", self.0)
    }
}

// ── SubmissionKey ────────────────────────────────────────────────────────────

/// Structural composite key uniquely identifying one accepted reading.
///
/// Keys are compared field-wise; the byte form is a fixed-width big-endian
/// concatenation, so no separator collisions are possible and sled iterates
/// keys in (farm, sensor, time) order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubmissionKey {
    pub farm_id: FarmId,
    pub sensor_id: SensorId,
    pub submitted_at: Timestamp,
}

impl SubmissionKey {
    pub fn new(farm_id: FarmId, sensor_id: SensorId, submitted_at: Timestamp) -> Self {
        Self { farm_id, sensor_id, submitted_at }
    }

    /// 24-byte storage encoding: farm ‖ sensor ‖ time, each u64 big-endian.
    pub fn to_bytes(&self) -> [u8; 24] {
        let mut out = [0u8; 24];
        out[..8].copy_from_slice(&self.farm_id.to_be_bytes());
        out[8..16].copy_from_slice(&self.sensor_id.to_be_bytes());
        out[16..].copy_from_slice(&self.submitted_at.to_be_bytes());
        out
    }

    pub fn from_bytes(b: [u8; 24]) -> Self {
        let mut f = [0u8; 8];
        let mut s = [0u8; 8];
        let mut t = [0u8; 8];
        f.copy_from_slice(&b[..8]);
        s.copy_from_slice(&b[8..16]);
        t.copy_from_slice(&b[16..]);
        Self {
            farm_id: u64::from_be_bytes(f),
            sensor_id: u64::from_be_bytes(s),
            submitted_at: u64::from_be_bytes(t),
        }
    }
}

impl fmt::Display for SubmissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.farm_id, self.sensor_id, self.submitted_at)
    }
}

impl fmt::Debug for SubmissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SubmissionKey({}/{}/{})",
            self.farm_id, self.sensor_id, self.submitted_at
        )
    }
}
