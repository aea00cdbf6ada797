/// ─── AgroSense Protocol Constants ───────────────────────────────────────────
///
/// Soil-sensor readings are admitted against fixed numeric ranges; quota and
/// reward defaults apply until an administrator overrides them.

// ── Submission format ────────────────────────────────────────────────────────

/// Required length of the off-system data hash (hex characters).
pub const DATA_HASH_LEN: usize = 64;

// ── Metric ranges (inclusive) ────────────────────────────────────────────────

/// Soil moisture, percent of saturation.
pub const MOISTURE_MIN: f64 = 0.0;
pub const MOISTURE_MAX: f64 = 100.0;

/// Soil pH on the standard scale.
pub const PH_MIN: f64 = 0.0;
pub const PH_MAX: f64 = 14.0;

/// Aggregate nutrient index (ppm).
pub const NUTRIENTS_MIN: f64 = 0.0;
pub const NUTRIENTS_MAX: f64 = 1000.0;

/// Soil temperature, degrees Celsius.
pub const TEMPERATURE_MIN: f64 = -50.0;
pub const TEMPERATURE_MAX: f64 = 60.0;

// ── Config defaults ──────────────────────────────────────────────────────────

/// Per-farm submission quota until overridden by an administrator.
pub const DEFAULT_MAX_SUBMISSIONS_PER_FARM: u64 = 1000;

/// Flat reward paid per validated submission, in token base units.
pub const DEFAULT_REWARD_PER_SUBMISSION: u64 = 10;
