use serde::{Deserialize, Serialize};

use crate::constants::{
    MOISTURE_MAX, MOISTURE_MIN, NUTRIENTS_MAX, NUTRIENTS_MIN, PH_MAX, PH_MIN,
    TEMPERATURE_MAX, TEMPERATURE_MIN,
};
use crate::error::AgroError;

/// One soil reading as reported by a sensor. Pure value type; validated
/// wholesale before a submission record is ever constructed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Percent of saturation, [0, 100].
    pub moisture: f64,
    /// Standard pH scale, [0, 14].
    pub ph: f64,
    /// Aggregate nutrient index in ppm, [0, 1000].
    pub nutrients: f64,
    /// Degrees Celsius, [-50, 60].
    pub temperature: f64,
}

impl Metrics {
    /// Check every field against its declared range. Fields are checked in
    /// fixed order (moisture, ph, nutrients, temperature); the first
    /// out-of-range field rejects the whole reading.
    pub fn validate(&self) -> Result<(), AgroError> {
        if !(MOISTURE_MIN..=MOISTURE_MAX).contains(&self.moisture) {
            return Err(AgroError::InvalidMoisture {
                got: self.moisture,
                min: MOISTURE_MIN,
                max: MOISTURE_MAX,
            });
        }
        if !(PH_MIN..=PH_MAX).contains(&self.ph) {
            return Err(AgroError::InvalidPh {
                got: self.ph,
                min: PH_MIN,
                max: PH_MAX,
            });
        }
        if !(NUTRIENTS_MIN..=NUTRIENTS_MAX).contains(&self.nutrients) {
            return Err(AgroError::InvalidNutrients {
                got: self.nutrients,
                min: NUTRIENTS_MIN,
                max: NUTRIENTS_MAX,
            });
        }
        if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&self.temperature) {
            return Err(AgroError::InvalidTemperature {
                got: self.temperature,
                min: TEMPERATURE_MIN,
                max: TEMPERATURE_MAX,
            });
        }
        Ok(())
    }
}
