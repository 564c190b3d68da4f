use serde::{Deserialize, Serialize};

use crate::services::error::{CalcError, CalcResult};

/// Standard gravity used by the braking term of the yellow-time formula (m/s²).
pub const GRAVITY_MS2: f64 = 9.8;

/// Geometric and kinematic parameters of one signalized phase.
///
/// All values come straight from the intersection survey form. A phase is
/// rebuilt from the form on every recomputation and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    /// Clearance distance d2 travelled during the all-red interval (m).
    pub clearance_distance_m: f64,
    /// Approach speed (km/h).
    pub approach_speed_kmh: f64,
    /// Maximum comfortable deceleration rate (m/s²).
    pub max_deceleration_ms2: f64,
    /// Driver reaction time (s).
    pub reaction_time_s: f64,
    /// Signed roadway grade as a fraction (0.03 for a 3% upgrade).
    pub grade: f64,
    /// Design vehicle length (m).
    pub vehicle_length_m: f64,
    /// Single-interval controllers show the whole clearance as one indication.
    #[serde(default)]
    pub legacy_controller: bool,
    /// A pedestrian crossing in the following stage adds one second of all-red.
    #[serde(default)]
    pub pedestrian_crossing: bool,
}

impl Phase {
    /// Approach speed converted to m/s.
    pub fn approach_speed_ms(&self) -> f64 {
        self.approach_speed_kmh / 3.6
    }

    /// Grade-corrected braking rate, the denominator term of the yellow-time
    /// formula: `aad + i·g`.
    pub fn braking_rate_ms2(&self) -> f64 {
        self.max_deceleration_ms2 + self.grade * GRAVITY_MS2
    }

    /// Check that every parameter is in the formula's positive domain.
    ///
    /// Speed must be strictly positive (it divides the all-red term), and a
    /// downgrade steep enough to cancel the deceleration rate leaves the
    /// yellow-time formula without a physical solution.
    pub fn validate(&self) -> CalcResult<()> {
        if self.approach_speed_kmh <= 0.0 {
            return Err(CalcError::InvalidInput(
                "approach speed must be positive".into(),
            ));
        }
        if self.clearance_distance_m <= 0.0 {
            return Err(CalcError::InvalidInput(
                "clearance distance must be positive".into(),
            ));
        }
        if self.max_deceleration_ms2 <= 0.0 {
            return Err(CalcError::InvalidInput(
                "maximum deceleration rate must be positive".into(),
            ));
        }
        if self.reaction_time_s < 0.0 {
            return Err(CalcError::InvalidInput(
                "reaction time cannot be negative".into(),
            ));
        }
        if self.vehicle_length_m < 0.0 {
            return Err(CalcError::InvalidInput(
                "vehicle length cannot be negative".into(),
            ));
        }
        if self.braking_rate_ms2() <= 0.0 {
            return Err(CalcError::InvalidInput(format!(
                "grade {:.2} cancels the available braking rate",
                self.grade
            )));
        }
        Ok(())
    }
}
