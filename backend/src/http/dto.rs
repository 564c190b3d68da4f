//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The result DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Green split
    GreenSplit,
    RebalanceInfo,
    RebalanceStrategy,
    // Inter-green
    IntergreenResult,
    IntergreenTable,
    // Webster
    CycleResult,
};
pub use crate::services::session::SessionResults;

use crate::models::Phase;

/// Fewest phases a signal plan can have.
pub const MIN_PHASES: usize = 2;
/// Most phases the form accepts.
pub const MAX_PHASES: usize = 6;

/// Form bound on the roadway grade, in percent.
pub const MAX_GRADE_PERCENT: f64 = 30.0;

fn default_deceleration() -> f64 {
    3.0
}

fn default_reaction_time() -> f64 {
    1.0
}

fn default_vehicle_length() -> f64 {
    12.0
}

/// One phase's form fields, as entered.
///
/// Deceleration, reaction time, and vehicle length fall back to the form's
/// standard values when omitted; the grade arrives in percent and is
/// clamped to the form's ±30% range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseParams {
    /// Clearance distance d2 (m).
    pub clearance_distance_m: f64,
    /// Approach speed (km/h).
    pub approach_speed_kmh: f64,
    /// Maximum braking rate (m/s²), default 3.0.
    #[serde(default = "default_deceleration")]
    pub max_deceleration_ms2: f64,
    /// Driver reaction time (s), default 1.0.
    #[serde(default = "default_reaction_time")]
    pub reaction_time_s: f64,
    /// Roadway grade in percent (−30..30), default 0.
    #[serde(default)]
    pub grade_percent: f64,
    /// Design vehicle length (m), default 12.0.
    #[serde(default = "default_vehicle_length")]
    pub vehicle_length_m: f64,
    /// Old single-interval controller.
    #[serde(default)]
    pub legacy_controller: bool,
    /// Pedestrian crossing in the subsequent stage.
    #[serde(default)]
    pub pedestrian_crossing: bool,
}

impl From<PhaseParams> for Phase {
    fn from(params: PhaseParams) -> Self {
        Phase {
            clearance_distance_m: params.clearance_distance_m,
            approach_speed_kmh: params.approach_speed_kmh,
            max_deceleration_ms2: params.max_deceleration_ms2,
            reaction_time_s: params.reaction_time_s,
            grade: params
                .grade_percent
                .clamp(-MAX_GRADE_PERCENT, MAX_GRADE_PERCENT)
                / 100.0,
            vehicle_length_m: params.vehicle_length_m,
            legacy_controller: params.legacy_controller,
            pedestrian_crossing: params.pedestrian_crossing,
        }
    }
}

/// Request body for the inter-green table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntergreenRequest {
    /// One entry per phase, 2 to 6 phases.
    pub phases: Vec<PhaseParams>,
}

/// Request body for Webster's optimal cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsterRequest {
    /// Per-phase vehicle flows (veh/h).
    pub flows_vph: Vec<f64>,
    /// Per-phase saturation flows (veh/h).
    pub saturations_vph: Vec<f64>,
    /// Total lost time Tp (s); defaults to the session's inter-green Tp.
    #[serde(default)]
    pub lost_time_s: Option<f64>,
}

/// Request body for the effective green-time split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreenSplitRequest {
    /// Per-phase vehicle flows (veh/h).
    pub flows_vph: Vec<f64>,
    /// Per-phase saturation flows (veh/h).
    pub saturations_vph: Vec<f64>,
    /// Cycle length (s); defaults to the session's Webster cycle.
    #[serde(default)]
    pub cycle_s: Option<f64>,
    /// Total lost time Tp (s); defaults to the session's inter-green Tp.
    #[serde(default)]
    pub lost_time_s: Option<f64>,
    /// Rebalancing strategy for greens under the 12 s floor; omit to only
    /// report the shortfall.
    #[serde(default)]
    pub strategy: Option<RebalanceStrategy>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}
