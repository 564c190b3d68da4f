use serde::{Deserialize, Serialize};

// =========================================================
// Webster optimal-cycle types
// =========================================================

/// Output of Webster's optimal-cycle computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleResult {
    /// Optimal cycle length (s), rounded to the nearest whole second.
    pub cycle_s: u32,
    /// Per-phase flow ratios yi, in phase order.
    pub flow_ratios: Vec<f64>,
    /// Σyi, strictly below 1.
    pub flow_ratio_sum: f64,
}
