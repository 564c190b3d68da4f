use serde::{Deserialize, Serialize};

// =========================================================
// Effective green-time types
// =========================================================

/// How to stretch the cycle when a phase falls under the 12 s green floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RebalanceStrategy {
    /// Scale the whole cycle so the shortest green reaches the floor:
    /// `tc' = round((12 / green_min) · tc)`.
    Proportional,
    /// Size the cycle from the pivot's share at the floor:
    /// `tc' = round((12 + Tp) / p_min)`.
    FixedSaturation,
}

/// Record of a single rebalancing pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebalanceInfo {
    pub strategy: RebalanceStrategy,
    /// Zero-based index of the phase whose green drove the rebalance.
    pub pivot_phase: usize,
    /// Cycle length the greens were first split from (s).
    pub original_cycle_s: f64,
    /// Rebalanced cycle length (s, whole seconds).
    pub new_cycle_s: u32,
}

/// Effective green-time split across all phases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreenSplit {
    /// Per-phase effective green times (s), nearest-second rounding.
    pub green_times_s: Vec<u32>,
    /// Cycle length the final greens were split from (s); differs from the
    /// requested cycle only after a rebalance.
    pub cycle_s: f64,
    /// Lost time Tp used for the split (s).
    pub lost_time_s: f64,
    /// Effective green period tc − Tp (s).
    pub effective_green_s: f64,
    /// Per-phase flow ratios yi.
    pub flow_ratios: Vec<f64>,
    /// Σyi.
    pub flow_ratio_sum: f64,
    /// Indices of phases whose final green is still under the 12 s floor.
    pub below_minimum: Vec<usize>,
    /// Present when a rebalancing pass was applied.
    pub rebalance: Option<RebalanceInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_serde_names() {
        assert_eq!(
            serde_json::to_string(&RebalanceStrategy::Proportional).unwrap(),
            "\"proportional\""
        );
        assert_eq!(
            serde_json::to_string(&RebalanceStrategy::FixedSaturation).unwrap(),
            "\"fixed-saturation\""
        );
        let back: RebalanceStrategy = serde_json::from_str("\"fixed-saturation\"").unwrap();
        assert_eq!(back, RebalanceStrategy::FixedSaturation);
    }

    #[test]
    fn test_green_split_roundtrip() {
        let split = GreenSplit {
            green_times_s: vec![31, 10, 10],
            cycle_s: 60.0,
            lost_time_s: 9.0,
            effective_green_s: 51.0,
            flow_ratios: vec![0.5, 1.0 / 6.0, 1.0 / 6.0],
            flow_ratio_sum: 5.0 / 6.0,
            below_minimum: vec![1, 2],
            rebalance: None,
        };
        let json = serde_json::to_string(&split).unwrap();
        let back: GreenSplit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, split);
    }
}
