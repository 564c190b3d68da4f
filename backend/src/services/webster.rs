//! Webster optimal-cycle calculator.
//!
//! `tc = (1.5·Tp + 5) / (1 − Σyi)`, the cycle length that minimizes
//! average vehicle delay for the given lost time and flow ratios.

use crate::models::FlowSet;
use crate::routes::webster::CycleResult;
use crate::services::error::{CalcError, CalcResult};

/// Compute Webster's optimal cycle length.
///
/// Fails with [`CalcError::Oversaturated`] when Σyi ≥ 1: the intersection
/// cannot clear its demand at any cycle length and the formula turns
/// negative.
pub fn compute_optimal_cycle(lost_time_s: f64, flow_set: &FlowSet) -> CalcResult<CycleResult> {
    if lost_time_s < 0.0 {
        return Err(CalcError::InvalidInput(
            "lost time cannot be negative".into(),
        ));
    }

    let flow_ratios = flow_set.flow_ratios();
    let flow_ratio_sum: f64 = flow_ratios.iter().sum();
    if flow_ratio_sum >= 1.0 {
        return Err(CalcError::Oversaturated { flow_ratio_sum });
    }

    let cycle = (1.5 * lost_time_s + 5.0) / (1.0 - flow_ratio_sum);

    Ok(CycleResult {
        cycle_s: cycle.round() as u32,
        flow_ratios,
        flow_ratio_sum,
    })
}
