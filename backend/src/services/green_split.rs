//! Effective green-time allocator.
//!
//! Splits the effective green period (tc − Tp) across phases in proportion
//! to their flow ratios, flags greens under the 12 s safety floor, and
//! optionally runs a single rebalancing pass around the shortest phase.

use crate::models::FlowSet;
use crate::routes::green_split::{GreenSplit, RebalanceInfo, RebalanceStrategy};
use crate::services::error::{CalcError, CalcResult};

/// Safety floor for an effective green time (s).
pub const MIN_GREEN_S: u32 = 12;

/// Nearest-second split of the effective green period by proportion.
///
/// Per-phase rounding drifts independently, so the greens may sum to a few
/// seconds off the effective green period.
fn split_greens(cycle_s: f64, lost_time_s: f64, proportions: &[f64]) -> Vec<u32> {
    let effective_green = cycle_s - lost_time_s;
    proportions
        .iter()
        .map(|p| (effective_green * p).round() as u32)
        .collect()
}

/// Allocate effective green times for a cycle.
///
/// When some phase lands under [`MIN_GREEN_S`] and a strategy was selected,
/// one rebalancing pass recomputes every green from a stretched cycle using
/// the same proportions. The pass is deliberately not iterated: a phase
/// still under the floor afterwards is reported in `below_minimum` and
/// accepted as-is.
pub fn allocate_green_times(
    cycle_s: f64,
    lost_time_s: f64,
    flow_set: &FlowSet,
    strategy: Option<RebalanceStrategy>,
) -> CalcResult<GreenSplit> {
    if cycle_s <= 0.0 {
        return Err(CalcError::InvalidInput(
            "cycle length must be positive".into(),
        ));
    }
    if lost_time_s < 0.0 {
        return Err(CalcError::InvalidInput(
            "lost time cannot be negative".into(),
        ));
    }
    if cycle_s <= lost_time_s {
        return Err(CalcError::InvalidInput(format!(
            "cycle length ({cycle_s} s) must exceed the lost time ({lost_time_s} s)"
        )));
    }

    let flow_ratios = flow_set.flow_ratios();
    let flow_ratio_sum: f64 = flow_ratios.iter().sum();
    if flow_ratio_sum == 0.0 {
        return Err(CalcError::ZeroFlowRatioSum);
    }

    let proportions: Vec<f64> = flow_ratios.iter().map(|y| y / flow_ratio_sum).collect();

    let mut green_times = split_greens(cycle_s, lost_time_s, &proportions);
    let mut cycle_used = cycle_s;
    let mut rebalance = None;

    // the flow set is non-empty, so a minimum always exists
    let min_green = green_times.iter().copied().min().unwrap_or(MIN_GREEN_S);
    if min_green < MIN_GREEN_S {
        if let Some(strategy) = strategy {
            let pivot_phase = green_times
                .iter()
                .position(|g| *g == min_green)
                .unwrap_or(0);

            let new_cycle = match strategy {
                RebalanceStrategy::Proportional => {
                    if min_green == 0 {
                        return Err(CalcError::InvalidInput(
                            "cannot rebalance around a zero green time".into(),
                        ));
                    }
                    ((MIN_GREEN_S as f64 / min_green as f64) * cycle_s).round()
                }
                RebalanceStrategy::FixedSaturation => {
                    let p_min = proportions[pivot_phase];
                    if p_min <= 0.0 {
                        return Err(CalcError::InvalidInput(
                            "cannot rebalance around a phase with zero flow ratio".into(),
                        ));
                    }
                    ((MIN_GREEN_S as f64 + lost_time_s) / p_min).round()
                }
            };

            green_times = split_greens(new_cycle, lost_time_s, &proportions);
            rebalance = Some(RebalanceInfo {
                strategy,
                pivot_phase,
                original_cycle_s: cycle_s,
                new_cycle_s: new_cycle as u32,
            });
            cycle_used = new_cycle;
        }
    }

    let below_minimum = green_times
        .iter()
        .enumerate()
        .filter(|(_, g)| **g < MIN_GREEN_S)
        .map(|(idx, _)| idx)
        .collect();

    Ok(GreenSplit {
        green_times_s: green_times,
        cycle_s: cycle_used,
        lost_time_s,
        effective_green_s: cycle_used - lost_time_s,
        flow_ratios,
        flow_ratio_sum,
        below_minimum,
        rebalance,
    })
}
