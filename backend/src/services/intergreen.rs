//! Inter-green ("entreverdes") interval calculator.
//!
//! Computes the yellow and all-red clearance times between conflicting
//! phases from the kinematic formulas of MBST Volume V, applies the
//! manual's minimum-yellow floors and 5 s cap, and sums the per-phase
//! totals into the cycle's lost time Tp.

use crate::models::Phase;
use crate::routes::intergreen::{IntergreenResult, IntergreenTable};
use crate::services::error::{CalcError, CalcResult};

/// Yellow indications longer than this are shifted into the all-red.
pub const MAX_YELLOW_S: f64 = 5.0;

/// Minimum yellow time for the phase's speed band, if it falls in one.
///
/// The manual tabulates exact bands: up to 40 km/h, exactly 50 or 60, and
/// exactly 70. Speeds between the tabulated values (45, 65, ...) get no
/// floor; that is the tabulated behavior, not interpolated.
fn minimum_yellow_s(speed_kmh: f64) -> Option<f64> {
    if speed_kmh <= 40.0 {
        Some(3.0)
    } else if speed_kmh == 50.0 || speed_kmh == 60.0 {
        Some(4.0)
    } else if speed_kmh == 70.0 {
        Some(5.0)
    } else {
        None
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the inter-green interval for a single phase.
///
/// The total is the ceiling of yellow + red in whole seconds, so the
/// programmed interval never undercuts the computed clearance.
pub fn compute_intergreen(phase: &Phase) -> CalcResult<IntergreenResult> {
    phase.validate()?;

    let speed_ms = phase.approach_speed_ms();
    let yellow_raw = phase.reaction_time_s + speed_ms / (2.0 * phase.braking_rate_ms2());
    let red_raw = (phase.clearance_distance_m + phase.vehicle_length_m) / speed_ms;

    let mut yellow = yellow_raw;
    let mut red = red_raw;

    if let Some(floor) = minimum_yellow_s(phase.approach_speed_kmh) {
        if yellow < floor {
            yellow = floor;
        }
    }

    // Excess yellow is not discarded, it becomes all-red.
    if yellow > MAX_YELLOW_S {
        red += yellow - MAX_YELLOW_S;
        yellow = MAX_YELLOW_S;
    }

    // Single-interval controllers re-derive the split from the raw formula
    // values, replacing the floor/cap adjustments above.
    if phase.legacy_controller {
        let combined = yellow_raw + red_raw;
        if combined > MAX_YELLOW_S {
            yellow = MAX_YELLOW_S;
            red = combined - MAX_YELLOW_S;
        } else {
            yellow = combined;
            red = 0.0;
        }
    }

    if phase.pedestrian_crossing {
        red += 1.0;
    }

    Ok(IntergreenResult {
        yellow_s: round2(yellow),
        red_s: round2(red),
        total_s: (yellow + red).ceil() as u32,
    })
}

/// Compute the inter-green table for a whole cycle.
///
/// Tp is the sum of the per-phase whole-second totals.
pub fn compute_intergreen_table(phases: &[Phase]) -> CalcResult<IntergreenTable> {
    if phases.is_empty() {
        return Err(CalcError::InvalidInput(
            "at least one phase is required".into(),
        ));
    }

    let results: Vec<IntergreenResult> = phases
        .iter()
        .map(compute_intergreen)
        .collect::<CalcResult<_>>()?;
    let lost_time_s = results.iter().map(|r| r.total_s).sum();

    Ok(IntergreenTable {
        phases: results,
        lost_time_s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn phase(speed_kmh: f64) -> Phase {
        Phase {
            clearance_distance_m: 24.0,
            approach_speed_kmh: speed_kmh,
            max_deceleration_ms2: 3.0,
            reaction_time_s: 1.0,
            grade: 0.0,
            vehicle_length_m: 12.0,
            legacy_controller: false,
            pedestrian_crossing: false,
        }
    }

    #[test]
    fn test_manual_worked_example() {
        // d2=24, v=40, aad=3, tr=1, i=0, c=12: raw yellow 2.85 is floored
        // to 3, red = 36 / 11.11 = 3.24, total = ceil(6.24) = 7
        let result = compute_intergreen(&phase(40.0)).unwrap();
        assert_abs_diff_eq!(result.yellow_s, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.red_s, 3.24, epsilon = 1e-9);
        assert_eq!(result.total_s, 7);
    }

    #[test]
    fn test_minimum_yellow_bands() {
        // a short reaction time keeps the raw yellow under every floor
        let short = |v: f64| Phase {
            reaction_time_s: 0.0,
            max_deceleration_ms2: 8.0,
            ..phase(v)
        };
        assert_abs_diff_eq!(
            compute_intergreen(&short(30.0)).unwrap().yellow_s,
            3.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            compute_intergreen(&short(50.0)).unwrap().yellow_s,
            4.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            compute_intergreen(&short(60.0)).unwrap().yellow_s,
            4.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            compute_intergreen(&short(70.0)).unwrap().yellow_s,
            5.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_no_floor_between_bands() {
        // 45 km/h sits between tabulated values and gets no floor
        let p = Phase {
            reaction_time_s: 0.0,
            max_deceleration_ms2: 8.0,
            ..phase(45.0)
        };
        let raw = p.approach_speed_ms() / (2.0 * 8.0);
        let result = compute_intergreen(&p).unwrap();
        assert!(result.yellow_s < 3.0);
        assert_abs_diff_eq!(result.yellow_s, round2(raw), epsilon = 1e-9);
    }

    #[test]
    fn test_yellow_cap_moves_excess_into_red() {
        // v=80 (no band), tr=4: yellow_raw = 4 + 22.22/6 = 7.70
        let p = Phase {
            reaction_time_s: 4.0,
            ..phase(80.0)
        };
        let speed_ms = p.approach_speed_ms();
        let yellow_raw = 4.0 + speed_ms / 6.0;
        let red_raw = 36.0 / speed_ms;

        let result = compute_intergreen(&p).unwrap();
        assert_abs_diff_eq!(result.yellow_s, 5.0, epsilon = 1e-9);
        // the excess is conserved: yellow + red equals the raw sum
        assert_abs_diff_eq!(
            result.yellow_s + result.red_s,
            yellow_raw + red_raw,
            epsilon = 0.011
        );
    }

    #[test]
    fn test_pedestrian_crossing_adds_one_second_of_red() {
        let base = compute_intergreen(&phase(40.0)).unwrap();
        let with_ped = compute_intergreen(&Phase {
            pedestrian_crossing: true,
            ..phase(40.0)
        })
        .unwrap();
        assert_abs_diff_eq!(with_ped.yellow_s, base.yellow_s, epsilon = 1e-9);
        assert_abs_diff_eq!(with_ped.red_s - base.red_s, 1.0, epsilon = 1e-9);
        assert_eq!(with_ped.total_s, base.total_s + 1);
    }

    #[test]
    fn test_legacy_controller_single_interval() {
        // raw sum 2.8518 + 3.24 = 6.0918 > 5: split into 5 + 1.09
        let result = compute_intergreen(&Phase {
            legacy_controller: true,
            ..phase(40.0)
        })
        .unwrap();
        assert_abs_diff_eq!(result.yellow_s, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.red_s, 1.09, epsilon = 1e-9);
        assert_eq!(result.total_s, 7);
    }

    #[test]
    fn test_legacy_controller_all_yellow_when_short() {
        // short clearance keeps the combined interval under 5 s
        let result = compute_intergreen(&Phase {
            legacy_controller: true,
            clearance_distance_m: 5.0,
            vehicle_length_m: 0.0,
            ..phase(40.0)
        })
        .unwrap();
        assert_eq!(result.red_s, 0.0);
        assert!(result.yellow_s < 5.0);
        // yellow carries the whole raw interval, so it may exceed the
        // floored display value
        assert_abs_diff_eq!(result.yellow_s, 3.3, epsilon = 1e-2);
    }

    #[test]
    fn test_total_is_ceiling_of_sum() {
        let result = compute_intergreen(&phase(40.0)).unwrap();
        assert!(result.total_s as f64 >= result.yellow_s + result.red_s - 0.01);
    }

    #[test]
    fn test_zero_speed_fails() {
        assert!(matches!(
            compute_intergreen(&phase(0.0)),
            Err(CalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_table_sums_lost_time() {
        let phases = vec![phase(40.0), phase(40.0), phase(40.0)];
        let table = compute_intergreen_table(&phases).unwrap();
        assert_eq!(table.phases.len(), 3);
        assert_eq!(table.lost_time_s, 21);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(
            compute_intergreen_table(&[]),
            Err(CalcError::InvalidInput(_))
        ));
    }
}
