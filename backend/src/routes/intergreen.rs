use serde::{Deserialize, Serialize};

// =========================================================
// Inter-green ("entreverdes") types
// =========================================================

/// Inter-green interval computed for one phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntergreenResult {
    /// Yellow time (s), rounded to 2 decimals for display.
    pub yellow_s: f64,
    /// All-red clearance time (s), rounded to 2 decimals for display.
    pub red_s: f64,
    /// Whole-second interval: ceiling of yellow + red, never under the
    /// unrounded sum.
    pub total_s: u32,
}

/// Per-phase inter-green intervals plus the cycle's total lost time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntergreenTable {
    /// One entry per phase, in form order.
    pub phases: Vec<IntergreenResult>,
    /// Total lost time Tp (s): sum of the per-phase totals.
    pub lost_time_s: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_roundtrip() {
        let result = IntergreenResult {
            yellow_s: 3.0,
            red_s: 3.24,
            total_s: 7,
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: IntergreenResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_table_debug() {
        let table = IntergreenTable {
            phases: vec![],
            lost_time_s: 0,
        };
        assert!(format!("{:?}", table).contains("IntergreenTable"));
    }
}
