//! In-memory session results.
//!
//! The calculator is single-user: each "calculate" action overwrites the
//! slot for its stage and later stages read the stored values as defaults
//! (last writer wins). Nothing survives a process restart.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::routes::green_split::GreenSplit;
use crate::routes::intergreen::IntergreenTable;
use crate::routes::webster::CycleResult;
use crate::services::error::{CalcError, CalcResult};

/// Accumulated results of the current session, one slot per stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionResults {
    /// Last computed inter-green table.
    pub intergreen: Option<IntergreenTable>,
    /// Last computed Webster cycle.
    pub cycle: Option<CycleResult>,
    /// Last computed green-time split.
    pub green_split: Option<GreenSplit>,
}

/// Thread-safe holder for [`SessionResults`].
#[derive(Default)]
pub struct SessionStore {
    results: RwLock<SessionResults>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store_intergreen(&self, table: IntergreenTable) {
        self.results.write().intergreen = Some(table);
    }

    pub fn store_cycle(&self, cycle: CycleResult) {
        self.results.write().cycle = Some(cycle);
    }

    pub fn store_green_split(&self, split: GreenSplit) {
        self.results.write().green_split = Some(split);
    }

    /// Copy of the current results, for the results endpoint and export.
    pub fn snapshot(&self) -> SessionResults {
        self.results.read().clone()
    }

    /// Lost time to use for a stage: the explicit request value, or the Tp
    /// of the stored inter-green table.
    pub fn resolve_lost_time(&self, explicit: Option<f64>) -> CalcResult<f64> {
        explicit
            .or_else(|| {
                self.results
                    .read()
                    .intergreen
                    .as_ref()
                    .map(|table| f64::from(table.lost_time_s))
            })
            .ok_or_else(|| {
                CalcError::MissingPrerequisite(
                    "no lost time available: pass lost_time_s or compute the inter-green table first"
                        .into(),
                )
            })
    }

    /// Cycle length to use for the green split: the explicit request value,
    /// or the stored Webster result.
    pub fn resolve_cycle(&self, explicit: Option<f64>) -> CalcResult<f64> {
        explicit
            .or_else(|| {
                self.results
                    .read()
                    .cycle
                    .as_ref()
                    .map(|cycle| f64::from(cycle.cycle_s))
            })
            .ok_or_else(|| {
                CalcError::MissingPrerequisite(
                    "no cycle length available: pass cycle_s or compute the optimal cycle first"
                        .into(),
                )
            })
    }
}
