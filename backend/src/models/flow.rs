use serde::{Deserialize, Serialize};

use crate::services::error::{CalcError, CalcResult};

/// Paired vehicle-flow and saturation-flow observations, one entry per phase.
///
/// Both sequences are in vehicles/hour and keep the phase ordering of the
/// inter-green table. Saturation values divide the flows, so they must be
/// strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSet {
    flows_vph: Vec<f64>,
    saturations_vph: Vec<f64>,
}

impl FlowSet {
    /// Build a flow set from parallel flow and saturation sequences.
    pub fn new(flows_vph: Vec<f64>, saturations_vph: Vec<f64>) -> CalcResult<Self> {
        if flows_vph.is_empty() {
            return Err(CalcError::InvalidInput(
                "at least one flow value is required".into(),
            ));
        }
        if flows_vph.len() != saturations_vph.len() {
            return Err(CalcError::InvalidInput(format!(
                "got {} flow values but {} saturation values",
                flows_vph.len(),
                saturations_vph.len()
            )));
        }
        if flows_vph.iter().any(|f| *f < 0.0) {
            return Err(CalcError::InvalidInput(
                "vehicle flows cannot be negative".into(),
            ));
        }
        if saturations_vph.iter().any(|s| *s <= 0.0) {
            return Err(CalcError::InvalidInput(
                "saturation flows must be positive".into(),
            ));
        }
        Ok(Self {
            flows_vph,
            saturations_vph,
        })
    }

    /// Number of phases covered by this flow set.
    pub fn len(&self) -> usize {
        self.flows_vph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows_vph.is_empty()
    }

    /// Per-phase flow ratios `yi = flow_i / saturation_i`.
    pub fn flow_ratios(&self) -> Vec<f64> {
        self.flows_vph
            .iter()
            .zip(&self.saturations_vph)
            .map(|(flow, saturation)| flow / saturation)
            .collect()
    }

    /// Sum of the per-phase flow ratios (Σyi).
    pub fn flow_ratio_sum(&self) -> f64 {
        self.flow_ratios().iter().sum()
    }
}
