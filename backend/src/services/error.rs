//! Error types for the timing calculators.

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Error type for calculator operations.
///
/// Every variant aborts only the triggering calculation; the session keeps
/// whatever results were stored before.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CalcError {
    /// A parameter is outside the formula's domain (zero speed, negative
    /// lost time, mismatched sequences, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Webster's formula is undefined at or above saturation.
    #[error("flow ratio sum must be below 1 for Webster's method (got {flow_ratio_sum:.3})")]
    Oversaturated { flow_ratio_sum: f64 },

    /// Green times cannot be split when every phase has zero demand.
    #[error("flow ratio sum cannot be zero")]
    ZeroFlowRatioSum,

    /// A stage was invoked before the stage that supplies its default input.
    #[error("{0}")]
    MissingPrerequisite(String),
}
