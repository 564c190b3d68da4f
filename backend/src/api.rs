//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::green_split::GreenSplit;
pub use crate::routes::green_split::RebalanceInfo;
pub use crate::routes::green_split::RebalanceStrategy;
pub use crate::routes::intergreen::IntergreenResult;
pub use crate::routes::intergreen::IntergreenTable;
pub use crate::routes::webster::CycleResult;
