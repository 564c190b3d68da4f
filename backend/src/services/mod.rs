//! Service layer for the timing calculators.
//!
//! Pure computation lives here: the inter-green, Webster, and green-split
//! calculators plus the CSV builder. The only stateful piece is the
//! [`session::SessionStore`] that carries results between stages.

pub mod error;

pub mod export;

pub mod green_split;

pub mod intergreen;

pub mod session;

pub mod webster;

pub use error::{CalcError, CalcResult};
pub use export::{build_csv, export_filename};
pub use green_split::{allocate_green_times, MIN_GREEN_S};
pub use intergreen::{compute_intergreen, compute_intergreen_table};
pub use session::{SessionResults, SessionStore};
pub use webster::compute_optimal_cycle;
