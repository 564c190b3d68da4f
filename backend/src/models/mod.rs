pub mod flow;
pub mod phase;

pub use flow::*;
pub use phase::*;
