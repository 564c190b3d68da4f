pub mod green_split;
pub mod intergreen;
pub mod webster;
