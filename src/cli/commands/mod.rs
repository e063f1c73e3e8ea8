//! Command implementations

pub mod check;
pub mod eval;
pub mod units;
