//! mcond: Measurement Conditions
//!
//! Unit-aware measurement conditions for commerce orders. Evaluates whether
//! physical measurements (length, weight, volume, area) on purchased product
//! variations satisfy configured comparisons, per order item or aggregated
//! across a whole order.

pub mod cli;
pub mod condition;
pub mod entities;
pub mod physical;
