//! Physical measurement types
//!
//! - [`MeasurementKind`] - A physical dimension with its own unit set
//! - [`Unit`] - Every supported unit symbol with exact conversion factors
//! - [`Measurement`] - An immutable decimal quantity with a unit

pub mod measurement;
pub mod unit;

pub use measurement::{Measurement, MeasurementError};
pub use unit::{MeasurementKind, Unit};
