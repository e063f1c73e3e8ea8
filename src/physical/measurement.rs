//! Measurement value type
//!
//! A `Measurement` is an immutable decimal magnitude paired with a unit.
//! Arithmetic between measurements of different kinds is invalid and fails
//! with [`MeasurementError::IncompatibleKinds`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physical::unit::{MeasurementKind, Unit};

/// Errors from measurement arithmetic and parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasurementError {
    #[error("incompatible measurement kinds: cannot combine {from} ({from_kind}) with {to} ({to_kind})")]
    IncompatibleKinds {
        from: Unit,
        from_kind: MeasurementKind,
        to: Unit,
        to_kind: MeasurementKind,
    },

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("unknown measurement kind: {0}")]
    UnknownKind(String),
}

/// An immutable measured quantity: a decimal number with a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Magnitude; zero and negative values are valid
    pub number: Decimal,

    /// Unit the magnitude is expressed in
    pub unit: Unit,
}

impl Measurement {
    /// Create a new measurement
    pub fn new(number: Decimal, unit: Unit) -> Self {
        Self { number, unit }
    }

    /// The physical kind of this measurement
    pub fn kind(&self) -> MeasurementKind {
        self.unit.kind()
    }

    /// Magnitude normalized to the kind's base unit
    ///
    /// A single multiplication by an exact factor, so values that are
    /// mathematically equal normalize to equal decimals (1 kg and 1000 g
    /// both normalize to 1000 g).
    pub fn to_base(&self) -> Decimal {
        self.number * self.unit.factor()
    }

    /// Express this measurement in another unit of the same kind
    pub fn convert(&self, to: Unit) -> Result<Measurement, MeasurementError> {
        if self.unit.kind() != to.kind() {
            return Err(MeasurementError::IncompatibleKinds {
                from: self.unit,
                from_kind: self.unit.kind(),
                to,
                to_kind: to.kind(),
            });
        }
        if self.unit == to {
            return Ok(*self);
        }
        Ok(Measurement::new(self.to_base() / to.factor(), to))
    }

    /// Scale by a quantity multiplier, keeping the unit
    pub fn multiply(&self, quantity: Decimal) -> Measurement {
        Measurement::new(self.number * quantity, self.unit)
    }

    /// Add another measurement of the same kind, keeping this unit
    pub fn add(&self, other: &Measurement) -> Result<Measurement, MeasurementError> {
        if self.unit == other.unit {
            return Ok(Measurement::new(self.number + other.number, self.unit));
        }
        let converted = other.convert(self.unit)?;
        Ok(Measurement::new(self.number + converted.number, self.unit))
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.unit)
    }
}
