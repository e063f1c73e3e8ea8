//! Measurement kinds and units
//!
//! Kinds and units are closed enums so kind-compatibility is enforced by the
//! type system rather than looked up at run time. Every unit carries an exact
//! decimal factor to its kind's base unit (mm, g, ml, mm2), so normalizing a
//! quantity for comparison is a single exact multiplication.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::physical::measurement::MeasurementError;

/// A physical dimension with its own unit set and conversion table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementKind {
    Length,
    Weight,
    Volume,
    Area,
}

impl MeasurementKind {
    /// All kinds, in display order
    pub const ALL: [MeasurementKind; 4] = [
        MeasurementKind::Length,
        MeasurementKind::Weight,
        MeasurementKind::Volume,
        MeasurementKind::Area,
    ];

    /// The units belonging to this kind
    pub fn units(&self) -> &'static [Unit] {
        match self {
            MeasurementKind::Length => &[
                Unit::Millimeter,
                Unit::Centimeter,
                Unit::Meter,
                Unit::Kilometer,
                Unit::Inch,
                Unit::Foot,
            ],
            MeasurementKind::Weight => {
                &[Unit::Gram, Unit::Kilogram, Unit::Pound, Unit::Ounce]
            }
            MeasurementKind::Volume => &[
                Unit::Milliliter,
                Unit::Centiliter,
                Unit::Liter,
                Unit::CubicMeter,
                Unit::CubicInch,
                Unit::CubicFoot,
                Unit::Gallon,
            ],
            MeasurementKind::Area => &[
                Unit::SquareMillimeter,
                Unit::SquareCentimeter,
                Unit::SquareMeter,
                Unit::SquareInch,
                Unit::SquareFoot,
            ],
        }
    }

    /// The base unit sums and comparisons are normalized to
    pub fn base_unit(&self) -> Unit {
        match self {
            MeasurementKind::Length => Unit::Millimeter,
            MeasurementKind::Weight => Unit::Gram,
            MeasurementKind::Volume => Unit::Milliliter,
            MeasurementKind::Area => Unit::SquareMillimeter,
        }
    }
}

impl std::fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementKind::Length => write!(f, "length"),
            MeasurementKind::Weight => write!(f, "weight"),
            MeasurementKind::Volume => write!(f, "volume"),
            MeasurementKind::Area => write!(f, "area"),
        }
    }
}

impl std::str::FromStr for MeasurementKind {
    type Err = MeasurementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "length" => Ok(MeasurementKind::Length),
            "weight" => Ok(MeasurementKind::Weight),
            "volume" => Ok(MeasurementKind::Volume),
            "area" => Ok(MeasurementKind::Area),
            _ => Err(MeasurementError::UnknownKind(s.to_string())),
        }
    }
}

/// A measurement unit
///
/// Serialized by symbol ("kg", "mm2", ...). Imperial factors are the exact
/// legal definitions (1 in = 25.4 mm, 1 lb = 453.59237 g), so every factor
/// is a terminating decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Unit {
    // Length
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "km")]
    Kilometer,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,

    // Weight
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "oz")]
    Ounce,

    // Volume
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "cl")]
    Centiliter,
    #[serde(rename = "l")]
    Liter,
    #[serde(rename = "m3")]
    CubicMeter,
    #[serde(rename = "in3")]
    CubicInch,
    #[serde(rename = "ft3")]
    CubicFoot,
    #[serde(rename = "gal")]
    Gallon,

    // Area
    #[serde(rename = "mm2")]
    SquareMillimeter,
    #[serde(rename = "cm2")]
    SquareCentimeter,
    #[serde(rename = "m2")]
    SquareMeter,
    #[serde(rename = "in2")]
    SquareInch,
    #[serde(rename = "ft2")]
    SquareFoot,
}

impl Unit {
    /// The kind this unit measures
    pub fn kind(&self) -> MeasurementKind {
        match self {
            Unit::Millimeter
            | Unit::Centimeter
            | Unit::Meter
            | Unit::Kilometer
            | Unit::Inch
            | Unit::Foot => MeasurementKind::Length,
            Unit::Gram | Unit::Kilogram | Unit::Pound | Unit::Ounce => MeasurementKind::Weight,
            Unit::Milliliter
            | Unit::Centiliter
            | Unit::Liter
            | Unit::CubicMeter
            | Unit::CubicInch
            | Unit::CubicFoot
            | Unit::Gallon => MeasurementKind::Volume,
            Unit::SquareMillimeter
            | Unit::SquareCentimeter
            | Unit::SquareMeter
            | Unit::SquareInch
            | Unit::SquareFoot => MeasurementKind::Area,
        }
    }

    /// Exact factor to this unit's base unit (mm, g, ml, mm2)
    pub fn factor(&self) -> Decimal {
        match self {
            Unit::Millimeter => Decimal::ONE,
            Unit::Centimeter => dec!(10),
            Unit::Meter => dec!(1000),
            Unit::Kilometer => dec!(1000000),
            Unit::Inch => dec!(25.4),
            Unit::Foot => dec!(304.8),

            Unit::Gram => Decimal::ONE,
            Unit::Kilogram => dec!(1000),
            Unit::Pound => dec!(453.59237),
            Unit::Ounce => dec!(28.349523125),

            Unit::Milliliter => Decimal::ONE,
            Unit::Centiliter => dec!(10),
            Unit::Liter => dec!(1000),
            Unit::CubicMeter => dec!(1000000),
            Unit::CubicInch => dec!(16.387064),
            Unit::CubicFoot => dec!(28316.846592),
            Unit::Gallon => dec!(3785.411784),

            Unit::SquareMillimeter => Decimal::ONE,
            Unit::SquareCentimeter => dec!(100),
            Unit::SquareMeter => dec!(1000000),
            Unit::SquareInch => dec!(645.16),
            Unit::SquareFoot => dec!(92903.04),
        }
    }

    /// The unit symbol ("kg", "mm2", ...)
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Meter => "m",
            Unit::Kilometer => "km",
            Unit::Inch => "in",
            Unit::Foot => "ft",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Pound => "lb",
            Unit::Ounce => "oz",
            Unit::Milliliter => "ml",
            Unit::Centiliter => "cl",
            Unit::Liter => "l",
            Unit::CubicMeter => "m3",
            Unit::CubicInch => "in3",
            Unit::CubicFoot => "ft3",
            Unit::Gallon => "gal",
            Unit::SquareMillimeter => "mm2",
            Unit::SquareCentimeter => "cm2",
            Unit::SquareMeter => "m2",
            Unit::SquareInch => "in2",
            Unit::SquareFoot => "ft2",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for Unit {
    type Err = MeasurementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for kind in MeasurementKind::ALL {
            for unit in kind.units() {
                if unit.symbol() == s {
                    return Ok(*unit);
                }
            }
        }
        Err(MeasurementError::UnknownUnit(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_unit_kinds() {
        assert_eq!(Unit::Kilogram.kind(), MeasurementKind::Weight);
        assert_eq!(Unit::Inch.kind(), MeasurementKind::Length);
        assert_eq!(Unit::Gallon.kind(), MeasurementKind::Volume);
        assert_eq!(Unit::SquareFoot.kind(), MeasurementKind::Area);
    }

    #[test]
    fn test_every_unit_listed_under_its_kind() {
        for kind in MeasurementKind::ALL {
            for unit in kind.units() {
                assert_eq!(unit.kind(), kind, "unit {} listed under wrong kind", unit);
            }
        }
    }

    #[test]
    fn test_base_unit_factor_is_one() {
        for kind in MeasurementKind::ALL {
            assert_eq!(kind.base_unit().factor(), Decimal::ONE);
        }
    }

    #[test]
    fn test_symbol_roundtrip() {
        for kind in MeasurementKind::ALL {
            for unit in kind.units() {
                assert_eq!(Unit::from_str(unit.symbol()).unwrap(), *unit);
            }
        }
    }

    #[test]
    fn test_unknown_unit() {
        assert!(matches!(
            Unit::from_str("furlong"),
            Err(MeasurementError::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            MeasurementKind::from_str("Weight").unwrap(),
            MeasurementKind::Weight
        );
        assert!(MeasurementKind::from_str("temperature").is_err());
    }

    #[test]
    fn test_unit_serde_symbols() {
        let yaml = serde_yml::to_string(&Unit::Kilogram).unwrap();
        assert_eq!(yaml.trim(), "kg");
        let unit: Unit = serde_yml::from_str("in3").unwrap();
        assert_eq!(unit, Unit::CubicInch);
    }
}
