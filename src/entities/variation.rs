//! Product variation entity - the purchasable unit

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::condition::MeasurementSource;
use crate::physical::Measurement;

/// A purchasable product variation with its measurement field values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariation {
    /// Stock keeping unit
    pub sku: String,

    /// Human-readable title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Measurement field values keyed by field name
    #[serde(default)]
    pub measurements: BTreeMap<String, Measurement>,
}

impl ProductVariation {
    /// Create a variation with no measurements
    pub fn new(sku: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            title: None,
            measurements: BTreeMap::new(),
        }
    }

    /// Set a measurement field value
    pub fn with_measurement(mut self, field: impl Into<String>, value: Measurement) -> Self {
        self.measurements.insert(field.into(), value);
        self
    }
}

impl MeasurementSource for ProductVariation {
    fn measurement(&self, field: &str) -> Option<Measurement> {
        self.measurements.get(field).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physical::Unit;
    use rust_decimal_macros::dec;

    #[test]
    fn test_measurement_lookup() {
        let v = ProductVariation::new("SKU-1")
            .with_measurement("field_weight", Measurement::new(dec!(2), Unit::Kilogram));
        assert_eq!(
            v.measurement("field_weight"),
            Some(Measurement::new(dec!(2), Unit::Kilogram))
        );
        assert_eq!(v.measurement("field_height"), None);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let v = ProductVariation::new("BOX-L")
            .with_measurement("field_weight", Measurement::new(dec!(1.2), Unit::Kilogram))
            .with_measurement("field_volume", Measurement::new(dec!(30), Unit::Liter));

        let yaml = serde_yml::to_string(&v).unwrap();
        let parsed: ProductVariation = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed, v);
    }
}
