//! Order and order item entities

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::condition::OrderLine;
use crate::entities::ProductVariation;

fn default_quantity() -> Decimal {
    Decimal::ONE
}

/// One order line: a purchased variation plus a quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Quantity multiplier; may be fractional for goods sold by measure
    #[serde(default = "default_quantity")]
    pub quantity: Decimal,

    /// The purchased variation, if still resolvable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation: Option<ProductVariation>,
}

impl OrderLine for OrderItem {
    type Source = ProductVariation;

    fn purchased(&self) -> Option<&ProductVariation> {
        self.variation.as_ref()
    }

    fn quantity(&self) -> Decimal {
        self.quantity
    }
}

/// An order: an ordered collection of line items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physical::{Measurement, Unit};
    use rust_decimal_macros::dec;

    #[test]
    fn test_quantity_defaults_to_one() {
        let yaml = "variation:\n  sku: SKU-1\n";
        let item: OrderItem = serde_yml::from_str(yaml).unwrap();
        assert_eq!(item.quantity, Decimal::ONE);
    }

    #[test]
    fn test_order_yaml_roundtrip() {
        let order = Order {
            items: vec![OrderItem {
                quantity: dec!(2),
                variation: Some(
                    ProductVariation::new("SKU-1").with_measurement(
                        "field_weight",
                        Measurement::new(dec!(0.5), Unit::Kilogram),
                    ),
                ),
            }],
        };
        let yaml = serde_yml::to_string(&order).unwrap();
        let parsed: Order = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed, order);
    }
}
