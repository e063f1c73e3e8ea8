//! Condition configuration types
//!
//! A condition set is an ordered list of specs, each naming a measurement
//! field on the purchased variation, the expected kind, a comparison
//! operator, and a target quantity. Sets are produced by an external
//! configuration surface and treated as read-only here.

use serde::{Deserialize, Serialize};

use crate::condition::ConditionError;
use crate::physical::{Measurement, MeasurementKind};

/// Comparison operator
///
/// Serialized by symbol; an unrecognized symbol fails configuration loading
/// with [`ConditionError::InvalidOperator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operator {
    GreaterOrEqual,
    Greater,
    LessOrEqual,
    Less,
    Equal,
}

impl Operator {
    /// The operator symbol used in configuration files
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::GreaterOrEqual => ">=",
            Operator::Greater => ">",
            Operator::LessOrEqual => "<=",
            Operator::Less => "<",
            Operator::Equal => "==",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for Operator {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">=" => Ok(Operator::GreaterOrEqual),
            ">" => Ok(Operator::Greater),
            "<=" => Ok(Operator::LessOrEqual),
            "<" => Ok(Operator::Less),
            "==" | "=" => Ok(Operator::Equal),
            _ => Err(ConditionError::InvalidOperator(s.to_string())),
        }
    }
}

impl TryFrom<String> for Operator {
    type Error = ConditionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> String {
        op.symbol().to_string()
    }
}

/// One configured measurement condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionSpec {
    /// Measurement field on the purchased variation (e.g. "field_weight")
    pub field: String,

    /// Expected measurement kind of the field
    pub kind: MeasurementKind,

    /// Comparison operator
    pub operator: Operator,

    /// Target quantity the field is compared against
    pub value: Measurement,
}

impl ConditionSpec {
    /// Create a new spec
    pub fn new(
        field: impl Into<String>,
        kind: MeasurementKind,
        operator: Operator,
        value: Measurement,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            operator,
            value,
        }
    }

    /// Check internal consistency (non-empty field, target matches kind)
    pub fn validate(&self) -> Result<(), ConditionError> {
        if self.field.is_empty() {
            return Err(ConditionError::InvalidSpec {
                field: String::new(),
                reason: "field name is empty".to_string(),
            });
        }
        if self.value.kind() != self.kind {
            return Err(ConditionError::UnitMismatch {
                field: self.field.clone(),
                expected: self.kind,
                found: self.value.kind(),
            });
        }
        Ok(())
    }
}

/// An ordered set of conditions with AND semantics
///
/// An empty set never matches anything (fail closed), so an unconfigured
/// condition cannot silently pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionSet {
    #[serde(default)]
    pub conditions: Vec<ConditionSpec>,
}

impl ConditionSet {
    /// Create a set from a list of specs
    pub fn new(conditions: Vec<ConditionSpec>) -> Self {
        Self { conditions }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Iterate specs in configured order
    pub fn iter(&self) -> std::slice::Iter<'_, ConditionSpec> {
        self.conditions.iter()
    }

    /// Validate every spec in the set
    pub fn validate(&self) -> Result<(), ConditionError> {
        for spec in &self.conditions {
            spec.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physical::Unit;
    use rust_decimal_macros::dec;

    #[test]
    fn test_operator_parse() {
        assert_eq!(">=".parse::<Operator>().unwrap(), Operator::GreaterOrEqual);
        assert_eq!("<".parse::<Operator>().unwrap(), Operator::Less);
        // Legacy single-equals form is accepted on input
        assert_eq!("=".parse::<Operator>().unwrap(), Operator::Equal);
    }

    #[test]
    fn test_operator_invalid() {
        let err = "!=".parse::<Operator>().unwrap_err();
        assert_eq!(err, ConditionError::InvalidOperator("!=".to_string()));
    }

    #[test]
    fn test_condition_set_yaml_roundtrip() {
        let yaml = r#"
conditions:
  - field: field_weight
    kind: weight
    operator: ">="
    value:
      number: "5"
      unit: kg
  - field: field_volume
    kind: volume
    operator: "<"
    value:
      number: "10"
      unit: l
"#;
        let set: ConditionSet = serde_yml::from_str(yaml).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.conditions[0].operator, Operator::GreaterOrEqual);
        assert_eq!(set.conditions[0].value.number, dec!(5));
        assert_eq!(set.conditions[1].kind, MeasurementKind::Volume);

        let out = serde_yml::to_string(&set).unwrap();
        let reparsed: ConditionSet = serde_yml::from_str(&out).unwrap();
        assert_eq!(reparsed, set);
    }

    #[test]
    fn test_invalid_operator_fails_deserialization() {
        let yaml = r#"
conditions:
  - field: field_weight
    kind: weight
    operator: "~="
    value:
      number: "5"
      unit: kg
"#;
        let err = serde_yml::from_str::<ConditionSet>(yaml).unwrap_err();
        assert!(err.to_string().contains("invalid comparison operator"));
    }

    #[test]
    fn test_validate_kind_mismatch() {
        let spec = ConditionSpec::new(
            "field_weight",
            MeasurementKind::Weight,
            Operator::Equal,
            Measurement::new(dec!(1), Unit::Meter),
        );
        assert!(matches!(
            spec.validate(),
            Err(ConditionError::UnitMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_empty_field() {
        let spec = ConditionSpec::new(
            "",
            MeasurementKind::Weight,
            Operator::Equal,
            Measurement::new(dec!(1), Unit::Kilogram),
        );
        assert!(matches!(
            spec.validate(),
            Err(ConditionError::InvalidSpec { .. })
        ));
    }
}
