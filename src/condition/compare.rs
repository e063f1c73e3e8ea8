//! Unit-aware measurement comparison
//!
//! Both sides are normalized to the kind's base unit before comparing.
//! Normalization is a single multiplication by an exact factor, so equal
//! quantities expressed in different units compare equal without epsilon
//! tolerance (1000 g == 1 kg).

use crate::condition::{ConditionError, ConditionSpec, Operator};
use crate::physical::Measurement;

/// Compare a measurement against one condition spec
///
/// Fails with [`ConditionError::UnitMismatch`] when the subject's kind and
/// the spec's target kind cannot be reconciled by conversion. Missing data
/// never reaches this function; it is handled fail-closed by the evaluator.
pub fn compare(subject: &Measurement, spec: &ConditionSpec) -> Result<bool, ConditionError> {
    if subject.kind() != spec.value.kind() {
        return Err(ConditionError::UnitMismatch {
            field: spec.field.clone(),
            expected: spec.value.kind(),
            found: subject.kind(),
        });
    }

    let lhs = subject.to_base();
    let rhs = spec.value.to_base();

    Ok(match spec.operator {
        Operator::GreaterOrEqual => lhs >= rhs,
        Operator::Greater => lhs > rhs,
        Operator::LessOrEqual => lhs <= rhs,
        Operator::Less => lhs < rhs,
        Operator::Equal => lhs == rhs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physical::{MeasurementKind, Unit};
    use rust_decimal_macros::dec;

    fn spec(op: Operator, number: rust_decimal::Decimal, unit: Unit) -> ConditionSpec {
        ConditionSpec::new(
            "field_test",
            unit.kind(),
            op,
            Measurement::new(number, unit),
        )
    }

    #[test]
    fn test_equality_across_units_is_exact() {
        let grams = Measurement::new(dec!(1000), Unit::Gram);
        assert!(compare(&grams, &spec(Operator::Equal, dec!(1), Unit::Kilogram)).unwrap());

        let meters = Measurement::new(dec!(1000), Unit::Meter);
        assert!(compare(&meters, &spec(Operator::Equal, dec!(1), Unit::Kilometer)).unwrap());
    }

    #[test]
    fn test_imperial_metric_equality() {
        // 1 in is exactly 25.4 mm
        let mm = Measurement::new(dec!(25.4), Unit::Millimeter);
        assert!(compare(&mm, &spec(Operator::Equal, dec!(1), Unit::Inch)).unwrap());
    }

    #[test]
    fn test_ordering_operators() {
        let a = Measurement::new(dec!(500), Unit::Gram);
        let b_spec = |op| spec(op, dec!(1), Unit::Kilogram);

        assert!(compare(&a, &b_spec(Operator::Less)).unwrap());
        assert!(compare(&a, &b_spec(Operator::LessOrEqual)).unwrap());
        assert!(!compare(&a, &b_spec(Operator::Greater)).unwrap());
        assert!(!compare(&a, &b_spec(Operator::GreaterOrEqual)).unwrap());
        assert!(!compare(&a, &b_spec(Operator::Equal)).unwrap());
    }

    #[test]
    fn test_boundary_is_inclusive_for_ge_le() {
        let a = Measurement::new(dec!(1), Unit::Kilogram);
        assert!(compare(&a, &spec(Operator::GreaterOrEqual, dec!(1000), Unit::Gram)).unwrap());
        assert!(compare(&a, &spec(Operator::LessOrEqual, dec!(1000), Unit::Gram)).unwrap());
        assert!(!compare(&a, &spec(Operator::Greater, dec!(1000), Unit::Gram)).unwrap());
        assert!(!compare(&a, &spec(Operator::Less, dec!(1000), Unit::Gram)).unwrap());
    }

    #[test]
    fn test_zero_and_negative_compare_normally() {
        let zero = Measurement::new(dec!(0), Unit::Gram);
        assert!(compare(&zero, &spec(Operator::Equal, dec!(0), Unit::Kilogram)).unwrap());

        let neg = Measurement::new(dec!(-5), Unit::Gram);
        assert!(compare(&neg, &spec(Operator::Less, dec!(0), Unit::Gram)).unwrap());
    }

    #[test]
    fn test_kind_mismatch_is_an_error() {
        let weight = Measurement::new(dec!(5), Unit::Kilogram);
        let length_spec = spec(Operator::GreaterOrEqual, dec!(1), Unit::Meter);
        let err = compare(&weight, &length_spec).unwrap_err();
        assert_eq!(
            err,
            ConditionError::UnitMismatch {
                field: "field_test".to_string(),
                expected: MeasurementKind::Length,
                found: MeasurementKind::Weight,
            }
        );
    }
}
