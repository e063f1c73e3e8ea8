//! Condition evaluation over order items
//!
//! Two modes share one condition-set representation:
//!
//! - Single-item: each configured field on the purchased variation is
//!   compared directly; the first unmet condition short-circuits to false.
//! - Order-total: per-unit measurements are multiplied by line quantity and
//!   summed per field across every line, then each total is compared.
//!
//! Both modes fail closed: an empty condition set, a missing purchased
//! variation, or an absent/empty measurement field yields false rather than
//! an error. Kind mismatches are configuration errors and propagate.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::condition::{compare, ConditionError, ConditionSet};
use crate::physical::Measurement;

/// Resolves measurement field values on one purchasable unit
///
/// Returns `None` when the field does not exist or holds no value; the
/// evaluator treats that as "condition not satisfied", never as an error.
pub trait MeasurementSource {
    fn measurement(&self, field: &str) -> Option<Measurement>;
}

/// One order line: an optional purchased unit plus a quantity multiplier
///
/// Quantity is a scalar and may be fractional (e.g. goods sold by weight).
pub trait OrderLine {
    type Source: MeasurementSource;

    fn purchased(&self) -> Option<&Self::Source>;

    fn quantity(&self) -> Decimal;
}

/// Per-field running sums, local to one aggregate evaluation
///
/// Each field accumulates independently; a condition set may mix unrelated
/// kinds (total weight AND total volume) that must never be summed together.
#[derive(Default)]
struct RunningTotal<'a> {
    totals: BTreeMap<&'a str, Measurement>,
}

impl<'a> RunningTotal<'a> {
    /// Add a line contribution into the field's sum
    ///
    /// The sum stays in the unit of the first contribution; adding a
    /// measurement of a different kind fails, surfacing inconsistent
    /// catalog data instead of producing a meaningless total.
    fn accumulate(&mut self, field: &'a str, value: Measurement) -> Result<(), ConditionError> {
        match self.totals.entry(field) {
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
            Entry::Occupied(mut entry) => {
                let sum = entry.get().add(&value)?;
                entry.insert(sum);
            }
        }
        Ok(())
    }

    fn get(&self, field: &str) -> Option<&Measurement> {
        self.totals.get(field)
    }
}

/// Evaluate a condition set against a single purchased unit
///
/// Returns false when the subject is absent, the set is empty, any
/// configured field is missing, or any comparison fails. All conditions
/// must pass (AND).
pub fn evaluate_single<S>(
    subject: Option<&S>,
    conditions: &ConditionSet,
) -> Result<bool, ConditionError>
where
    S: MeasurementSource + ?Sized,
{
    let Some(subject) = subject else {
        return Ok(false);
    };
    if conditions.is_empty() {
        return Ok(false);
    }

    for spec in conditions.iter() {
        let Some(measurement) = subject.measurement(&spec.field) else {
            return Ok(false);
        };
        if !compare(&measurement, spec)? {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Evaluate a condition set against the totals of a whole order
///
/// Every configured field must be present on every line; a single line
/// lacking a field invalidates the whole aggregate, since a partial sum
/// would misrepresent the physical total. A field named by more than one
/// condition is summed once and compared against each of them, which
/// supports range conditions (min and max on the same field).
pub fn evaluate_aggregate<L>(lines: &[L], conditions: &ConditionSet) -> Result<bool, ConditionError>
where
    L: OrderLine,
{
    if conditions.is_empty() || lines.is_empty() {
        return Ok(false);
    }

    // Distinct fields in configured order
    let mut fields: Vec<&str> = Vec::new();
    for spec in conditions.iter() {
        if !fields.contains(&spec.field.as_str()) {
            fields.push(spec.field.as_str());
        }
    }

    let mut totals = RunningTotal::default();
    for line in lines {
        let Some(purchased) = line.purchased() else {
            return Ok(false);
        };
        for field in &fields {
            let Some(measurement) = purchased.measurement(field) else {
                return Ok(false);
            };
            totals.accumulate(field, measurement.multiply(line.quantity()))?;
        }
    }

    for spec in conditions.iter() {
        match totals.get(&spec.field) {
            Some(total) => {
                if !compare(total, spec)? {
                    return Ok(false);
                }
            }
            // Unreachable when lines is non-empty; stay fail-closed
            None => return Ok(false),
        }
    }

    Ok(true)
}

impl ConditionSet {
    /// Evaluate this set against one order line (single-item mode)
    pub fn matches_item<L: OrderLine>(&self, line: &L) -> Result<bool, ConditionError> {
        evaluate_single(line.purchased(), self)
    }

    /// Evaluate this set against the totals of an order (aggregate mode)
    pub fn matches_order<L: OrderLine>(&self, lines: &[L]) -> Result<bool, ConditionError> {
        evaluate_aggregate(lines, self)
    }
}
