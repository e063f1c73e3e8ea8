//! Measurement condition configuration and evaluation
//!
//! - [`ConditionSpec`] / [`ConditionSet`] - configured rules (field, kind,
//!   operator, target value) with AND semantics across the set
//! - [`compare`] - unit-aware comparison of one measurement against one spec
//! - [`evaluate_single`] / [`evaluate_aggregate`] - per-item and
//!   order-total evaluation, fail-closed on missing data

pub mod compare;
pub mod evaluator;
pub mod spec;

use thiserror::Error;

use crate::physical::{MeasurementError, MeasurementKind};

pub use compare::compare;
pub use evaluator::{evaluate_aggregate, evaluate_single, MeasurementSource, OrderLine};
pub use spec::{ConditionSet, ConditionSpec, Operator};

/// Errors from condition configuration and evaluation
///
/// Missing or empty measurement data is never an error; evaluation treats it
/// as "condition not satisfied". These variants all indicate inconsistent
/// configuration and must surface to the host rather than being masked as a
/// non-match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    #[error("measurement kind mismatch for field '{field}': condition expects {expected}, found {found}")]
    UnitMismatch {
        field: String,
        expected: MeasurementKind,
        found: MeasurementKind,
    },

    #[error("invalid comparison operator: '{0}' (expected one of >=, >, <=, <, ==)")]
    InvalidOperator(String),

    #[error("invalid condition for field '{field}': {reason}")]
    InvalidSpec { field: String, reason: String },

    #[error(transparent)]
    Measurement(#[from] MeasurementError),
}
