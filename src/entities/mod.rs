//! Entity type definitions
//!
//! Plain serde value types for the YAML files the CLI consumes, usable
//! directly by host systems as well:
//!
//! - [`ProductVariation`] - the purchasable unit carrying measurement fields
//! - [`OrderItem`] - a variation reference plus a quantity
//! - [`Order`] - an ordered collection of items

pub mod order;
pub mod variation;

pub use order::{Order, OrderItem};
pub use variation::ProductVariation;
