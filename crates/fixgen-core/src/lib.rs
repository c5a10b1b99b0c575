//! Bounded factories for generating synthetic test-fixture data.
//!
//! A factory is a small producer of values, declared once as a template and
//! then cloned into independent bounded runs with [`Factory::generate`].
//! Each run yields exactly the requested number of values; composites
//! rescale the requested amount for their children at the moment the amount
//! is fixed, before any value is produced.
//!
//! # Quick start
//!
//! ```rust
//! use fixgen_core::{Callable, Factory};
//! use serde_json::json;
//!
//! let template = Callable::new(|| json!("foo"));
//! let values = template.generate(4).values().unwrap();
//! assert_eq!(values, vec![json!("foo"); 4]);
//! ```
//!
//! # Composites
//!
//! - [`ListFactory`] groups a child factory's output into fixed-size lists,
//!   scaling the child's amount to `n * elements_per_list`.
//! - [`DistributionFactory`] draws from outcome factories against exact
//!   per-outcome quotas derived from integer percentages.
//!
//! # Dependent fields
//!
//! [`DependentCallable`] and [`ClonedField`] produce values computed from
//! sibling fields of the same record. The composite driving them must
//! inject the sibling values via
//! [`DependentFactory::update_dependencies`] before each step; see the
//! record builder crate for a composite that honors this contract.

pub mod callable;
pub mod constant;
pub mod dependent;
pub mod distribution;
pub mod error;
pub mod factory;
pub mod list;

// Re-exports for convenience
pub use callable::Callable;
pub use constant::Constant;
pub use dependent::{ClonedField, Dependencies, DependentCallable, DependentFactory};
pub use distribution::{DistributionBuilder, DistributionFactory};
pub use error::FactoryError;
pub use factory::{Factory, FactoryRun, RunState};
pub use list::ListFactory;

/// Dynamic value produced by factories.
pub use serde_json::Value;

/// Mapping of field names to produced values.
pub type ValueMap = serde_json::Map<String, Value>;
