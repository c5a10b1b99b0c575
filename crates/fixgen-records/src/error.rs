//! Record assembly error types.

use fixgen_core::FactoryError;
use thiserror::Error;

/// Errors raised while declaring or producing composite records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field declared a dependency on a name that is not a field.
    #[error("field '{field}' depends on unknown field '{dependency}'")]
    UnknownDependency { field: String, dependency: String },

    /// Two fields were declared under the same name.
    #[error("duplicate field name '{name}'")]
    DuplicateField { name: String },

    /// Field dependencies form a cycle.
    #[error("dependency cycle among fields: {}", fields.join(", "))]
    DependencyCycle { fields: Vec<String> },

    /// A field's factory failed.
    #[error("{0}")]
    Factory(#[from] FactoryError),
}
