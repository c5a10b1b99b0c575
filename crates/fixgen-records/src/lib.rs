//! Composite record builder for fixgen factories.
//!
//! A [`RecordFactory`] owns named fields — each one a factory from the
//! core protocol — and produces one record per step. Dependency-declaring
//! fields (`DependentCallable`, `ClonedField`) receive the values already
//! produced for the current record before they are stepped; the builder
//! fixes a dependency-safe evaluation order at build time and rejects
//! unknown dependency names and cycles there, before any value is
//! produced.
//!
//! # Quick start
//!
//! ```rust
//! use fixgen_core::{DependentCallable, Factory, ValueMap};
//! use fixgen_records::RecordFactory;
//! use serde_json::json;
//!
//! let users = RecordFactory::builder()
//!     .field("id", fixgen_core::Constant::new(1))
//!     .dependent(
//!         "label",
//!         DependentCallable::new(
//!             |deps: &ValueMap| json!(format!("user-{}", deps["id"])),
//!             ["id"],
//!         ),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let records = users.generate(2).values().unwrap();
//! assert_eq!(records[0]["label"], json!("user-1"));
//! ```

pub mod error;
pub mod record;

// Re-exports for convenience
pub use error::RecordError;
pub use record::{RecordBuilder, RecordFactory};
