//! Leaf value generators for fixgen factories.
//!
//! Every generator here implements the bounded factory protocol from
//! `fixgen-core`, so all of them can be generated standalone, grouped with
//! a list factory, drawn from a distribution, or declared as record
//! fields.
//!
//! Random generators draw from entropy by default; every one of them
//! offers a `seed` method so runs can be made reproducible:
//!
//! ```rust
//! use fixgen_core::Factory;
//! use fixgen_generators::RandomInteger;
//!
//! let ages = RandomInteger::new(18, 80).seed(42);
//! assert_eq!(
//!     ages.generate(10).values().unwrap(),
//!     ages.generate(10).values().unwrap(),
//! );
//! ```

pub mod counting;
pub mod numeric;
pub mod pattern;
pub mod selection;
pub mod timestamp;
pub mod uuid;

// Re-exports for convenience
pub use counting::CountingFactory;
pub use numeric::{RandomFloat, RandomInteger};
pub use pattern::PatternFactory;
pub use selection::RandomSelection;
pub use self::uuid::UuidFactory;
pub use timestamp::{DateIntervalFactory, RandomDateFactory};
