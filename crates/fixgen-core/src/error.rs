//! Factory error types.

use thiserror::Error;

/// Errors raised by factory configuration and production.
///
/// All of these indicate caller or configuration misuse and are
/// unrecoverable at the point raised. Nothing here is transient, so there
/// is no retry policy anywhere in the protocol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    /// Iteration was attempted before a positive amount was configured.
    #[error("no element amount configured before iteration")]
    MissingAmount,

    /// The amount was reconfigured after iteration had begun.
    #[error("cannot change the element amount once iteration has started")]
    AlreadyStarted,

    /// Declared dependency names absent from the injected values.
    ///
    /// Raised at injection time and again at production time; `missing`
    /// lists the absent names in declaration order.
    #[error("missing required fields: {}", missing.join(", "))]
    MissingRequiredFields { missing: Vec<String> },

    /// Outcome percentages did not sum to exactly 100.
    #[error("a distribution must total 100% probability, got {total}%")]
    InvalidDistribution { total: u32 },

    /// Production was requested while no outcome has quota left.
    #[error("no active outcomes remain in the distribution")]
    EmptyDistribution,

    /// A composite's child ended before the composite was done with it.
    #[error("a child factory ran out of values mid-production")]
    ChildExhausted,
}
