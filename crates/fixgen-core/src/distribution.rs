//! Quota-based discrete distribution sampling.
//!
//! Outcomes are drawn without replacement against per-outcome quotas
//! derived from integer percentages, so a finite run honors the declared
//! proportions exactly instead of only in expectation.
//!
//! Selection is uniform over the outcomes that still have quota: an
//! outcome with a larger remaining quota is not more likely to be drawn on
//! a given call, only more likely to still be drawable later, once smaller
//! outcomes have been depleted and removed. Callers who need per-call draw
//! probability proportional to remaining quota need a different sampler.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constant::Constant;
use crate::error::FactoryError;
use crate::factory::{Factory, RunState};
use crate::Value;

/// One declared outcome: a factory template and its percentage.
#[derive(Clone)]
struct OutcomeSpec {
    factory: Box<dyn Factory>,
    percent: u32,
}

/// One outcome of a running distribution, with its remaining quota.
#[derive(Clone)]
struct ActiveOutcome {
    factory: Box<dyn Factory>,
    remaining: usize,
}

/// Produces values from a set of outcome factories according to exact
/// per-outcome quotas.
///
/// Declared via [`DistributionFactory::builder`]; percentages must sum to
/// exactly 100. When the amount is set, each outcome's quota becomes
/// `ceil(amount * percent / 100)`, which guarantees the total quota covers
/// the requested amount.
///
/// # Example
/// ```
/// use fixgen_core::{DistributionFactory, Factory};
/// use serde_json::json;
///
/// let template = DistributionFactory::builder()
///     .value("foo", 50)
///     .value("bar", 50)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let values = template.generate(4).values().unwrap();
/// assert_eq!(values.iter().filter(|v| *v == &json!("foo")).count(), 2);
/// assert_eq!(values.iter().filter(|v| *v == &json!("bar")).count(), 2);
/// ```
#[derive(Clone)]
pub struct DistributionFactory {
    state: RunState,
    outcomes: Vec<OutcomeSpec>,
    active: Vec<ActiveOutcome>,
    rng: StdRng,
}

impl DistributionFactory {
    /// Start declaring a distribution.
    pub fn builder() -> DistributionBuilder {
        DistributionBuilder::new()
    }
}

impl Factory for DistributionFactory {
    fn state(&self) -> &RunState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn set_amount(&mut self, amount: usize) -> Result<(), FactoryError> {
        self.state.set_amount(amount)?;
        self.active.clear();
        for spec in &self.outcomes {
            let quota = (amount as f64 * (spec.percent as f64 / 100.0)).ceil() as usize;
            if quota == 0 {
                // A 0% outcome can never be drawn.
                continue;
            }
            let mut factory = spec.factory.clone();
            factory.reset();
            factory.set_amount(quota)?;
            self.active.push(ActiveOutcome { factory, remaining: quota });
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.state.reset();
        self.active.clear();
        for spec in &mut self.outcomes {
            spec.factory.reset();
        }
    }

    fn produce(&mut self) -> Result<Value, FactoryError> {
        if self.active.is_empty() {
            return Err(FactoryError::EmptyDistribution);
        }
        let index = self.rng.gen_range(0..self.active.len());
        self.active[index].remaining -= 1;
        if self.active[index].remaining == 0 {
            let mut exhausted = self.active.remove(index);
            exhausted.factory.produce()
        } else {
            self.active[index].factory.produce()
        }
    }

    fn clone_box(&self) -> Box<dyn Factory> {
        Box::new(self.clone())
    }
}

/// Fluent declaration of a [`DistributionFactory`].
pub struct DistributionBuilder {
    outcomes: Vec<OutcomeSpec>,
    seed: Option<u64>,
}

impl DistributionBuilder {
    /// Create an empty declaration.
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
            seed: None,
        }
    }

    /// Add an outcome factory with its percentage.
    pub fn factory(mut self, factory: impl Factory + 'static, percent: u32) -> Self {
        self.outcomes.push(OutcomeSpec {
            factory: Box::new(factory),
            percent,
        });
        self
    }

    /// Add a plain value as an outcome, wrapped in [`Constant`].
    pub fn value(self, value: impl Into<Value>, percent: u32) -> Self {
        self.factory(Constant::new(value), percent)
    }

    /// Seed the outcome-selection RNG for reproducible draws.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the declared percentages and build the factory.
    ///
    /// Fails with [`FactoryError::InvalidDistribution`] unless the
    /// percentages sum to exactly 100; the reported total is the literal
    /// arithmetic sum of the declared percentages.
    pub fn build(self) -> Result<DistributionFactory, FactoryError> {
        let total: u32 = self.outcomes.iter().map(|spec| spec.percent).sum();
        if total != 100 {
            return Err(FactoryError::InvalidDistribution { total });
        }
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(DistributionFactory {
            state: RunState::new(),
            outcomes: self.outcomes,
            active: Vec::new(),
            rng,
        })
    }
}

impl Default for DistributionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
