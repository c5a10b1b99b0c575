//! Uniform random numeric factories.

use fixgen_core::{Factory, FactoryError, RunState, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces uniform random integers in an inclusive range.
#[derive(Clone)]
pub struct RandomInteger {
    state: RunState,
    min: i64,
    max: i64,
    rng: StdRng,
}

impl RandomInteger {
    /// Uniform integers in `min..=max`, drawn from entropy.
    pub fn new(min: i64, max: i64) -> Self {
        assert!(min <= max, "min must not exceed max");
        Self {
            state: RunState::new(),
            min,
            max,
            rng: StdRng::from_entropy(),
        }
    }

    /// Fix the RNG seed for reproducible values.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Factory for RandomInteger {
    fn state(&self) -> &RunState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn produce(&mut self) -> Result<Value, FactoryError> {
        Ok(Value::from(self.rng.gen_range(self.min..=self.max)))
    }

    fn clone_box(&self) -> Box<dyn Factory> {
        Box::new(self.clone())
    }
}

/// Produces uniform random floats in a half-open range.
#[derive(Clone)]
pub struct RandomFloat {
    state: RunState,
    min: f64,
    max: f64,
    rng: StdRng,
}

impl RandomFloat {
    /// Uniform floats in `min..max`, drawn from entropy.
    pub fn new(min: f64, max: f64) -> Self {
        assert!(min < max, "min must be below max");
        Self {
            state: RunState::new(),
            min,
            max,
            rng: StdRng::from_entropy(),
        }
    }

    /// Fix the RNG seed for reproducible values.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Factory for RandomFloat {
    fn state(&self) -> &RunState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn produce(&mut self) -> Result<Value, FactoryError> {
        Ok(Value::from(self.rng.gen_range(self.min..self.max)))
    }

    fn clone_box(&self) -> Box<dyn Factory> {
        Box::new(self.clone())
    }
}
