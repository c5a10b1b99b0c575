//! Uniform selection from a fixed list of values.

use fixgen_core::{Factory, FactoryError, RunState, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniformly selects one of a fixed list of values, with replacement.
///
/// For selection against exact per-value quotas, use a distribution
/// factory instead.
///
/// # Example
/// ```
/// use fixgen_core::Factory;
/// use fixgen_generators::RandomSelection;
///
/// let template = RandomSelection::new(["web", "ios", "android"]).seed(1);
/// for value in template.generate(20).values().unwrap() {
///     assert!(["web", "ios", "android"].contains(&value.as_str().unwrap()));
/// }
/// ```
#[derive(Clone)]
pub struct RandomSelection {
    state: RunState,
    choices: Vec<Value>,
    rng: StdRng,
}

impl RandomSelection {
    /// Select uniformly among `choices`, drawn from entropy.
    pub fn new<I, V>(choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let choices: Vec<Value> = choices.into_iter().map(Into::into).collect();
        assert!(!choices.is_empty(), "at least one choice is required");
        Self {
            state: RunState::new(),
            choices,
            rng: StdRng::from_entropy(),
        }
    }

    /// Fix the RNG seed for reproducible values.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Factory for RandomSelection {
    fn state(&self) -> &RunState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn produce(&mut self) -> Result<Value, FactoryError> {
        let index = self.rng.gen_range(0..self.choices.len());
        Ok(self.choices[index].clone())
    }

    fn clone_box(&self) -> Box<dyn Factory> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_come_from_choices() {
        let values = RandomSelection::new([1, 2, 3]).seed(42).generate(50).values().unwrap();
        for value in values {
            assert!((1..=3).contains(&value.as_i64().unwrap()));
        }
    }

    #[test]
    fn test_single_choice() {
        let values = RandomSelection::new(["only"]).seed(0).generate(5).values().unwrap();
        assert!(values.iter().all(|v| v.as_str() == Some("only")));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let first = RandomSelection::new(["a", "b", "c"]).seed(9).generate(20).values().unwrap();
        let second = RandomSelection::new(["a", "b", "c"]).seed(9).generate(20).values().unwrap();
        assert_eq!(first, second);
    }
}
