//! Integer sequence factory.

use fixgen_core::{Factory, FactoryError, RunState, Value};

/// Produces consecutive integers from a starting point.
///
/// # Example
/// ```
/// use fixgen_core::Factory;
/// use fixgen_generators::CountingFactory;
/// use serde_json::json;
///
/// let values = CountingFactory::new(1).generate(3).values().unwrap();
/// assert_eq!(values, vec![json!(1), json!(2), json!(3)]);
/// ```
#[derive(Clone)]
pub struct CountingFactory {
    state: RunState,
    next: i64,
    step: i64,
}

impl CountingFactory {
    /// Count from `start` in steps of 1.
    pub fn new(start: i64) -> Self {
        Self::with_step(start, 1)
    }

    /// Count from `start` in steps of `step` (may be negative).
    pub fn with_step(start: i64, step: i64) -> Self {
        Self {
            state: RunState::new(),
            next: start,
            step,
        }
    }
}

impl Factory for CountingFactory {
    fn state(&self) -> &RunState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn produce(&mut self) -> Result<Value, FactoryError> {
        let value = self.next;
        self.next += self.step;
        Ok(Value::from(value))
    }

    fn clone_box(&self) -> Box<dyn Factory> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_counts_from_start() {
        let values = CountingFactory::new(100).generate(4).values().unwrap();
        assert_eq!(values, vec![json!(100), json!(101), json!(102), json!(103)]);
    }

    #[test]
    fn test_negative_step() {
        let values = CountingFactory::with_step(0, -2).generate(3).values().unwrap();
        assert_eq!(values, vec![json!(0), json!(-2), json!(-4)]);
    }

    #[test]
    fn test_template_runs_restart_at_start() {
        let template = CountingFactory::new(1);
        assert_eq!(template.generate(2).values().unwrap(), vec![json!(1), json!(2)]);
        // Each run clones the template's cursor.
        assert_eq!(template.generate(2).values().unwrap(), vec![json!(1), json!(2)]);
    }
}
