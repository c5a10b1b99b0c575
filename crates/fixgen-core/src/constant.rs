//! Constant-value leaf factory.

use crate::error::FactoryError;
use crate::factory::{Factory, RunState};
use crate::Value;

/// A factory that produces the same value on every call.
///
/// Plain values handed to a distribution are wrapped in this.
///
/// # Example
/// ```
/// use fixgen_core::{Constant, Factory};
///
/// let values = Constant::new("pending").generate(3).values().unwrap();
/// assert_eq!(values.len(), 3);
/// assert_eq!(values[0], "pending");
/// ```
#[derive(Clone)]
pub struct Constant {
    state: RunState,
    value: Value,
}

impl Constant {
    /// Create a factory that always produces `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            state: RunState::new(),
            value: value.into(),
        }
    }
}

impl Factory for Constant {
    fn state(&self) -> &RunState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn produce(&mut self) -> Result<Value, FactoryError> {
        Ok(self.value.clone())
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
    fn test_constant_repeats_its_value() {
        let values = Constant::new(json!({"nested": [1, 2]}))
            .generate(3)
            .values()
            .unwrap();
        assert_eq!(values, vec![json!({"nested": [1, 2]}); 3]);
    }
}
