//! Pattern-expanded string factory.

use ::uuid::Uuid;
use fixgen_core::{Factory, FactoryError, RunState, Value};

/// Expands a template string on each call.
///
/// Supported placeholders:
/// - `{index}` - 0-based production counter
/// - `{uuid}` - random v4 UUID, fresh per occurrence
///
/// # Example
/// ```
/// use fixgen_core::Factory;
/// use fixgen_generators::PatternFactory;
///
/// let values = PatternFactory::new("user_{index}@example.com")
///     .generate(2)
///     .values()
///     .unwrap();
/// assert_eq!(values[0], "user_0@example.com");
/// assert_eq!(values[1], "user_1@example.com");
/// ```
#[derive(Clone)]
pub struct PatternFactory {
    state: RunState,
    pattern: String,
    index: u64,
}

impl PatternFactory {
    /// Expand `pattern` per produced value.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            state: RunState::new(),
            pattern: pattern.into(),
            index: 0,
        }
    }
}

impl Factory for PatternFactory {
    fn state(&self) -> &RunState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn produce(&mut self) -> Result<Value, FactoryError> {
        let mut result = self.pattern.replace("{index}", &self.index.to_string());
        while result.contains("{uuid}") {
            result = result.replacen("{uuid}", &Uuid::new_v4().to_string(), 1);
        }
        self.index += 1;
        Ok(Value::from(result))
    }

    fn clone_box(&self) -> Box<dyn Factory> {
        Box::new(self.clone())
    }
}
