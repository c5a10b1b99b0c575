//! Random UUID factory.

use ::uuid::Uuid;
use fixgen_core::{Factory, FactoryError, RunState, Value};

/// Produces random v4 UUIDs as hyphenated strings.
#[derive(Clone, Default)]
pub struct UuidFactory {
    state: RunState,
}

impl UuidFactory {
    /// Create a v4 UUID factory.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Factory for UuidFactory {
    fn state(&self) -> &RunState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn produce(&mut self) -> Result<Value, FactoryError> {
        Ok(Value::from(Uuid::new_v4().to_string()))
    }

    fn clone_box(&self) -> Box<dyn Factory> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuids_parse_and_differ() {
        let values = UuidFactory::new().generate(10).values().unwrap();
        let unique: HashSet<Uuid> = values
            .iter()
            .map(|v| v.as_str().unwrap().parse().unwrap())
            .collect();
        assert_eq!(unique.len(), 10);
    }
}
