//! Closure-invoking leaf factory.

use std::sync::Arc;

use crate::error::FactoryError;
use crate::factory::{Factory, RunState};
use crate::Value;

/// A factory that invokes an externally supplied producer on every call
/// and returns its result verbatim.
///
/// # Example
/// ```
/// use fixgen_core::{Callable, Factory};
/// use serde_json::json;
///
/// let values = Callable::new(|| json!("foo")).generate(4).values().unwrap();
/// assert_eq!(values, vec![json!("foo"); 4]);
/// ```
#[derive(Clone)]
pub struct Callable {
    state: RunState,
    producer: Arc<dyn Fn() -> Value + Send + Sync>,
}

impl Callable {
    /// Wrap a zero-argument producer.
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self {
            state: RunState::new(),
            producer: Arc::new(producer),
        }
    }
}

impl Factory for Callable {
    fn state(&self) -> &RunState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn produce(&mut self) -> Result<Value, FactoryError> {
        Ok((self.producer)())
    }

    fn clone_box(&self) -> Box<dyn Factory> {
        Box::new(self.clone())
    }
}
