//! Fixed-size grouping composite.

use crate::error::FactoryError;
use crate::factory::{Factory, RunState};
use crate::Value;

/// Groups a child factory's output into fixed-size lists.
///
/// A run of `n` lists draws `n * elements_per_list` values from the child,
/// in production order; the child's amount is rescaled accordingly whenever
/// this factory's amount is set, overriding anything the child was
/// configured with before.
///
/// # Example
/// ```
/// use fixgen_core::{Callable, Factory, ListFactory};
/// use serde_json::json;
/// use std::sync::atomic::{AtomicI64, Ordering};
///
/// let counter = AtomicI64::new(1);
/// let inner = Callable::new(move || json!(counter.fetch_add(1, Ordering::Relaxed)));
///
/// let lists = ListFactory::new(inner, 3).generate(2).values().unwrap();
/// assert_eq!(lists, vec![json!([1, 2, 3]), json!([4, 5, 6])]);
/// ```
#[derive(Clone)]
pub struct ListFactory {
    state: RunState,
    child: Box<dyn Factory>,
    elements_per_list: usize,
}

impl ListFactory {
    /// Wrap `child`, grouping its output `elements_per_list` at a time.
    pub fn new(child: impl Factory + 'static, elements_per_list: usize) -> Self {
        Self {
            state: RunState::new(),
            child: Box::new(child),
            elements_per_list,
        }
    }
}

impl Factory for ListFactory {
    fn state(&self) -> &RunState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn set_amount(&mut self, amount: usize) -> Result<(), FactoryError> {
        self.state.set_amount(amount)?;
        self.child.set_amount(amount * self.elements_per_list)
    }

    fn reset(&mut self) {
        self.state.reset();
        self.child.reset();
    }

    fn produce(&mut self) -> Result<Value, FactoryError> {
        let mut items = Vec::with_capacity(self.elements_per_list);
        for _ in 0..self.elements_per_list {
            match self.child.try_next()? {
                Some(value) => items.push(value),
                None => return Err(FactoryError::ChildExhausted),
            }
        }
        Ok(Value::Array(items))
    }

    fn clone_box(&self) -> Box<dyn Factory> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Callable;
    use serde_json::json;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    fn counting_from(start: i64) -> Callable {
        let counter = Arc::new(AtomicI64::new(start));
        Callable::new(move || json!(counter.fetch_add(1, Ordering::Relaxed)))
    }

    #[test]
    fn test_groups_child_output_in_order() {
        let lists = ListFactory::new(counting_from(1), 3)
            .generate(5)
            .values()
            .unwrap();

        assert_eq!(
            lists,
            vec![
                json!([1, 2, 3]),
                json!([4, 5, 6]),
                json!([7, 8, 9]),
                json!([10, 11, 12]),
                json!([13, 14, 15]),
            ]
        );
    }

    #[test]
    fn test_child_amount_is_rescaled() {
        let mut factory = ListFactory::new(counting_from(1), 4);
        factory.set_amount(3).unwrap();
        assert_eq!(factory.state().amount(), 3);
        assert_eq!(factory.child.state().amount(), 12);
    }

    #[test]
    fn test_rescale_overrides_child_amount() {
        let mut child = counting_from(1);
        child.set_amount(999).unwrap();

        let mut factory = ListFactory::new(child, 2);
        factory.set_amount(3).unwrap();
        // Last writer wins, whatever the child was configured with.
        assert_eq!(factory.child.state().amount(), 6);
    }

    #[test]
    fn test_zero_group_size_yields_empty_lists() {
        let lists = ListFactory::new(counting_from(1), 0)
            .generate(2)
            .values()
            .unwrap();
        assert_eq!(lists, vec![json!([]), json!([])]);
    }
}
