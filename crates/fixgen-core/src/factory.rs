//! The bounded production protocol shared by every factory.

use crate::error::FactoryError;
use crate::Value;

/// Iteration bookkeeping embedded in every factory.
///
/// `amount` is the total number of values a run will produce (0 until
/// configured), `index` counts the values already produced, and `started`
/// latches on the first step so the amount cannot change mid-run.
#[derive(Clone, Debug, Default)]
pub struct RunState {
    amount: usize,
    index: usize,
    started: bool,
}

impl RunState {
    /// Create unconfigured state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of values the run will produce (0 = not configured).
    pub fn amount(&self) -> usize {
        self.amount
    }

    /// Number of values produced so far.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the first step has been taken.
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Fix the amount. Callable repeatedly before the first step; the last
    /// call wins.
    pub fn set_amount(&mut self, amount: usize) -> Result<(), FactoryError> {
        if self.started {
            return Err(FactoryError::AlreadyStarted);
        }
        self.amount = amount;
        Ok(())
    }

    /// Latch the start of iteration.
    ///
    /// Fails with [`FactoryError::MissingAmount`] while the amount is 0; a
    /// run of zero elements is never valid to iterate.
    pub fn begin(&mut self) -> Result<(), FactoryError> {
        if self.amount == 0 {
            return Err(FactoryError::MissingAmount);
        }
        self.started = true;
        Ok(())
    }

    /// Whether the run has produced all of its values.
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.amount
    }

    /// Record one produced value.
    pub fn advance(&mut self) {
        self.index += 1;
    }

    /// Values still to be produced.
    pub fn remaining(&self) -> usize {
        self.amount.saturating_sub(self.index)
    }

    /// Progress in percent. 0.0 while the amount is not configured.
    pub fn percent_complete(&self) -> f64 {
        if self.amount == 0 {
            return 0.0;
        }
        self.index as f64 / self.amount as f64 * 100.0
    }

    /// Clear iteration bookkeeping (index and the started latch).
    pub fn reset(&mut self) {
        self.index = 0;
        self.started = false;
    }
}

/// A configured, bounded producer of values.
///
/// A factory is declared once as a template, then cloned into independent
/// runs with [`Factory::generate`]. Each run produces exactly the requested
/// number of values, one per step of [`Factory::try_next`].
///
/// Implementors supply the production method and state access; the shared
/// protocol — amount latching, the started flag, termination — is provided
/// here. Composites additionally override [`Factory::set_amount`] to rescale
/// their children's amounts in the same call, and [`Factory::reset`] to
/// reset their children.
pub trait Factory: Send + Sync {
    /// Iteration bookkeeping for this instance.
    fn state(&self) -> &RunState;

    /// Mutable iteration bookkeeping for this instance.
    fn state_mut(&mut self) -> &mut RunState;

    /// Produce one value.
    ///
    /// Composites call this directly on their selected children; it never
    /// advances the step counter — only [`Factory::try_next`] does.
    fn produce(&mut self) -> Result<Value, FactoryError>;

    /// Clone this factory behind a box, preserving its configuration.
    fn clone_box(&self) -> Box<dyn Factory>;

    /// Fix the total number of values to produce.
    ///
    /// Fails with [`FactoryError::AlreadyStarted`] once iteration has
    /// begun. May be called repeatedly before that; the last call wins.
    fn set_amount(&mut self, amount: usize) -> Result<(), FactoryError> {
        self.state_mut().set_amount(amount)
    }

    /// Clear iteration bookkeeping so the instance can be configured anew.
    fn reset(&mut self) {
        self.state_mut().reset();
    }

    /// Take one step: produce the next value, or report normal termination.
    ///
    /// The first step fails with [`FactoryError::MissingAmount`] when no
    /// positive amount has been configured. Exhaustion yields `Ok(None)`.
    fn try_next(&mut self) -> Result<Option<Value>, FactoryError> {
        if !self.state().has_started() {
            self.state_mut().begin()?;
        }
        if self.state().is_exhausted() {
            return Ok(None);
        }
        let value = self.produce()?;
        self.state_mut().advance();
        Ok(Some(value))
    }

    /// Progress through the run in percent. 0.0 before an amount is set.
    fn percent_complete(&self) -> f64 {
        self.state().percent_complete()
    }

    /// Clone this template into an independent run of `amount` values.
    ///
    /// The receiver is never mutated, so one declared template can generate
    /// any number of runs with different amounts. The clone's iteration
    /// bookkeeping is reset before the amount is applied; producer-internal
    /// state (counting cursors, RNG state) is carried over as configured.
    fn generate(&self, amount: usize) -> FactoryRun {
        let mut run = self.clone_box();
        run.reset();
        run.set_amount(amount)
            .expect("a reset factory has not started");
        FactoryRun::new(run)
    }
}

impl Clone for Box<dyn Factory> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// An independent bounded run produced by [`Factory::generate`].
///
/// Yields exactly the requested number of values and then ends. A protocol
/// error (missing amount, missing dependencies) is yielded once, after
/// which the run is fused.
pub struct FactoryRun {
    factory: Box<dyn Factory>,
    failed: bool,
}

impl FactoryRun {
    pub(crate) fn new(factory: Box<dyn Factory>) -> Self {
        Self {
            factory,
            failed: false,
        }
    }

    /// Progress through the run in percent.
    pub fn percent_complete(&self) -> f64 {
        self.factory.percent_complete()
    }

    /// Drain the run into a vector, stopping at the first error.
    pub fn values(self) -> Result<Vec<Value>, FactoryError> {
        self.collect()
    }
}

impl Iterator for FactoryRun {
    type Item = Result<Value, FactoryError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.factory.try_next() {
            Ok(Some(value)) => Some(Ok(value)),
            Ok(None) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.factory.state().remaining();
        (0, Some(remaining.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Callable;
    use serde_json::json;

    #[test]
    fn test_generate_yields_exact_amount() {
        let template = Callable::new(|| json!("foo"));
        let values = template.generate(4).values().unwrap();
        assert_eq!(values, vec![json!("foo"); 4]);
    }

    #[test]
    fn test_run_terminates_normally() {
        let template = Callable::new(|| json!(1));
        let mut run = template.generate(2);
        assert!(run.next().unwrap().is_ok());
        assert!(run.next().unwrap().is_ok());
        assert!(run.next().is_none());
        // A further pull keeps reporting the end, not an error.
        assert!(run.next().is_none());
    }

    #[test]
    fn test_missing_amount() {
        let template = Callable::new(|| json!(1));
        let mut run = template.generate(0);
        assert_eq!(run.next(), Some(Err(FactoryError::MissingAmount)));
        // The run is fused after the error.
        assert!(run.next().is_none());
    }

    #[test]
    fn test_runs_are_independent() {
        let template = Callable::new(|| json!(1));
        let mut first = template.generate(3);
        let mut second = template.generate(5);

        assert!(first.next().is_some());
        assert!(first.next().is_some());

        // Progress of one run is invisible to the other and the template.
        assert_eq!(second.percent_complete(), 0.0);
        assert_eq!(template.state().index(), 0);
        assert!(!template.state().has_started());

        assert_eq!(second.by_ref().count(), 5);
        assert_eq!(first.count(), 1);
    }

    #[test]
    fn test_set_amount_last_call_wins() {
        let mut factory = Callable::new(|| json!(1));
        factory.set_amount(2).unwrap();
        factory.set_amount(7).unwrap();
        assert_eq!(factory.state().amount(), 7);

        let mut produced = 0;
        while let Some(_value) = factory.try_next().unwrap() {
            produced += 1;
        }
        assert_eq!(produced, 7);
    }

    #[test]
    fn test_set_amount_after_start_fails() {
        let mut factory = Callable::new(|| json!(1));
        factory.set_amount(3).unwrap();
        factory.try_next().unwrap();
        assert_eq!(factory.set_amount(5), Err(FactoryError::AlreadyStarted));
        // The configured amount is unchanged.
        assert_eq!(factory.state().amount(), 3);
    }

    #[test]
    fn test_generate_resets_a_started_template() {
        let mut template = Callable::new(|| json!(1));
        template.set_amount(2).unwrap();
        template.try_next().unwrap();

        // The clone starts fresh even though the template has stepped.
        let values = template.generate(3).values().unwrap();
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_percent_complete_is_idempotent() {
        let mut factory = Callable::new(|| json!(1));
        assert_eq!(factory.percent_complete(), 0.0);

        factory.set_amount(4).unwrap();
        factory.try_next().unwrap();
        assert_eq!(factory.percent_complete(), 25.0);
        assert_eq!(factory.percent_complete(), 25.0);
        assert_eq!(factory.state().index(), 1);

        factory.try_next().unwrap();
        assert_eq!(factory.percent_complete(), 50.0);
    }
}
