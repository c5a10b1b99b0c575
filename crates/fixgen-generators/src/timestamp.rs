//! Timestamp factories.

use chrono::{DateTime, Duration, Utc};
use fixgen_core::{Factory, FactoryError, RunState, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces timestamps advancing by a fixed step from a start instant.
///
/// Values are RFC 3339 strings.
///
/// # Example
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use fixgen_core::Factory;
/// use fixgen_generators::DateIntervalFactory;
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let values = DateIntervalFactory::new(start, Duration::days(1))
///     .generate(2)
///     .values()
///     .unwrap();
/// assert_eq!(values[0], "2024-01-01T00:00:00+00:00");
/// assert_eq!(values[1], "2024-01-02T00:00:00+00:00");
/// ```
#[derive(Clone)]
pub struct DateIntervalFactory {
    state: RunState,
    next: DateTime<Utc>,
    step: Duration,
}

impl DateIntervalFactory {
    /// Advance from `start` by `step` per produced value.
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            state: RunState::new(),
            next: start,
            step,
        }
    }
}

impl Factory for DateIntervalFactory {
    fn state(&self) -> &RunState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn produce(&mut self) -> Result<Value, FactoryError> {
        let value = self.next;
        self.next += self.step;
        Ok(Value::from(value.to_rfc3339()))
    }

    fn clone_box(&self) -> Box<dyn Factory> {
        Box::new(self.clone())
    }
}

/// Produces uniform random timestamps within `[start, end)`.
///
/// Values are RFC 3339 strings with millisecond granularity.
#[derive(Clone)]
pub struct RandomDateFactory {
    state: RunState,
    start: DateTime<Utc>,
    span_ms: i64,
    rng: StdRng,
}

impl RandomDateFactory {
    /// Uniform instants in `[start, end)`, drawn from entropy.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let span_ms = (end - start).num_milliseconds().max(1);
        Self {
            state: RunState::new(),
            start,
            span_ms,
            rng: StdRng::from_entropy(),
        }
    }

    /// Fix the RNG seed for reproducible values.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Factory for RandomDateFactory {
    fn state(&self) -> &RunState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn produce(&mut self) -> Result<Value, FactoryError> {
        let offset_ms = self.rng.gen_range(0..self.span_ms);
        let value = self.start + Duration::milliseconds(offset_ms);
        Ok(Value::from(value.to_rfc3339()))
    }

    fn clone_box(&self) -> Box<dyn Factory> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_interval_advances_by_step() {
        let values = DateIntervalFactory::new(day(1), Duration::hours(12))
            .generate(3)
            .values()
            .unwrap();
        assert_eq!(values[0], "2024-06-01T00:00:00+00:00");
        assert_eq!(values[1], "2024-06-01T12:00:00+00:00");
        assert_eq!(values[2], "2024-06-02T00:00:00+00:00");
    }

    #[test]
    fn test_random_dates_stay_in_range() {
        let start = day(1);
        let end = day(30);
        let values = RandomDateFactory::new(start, end)
            .seed(42)
            .generate(100)
            .values()
            .unwrap();

        for value in values {
            let parsed: DateTime<Utc> = value.as_str().unwrap().parse().unwrap();
            assert!(parsed >= start && parsed < end);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let first = RandomDateFactory::new(day(1), day(2)).seed(3).generate(10).values().unwrap();
        let second = RandomDateFactory::new(day(1), day(2)).seed(3).generate(10).values().unwrap();
        assert_eq!(first, second);
    }
}
