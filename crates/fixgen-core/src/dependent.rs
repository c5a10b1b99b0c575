//! Fields whose production depends on sibling values injected per record.
//!
//! A dependent field declares the names of the sibling fields it needs.
//! Before each step, the record builder driving the field must inject the
//! current record's values for those names via
//! [`DependentFactory::update_dependencies`]; production re-validates that
//! every declared name is present, so a call that arrives without a prior
//! update fails instead of reading stale values. Ordering fields so that
//! dependencies are produced earlier in the same record — including cycle
//! rejection — is the builder's job, not this contract's.

use std::sync::Arc;

use crate::error::FactoryError;
use crate::factory::{Factory, RunState};
use crate::{Value, ValueMap};

/// Declared dependency names plus the values injected for the current
/// record.
#[derive(Clone, Debug, Default)]
pub struct Dependencies {
    required: Vec<String>,
    injected: ValueMap,
}

impl Dependencies {
    /// Declare the required dependency names.
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
            injected: ValueMap::new(),
        }
    }

    /// The declared dependency names, in declaration order.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Replace the injected values from `provided`.
    ///
    /// Only declared names are checked and copied; unrelated keys in
    /// `provided` are ignored. Fails with
    /// [`FactoryError::MissingRequiredFields`] listing every declared name
    /// absent from `provided`.
    pub fn update(&mut self, provided: &ValueMap) -> Result<(), FactoryError> {
        self.check_present(provided)?;
        for name in &self.required {
            if let Some(value) = provided.get(name) {
                self.injected.insert(name.clone(), value.clone());
            }
        }
        Ok(())
    }

    /// Second checkpoint: verify every declared name has an injected value.
    pub fn ensure_ready(&self) -> Result<(), FactoryError> {
        self.check_present(&self.injected)
    }

    /// The injected values for the declared names.
    pub fn values(&self) -> &ValueMap {
        &self.injected
    }

    /// The injected value for one declared name.
    pub fn value(&self, name: &str) -> Result<&Value, FactoryError> {
        self.injected
            .get(name)
            .ok_or_else(|| FactoryError::MissingRequiredFields {
                missing: vec![name.to_string()],
            })
    }

    fn check_present(&self, available: &ValueMap) -> Result<(), FactoryError> {
        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|name| !available.contains_key(name.as_str()))
            .cloned()
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FactoryError::MissingRequiredFields { missing })
        }
    }
}

/// A factory that additionally requires named sibling values to be
/// injected before each production call.
pub trait DependentFactory: Factory {
    /// The declared dependency names, in declaration order.
    fn required_fields(&self) -> &[String];

    /// Replace the injected dependency values for the upcoming call.
    ///
    /// Must be called with the current record's values before every step.
    fn update_dependencies(&mut self, values: &ValueMap) -> Result<(), FactoryError>;

    /// Clone this factory behind a dependent-capable box.
    fn clone_dependent(&self) -> Box<dyn DependentFactory>;
}

impl Clone for Box<dyn DependentFactory> {
    fn clone(&self) -> Self {
        self.clone_dependent()
    }
}

/// A factory that invokes a producer with the injected dependency values.
///
/// The closure receives a map holding exactly the declared names and their
/// currently injected values.
///
/// # Example
/// ```
/// use fixgen_core::{DependentCallable, DependentFactory, Factory, ValueMap};
/// use serde_json::json;
///
/// let mut sum = DependentCallable::new(
///     |deps: &ValueMap| json!(deps["x"].as_i64().unwrap() + deps["y"].as_i64().unwrap()),
///     ["x", "y"],
/// );
/// sum.set_amount(1).unwrap();
///
/// let mut record = ValueMap::new();
/// record.insert("x".into(), json!(100));
/// record.insert("y".into(), json!(1));
/// sum.update_dependencies(&record).unwrap();
///
/// assert_eq!(sum.try_next().unwrap(), Some(json!(101)));
/// ```
#[derive(Clone)]
pub struct DependentCallable {
    state: RunState,
    deps: Dependencies,
    producer: Arc<dyn Fn(&ValueMap) -> Value + Send + Sync>,
}

impl DependentCallable {
    /// Wrap a producer that consumes the values of the named `fields`.
    pub fn new<F, I, S>(producer: F, fields: I) -> Self
    where
        F: Fn(&ValueMap) -> Value + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: RunState::new(),
            deps: Dependencies::new(fields),
            producer: Arc::new(producer),
        }
    }
}

impl Factory for DependentCallable {
    fn state(&self) -> &RunState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn produce(&mut self) -> Result<Value, FactoryError> {
        self.deps.ensure_ready()?;
        Ok((self.producer)(self.deps.values()))
    }

    fn clone_box(&self) -> Box<dyn Factory> {
        Box::new(self.clone())
    }
}

impl DependentFactory for DependentCallable {
    fn required_fields(&self) -> &[String] {
        self.deps.required()
    }

    fn update_dependencies(&mut self, values: &ValueMap) -> Result<(), FactoryError> {
        self.deps.update(values)
    }

    fn clone_dependent(&self) -> Box<dyn DependentFactory> {
        Box::new(self.clone())
    }
}

/// A factory that duplicates the value of one sibling field, unchanged.
#[derive(Clone)]
pub struct ClonedField {
    state: RunState,
    deps: Dependencies,
    source: String,
}

impl ClonedField {
    /// Duplicate the sibling field named `source`.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            state: RunState::new(),
            deps: Dependencies::new([source.clone()]),
            source,
        }
    }
}

impl Factory for ClonedField {
    fn state(&self) -> &RunState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn produce(&mut self) -> Result<Value, FactoryError> {
        self.deps.ensure_ready()?;
        Ok(self.deps.value(&self.source)?.clone())
    }

    fn clone_box(&self) -> Box<dyn Factory> {
        Box::new(self.clone())
    }
}

impl DependentFactory for ClonedField {
    fn required_fields(&self) -> &[String] {
        self.deps.required()
    }

    fn update_dependencies(&mut self, values: &ValueMap) -> Result<(), FactoryError> {
        self.deps.update(values)
    }

    fn clone_dependent(&self) -> Box<dyn DependentFactory> {
        Box::new(self.clone())
    }
}
