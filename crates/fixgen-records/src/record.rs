//! Dict-shaped composite assembling named fields into records.

use std::collections::{HashMap, HashSet};

use fixgen_core::{DependentFactory, Factory, FactoryError, RunState, Value, ValueMap};

use crate::error::RecordError;

/// A named field and the factory that produces its values.
enum FieldFactory {
    Plain(Box<dyn Factory>),
    Dependent(Box<dyn DependentFactory>),
}

impl FieldFactory {
    fn dependencies(&self) -> &[String] {
        match self {
            FieldFactory::Plain(_) => &[],
            FieldFactory::Dependent(factory) => factory.required_fields(),
        }
    }

    fn set_amount(&mut self, amount: usize) -> Result<(), FactoryError> {
        match self {
            FieldFactory::Plain(factory) => factory.set_amount(amount),
            FieldFactory::Dependent(factory) => factory.set_amount(amount),
        }
    }

    fn reset(&mut self) {
        match self {
            FieldFactory::Plain(factory) => factory.reset(),
            FieldFactory::Dependent(factory) => factory.reset(),
        }
    }

    fn try_next(&mut self) -> Result<Option<Value>, FactoryError> {
        match self {
            FieldFactory::Plain(factory) => factory.try_next(),
            FieldFactory::Dependent(factory) => factory.try_next(),
        }
    }
}

impl Clone for FieldFactory {
    fn clone(&self) -> Self {
        match self {
            FieldFactory::Plain(factory) => FieldFactory::Plain(factory.clone()),
            FieldFactory::Dependent(factory) => FieldFactory::Dependent(factory.clone()),
        }
    }
}

#[derive(Clone)]
struct Field {
    name: String,
    factory: FieldFactory,
}

/// Declares the fields of a [`RecordFactory`].
///
/// Fields are collected in declaration order; [`RecordBuilder::build`]
/// validates dependency names and fixes a dependency-safe evaluation
/// order.
pub struct RecordBuilder {
    fields: Vec<Field>,
}

impl RecordBuilder {
    /// Create an empty declaration.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add an independent field.
    pub fn field(mut self, name: impl Into<String>, factory: impl Factory + 'static) -> Self {
        self.fields.push(Field {
            name: name.into(),
            factory: FieldFactory::Plain(Box::new(factory)),
        });
        self
    }

    /// Add a field whose value is computed from sibling fields.
    pub fn dependent(
        mut self,
        name: impl Into<String>,
        factory: impl DependentFactory + 'static,
    ) -> Self {
        self.fields.push(Field {
            name: name.into(),
            factory: FieldFactory::Dependent(Box::new(factory)),
        });
        self
    }

    /// Validate the declaration and build the factory.
    ///
    /// Every declared dependency must name a declared field
    /// ([`RecordError::UnknownDependency`]), field names must be unique
    /// ([`RecordError::DuplicateField`]), and the dependency graph must be
    /// acyclic ([`RecordError::DependencyCycle`]).
    pub fn build(self) -> Result<RecordFactory, RecordError> {
        let mut names: HashSet<&str> = HashSet::new();
        for field in &self.fields {
            if !names.insert(field.name.as_str()) {
                return Err(RecordError::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }
        for field in &self.fields {
            for dependency in field.factory.dependencies() {
                if !names.contains(dependency.as_str()) {
                    return Err(RecordError::UnknownDependency {
                        field: field.name.clone(),
                        dependency: dependency.clone(),
                    });
                }
            }
        }

        let order = evaluation_order(&self.fields)?;
        let mut fields: Vec<Option<Field>> = self.fields.into_iter().map(Some).collect();
        let fields = order
            .into_iter()
            .filter_map(|index| fields[index].take())
            .collect();

        Ok(RecordFactory {
            state: RunState::new(),
            fields,
        })
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fix a dependency-safe field order: every field after all of its
/// dependencies, ready fields kept in declaration order.
fn evaluation_order(fields: &[Field]) -> Result<Vec<usize>, RecordError> {
    let index_of: HashMap<&str, usize> = fields
        .iter()
        .enumerate()
        .map(|(index, field)| (field.name.as_str(), index))
        .collect();

    let mut pending: Vec<usize> = (0..fields.len()).collect();
    let mut placed: HashSet<usize> = HashSet::new();
    let mut order = Vec::with_capacity(fields.len());

    while !pending.is_empty() {
        let before = order.len();
        pending.retain(|&candidate| {
            let ready = fields[candidate].factory.dependencies().iter().all(|dep| {
                index_of
                    .get(dep.as_str())
                    .is_some_and(|index| placed.contains(index))
            });
            if ready {
                placed.insert(candidate);
                order.push(candidate);
            }
            !ready
        });
        if order.len() == before {
            return Err(RecordError::DependencyCycle {
                fields: pending
                    .iter()
                    .map(|&index| fields[index].name.clone())
                    .collect(),
            });
        }
    }
    Ok(order)
}

/// Produces one record (`Value::Object`) per step, with every declared
/// field.
///
/// Fields are stepped in the evaluation order fixed at build time; before
/// each dependent field's step, the values produced so far for the current
/// record are injected, honoring the dependency contract. The factory
/// itself follows the bounded protocol, so records can in turn be grouped,
/// distributed, or nested as fields of other records.
///
/// # Example
/// ```
/// use fixgen_core::{ClonedField, Constant, Factory};
/// use fixgen_records::RecordFactory;
///
/// let template = RecordFactory::builder()
///     .field("id", Constant::new(7))
///     .dependent("copy", ClonedField::new("id"))
///     .build()
///     .unwrap();
///
/// let records = template.generate(2).values().unwrap();
/// assert_eq!(records[0]["copy"], records[0]["id"]);
/// ```
#[derive(Clone)]
pub struct RecordFactory {
    state: RunState,
    // In evaluation order.
    fields: Vec<Field>,
}

impl RecordFactory {
    /// Start declaring a record's fields.
    pub fn builder() -> RecordBuilder {
        RecordBuilder::new()
    }

    /// Field names in evaluation order.
    pub fn evaluation_order(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }
}

impl Factory for RecordFactory {
    fn state(&self) -> &RunState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RunState {
        &mut self.state
    }

    fn set_amount(&mut self, amount: usize) -> Result<(), FactoryError> {
        self.state.set_amount(amount)?;
        for field in &mut self.fields {
            field.factory.set_amount(amount)?;
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.state.reset();
        for field in &mut self.fields {
            field.factory.reset();
        }
    }

    fn produce(&mut self) -> Result<Value, FactoryError> {
        let mut record = ValueMap::new();
        for field in &mut self.fields {
            if let FieldFactory::Dependent(factory) = &mut field.factory {
                factory.update_dependencies(&record)?;
            }
            match field.factory.try_next()? {
                Some(value) => {
                    record.insert(field.name.clone(), value);
                }
                None => return Err(FactoryError::ChildExhausted),
            }
        }
        Ok(Value::Object(record))
    }

    fn clone_box(&self) -> Box<dyn Factory> {
        Box::new(self.clone())
    }
}
