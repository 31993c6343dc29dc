//! Tabular data model for nominal attributes.
//!
//! A [`Dataset`] is an ordered schema of [`Attribute`]s, one of them
//! designated as the class attribute, plus the [`Example`]s conforming to
//! it. Every value an example carries must belong to its attribute's
//! declared domain or be the unknown sentinel [`UNKNOWN_VALUE`].
//!
//! Datasets are validated while they are built, so a dataset that exists
//! is well formed.
//!
//! # Examples
//!
//! ```
//! use arbol::data::{Attribute, Dataset};
//!
//! let weather = Attribute::new("Weather", ["Sunny", "Rainy"]).expect("valid attribute");
//! let class = Attribute::new("Class", ["Play", "Stay"]).expect("valid attribute");
//! let mut data = Dataset::new(vec![weather, class], "Class").expect("valid schema");
//!
//! data.add_example(["Sunny", "Play"]).expect("values are in domain");
//! data.add_example(["?", "Stay"]).expect("unknown is always accepted");
//! assert!(data.add_example(["Foggy", "Stay"]).is_err());
//! assert_eq!(data.len(), 2);
//! ```

pub mod arff;

pub use arff::ArffReader;

use crate::error::{ArbolError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sentinel value for an unknown (missing) observation.
pub const UNKNOWN_VALUE: &str = "?";

/// A nominal attribute: a name and its ordered, non-empty domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    values: Vec<String>,
}

impl Attribute {
    /// Creates an attribute from a name and its permitted values.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is blank, the domain is empty
    /// or a value is repeated.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ArbolError::validation("attribute names cannot be empty"));
        }

        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(ArbolError::validation(format!(
                "attribute '{name}' must declare at least one value"
            )));
        }

        let mut seen = HashSet::with_capacity(values.len());
        for value in &values {
            if !seen.insert(value.as_str()) {
                return Err(ArbolError::validation(format!(
                    "attribute '{name}' declares value '{value}' more than once"
                )));
            }
        }

        Ok(Self { name, values })
    }

    /// Returns the attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared domain in declaration order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of values in the domain.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.values.len()
    }

    /// Position of `value` in the domain.
    #[must_use]
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    /// Returns `true` if `value` is declared in the domain.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns `true` if `value` is either in the domain or the unknown sentinel.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        value == UNKNOWN_VALUE || self.contains(value)
    }

    /// Copy of this attribute whose domain also contains [`UNKNOWN_VALUE`]
    /// as its last value. A domain that already declares it is unchanged.
    #[must_use]
    pub fn with_unknown(&self) -> Self {
        let mut extended = self.clone();
        if !extended.contains(UNKNOWN_VALUE) {
            extended.values.push(UNKNOWN_VALUE.to_string());
        }
        extended
    }
}

/// One observation: attribute name mapped to the observed value.
///
/// Entries keep insertion order, which for loaded data is the schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    values: IndexMap<String, String>,
}

impl Example {
    /// Creates an empty example.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an example from `(attribute, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Sets the value for an attribute, returning the example.
    #[must_use]
    pub fn with_value(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(attribute, value);
        self
    }

    /// Sets the value for an attribute, returning the previous value if any.
    pub fn insert(
        &mut self,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.values.insert(attribute.into(), value.into())
    }

    /// Value observed for `attribute`, if the example carries one.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.values.get(attribute).map(String::as_str)
    }

    /// Returns `true` if the value for `attribute` is the unknown sentinel.
    #[must_use]
    pub fn is_unknown(&self, attribute: &str) -> bool {
        self.get(attribute) == Some(UNKNOWN_VALUE)
    }

    /// Iterates over `(attribute, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes carried.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the example carries no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Schema plus examples, with one attribute designated as the class.
#[derive(Debug, Clone)]
pub struct Dataset {
    attributes: Vec<Attribute>,
    class_index: usize,
    examples: Vec<Example>,
}

impl Dataset {
    /// Creates an empty dataset over `attributes` with `class_attribute` as
    /// the class.
    ///
    /// # Errors
    ///
    /// Returns a validation error if two attributes share a name or the
    /// class attribute is not declared.
    pub fn new(attributes: Vec<Attribute>, class_attribute: &str) -> Result<Self> {
        let mut names = HashSet::with_capacity(attributes.len());
        for attribute in &attributes {
            if !names.insert(attribute.name()) {
                return Err(ArbolError::validation(format!(
                    "attribute '{}' is declared more than once",
                    attribute.name()
                )));
            }
        }

        let class_index = attributes
            .iter()
            .position(|a| a.name() == class_attribute)
            .ok_or_else(|| {
                ArbolError::validation(format!(
                    "class attribute '{class_attribute}' is not declared"
                ))
            })?;

        Ok(Self {
            attributes,
            class_index,
            examples: Vec::new(),
        })
    }

    /// Appends an example given as values aligned with the schema order.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the number of values differs from the
    /// number of attributes or a value lies outside its attribute's domain.
    pub fn add_example<I, S>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.len() != self.attributes.len() {
            return Err(ArbolError::validation(format!(
                "example {} has {} values but the schema declares {} attributes",
                self.examples.len(),
                values.len(),
                self.attributes.len()
            )));
        }

        let mut example = Example::new();
        for (attribute, value) in self.attributes.iter().zip(values) {
            if !attribute.accepts(&value) {
                return Err(self.out_of_domain(attribute, &value));
            }
            example.insert(attribute.name(), value);
        }

        self.examples.push(example);
        Ok(())
    }

    /// Appends a named example.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the example misses a schema attribute,
    /// carries an undeclared attribute, or has a value outside a domain.
    pub fn push_example(&mut self, example: Example) -> Result<()> {
        for (name, _) in example.iter() {
            if self.attribute(name).is_none() {
                return Err(ArbolError::validation(format!(
                    "example {} references undeclared attribute '{name}'",
                    self.examples.len()
                )));
            }
        }

        for attribute in &self.attributes {
            let Some(value) = example.get(attribute.name()) else {
                return Err(ArbolError::validation(format!(
                    "example {} has no value for attribute '{}'",
                    self.examples.len(),
                    attribute.name()
                )));
            };
            if !attribute.accepts(value) {
                return Err(self.out_of_domain(attribute, value));
            }
        }

        self.examples.push(example);
        Ok(())
    }

    fn out_of_domain(&self, attribute: &Attribute, value: &str) -> ArbolError {
        ArbolError::validation(format!(
            "example {}: value '{value}' is not in the domain of attribute '{}'",
            self.examples.len(),
            attribute.name()
        ))
    }

    /// Checks that no example leaves its class value unknown.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending example.
    pub fn validate_labels(&self) -> Result<()> {
        let class = self.class_attribute().name();
        match self.examples.iter().position(|e| e.is_unknown(class)) {
            Some(index) => Err(ArbolError::validation(format!(
                "example {index} has an unknown value for class attribute '{class}'"
            ))),
            None => Ok(()),
        }
    }

    /// All attributes in declaration order, class included.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Looks up an attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    /// The class attribute.
    #[must_use]
    pub fn class_attribute(&self) -> &Attribute {
        &self.attributes[self.class_index]
    }

    /// Non-class attributes in declaration order.
    pub fn feature_attributes(&self) -> impl Iterator<Item = &Attribute> {
        let class_index = self.class_index;
        self.attributes
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != class_index)
            .map(|(_, a)| a)
    }

    /// Class value of an example under this dataset's schema.
    #[must_use]
    pub fn class_of<'a>(&self, example: &'a Example) -> Option<&'a str> {
        example.get(self.class_attribute().name())
    }

    /// The examples in insertion order.
    #[must_use]
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Number of examples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Returns `true` if there are no examples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}
