//! Classification with learned decision trees.
//!
//! A tree labels an example by walking from the root: each internal node
//! looks up the example's value for its attribute and follows the matching
//! branch until a leaf is reached. An example carrying a value the tree has
//! no branch for (or no value at all) is reported as incompatible instead of
//! being guessed.
//!
//! # Example
//!
//! ```
//! use arbol::prelude::*;
//!
//! let weather = Attribute::new("Weather", ["Sunny", "Rainy"]).expect("valid attribute");
//! let class = Attribute::new("Class", ["Play", "Stay"]).expect("valid attribute");
//! let mut data = Dataset::new(vec![weather, class], "Class").expect("valid schema");
//! data.add_example(["Sunny", "Play"]).expect("valid example");
//! data.add_example(["Rainy", "Stay"]).expect("valid example");
//! let tree = Id3Learner::new().learn(&data).expect("learning should succeed");
//!
//! let rainy = Example::new().with_value("Weather", "Rainy");
//! assert_eq!(tree.classify(&rainy).expect("compatible example"), "Stay");
//!
//! let traced = tree.classify_traced(&rainy).expect("compatible example");
//! assert_eq!(traced.path, vec![("Weather".to_string(), "Rainy".to_string())]);
//!
//! let foggy = Example::new().with_value("Weather", "Foggy");
//! assert!(tree.classify(&foggy).is_err());
//! ```

use crate::data::Example;
use crate::error::{ArbolError, Result};
use crate::traits::Classifier;
use crate::tree::{DecisionTree, TreeNode};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Outcome of a traced classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Predicted class label
    pub label: String,
    /// `(attribute, value)` pairs followed from the root to the leaf
    pub path: Vec<(String, String)>,
}

/// Follows `example` down from `node`, calling `visit` for every branch
/// taken. Returns the label of the leaf reached.
fn walk<'t>(
    mut node: &'t TreeNode,
    example: &Example,
    mut visit: impl FnMut(&'t str, &'t str),
) -> Result<&'t str> {
    loop {
        match node {
            TreeNode::Leaf(leaf) => return Ok(&leaf.label),
            TreeNode::Node(split) => {
                let value = example
                    .get(&split.attribute)
                    .ok_or_else(|| ArbolError::incompatible(&split.attribute, None))?;
                let (branch, child) = split
                    .children
                    .get_key_value(value)
                    .ok_or_else(|| ArbolError::incompatible(&split.attribute, Some(value)))?;
                visit(&split.attribute, branch);
                node = child;
            }
        }
    }
}

impl DecisionTree {
    /// Classifies an example and records the path taken.
    ///
    /// The path is also emitted as a `trace` event.
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleExample` if the example lacks a tested attribute
    /// or carries a value with no branch.
    pub fn classify_traced(&self, example: &Example) -> Result<Classification> {
        let mut path = Vec::new();
        let label = walk(self.root(), example, |attribute, value| {
            path.push((attribute.to_string(), value.to_string()));
        })?;
        trace!(label, ?path, "classified example");
        Ok(Classification {
            label: label.to_string(),
            path,
        })
    }
}

impl Classifier for DecisionTree {
    fn classify(&self, example: &Example) -> Result<String> {
        walk(self.root(), example, |_, _| {}).map(str::to_string)
    }
}
