//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use arbol::prelude::*;
//! ```

pub use crate::classification::Classification;
pub use crate::config::{LearnerConfig, SplitCriterion};
pub use crate::data::{ArffReader, Attribute, Dataset, Example, UNKNOWN_VALUE};
pub use crate::error::ArbolError;
pub use crate::metrics::{accuracy, evaluate, EvaluationReport};
pub use crate::stats::ChiSquareTable;
pub use crate::traits::Classifier;
pub use crate::tree::{DecisionTree, Id3Learner, TreeNode};
