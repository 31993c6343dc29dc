//! Evaluation metrics for classifiers.
//!
//! [`accuracy`] is strict: the first example the classifier cannot handle
//! aborts the evaluation. [`evaluate`] is lenient: such examples are skipped
//! and listed in the returned [`EvaluationReport`].

use crate::data::Dataset;
use crate::error::{ArbolError, Result};
use crate::traits::Classifier;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Number of examples between two progress events.
const PROGRESS_INTERVAL: usize = 1000;

/// An example left out of a lenient evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedExample {
    /// Position of the example in the dataset
    pub index: usize,
    /// Why the classifier could not handle it
    pub reason: String,
}

/// Result of a lenient evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Examples classified correctly
    pub correct: usize,
    /// Examples the classifier produced a label for
    pub evaluated: usize,
    /// Examples the classifier could not handle
    pub skipped: Vec<SkippedExample>,
}

impl EvaluationReport {
    /// Fraction of evaluated examples classified correctly.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` when no example was evaluated.
    pub fn accuracy(&self) -> Result<f64> {
        if self.evaluated == 0 {
            return Err(ArbolError::empty_input("no example could be evaluated"));
        }
        Ok(self.correct as f64 / self.evaluated as f64)
    }

    /// Number of examples seen, skipped ones included.
    #[must_use]
    pub fn total(&self) -> usize {
        self.evaluated + self.skipped.len()
    }
}

/// Checks that `data` can be used to score a classifier.
fn check_labeled(data: &Dataset) -> Result<()> {
    if data.is_empty() {
        return Err(ArbolError::empty_input("evaluation examples"));
    }
    data.validate_labels()
}

/// Computes classification accuracy over a labeled dataset.
///
/// accuracy = correct / total
///
/// # Errors
///
/// Returns an error if:
/// - The dataset is empty
/// - An example leaves its class value unknown
/// - The classifier fails on any example
///
/// # Examples
///
/// ```
/// use arbol::metrics::accuracy;
/// use arbol::prelude::*;
///
/// let weather = Attribute::new("Weather", ["Sunny", "Rainy"]).expect("valid attribute");
/// let class = Attribute::new("Class", ["Play", "Stay"]).expect("valid attribute");
/// let mut data = Dataset::new(vec![weather, class], "Class").expect("valid schema");
/// for _ in 0..8 {
///     data.add_example(["Sunny", "Play"]).expect("valid example");
///     data.add_example(["Rainy", "Stay"]).expect("valid example");
/// }
/// data.add_example(["Rainy", "Play"]).expect("valid example");
///
/// let tree = Id3Learner::new().learn(&data).expect("learning should succeed");
/// let acc = accuracy(&tree, &data).expect("every example is compatible");
/// assert!((acc - 16.0 / 17.0).abs() < 1e-12);
/// ```
pub fn accuracy<C: Classifier + ?Sized>(classifier: &C, data: &Dataset) -> Result<f64> {
    check_labeled(data)?;
    let class = data.class_attribute().name();

    let mut correct = 0;
    for (index, example) in data.examples().iter().enumerate() {
        let predicted = classifier.classify(example)?;
        if Some(predicted.as_str()) == example.get(class) {
            correct += 1;
        }
        if (index + 1) % PROGRESS_INTERVAL == 0 {
            info!(target: "arbol::progress", examples = index + 1, "evaluating");
        }
    }

    let score = correct as f64 / data.len() as f64;
    info!(correct, total = data.len(), accuracy = score, "evaluation complete");
    Ok(score)
}

/// Evaluates a classifier, skipping examples it cannot handle.
///
/// Only recoverable errors (see [`ArbolError::is_recoverable`]) are skipped;
/// each one is logged as a warning and listed in the report.
///
/// # Errors
///
/// Returns an error if the dataset is empty, an example leaves its class
/// value unknown, or the classifier fails with a non-recoverable error.
pub fn evaluate<C: Classifier + ?Sized>(classifier: &C, data: &Dataset) -> Result<EvaluationReport> {
    check_labeled(data)?;
    let class = data.class_attribute().name();

    let mut report = EvaluationReport::default();
    for (index, example) in data.examples().iter().enumerate() {
        match classifier.classify(example) {
            Ok(predicted) => {
                report.evaluated += 1;
                if Some(predicted.as_str()) == example.get(class) {
                    report.correct += 1;
                }
            }
            Err(err) if err.is_recoverable() => {
                warn!(index, error = %err, "skipping example");
                report.skipped.push(SkippedExample {
                    index,
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
        if (index + 1) % PROGRESS_INTERVAL == 0 {
            info!(target: "arbol::progress", examples = index + 1, "evaluating");
        }
    }

    info!(
        correct = report.correct,
        evaluated = report.evaluated,
        skipped = report.skipped.len(),
        "evaluation complete"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
