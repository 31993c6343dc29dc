//! Subcommand implementations.

pub(crate) mod evaluate;
pub(crate) mod train;

use crate::error::{CliError, Result};
use arbol::data::{ArffReader, Dataset};
use arbol::metrics;
use arbol::Classifier;
use std::path::Path;

/// Fails early with a readable message for missing inputs.
pub(crate) fn validate_path(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::FileNotFound(path.to_path_buf()))
    }
}

/// Loads an ARFF dataset with `class` as the class attribute.
pub(crate) fn load_dataset(path: &Path, class: &str) -> Result<Dataset> {
    validate_path(path)?;
    Ok(ArffReader::read_path(path, class)?)
}

/// Scores `classifier` on `data` and prints the accuracy line.
///
/// With `skip_incompatible`, examples the classifier cannot handle are
/// counted and reported instead of aborting the run.
pub(crate) fn print_accuracy<C: Classifier + ?Sized>(
    classifier: &C,
    data: &Dataset,
    skip_incompatible: bool,
) -> Result<()> {
    if skip_incompatible {
        let report = metrics::evaluate(classifier, data)?;
        println!("Accuracy: {}", report.accuracy()?);
        if !report.skipped.is_empty() {
            println!(
                "Skipped: {} of {} examples were incompatible with the model",
                report.skipped.len(),
                report.total()
            );
        }
    } else {
        println!("Accuracy: {}", metrics::accuracy(classifier, data)?);
    }
    Ok(())
}
