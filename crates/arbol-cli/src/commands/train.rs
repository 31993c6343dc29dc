//! Train command implementation
//!
//! Learns a tree from an ARFF file, prints it, and reports accuracy on a
//! test file (or on the training data when no test file is given).

use super::{load_dataset, print_accuracy, validate_path};
use crate::error::Result;
use arbol::config::{LearnerConfig, SplitCriterion};
use arbol::tree::Id3Learner;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Split-stopping confidence used when neither a flag nor a config file
/// sets one.
pub(crate) const DEFAULT_CONFIDENCE: f64 = 0.99;

/// Options for the train command
#[derive(Debug, Clone)]
pub(crate) struct TrainOptions {
    pub(crate) train: PathBuf,
    pub(crate) test: Option<PathBuf>,
    pub(crate) class: String,
    pub(crate) confidence: Option<f64>,
    pub(crate) unknown_as_value: bool,
    pub(crate) gain_ratio: bool,
    pub(crate) config: Option<PathBuf>,
    pub(crate) tree_out: Option<PathBuf>,
    pub(crate) model_out: Option<PathBuf>,
    pub(crate) skip_incompatible: bool,
}

/// Builds the learner configuration: file first, then flags on top.
fn resolve_config(options: &TrainOptions) -> Result<LearnerConfig> {
    let mut config = match &options.config {
        Some(path) => {
            validate_path(path)?;
            LearnerConfig::from_path(path)?
        }
        None => LearnerConfig {
            split_stopping_confidence: DEFAULT_CONFIDENCE,
            ..LearnerConfig::default()
        },
    };

    if let Some(confidence) = options.confidence {
        config.split_stopping_confidence = confidence;
    }
    if options.unknown_as_value {
        config.unknown_as_value = true;
    }
    if options.gain_ratio {
        config.criterion = SplitCriterion::GainRatio;
    }
    config.validate()?;
    Ok(config)
}

/// Run the train command
pub(crate) fn run(options: &TrainOptions) -> Result<()> {
    let start = Instant::now();
    let config = resolve_config(options)?;

    let train = load_dataset(&options.train, &options.class)?;
    let test = match &options.test {
        Some(path) => Some(load_dataset(path, &options.class)?),
        None => None,
    };

    let tree = Id3Learner::from_config(config).learn(&train)?;
    println!("{tree}");

    if let Some(path) = &options.tree_out {
        tree.write_rendering(path)?;
        info!(path = %path.display(), "wrote tree rendering");
    }
    if let Some(path) = &options.model_out {
        tree.save_json(path)?;
        info!(path = %path.display(), "wrote model");
    }

    print_accuracy(&tree, test.as_ref().unwrap_or(&train), options.skip_incompatible)?;
    println!("Runtime: {:.3?}", start.elapsed());
    Ok(())
}
