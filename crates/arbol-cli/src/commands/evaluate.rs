//! Evaluate command implementation
//!
//! Scores a saved model against a labeled ARFF file.

use super::{load_dataset, print_accuracy, validate_path};
use crate::error::Result;
use arbol::tree::DecisionTree;
use std::path::Path;
use tracing::{debug, warn};

/// Run the evaluate command
pub(crate) fn run(
    model: &Path,
    data: &Path,
    class: Option<&str>,
    skip_incompatible: bool,
) -> Result<()> {
    validate_path(model)?;
    let tree = DecisionTree::load_json(model)?;
    debug!(
        path = %model.display(),
        nodes = tree.node_count(),
        depth = tree.depth(),
        "loaded model"
    );

    let class = class.unwrap_or(tree.class_attribute());
    if class != tree.class_attribute() {
        warn!(
            model_class = tree.class_attribute(),
            class,
            "evaluating against a different class attribute than the model predicts"
        );
    }

    let dataset = load_dataset(data, class)?;
    print_accuracy(&tree, &dataset, skip_incompatible)
}
