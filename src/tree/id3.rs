//! ID3 induction with chi-square pre-pruning.
//!
//! The learner grows a tree top-down. At each node it tests every unused
//! attribute with a chi-square test of independence between attribute value
//! and class, discards attributes whose statistic stays below the critical
//! value for the configured confidence, and splits on the survivor with the
//! highest information gain (or gain ratio). Ties go to the attribute
//! declared first.

use super::helpers::{
    chi_square_statistic, class_distribution, information_gain, majority_index, partition,
    populated_classes, split_information,
};
use super::{DecisionTree, Node, TreeNode};
use crate::config::{LearnerConfig, SplitCriterion};
use crate::data::{Attribute, Dataset, Example};
use crate::error::{ArbolError, Result};
use crate::stats::ChiSquareTable;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Decision tree learner implementing ID3.
///
/// # Examples
///
/// ```
/// use arbol::prelude::*;
///
/// let weather = Attribute::new("Weather", ["Sunny", "Rainy"]).expect("valid attribute");
/// let class = Attribute::new("Class", ["Play", "Stay"]).expect("valid attribute");
/// let mut data = Dataset::new(vec![weather, class], "Class").expect("valid schema");
/// for _ in 0..8 {
///     data.add_example(["Sunny", "Play"]).expect("valid example");
///     data.add_example(["Rainy", "Stay"]).expect("valid example");
/// }
///
/// let learner = Id3Learner::new()
///     .with_split_stopping_confidence(0.99)
///     .with_criterion(SplitCriterion::GainRatio);
/// let tree = learner.learn(&data).expect("learning should succeed");
/// assert_eq!(tree.root().label(), "Weather");
/// ```
#[derive(Debug, Clone)]
pub struct Id3Learner {
    config: LearnerConfig,
    chi_square: Arc<ChiSquareTable>,
}

/// Winning attribute at a node, with its examples grouped by value.
struct Split<'e> {
    index: usize,
    score: f64,
    groups: Vec<Vec<&'e Example>>,
}

impl Id3Learner {
    /// Creates a learner with the default configuration (no pruning,
    /// unknown values ignored, information gain).
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(LearnerConfig::default())
    }

    /// Creates a learner from a configuration, with a private chi-square
    /// table.
    #[must_use]
    pub fn from_config(config: LearnerConfig) -> Self {
        Self {
            config,
            chi_square: Arc::new(ChiSquareTable::new()),
        }
    }

    /// Sets the confidence required to accept a split.
    ///
    /// # Arguments
    ///
    /// * `confidence` - Value in `[0, 1]`; `0` disables pruning
    #[must_use]
    pub fn with_split_stopping_confidence(mut self, confidence: f64) -> Self {
        self.config.split_stopping_confidence = confidence;
        self
    }

    /// Sets whether the unknown value takes part in splits as a value of
    /// its own.
    #[must_use]
    pub fn with_unknown_as_value(mut self, unknown_as_value: bool) -> Self {
        self.config.unknown_as_value = unknown_as_value;
        self
    }

    /// Sets the attribute selection criterion.
    #[must_use]
    pub fn with_criterion(mut self, criterion: SplitCriterion) -> Self {
        self.config.criterion = criterion;
        self
    }

    /// Shares a critical-value table with other learners.
    #[must_use]
    pub fn with_chi_square_table(mut self, table: Arc<ChiSquareTable>) -> Self {
        self.chi_square = table;
        self
    }

    /// Returns the learner configuration.
    #[must_use]
    pub fn config(&self) -> &LearnerConfig {
        &self.config
    }

    /// Returns the critical-value table used by this learner.
    #[must_use]
    pub fn chi_square_table(&self) -> &Arc<ChiSquareTable> {
        &self.chi_square
    }

    /// Induces a decision tree from a dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The dataset has no examples
    /// - An example leaves its class value unknown
    pub fn learn(&self, data: &Dataset) -> Result<DecisionTree> {
        self.config.validate()?;
        if data.is_empty() {
            return Err(ArbolError::empty_input("training examples"));
        }
        data.validate_labels()?;

        let class = data.class_attribute();
        let candidates: Vec<Attribute> = if self.config.unknown_as_value {
            data.feature_attributes().map(Attribute::with_unknown).collect()
        } else {
            data.feature_attributes().cloned().collect()
        };

        info!(
            examples = data.len(),
            attributes = candidates.len(),
            class = class.name(),
            confidence = self.config.split_stopping_confidence,
            criterion = ?self.config.criterion,
            "learning decision tree"
        );

        let examples: Vec<&Example> = data.examples().iter().collect();
        let candidate_refs: Vec<&Attribute> = candidates.iter().collect();
        let root = self.induce(&examples, &candidate_refs, class, 0);
        let tree = DecisionTree::new(root, class.name());

        info!(
            depth = tree.depth(),
            nodes = tree.node_count(),
            leaves = tree.leaf_count(),
            "decision tree learned"
        );
        Ok(tree)
    }

    fn induce(
        &self,
        examples: &[&Example],
        candidates: &[&Attribute],
        class: &Attribute,
        depth: usize,
    ) -> TreeNode {
        let counts = class_distribution(examples, class);
        let majority = &class.values()[majority_index(&counts)];

        if populated_classes(&counts) <= 1 || candidates.is_empty() {
            return TreeNode::leaf(majority.as_str(), examples.len());
        }

        let Some(split) = self.select_attribute(examples, candidates, &counts, class) else {
            debug!(depth, examples = examples.len(), "no attribute passed the split test");
            return TreeNode::leaf(majority.as_str(), examples.len());
        };

        let attribute = candidates[split.index];
        debug!(
            depth,
            attribute = attribute.name(),
            score = split.score,
            "selected split attribute"
        );

        let remaining: Vec<&Attribute> = candidates
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != split.index)
            .map(|(_, &a)| a)
            .collect();

        let mut children = IndexMap::with_capacity(attribute.cardinality());
        for (value, group) in attribute.values().iter().zip(split.groups) {
            let child = if group.is_empty() {
                TreeNode::leaf(majority.as_str(), 0)
            } else {
                self.induce(&group, &remaining, class, depth + 1)
            };
            if depth == 0 {
                info!(
                    target: "arbol::progress",
                    attribute = attribute.name(),
                    value = value.as_str(),
                    "branch complete"
                );
            }
            children.insert(value.clone(), child);
        }

        TreeNode::Node(Node {
            attribute: attribute.name().to_string(),
            children,
        })
    }

    /// Picks the best attribute that survives the chi-square test, or
    /// `None` when every candidate is rejected.
    fn select_attribute<'e>(
        &self,
        examples: &[&'e Example],
        candidates: &[&Attribute],
        parent: &[usize],
        class: &Attribute,
    ) -> Option<Split<'e>> {
        let p = self.config.critical_probability();
        let mut best: Option<Split<'e>> = None;

        for (index, attribute) in candidates.iter().enumerate() {
            let groups = partition(examples, attribute);
            let distributions: Vec<Vec<usize>> = groups
                .iter()
                .map(|group| class_distribution(group, class))
                .collect();

            let statistic = chi_square_statistic(parent, &distributions);
            let df = attribute.cardinality().saturating_sub(1);
            let critical = self.chi_square.critical_value(p, df);
            if statistic < critical {
                debug!(
                    attribute = attribute.name(),
                    statistic,
                    critical,
                    df,
                    "attribute rejected by chi-square test"
                );
                continue;
            }

            let gain = information_gain(parent, &distributions);
            let score = match self.config.criterion {
                SplitCriterion::InformationGain => gain,
                SplitCriterion::GainRatio => {
                    let split_info =
                        split_information(examples.len(), groups.iter().map(Vec::len));
                    if split_info <= 0.0 {
                        debug!(
                            attribute = attribute.name(),
                            "attribute has zero split information"
                        );
                        continue;
                    }
                    gain / split_info
                }
            };
            trace!(
                attribute = attribute.name(),
                statistic,
                critical,
                gain,
                score,
                "candidate attribute"
            );

            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(Split {
                    index,
                    score,
                    groups,
                });
            }
        }

        best
    }
}

impl Default for Id3Learner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "id3_tests.rs"]
mod tests;
