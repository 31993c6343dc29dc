//! Decision trees over nominal attributes.
//!
//! This module implements:
//! - The tree model: [`TreeNode`] is either a [`Leaf`] carrying a class label
//!   or an internal [`Node`] with one child per value of its split attribute
//! - ID3 induction with chi-square pre-pruning ([`Id3Learner`])
//! - Text rendering and JSON persistence of learned trees
//!
//! # Example
//!
//! ```
//! use arbol::prelude::*;
//!
//! let weather = Attribute::new("Weather", ["Sunny", "Rainy"]).expect("valid attribute");
//! let class = Attribute::new("Class", ["Play", "Stay"]).expect("valid attribute");
//! let mut data = Dataset::new(vec![weather, class], "Class").expect("valid schema");
//! for _ in 0..4 {
//!     data.add_example(["Sunny", "Play"]).expect("valid example");
//!     data.add_example(["Rainy", "Stay"]).expect("valid example");
//! }
//!
//! let tree = Id3Learner::new().learn(&data).expect("learning should succeed");
//! assert_eq!(tree.depth(), 1);
//! assert_eq!(tree.to_string(), "Weather\n |{Sunny} Play\n |{Rainy} Stay\n");
//! ```

mod helpers;
pub mod id3;

pub use id3::Id3Learner;

use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Indentation added per tree level when rendering.
const RENDER_INDENT: &str = "    ";

/// Internal node in a decision tree.
///
/// Tests one attribute and owns one subtree per value of its domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Name of the attribute tested at this node
    pub attribute: String,
    /// Subtrees keyed by attribute value, in declared domain order
    pub children: IndexMap<String, TreeNode>,
}

/// Leaf node in a decision tree.
///
/// Contains the predicted class label and number of training examples
/// that reached this leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    /// Predicted class label for this leaf
    pub label: String,
    /// Number of training examples in this leaf (0 for empty branches)
    pub n_samples: usize,
}

/// A node in a decision tree (either internal node or leaf).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    /// Internal decision node
    Node(Node),
    /// Leaf node with class prediction
    Leaf(Leaf),
}

impl TreeNode {
    /// Creates a leaf.
    #[must_use]
    pub fn leaf(label: impl Into<String>, n_samples: usize) -> Self {
        TreeNode::Leaf(Leaf {
            label: label.into(),
            n_samples,
        })
    }

    /// Returns the depth of the tree rooted at this node.
    ///
    /// Leaf nodes have depth 0, internal nodes have depth 1 + the deepest child.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 0,
            TreeNode::Node(node) => {
                1 + node
                    .children
                    .values()
                    .map(TreeNode::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    /// Total number of nodes, leaves included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Node(node) => {
                1 + node
                    .children
                    .values()
                    .map(TreeNode::node_count)
                    .sum::<usize>()
            }
        }
    }

    /// Number of leaves.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Node(node) => node.children.values().map(TreeNode::leaf_count).sum(),
        }
    }

    /// Returns `true` for a leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    /// Class label for a leaf, attribute name for an internal node.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            TreeNode::Leaf(leaf) => &leaf.label,
            TreeNode::Node(node) => &node.attribute,
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        writeln!(f, "{}", self.label())?;
        if let TreeNode::Node(node) = self {
            let child_indent = format!("{indent}{RENDER_INDENT}");
            for (value, child) in &node.children {
                write!(f, "{indent} |{{{value}}} ")?;
                child.render(f, &child_indent)?;
            }
        }
        Ok(())
    }
}

/// Renders one line per node. Each edge is written as ` |{value} ` followed
/// by the child, indented four spaces per level.
impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, "")
    }
}

/// A learned decision tree together with the class attribute it predicts.
///
/// Trees are produced by [`Id3Learner::learn`] and are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    root: TreeNode,
    class_attribute: String,
}

impl DecisionTree {
    /// Wraps a root node.
    #[must_use]
    pub fn new(root: TreeNode, class_attribute: impl Into<String>) -> Self {
        Self {
            root,
            class_attribute: class_attribute.into(),
        }
    }

    /// Root node of the tree.
    #[must_use]
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Name of the class attribute the tree predicts.
    #[must_use]
    pub fn class_attribute(&self) -> &str {
        &self.class_attribute
    }

    /// Depth of the tree (a single leaf has depth 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Number of leaves.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Serializes the tree to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a tree from JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Saves the model to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Loads a model from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if file reading or deserialization fails.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Writes the text rendering of the tree to a file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn write_rendering<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}
