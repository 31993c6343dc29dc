//! Arbol: ID3 decision trees with chi-square pre-pruning.
//!
//! Arbol learns decision trees from labeled examples over nominal
//! attributes. Splits are chosen by information gain or gain ratio, and a
//! chi-square test of independence stops the tree from splitting on
//! attributes that carry no significant evidence about the class.
//!
//! # Quick Start
//!
//! ```
//! use arbol::prelude::*;
//!
//! let arff = "\
//! @relation weather
//! @attribute Weather {Sunny, Rainy}
//! @attribute Class {Play, Stay}
//! @data
//! Sunny, Play
//! Sunny, Play
//! Rainy, Stay
//! Rainy, Stay
//! ";
//! let data = ArffReader::parse_str(arff, "Class").expect("valid ARFF");
//!
//! let tree = Id3Learner::new()
//!     .with_criterion(SplitCriterion::GainRatio)
//!     .learn(&data)
//!     .expect("learning should succeed");
//! println!("{tree}");
//!
//! let acc = accuracy(&tree, &data).expect("evaluation should succeed");
//! assert_eq!(acc, 1.0);
//! ```
//!
//! # Modules
//!
//! - [`data`]: Attributes, examples and datasets; ARFF loading
//! - [`stats`]: Normal and chi-square approximations, critical-value table
//! - [`tree`]: Tree model and the ID3 learner
//! - [`classification`]: Labeling examples with a learned tree
//! - [`metrics`]: Accuracy and lenient evaluation reports
//! - [`config`]: Learner configuration (TOML loadable)
//!
//! # Logging
//!
//! The library emits [`tracing`] events and never installs a subscriber.
//! Progress events use the `arbol::progress` target.

pub mod classification;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod prelude;
pub mod stats;
pub mod traits;
pub mod tree;

pub use error::{ArbolError, Result};
pub use traits::Classifier;
