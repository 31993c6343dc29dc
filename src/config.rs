//! Learner configuration.
//!
//! Configuration can be built in code, or loaded from TOML:
//!
//! ```toml
//! split_stopping_confidence = 0.99
//! unknown_as_value = true
//! criterion = "gain_ratio"
//! ```
//!
//! Missing keys take their default values.

use crate::error::{ArbolError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Attribute selection criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitCriterion {
    /// Entropy reduction from the split
    #[default]
    InformationGain,
    /// Information gain divided by split information
    GainRatio,
}

/// Settings controlling ID3 induction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LearnerConfig {
    /// Confidence required before a split is accepted, in `[0, 1]`.
    ///
    /// `0` disables chi-square pre-pruning; values close to `1` prune
    /// aggressively.
    pub split_stopping_confidence: f64,

    /// Treat the unknown sentinel as an extra attribute value that takes
    /// part in splits. When `false`, examples with an unknown value are left
    /// out of that attribute's statistics and partitions.
    pub unknown_as_value: bool,

    /// Attribute selection criterion.
    pub criterion: SplitCriterion,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            split_stopping_confidence: 0.0,
            unknown_as_value: false,
            criterion: SplitCriterion::InformationGain,
        }
    }
}

impl LearnerConfig {
    /// Checks that every setting is within range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` if the confidence is not a finite
    /// value in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let confidence = self.split_stopping_confidence;
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(ArbolError::InvalidHyperparameter {
                param: "split_stopping_confidence".to_string(),
                value: confidence.to_string(),
                constraint: "a value in [0, 1]".to_string(),
            });
        }
        Ok(())
    }

    /// Upper-tail probability handed to the critical-value search.
    #[must_use]
    pub fn critical_probability(&self) -> f64 {
        1.0 - self.split_stopping_confidence
    }

    /// Returns `true` when attributes are ranked by gain ratio.
    #[must_use]
    pub fn uses_gain_ratio(&self) -> bool {
        self.criterion == SplitCriterion::GainRatio
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed TOML or unknown keys and
    /// `InvalidHyperparameter` for out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    ///
    /// # Errors
    ///
    /// See [`LearnerConfig::from_toml_str`]; also fails if the file cannot
    /// be read.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }
}
