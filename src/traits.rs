//! Core traits shared by models and evaluators.

use crate::data::Example;
use crate::error::Result;

/// A model that assigns a class label to an example.
///
/// The evaluators in [`crate::metrics`] work with any implementor.
///
/// # Examples
///
/// ```
/// use arbol::prelude::*;
///
/// struct AlwaysPlay;
///
/// impl Classifier for AlwaysPlay {
///     fn classify(&self, _example: &Example) -> arbol::Result<String> {
///         Ok("Play".to_string())
///     }
/// }
///
/// let example = Example::new().with_value("Weather", "Sunny");
/// assert_eq!(AlwaysPlay.classify(&example).expect("always succeeds"), "Play");
/// ```
pub trait Classifier {
    /// Predicts the class label of `example`.
    ///
    /// # Errors
    ///
    /// Returns an error if the example cannot be handled by the model, e.g.
    /// a value the model has never seen.
    fn classify(&self, example: &Example) -> Result<String>;
}
