use crate::error::Result;

/// Trait for text transformations in the processing chain
///
/// Each transform maps an input text to a freshly built output text, e.g.
/// - ROT13 encoding
/// - whitespace trimming
/// - upper casing
/// - tag unbracketing
///
/// # Examples
///
/// ```
/// use strkit::transforms::{Transform, Upper};
///
/// let upper = Upper::new();
/// assert_eq!(upper.transform("Thunderstruck").unwrap(), "THUNDERSTRUCK");
/// ```
pub trait Transform: Send + Sync {
    /// Transforms the input text
    ///
    /// # Arguments
    /// * `text` - The text to transform
    ///
    /// # Returns
    /// The transformed text or an error if transformation fails
    fn transform(&self, text: &str) -> Result<String>;
}
