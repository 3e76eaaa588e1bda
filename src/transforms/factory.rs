use std::sync::Arc;

use crate::traits::Transform;

use super::reverse_words::ReverseWordsTransform;

/// Factory for creating transform instances
pub struct TransformFactory;

impl TransformFactory {
    /// Create a transform instance from its implementation name
    ///
    /// The name determines which transform to create:
    /// - "reverse_words" -> ReverseWordsTransform
    pub fn create_transform(name: &str) -> Result<Arc<dyn Transform>, String> {
        match name {
            "reverse_words" => Ok(Arc::new(ReverseWordsTransform::new())),

            // Add more transforms here as they're implemented
            _ => Err(format!("Unknown transform implementation: '{}'", name)),
        }
    }

    /// List all available transform implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec!["reverse_words"]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(name: &str) -> bool {
        Self::list_available_implementations().contains(&name)
    }
}
