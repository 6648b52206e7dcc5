#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod layer;
pub mod ray;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// Re-export commonly used types
pub use layer::{Layer, LayerMask};
pub use ray::Ray;

/// Identity of a scene object that owns one or more colliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}

/// Errors raised when constructing core values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Layer indices must fit in a 32-bit mask.
    #[error("layer index {0} is out of range (expected 0..{max})", max = Layer::COUNT)]
    LayerOutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_id_display() {
        assert_eq!(ObjectId(7).to_string(), "object#7");
    }

    #[test]
    fn layer_error_message_names_the_index() {
        let err = Layer::new(40).unwrap_err();
        assert_eq!(err, CoreError::LayerOutOfRange(40));
        assert!(err.to_string().contains("40"));
    }
}
