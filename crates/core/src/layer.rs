//! Collision layers and the masks that select them.

use crate::CoreError;
use serde::{Deserialize, Serialize};

/// Index of a single collision layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Layer(u8);

impl Layer {
    /// Number of addressable layers.
    pub const COUNT: u8 = 32;
    /// Layer every collider starts on.
    pub const DEFAULT: Self = Self(0);
    /// Layer conventionally used by colliders that should not block pointer rays.
    pub const IGNORE_RAYCAST: Self = Self(2);

    /// Create a layer from its index.
    pub fn new(index: u8) -> Result<Self, CoreError> {
        if index < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(CoreError::LayerOutOfRange(index))
        }
    }

    /// Layer index in `0..32`.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Layer {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> Self {
        layer.0
    }
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    /// Set of collision layers.
    ///
    /// Only a handful of layers carry names; every other bit is a user layer
    /// and is kept as-is by all operations.
    pub struct LayerMask: u32 {
        /// Layer 0, where colliders start.
        const DEFAULT = 1 << 0;
        const TRANSPARENT_FX = 1 << 1;
        /// Colliders pointer rays should pass through.
        const IGNORE_RAYCAST = 1 << 2;
        const WATER = 1 << 4;
        const UI = 1 << 5;

        // Unnamed user layers
        const _ = !0;
    }
}

impl LayerMask {
    /// Every layer enabled.
    pub const EVERYTHING: Self = Self::all();
    /// No layer enabled.
    pub const NOTHING: Self = Self::empty();

    /// Mask containing exactly `layer`.
    #[inline]
    pub fn from_layer(layer: Layer) -> Self {
        Self::from_bits_retain(1u32 << layer.index())
    }

    /// Mask containing every layer yielded by `layers`.
    pub fn from_layers<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = Layer>,
    {
        layers
            .into_iter()
            .fold(Self::NOTHING, |mask, layer| mask.with_layer(layer))
    }

    /// Whether `layer` is enabled in this mask.
    #[inline]
    pub fn contains_layer(self, layer: Layer) -> bool {
        self.intersects(Self::from_layer(layer))
    }

    /// Copy of this mask with `layer` enabled.
    #[must_use]
    pub fn with_layer(self, layer: Layer) -> Self {
        self | Self::from_layer(layer)
    }

    /// Copy of this mask with `layer` disabled.
    #[must_use]
    pub fn without_layer(self, layer: Layer) -> Self {
        self & !Self::from_layer(layer)
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::EVERYTHING
    }
}
