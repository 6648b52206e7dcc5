//! Collider storage and the ray queries run against it.

use std::collections::BTreeMap;

use glam::Vec3;
use pointercast_core::{Layer, LayerMask, ObjectId, Ray};
use thiserror::Error;
use tracing::{debug, trace};

use crate::shape::{Aabb, ColliderShape};
use crate::{PhysicsQuery, RaycastHit};

/// Errors raised when editing a [`PhysicsScene`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// Sphere radius must be positive and finite.
    #[error("invalid sphere radius {0}")]
    InvalidRadius(f32),
    /// Box corners must be finite with `min <= max`.
    #[error("invalid box bounds min={min:?} max={max:?}")]
    InvalidBounds {
        /// Minimum corner.
        min: Vec3,
        /// Maximum corner.
        max: Vec3,
    },
    /// No collider is registered under this handle.
    #[error("unknown collider {0:?}")]
    UnknownCollider(ColliderHandle),
}

/// Handle to a collider owned by a [`PhysicsScene`].
///
/// Handles increase monotonically, so ordering by handle is insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderHandle(u32);

impl ColliderHandle {
    /// Raw numeric value.
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Collision geometry attached to a scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Object that owns this collider.
    pub object: ObjectId,
    /// Layer used for mask filtering.
    pub layer: Layer,
    /// Geometry.
    pub shape: ColliderShape,
    /// Disabled colliders are skipped by every query.
    pub enabled: bool,
}

impl Collider {
    /// Sphere collider on the default layer.
    pub fn sphere(object: ObjectId, center: Vec3, radius: f32) -> Self {
        Self {
            object,
            layer: Layer::DEFAULT,
            shape: ColliderShape::Sphere { center, radius },
            enabled: true,
        }
    }

    /// Box collider on the default layer.
    pub fn cuboid(object: ObjectId, aabb: Aabb) -> Self {
        Self {
            object,
            layer: Layer::DEFAULT,
            shape: ColliderShape::Cuboid(aabb),
            enabled: true,
        }
    }

    /// Move the collider to `layer`.
    #[must_use]
    pub fn on_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    /// Check the geometry is well formed.
    pub fn validate(&self) -> Result<(), SceneError> {
        match self.shape {
            ColliderShape::Sphere { radius, .. } => {
                if !(radius.is_finite() && radius > 0.0) {
                    return Err(SceneError::InvalidRadius(radius));
                }
            }
            ColliderShape::Cuboid(aabb) => {
                if !aabb.is_valid() {
                    return Err(SceneError::InvalidBounds {
                        min: aabb.min,
                        max: aabb.max,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Flat collision world. Queries test every collider; scenes driven by pointer
/// input hold few enough colliders that a spatial index does not pay off.
#[derive(Debug, Default)]
pub struct PhysicsScene {
    colliders: BTreeMap<ColliderHandle, Collider>,
    next_handle: u32,
}

impl PhysicsScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add a collider.
    pub fn insert(&mut self, collider: Collider) -> Result<ColliderHandle, SceneError> {
        collider.validate()?;
        let handle = ColliderHandle(self.next_handle);
        self.next_handle += 1;
        trace!(
            collider = handle.0,
            object = collider.object.0,
            layer = collider.layer.index(),
            "collider added"
        );
        self.colliders.insert(handle, collider);
        Ok(handle)
    }

    /// Remove a collider.
    pub fn remove(&mut self, handle: ColliderHandle) -> Option<Collider> {
        self.colliders.remove(&handle)
    }

    /// Look up a collider.
    pub fn get(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.colliders.get(&handle)
    }

    /// Move a collider to another layer.
    pub fn set_layer(&mut self, handle: ColliderHandle, layer: Layer) -> Result<(), SceneError> {
        let collider = self
            .colliders
            .get_mut(&handle)
            .ok_or(SceneError::UnknownCollider(handle))?;
        collider.layer = layer;
        Ok(())
    }

    /// Enable or disable a collider.
    pub fn set_enabled(&mut self, handle: ColliderHandle, enabled: bool) -> Result<(), SceneError> {
        let collider = self
            .colliders
            .get_mut(&handle)
            .ok_or(SceneError::UnknownCollider(handle))?;
        collider.enabled = enabled;
        Ok(())
    }

    /// Number of colliders.
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// True when the scene holds no colliders.
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Iterate colliders in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ColliderHandle, &Collider)> {
        self.colliders.iter().map(|(handle, collider)| (*handle, collider))
    }
}

impl PhysicsQuery for PhysicsScene {
    fn raycast_all(&self, ray: &Ray, max_distance: f32, mask: LayerMask) -> Vec<RaycastHit> {
        // Also rejects NaN
        if ray.is_degenerate() || !(max_distance > 0.0) {
            debug!(max_distance, "skipping raycast with unusable ray or range");
            return Vec::new();
        }

        let hits: Vec<RaycastHit> = self
            .colliders
            .iter()
            .filter(|(_, collider)| collider.enabled && mask.contains_layer(collider.layer))
            .filter_map(|(handle, collider)| {
                let (distance, normal) = collider.shape.ray_entry(ray)?;
                (distance <= max_distance).then(|| RaycastHit {
                    object: collider.object,
                    collider: *handle,
                    distance,
                    point: ray.point_at(distance),
                    normal,
                })
            })
            .collect();

        trace!(
            hits = hits.len(),
            colliders = self.colliders.len(),
            mask = mask.bits(),
            "raycast_all"
        );
        hits
    }
}
