#![warn(missing_docs)]
//! Collision geometry and ray queries against it.

mod scene;
mod shape;

use glam::Vec3;
use pointercast_core::{LayerMask, ObjectId, Ray};

pub use scene::{Collider, ColliderHandle, PhysicsScene, SceneError};
pub use shape::{Aabb, ColliderShape};

/// A single ray/collider intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// Object owning the collider that was hit.
    pub object: ObjectId,
    /// Collider that was hit.
    pub collider: ColliderHandle,
    /// Distance from the ray origin to the impact point.
    pub distance: f32,
    /// World-space impact point.
    pub point: Vec3,
    /// World-space unit surface normal at the impact point, facing the ray.
    pub normal: Vec3,
}

/// Ray queries offered by a collision world.
pub trait PhysicsQuery {
    /// Every intersection of `ray` with enabled colliders on layers in `mask`,
    /// no further than `max_distance` from the ray origin.
    ///
    /// Hits are not sorted by distance.
    fn raycast_all(&self, ray: &Ray, max_distance: f32, mask: LayerMask) -> Vec<RaycastHit>;

    /// Closest intersection, if any. Equal distances resolve to the earlier hit.
    fn raycast(&self, ray: &Ray, max_distance: f32, mask: LayerMask) -> Option<RaycastHit> {
        self.raycast_all(ray, max_distance, mask)
            .into_iter()
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
