//! Raycaster interface and the result records raycasters produce.

mod physics;

use glam::{Vec2, Vec3};
use pointercast_camera::{Camera, CameraRegistry};
use pointercast_core::ObjectId;
use pointercast_physics::PhysicsQuery;
use serde::Serialize;

use crate::PointerEventData;

pub use physics::{PhysicsRaycaster, NO_CAMERA_DEPTH};

/// Identity of a raycaster, recorded in every result it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RaycasterId(pub u32);

/// One candidate under a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RaycastResult {
    /// Object that was hit.
    pub object: ObjectId,
    /// Raycaster that produced this result.
    pub module: RaycasterId,
    /// Distance from the camera's near plane to the hit.
    pub distance: f32,
    /// World-space impact point.
    pub world_position: Vec3,
    /// World-space surface normal at the impact point.
    pub world_normal: Vec3,
    /// Pointer position the ray was cast through.
    pub screen_position: Vec2,
    /// Position of this entry in the shared result list at the time it was appended.
    pub index: usize,
    /// 2D sorting layer. Always 0 for physics results.
    pub sorting_layer: i32,
    /// 2D order within the sorting layer. Always 0 for physics results.
    pub sorting_order: i32,
}

/// External collaborators a raycaster reads during one pass.
#[derive(Clone, Copy)]
pub struct RaycastContext<'a> {
    /// Cameras available for resolving event cameras.
    pub cameras: &'a CameraRegistry,
    /// Collision world to query.
    pub physics: &'a dyn PhysicsQuery,
}

impl<'a> RaycastContext<'a> {
    /// Bundle a camera registry and a collision world.
    pub fn new(cameras: &'a CameraRegistry, physics: &'a dyn PhysicsQuery) -> Self {
        Self { cameras, physics }
    }
}

/// A source of pointer hit candidates.
///
/// Raycasters append to a list shared with other raycasters; they never
/// reorder or remove entries they did not add.
pub trait BaseRaycaster {
    /// Identity stamped on produced results.
    fn id(&self) -> RaycasterId;

    /// Camera used to build rays, if one can be resolved.
    fn event_camera<'a>(&self, cameras: &'a CameraRegistry) -> Option<&'a Camera>;

    /// Rank among raycasters. Callers merging results from several raycasters
    /// order groups by this value before distance.
    fn priority(&self, cameras: &CameraRegistry) -> i32;

    /// Append every candidate under `event`'s pointer to `results`.
    fn raycast(
        &self,
        ctx: &RaycastContext<'_>,
        event: &PointerEventData,
        results: &mut Vec<RaycastResult>,
    );
}
