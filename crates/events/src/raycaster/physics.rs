//! Raycaster that picks 3D physics colliders through an event camera.

use std::cell::Cell;

use pointercast_camera::{Camera, CameraId, CameraRegistry};
use pointercast_core::LayerMask;
use tracing::{debug, trace};

use super::{BaseRaycaster, RaycastContext, RaycastResult, RaycasterId};
use crate::PointerEventData;

/// Priority reported when no event camera can be resolved, ranking the
/// raycaster after every camera-backed one.
pub const NO_CAMERA_DEPTH: i32 = 0xFF_FFFF;

/// Casts pointer rays from an event camera into a [`PhysicsQuery`] world.
///
/// The event camera is the attached camera when it exists, otherwise the
/// registry's main camera. The first successful lookup is cached until
/// [`invalidate_camera`](Self::invalidate_camera) is called or the cached
/// camera disappears from the registry.
///
/// [`PhysicsQuery`]: pointercast_physics::PhysicsQuery
#[derive(Debug)]
pub struct PhysicsRaycaster {
    id: RaycasterId,
    attached_camera: Option<CameraId>,
    event_mask: LayerMask,
    event_camera: Cell<Option<CameraId>>,
}

impl PhysicsRaycaster {
    /// Raycaster without an attached camera; it falls back to the main camera.
    pub fn new(id: RaycasterId) -> Self {
        Self {
            id,
            attached_camera: None,
            event_mask: LayerMask::EVERYTHING,
            event_camera: Cell::new(None),
        }
    }

    /// Raycaster bound to `camera`.
    pub fn with_camera(id: RaycasterId, camera: CameraId) -> Self {
        Self {
            attached_camera: Some(camera),
            ..Self::new(id)
        }
    }

    /// Camera attached to this raycaster, whether or not it still exists.
    pub fn attached_camera(&self) -> Option<CameraId> {
        self.attached_camera
    }

    /// Attach (or detach) a camera. Drops the cached event camera.
    pub fn set_attached_camera(&mut self, camera: Option<CameraId>) {
        self.attached_camera = camera;
        self.invalidate_camera();
    }

    /// Layers this raycaster is allowed to hit.
    pub fn event_mask(&self) -> LayerMask {
        self.event_mask
    }

    /// Restrict the layers this raycaster is allowed to hit.
    pub fn set_event_mask(&mut self, mask: LayerMask) {
        self.event_mask = mask;
    }

    /// Forget the cached event camera; the next access resolves it again.
    pub fn invalidate_camera(&self) {
        self.event_camera.set(None);
    }

    /// Id of the event camera, resolving and caching it if needed.
    pub fn event_camera_id(&self, cameras: &CameraRegistry) -> Option<CameraId> {
        if let Some(id) = self.event_camera.get() {
            if cameras.contains(id) {
                return Some(id);
            }
            debug!(raycaster = self.id.0, camera = id.raw(), "cached event camera is gone");
            self.event_camera.set(None);
        }

        let resolved = self
            .attached_camera
            .filter(|id| cameras.contains(*id))
            .or_else(|| cameras.main_id());
        if let Some(id) = resolved {
            trace!(raycaster = self.id.0, camera = id.raw(), "event camera resolved");
            self.event_camera.set(Some(id));
        }
        resolved
    }

    /// Depth of the event camera, or [`NO_CAMERA_DEPTH`] without one.
    pub fn depth(&self, cameras: &CameraRegistry) -> i32 {
        self.event_camera(cameras)
            .map_or(NO_CAMERA_DEPTH, |camera| camera.depth as i32)
    }

    /// Event mask intersected with the event camera's culling mask.
    ///
    /// Without a camera every layer is reported; no raycast runs in that case.
    pub fn final_event_mask(&self, cameras: &CameraRegistry) -> LayerMask {
        self.event_camera(cameras)
            .map_or(LayerMask::EVERYTHING, |camera| self.mask_for(camera))
    }

    fn mask_for(&self, camera: &Camera) -> LayerMask {
        camera.culling_mask & self.event_mask
    }
}

impl BaseRaycaster for PhysicsRaycaster {
    fn id(&self) -> RaycasterId {
        self.id
    }

    fn event_camera<'a>(&self, cameras: &'a CameraRegistry) -> Option<&'a Camera> {
        self.event_camera_id(cameras).and_then(|id| cameras.get(id))
    }

    fn priority(&self, cameras: &CameraRegistry) -> i32 {
        self.depth(cameras)
    }

    fn raycast(
        &self,
        ctx: &RaycastContext<'_>,
        event: &PointerEventData,
        results: &mut Vec<RaycastResult>,
    ) {
        let Some(camera) = self.event_camera(ctx.cameras) else {
            trace!(raycaster = self.id.0, "no event camera; skipping");
            return;
        };

        let ray = camera.screen_point_to_ray(event.position);
        let max_distance = camera.max_ray_distance();
        let mask = self.mask_for(camera);

        let mut hits = ctx.physics.raycast_all(&ray, max_distance, mask);
        if hits.len() > 1 {
            // Stable: equal distances keep the query's order
            hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        }

        let start = results.len();
        results.reserve(hits.len());
        for hit in hits {
            let index = results.len();
            trace!(
                raycaster = self.id.0,
                object = hit.object.0,
                distance = hit.distance,
                index,
                "pointer hit"
            );
            results.push(RaycastResult {
                object: hit.object,
                module: self.id,
                distance: hit.distance,
                world_position: hit.point,
                world_normal: hit.normal,
                screen_position: event.position,
                index,
                sorting_layer: 0,
                sorting_order: 0,
            });
        }

        debug!(
            raycaster = self.id.0,
            pointer = event.pointer_id,
            mask = mask.bits(),
            appended = results.len() - start,
            "physics raycast"
        );
    }
}
