//! Canned cameras and scenes used by integration tests.
//!
//! The reference setup is a camera at the origin looking down +Z with
//! `near = 0.1` and `far = 100`. Spheres placed with [`sphere_at_hit_distance`]
//! are positioned so the centre pointer ray reports exactly the requested
//! distance, which keeps expected values in tests readable.

use glam::{Vec2, Vec3};
use pointercast_camera::Camera;
use pointercast_core::{Layer, ObjectId};
use pointercast_physics::{Collider, ColliderHandle, PhysicsScene};

/// Near clip distance of [`forward_camera`].
pub const FORWARD_NEAR: f32 = 0.1;
/// Far clip distance of [`forward_camera`].
pub const FORWARD_FAR: f32 = 100.0;
/// Radius of spheres created by [`sphere_at_hit_distance`].
pub const FIXTURE_SPHERE_RADIUS: f32 = 0.5;

/// Camera at the origin looking down +Z.
pub fn forward_camera() -> Camera {
    Camera {
        near: FORWARD_NEAR,
        far: FORWARD_FAR,
        ..Camera::looking_at(Vec3::ZERO, Vec3::Z)
    }
}

/// Viewport centre of `camera`; its ray runs along the view axis.
pub fn center_pointer(camera: &Camera) -> Vec2 {
    camera.viewport_center()
}

/// Add a sphere on the +Z axis whose front surface is `distance` beyond the
/// near plane of [`forward_camera`].
pub fn sphere_at_hit_distance(
    scene: &mut PhysicsScene,
    object: ObjectId,
    distance: f32,
    layer: Layer,
) -> ColliderHandle {
    let center = Vec3::new(0.0, 0.0, FORWARD_NEAR + distance + FIXTURE_SPHERE_RADIUS);
    scene
        .insert(Collider::sphere(object, center, FIXTURE_SPHERE_RADIUS).on_layer(layer))
        .expect("fixture sphere is valid")
}

/// Scene with spheres on the default layer at each of `distances`, using
/// object ids `0..distances.len()` in order.
pub fn scene_with_hit_distances(distances: &[f32]) -> PhysicsScene {
    let mut scene = PhysicsScene::new();
    for (i, distance) in distances.iter().enumerate() {
        sphere_at_hit_distance(&mut scene, ObjectId(i as u32), *distance, Layer::DEFAULT);
    }
    scene
}
