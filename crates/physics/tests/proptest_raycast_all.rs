//! Property-based tests for scene ray queries
//!
//! Validates query invariants:
//! - Every hit lies on the ray within the requested range
//! - Only enabled colliders on masked layers are reported
//! - Normals are unit length and face the incoming ray
//! - `raycast` agrees with the minimum of `raycast_all`

use glam::Vec3;
use pointercast_core::{Layer, LayerMask, ObjectId, Ray};
use pointercast_physics::{Aabb, Collider, PhysicsQuery, PhysicsScene};
use proptest::prelude::*;

fn collider_strategy() -> impl Strategy<Value = (u8, bool, bool, [f32; 3], f32)> {
    (
        0u8..8,
        any::<bool>(),
        prop::bool::weighted(0.9),
        [-4.0f32..4.0, -4.0f32..4.0, 1.0f32..60.0],
        0.1f32..3.0,
    )
}

fn build_scene(specs: &[(u8, bool, bool, [f32; 3], f32)]) -> PhysicsScene {
    let mut scene = PhysicsScene::new();
    for (i, (layer, is_box, enabled, center, extent)) in specs.iter().enumerate() {
        let center = Vec3::from_array(*center);
        let object = ObjectId(i as u32);
        let collider = if *is_box {
            Collider::cuboid(object, Aabb::from_center_size(center, Vec3::splat(*extent)))
        } else {
            Collider::sphere(object, center, *extent)
        };
        let handle = scene
            .insert(collider.on_layer(Layer::new(*layer).unwrap()))
            .unwrap();
        scene.set_enabled(handle, *enabled).unwrap();
    }
    scene
}

proptest! {
    /// Property: hits respect range, mask and enabled state
    #[test]
    fn hits_respect_query_filters(
        specs in prop::collection::vec(collider_strategy(), 0..24),
        mask_bits in any::<u32>(),
        max_distance in 1.0f32..80.0,
        dir_x in -0.1f32..0.1,
        dir_y in -0.1f32..0.1,
    ) {
        let scene = build_scene(&specs);
        let mask = LayerMask::from_bits_retain(mask_bits);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(dir_x, dir_y, 1.0));

        for hit in scene.raycast_all(&ray, max_distance, mask) {
            let collider = scene.get(hit.collider).unwrap();
            prop_assert!(collider.enabled);
            prop_assert!(mask.contains_layer(collider.layer));
            prop_assert_eq!(collider.object, hit.object);
            prop_assert!(hit.distance >= 0.0 && hit.distance <= max_distance);
            prop_assert!((ray.point_at(hit.distance) - hit.point).length() < 1e-3);
            prop_assert!((hit.normal.length() - 1.0).abs() < 1e-3);
            prop_assert!(hit.normal.dot(ray.direction) <= 1e-4);
        }
    }

    /// Property: the closest-hit query matches the minimum over all hits
    #[test]
    fn raycast_matches_minimum_of_raycast_all(
        specs in prop::collection::vec(collider_strategy(), 0..24),
        max_distance in 1.0f32..80.0,
    ) {
        let scene = build_scene(&specs);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);

        let all = scene.raycast_all(&ray, max_distance, LayerMask::EVERYTHING);
        let closest = scene.raycast(&ray, max_distance, LayerMask::EVERYTHING);

        match closest {
            None => prop_assert!(all.is_empty()),
            Some(hit) => {
                for other in &all {
                    prop_assert!(hit.distance <= other.distance);
                }
            }
        }
    }

    /// Property: an empty mask never reports anything
    #[test]
    fn empty_mask_hits_nothing(
        specs in prop::collection::vec(collider_strategy(), 0..24),
    ) {
        let scene = build_scene(&specs);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        prop_assert!(scene.raycast_all(&ray, 1000.0, LayerMask::NOTHING).is_empty());
    }
}
