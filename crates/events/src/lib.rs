//! Pointer event raycasting for pointercast
//!
//! This crate turns a pointer position into an ordered list of scene objects
//! under that pointer. Each raycaster appends its candidates to a list shared
//! by every raycaster taking part in the same pointer query; ranking across
//! raycasters is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use glam::Vec3;
//! use pointercast_camera::{Camera, CameraRegistry};
//! use pointercast_core::ObjectId;
//! use pointercast_events::{BaseRaycaster, PhysicsRaycaster, PointerEventData, RaycastContext, RaycasterId};
//! use pointercast_physics::{Collider, PhysicsScene};
//!
//! let mut cameras = CameraRegistry::new();
//! let camera = cameras
//!     .insert_main(Camera::looking_at(Vec3::ZERO, Vec3::Z))
//!     .unwrap();
//! let center = cameras.get(camera).unwrap().viewport_center();
//!
//! let mut scene = PhysicsScene::new();
//! scene
//!     .insert(Collider::sphere(ObjectId(1), Vec3::new(0.0, 0.0, 5.0), 0.5))
//!     .unwrap();
//!
//! let raycaster = PhysicsRaycaster::new(RaycasterId(0));
//! let ctx = RaycastContext::new(&cameras, &scene);
//! let mut results = Vec::new();
//! raycaster.raycast(&ctx, &PointerEventData::new(0, center), &mut results);
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].object, ObjectId(1));
//! ```

pub mod pointer;
pub mod raycaster;

// Re-export commonly used types
pub use pointer::PointerEventData;
pub use raycaster::{
    BaseRaycaster, PhysicsRaycaster, RaycastContext, RaycastResult, RaycasterId, NO_CAMERA_DEPTH,
};
