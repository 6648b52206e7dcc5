#![warn(missing_docs)]
//! Event cameras: projection, screen-to-ray conversion, and the registry that owns them.

mod registry;

use glam::{Mat4, Vec2, Vec3};
use pointercast_core::{LayerMask, Ray};
use thiserror::Error;

pub use registry::{CameraId, CameraRegistry};

/// Errors raised when a camera cannot be used for projection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CameraError {
    /// Clip planes must satisfy `0 < near < far`.
    #[error("invalid clip planes: near={near}, far={far}")]
    InvalidClipPlanes {
        /// Near clip distance.
        near: f32,
        /// Far clip distance.
        far: f32,
    },
    /// Viewport must cover at least one pixel.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// The registry has no camera under this id.
    #[error("unknown camera {0:?}")]
    UnknownCamera(CameraId),
}

/// Perspective camera used to turn pointer positions into world rays.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Horizontal rotation in radians (around Y axis).
    pub yaw: f32,
    /// Vertical rotation in radians (around local X axis).
    pub pitch: f32,

    /// Vertical field of view in radians.
    pub fov: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
    /// Viewport size in pixels (width, height).
    pub viewport: (u32, u32),

    /// Layers this camera renders; pointer rays never see other layers.
    pub culling_mask: LayerMask,
    /// Draw order among cameras. Also used to rank raycasters.
    pub depth: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            fov: std::f32::consts::FRAC_PI_3, // 60 degrees
            near: 0.1,
            far: 1000.0,
            viewport: (1280, 720),
            culling_mask: LayerMask::EVERYTHING,
            depth: 0.0,
        }
    }
}

impl Camera {
    /// Create a new camera with the given position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a camera at `position` oriented towards `target`.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let mut camera = Self::new(position);
        camera.look_at(target);
        camera
    }

    /// Re-orient the camera towards `target`. No-op when `target` is the camera position.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = (target - self.position).normalize_or_zero();
        if dir == Vec3::ZERO {
            return;
        }
        self.yaw = dir.z.atan2(dir.x);
        self.pitch = dir.y.clamp(-1.0, 1.0).asin();
    }

    /// Get the forward direction vector (where camera is looking).
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Width divided by height of the viewport.
    pub fn aspect(&self) -> f32 {
        let (width, height) = self.viewport;
        width.max(1) as f32 / height.max(1) as f32
    }

    /// Compute the view matrix (world space -> camera space).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    /// Compute the projection matrix (camera space -> clip space).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect(), self.near, self.far)
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Length of the visible depth range, from the near plane to the far plane.
    pub fn max_ray_distance(&self) -> f32 {
        self.far - self.near
    }

    /// Check that the camera can produce meaningful rays.
    pub fn validate(&self) -> Result<(), CameraError> {
        let clip_ok = self.near.is_finite() && self.far.is_finite() && self.near > 0.0;
        if !clip_ok || self.near >= self.far {
            return Err(CameraError::InvalidClipPlanes {
                near: self.near,
                far: self.far,
            });
        }
        let (width, height) = self.viewport;
        if width == 0 || height == 0 {
            return Err(CameraError::InvalidViewport { width, height });
        }
        Ok(())
    }

    /// Convert a pixel position into a world-space ray.
    ///
    /// `screen` is measured in pixels from the top-left corner of the viewport.
    /// The ray starts on the near plane and points through the pixel towards the
    /// far plane, so hit distances are measured from the near plane.
    pub fn screen_point_to_ray(&self, screen: Vec2) -> Ray {
        let (width, height) = self.viewport;
        // Pixel -> normalized device coordinates (-1 to 1), Y flipped
        let x = (2.0 * screen.x) / width.max(1) as f32 - 1.0;
        let y = 1.0 - (2.0 * screen.y) / height.max(1) as f32;

        let inv_view_proj = self.view_projection_matrix().inverse();
        let near = inv_view_proj.project_point3(Vec3::new(x, y, 0.0));
        let far = inv_view_proj.project_point3(Vec3::new(x, y, 1.0));

        Ray::new(near, far - near)
    }

    /// Pixel position of the viewport centre.
    pub fn viewport_center(&self) -> Vec2 {
        let (width, height) = self.viewport;
        Vec2::new(width as f32 * 0.5, height as f32 * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn camera_default_initialization() {
        let camera = Camera::default();
        assert_eq!(camera.position, Vec3::ZERO);
        assert_eq!(camera.culling_mask, LayerMask::EVERYTHING);
        assert_eq!(camera.depth, 0.0);
        assert!(camera.validate().is_ok());
    }

    #[test]
    fn camera_forward_direction() {
        let camera = Camera::default();
        let forward = camera.forward();
        // Default yaw=0, pitch=0 should point in +X direction
        assert!((forward.x - 1.0).abs() < 0.01);
        assert!(forward.y.abs() < 0.01);
        assert!(forward.z.abs() < 0.01);
    }

    #[test]
    fn looking_at_orients_forward() {
        let camera = Camera::looking_at(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0));
        assert!(approx(camera.forward(), Vec3::Z));

        let camera = Camera::looking_at(Vec3::ONE, Vec3::new(1.0, 5.0, 1.001));
        assert!(camera.forward().y > 0.99);
    }

    #[test]
    fn center_ray_starts_on_near_plane() {
        let camera = Camera::looking_at(Vec3::ZERO, Vec3::Z);
        let ray = camera.screen_point_to_ray(camera.viewport_center());

        assert!(approx(ray.origin, Vec3::new(0.0, 0.0, camera.near)));
        assert!(approx(ray.direction, Vec3::Z));
    }

    #[test]
    fn screen_corners_follow_window_convention() {
        let camera = Camera::looking_at(Vec3::ZERO, Vec3::Z);

        let top_left = camera.screen_point_to_ray(Vec2::ZERO);
        assert!(top_left.direction.y > 0.0);

        let (w, h) = camera.viewport;
        let bottom = camera.screen_point_to_ray(Vec2::new(w as f32 * 0.5, h as f32));
        assert!(bottom.direction.y < 0.0);
        assert!(bottom.direction.x.abs() < 1e-4);
    }

    #[test]
    fn max_ray_distance_spans_clip_range() {
        let camera = Camera {
            near: 0.1,
            far: 100.0,
            ..Camera::default()
        };
        assert!((camera.max_ray_distance() - 99.9).abs() < 1e-4);
    }

    #[test]
    fn validate_rejects_bad_clip_planes_and_viewport() {
        let camera = Camera {
            near: 10.0,
            far: 1.0,
            ..Camera::default()
        };
        assert!(matches!(
            camera.validate(),
            Err(CameraError::InvalidClipPlanes { .. })
        ));

        let camera = Camera {
            near: 0.0,
            ..Camera::default()
        };
        assert!(camera.validate().is_err());

        let camera = Camera {
            viewport: (0, 720),
            ..Camera::default()
        };
        assert_eq!(
            camera.validate(),
            Err(CameraError::InvalidViewport {
                width: 0,
                height: 720
            })
        );
    }

    #[test]
    fn camera_matrices_are_valid() {
        let camera = Camera::default();

        let view = camera.view_matrix();
        let proj = camera.projection_matrix();
        let view_proj = camera.view_projection_matrix();

        assert!(view.to_cols_array().iter().all(|x| x.is_finite()));
        assert!(proj.to_cols_array().iter().all(|x| x.is_finite()));
        assert!(view_proj.to_cols_array().iter().all(|x| x.is_finite()));
    }
}
