//! Collider shapes and their ray intersection tests.

use glam::Vec3;
use pointercast_core::Ray;

/// Directions parallel to a slab closer than this are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-8;

/// Axis-aligned bounding box in 3D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the box
    pub min: Vec3,
    /// Maximum corner of the box
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB from center position and size
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half_size = size * 0.5;
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// Center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// True when `min <= max` on every axis and all coordinates are finite.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.cmple(self.max).all()
    }

    /// Test where a ray enters this box.
    ///
    /// Returns the distance to the entry point and the outward normal of the
    /// entered face. Rays starting inside the box report no hit.
    pub fn ray_entry(&self, ray: &Ray) -> Option<(f32, Vec3)> {
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut normal = Vec3::ZERO;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let dir = ray.direction[axis];
            let (min, max) = (self.min[axis], self.max[axis]);

            if dir.abs() < PARALLEL_EPSILON {
                // Parallel to this slab: must already be between its planes
                if origin < min || origin > max {
                    return None;
                }
                continue;
            }

            let (near, far, face) = if dir > 0.0 {
                ((min - origin) / dir, (max - origin) / dir, -1.0)
            } else {
                ((max - origin) / dir, (min - origin) / dir, 1.0)
            };

            if near > t_enter {
                t_enter = near;
                normal = Vec3::ZERO;
                normal[axis] = face;
            }
            t_exit = t_exit.min(far);
        }

        // Slabs do not overlap, or the box is entirely behind the ray
        if t_enter > t_exit || t_exit < 0.0 {
            return None;
        }

        // Origin inside the box
        if t_enter < 0.0 {
            return None;
        }

        Some((t_enter, normal))
    }
}

/// Geometry of a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    /// Solid sphere.
    Sphere {
        /// Center in world space.
        center: Vec3,
        /// Radius, strictly positive.
        radius: f32,
    },
    /// Solid axis-aligned box.
    Cuboid(Aabb),
}

impl ColliderShape {
    /// Distance and surface normal where `ray` first enters the shape.
    pub fn ray_entry(&self, ray: &Ray) -> Option<(f32, Vec3)> {
        match *self {
            ColliderShape::Sphere { center, radius } => sphere_entry(ray, center, radius),
            ColliderShape::Cuboid(aabb) => aabb.ray_entry(ray),
        }
    }
}

fn sphere_entry(ray: &Ray, center: Vec3, radius: f32) -> Option<(f32, Vec3)> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;

    // Origin inside the sphere
    if c < 0.0 {
        return None;
    }
    // Outside and pointing away
    if b > 0.0 {
        return None;
    }

    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let t = -b - discriminant.sqrt();
    if t < 0.0 {
        return None;
    }

    let normal = (ray.point_at(t) - center).normalize_or_zero();
    Some((t, normal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_ray_intersection() {
        let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);

        // Ray pointing at center from positive Z
        let ray = Ray::new(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -1.0));
        let (distance, normal) = aabb.ray_entry(&ray).unwrap();
        assert!((distance - 1.5).abs() < 0.001);
        assert_eq!(normal, Vec3::Z);

        // Ray missing the box
        let miss = Ray::new(Vec3::new(2.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(aabb.ray_entry(&miss).is_none());
    }

    #[test]
    fn aabb_entered_face_normal() {
        let aabb = Aabb::new(Vec3::new(3.0, -1.0, -1.0), Vec3::new(4.0, 1.0, 1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.1, 0.0));
        let (distance, normal) = aabb.ray_entry(&ray).unwrap();
        assert_eq!(normal, Vec3::NEG_X);
        assert!((ray.point_at(distance).x - 3.0).abs() < 1e-4);
    }

    #[test]
    fn aabb_origin_inside_or_behind_is_not_a_hit() {
        let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
        assert!(aabb.ray_entry(&Ray::new(Vec3::ZERO, Vec3::X)).is_none());

        let behind = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(aabb.ray_entry(&behind).is_none());
    }

    #[test]
    fn aabb_axis_parallel_ray_outside_slab_misses() {
        let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        let ray = Ray::new(Vec3::new(0.0, 2.0, -5.0), Vec3::Z);
        assert!(aabb.ray_entry(&ray).is_none());
    }

    #[test]
    fn aabb_validity() {
        assert!(Aabb::from_center_size(Vec3::ZERO, Vec3::ONE).is_valid());
        assert!(!Aabb::new(Vec3::ONE, Vec3::ZERO).is_valid());
        assert!(!Aabb::new(Vec3::ZERO, Vec3::splat(f32::INFINITY)).is_valid());
    }

    #[test]
    fn sphere_hit_reports_front_surface() {
        let shape = ColliderShape::Sphere {
            center: Vec3::new(0.0, 0.0, 10.0),
            radius: 2.0,
        };
        let (distance, normal) = shape.ray_entry(&Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
        assert!((distance - 8.0).abs() < 1e-4);
        assert!((normal - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn sphere_miss_inside_and_behind() {
        let shape = ColliderShape::Sphere {
            center: Vec3::new(0.0, 0.0, 10.0),
            radius: 2.0,
        };
        assert!(shape
            .ray_entry(&Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::Z))
            .is_none());
        assert!(shape
            .ray_entry(&Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z))
            .is_none());
        assert!(shape
            .ray_entry(&Ray::new(Vec3::new(0.0, 0.0, 20.0), Vec3::Z))
            .is_none());
    }
}
