//! Hit record and the intersection trait.

use crate::Ray;
use lumen_math::{Interval, Vec3};
use serde::{Deserialize, Serialize};

/// Result of a successful ray/primitive intersection.
///
/// Returned by value so nothing from one ray test can leak into the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the point. Not normalized.
    pub normal: Vec3,
    /// Ray parameter where the intersection occurs
    pub t: f32,
    /// Euclidean distance from the ray origin to `point`
    pub distance: f32,
}

impl Hit {
    /// Build a hit at parameter `t` along `ray`.
    #[inline]
    pub fn at(ray: &Ray, t: f32, normal: Vec3) -> Self {
        let point = ray.at(t);
        Self {
            point,
            normal,
            t,
            distance: (point - ray.origin()).length(),
        }
    }
}

/// Which root of the ray/sphere quadratic counts as the intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SphereRoot {
    /// Always the larger root `(-B + sqrt(disc)) / 2A`, i.e. the far side of
    /// the sphere when the origin is outside it.
    #[default]
    Far,
    /// The smallest root inside the accepted interval.
    Near,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Intersect `ray` with the object, accepting only parameters strictly
    /// inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval, root: SphereRoot) -> Option<Hit>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_distance_from_origin() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -2.0));
        let hit = Hit::at(&ray, 1.5, Vec3::Z);

        assert_eq!(hit.point, Vec3::new(1.0, 0.0, -3.0));
        assert!((hit.distance - 3.0).abs() < 1e-6);
        assert_eq!(hit.t, 1.5);
    }
}
