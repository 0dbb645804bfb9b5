//! Infinite plane primitive.

use crate::{
    hittable::{Hit, Hittable, SphereRoot},
    Material, Ray,
};
use lumen_math::{Interval, Vec3};
use serde::{Deserialize, Serialize};

/// Below this `|D . N|` the ray is treated as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-8;

/// An infinite plane through `point` with normal `normal`.
///
/// The normal does not need to be unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
    pub material: Material,
}

impl Plane {
    /// Create a new plane.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal,
            material,
        }
    }
}

/// Ray parameter where `ray` crosses the plane through `point` with `normal`.
///
/// `None` when the ray is parallel to the plane or the crossing falls outside
/// `ray_t`.
pub(crate) fn intersect_plane(point: Vec3, normal: Vec3, ray: &Ray, ray_t: Interval) -> Option<f32> {
    let denom = ray.direction().dot(normal);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = (point - ray.origin()).dot(normal) / denom;
    ray_t.surrounds(t).then_some(t)
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, ray_t: Interval, _root: SphereRoot) -> Option<Hit> {
        let t = intersect_plane(self.point, self.normal, ray, ray_t)?;
        Some(Hit::at(ray, t, self.normal))
    }
}
