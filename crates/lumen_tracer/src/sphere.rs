//! Sphere primitive for ray tracing.

use crate::{
    hittable::{Hit, Hittable, SphereRoot},
    Material, Ray,
};
use lumen_math::{Interval, Vec3};
use serde::{Deserialize, Serialize};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval, root: SphereRoot) -> Option<Hit> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        if a == 0.0 {
            return None;
        }

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let far = (-b + sqrtd) / (2.0 * a);

        let t = match root {
            SphereRoot::Far => far,
            SphereRoot::Near => {
                let near = (-b - sqrtd) / (2.0 * a);
                if ray_t.surrounds(near) {
                    near
                } else {
                    far
                }
            }
        };

        if !ray_t.surrounds(t) {
            return None;
        }

        let point = ray.at(t);
        Some(Hit::at(ray, t, point - self.center))
    }
}
