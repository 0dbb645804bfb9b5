//! Tagged union over every intersectable shape.

use crate::{
    hittable::{Hit, Hittable, SphereRoot},
    Material, Plane, Ray, Sphere, Triangle,
};
use lumen_math::Interval;
use serde::{Deserialize, Serialize};

/// One scene object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Plane(Plane),
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Primitive {
    /// Surface description of this object.
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Plane(p) => &p.material,
            Primitive::Sphere(s) => &s.material,
            Primitive::Triangle(t) => &t.material,
        }
    }

    /// Short name used in log messages and validation errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Plane(_) => "plane",
            Primitive::Sphere(_) => "sphere",
            Primitive::Triangle(_) => "triangle",
        }
    }

    /// Check the geometry for values that could never intersect sensibly.
    pub fn validate(&self) -> Result<(), String> {
        let finite = match self {
            Primitive::Plane(p) => p.point.is_finite() && p.normal.is_finite(),
            Primitive::Sphere(s) => s.center.is_finite() && s.radius.is_finite(),
            Primitive::Triangle(t) => t.p0.is_finite() && t.p1.is_finite() && t.p2.is_finite(),
        };
        if !finite || !self.material().color.is_finite() {
            return Err("contains a non-finite value".to_string());
        }

        match self {
            Primitive::Plane(p) if p.normal.length_squared() == 0.0 => {
                Err("plane normal is zero".to_string())
            }
            Primitive::Sphere(s) if s.radius <= 0.0 => {
                Err(format!("sphere radius must be positive, got {}", s.radius))
            }
            Primitive::Triangle(t) if t.is_degenerate() => {
                Err("triangle has zero area".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl Hittable for Primitive {
    #[inline]
    fn hit(&self, ray: &Ray, ray_t: Interval, root: SphereRoot) -> Option<Hit> {
        match self {
            Primitive::Plane(p) => p.hit(ray, ray_t, root),
            Primitive::Sphere(s) => s.hit(ray, ray_t, root),
            Primitive::Triangle(t) => t.hit(ray, ray_t, root),
        }
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}
