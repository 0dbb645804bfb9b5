//! Triangle primitive for ray tracing.
//!
//! Intersects the supporting plane first, then keeps the crossing only if
//! the signed sub-triangle area ratios all agree in sign.

use crate::{
    hittable::{Hit, Hittable, SphereRoot},
    plane::intersect_plane,
    Material, Ray,
};
use lumen_math::{Interval, Vec3};
use serde::{Deserialize, Serialize};

/// Triangles whose squared doubled area falls below this never intersect.
const DEGENERATE_AREA: f32 = 1e-12;

/// A triangle primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub p0: Vec3,
    pub p1: Vec3,
    pub p2: Vec3,
    pub material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3, material: Material) -> Self {
        Self {
            p0,
            p1,
            p2,
            material,
        }
    }

    /// Normal of the supporting plane, `(p1 - p0) x (p2 - p0)`. Not normalized.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        (self.p1 - self.p0).cross(self.p2 - self.p0)
    }

    /// Whether the three vertices span a non-zero area.
    pub fn is_degenerate(&self) -> bool {
        self.normal().length_squared() < DEGENERATE_AREA
    }

    /// Centroid of the three vertices.
    pub fn centroid(&self) -> Vec3 {
        (self.p0 + self.p1 + self.p2) / 3.0
    }

    /// Signed area ratios `(u, v, w)` of `px` against the triangle.
    ///
    /// `px` is assumed to lie on the supporting plane. Returns `None` for a
    /// zero-area triangle.
    pub fn area_ratios(&self, px: Vec3) -> Option<(f32, f32, f32)> {
        let n = self.normal();
        let area = n.length_squared();
        if area < DEGENERATE_AREA {
            return None;
        }

        let a0 = (self.p2 - self.p1).cross(px - self.p1).dot(n);
        let a1 = (self.p0 - self.p2).cross(px - self.p2).dot(n);
        let a2 = (self.p1 - self.p0).cross(px - self.p0).dot(n);

        Some((a1 / area, a2 / area, a0 / area))
    }

    /// Point-in-triangle test for a point on the supporting plane.
    pub fn contains(&self, px: Vec3) -> bool {
        match self.area_ratios(px) {
            Some((u, v, w)) => u * v >= 0.0 && u * w >= 0.0 && v * w >= 0.0,
            None => false,
        }
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, ray_t: Interval, _root: SphereRoot) -> Option<Hit> {
        let normal = self.normal();
        if normal.length_squared() < DEGENERATE_AREA {
            return None;
        }

        let t = intersect_plane(self.p0, normal, ray, ray_t)?;
        let hit = Hit::at(ray, t, normal);

        self.contains(hit.point).then_some(hit)
    }
}
