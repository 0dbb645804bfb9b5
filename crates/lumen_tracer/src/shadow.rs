//! Hard shadow test toward the scene's single light.

use crate::{Hittable, Ray, Scene, SphereRoot};
use lumen_math::{Interval, Vec3};

/// Offset keeping shadow and reflection rays off the surface they start on.
pub const SECONDARY_EPSILON: f32 = 1e-4;

/// Ray parameters strictly between a surface point (`t = 0`) and the light
/// (`t = 1`).
const TOWARD_LIGHT: Interval = Interval::new(SECONDARY_EPSILON, 1.0);

/// Whether anything other than primitive `shaded` blocks the segment from
/// `point` to the light.
///
/// Any hit counts; there is no nearest-occluder search. Spheres accept either
/// root, so a sphere straddling the light still occludes.
pub fn occluded(scene: &Scene, shaded: usize, point: Vec3) -> bool {
    let ray = Ray::between(point, scene.light.position);

    scene
        .primitives
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != shaded)
        .any(|(_, primitive)| primitive.hit(&ray, TOWARD_LIGHT, SphereRoot::Near).is_some())
}
