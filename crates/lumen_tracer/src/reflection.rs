//! Single-bounce mirror reflection.

use crate::{shadow::SECONDARY_EPSILON, Color, Hit, Hittable, Ray, Scene, SphereRoot};
use lumen_math::{reflect, Interval};

const ALONG_MIRROR: Interval = Interval::new(SECONDARY_EPSILON, f32::INFINITY);

/// Flat base color of the nearest surface seen in the mirror at `hit`.
///
/// `mirror` is the index of the reflecting primitive, which is never tested
/// against its own reflection ray. The reflected surface is not shaded,
/// shadowed or reflected again. Returns `None` if the mirror ray escapes.
pub fn reflected_color(
    scene: &Scene,
    mirror: usize,
    hit: &Hit,
    incoming: &Ray,
    root: SphereRoot,
) -> Option<Color> {
    let normal = hit.normal.normalize_or_zero();
    let ray = Ray::new(hit.point, reflect(incoming.direction(), normal));

    let mut nearest: Option<(f32, Color)> = None;
    for (index, primitive) in scene.primitives.iter().enumerate() {
        if index == mirror {
            continue;
        }
        if let Some(secondary) = primitive.hit(&ray, ALONG_MIRROR, root) {
            if nearest.map_or(true, |(t, _)| secondary.t < t) {
                nearest = Some((secondary.t, primitive.material().color));
            }
        }
    }

    nearest.map(|(_, color)| color)
}
