//! Per-pixel driver.
//!
//! For every pixel: cast a primary ray from the origin, find the nearest
//! surface, then apply reflection, shading and the shadow test according to
//! that surface's material.

use std::time::Instant;

use crate::{
    occluded, reflected_color, shade, Color, Hit, Hittable, ImageBuffer, PixelSink, Ray, Scene,
    ShadingParams, SphereRoot, DEFAULT_BUCKET_SIZE,
};
use lumen_math::{Interval, Vec3};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Hits at or beyond this distance from the eye are ignored
    pub max_distance: f32,
    /// Color of pixels whose primary ray hits nothing
    pub background: Color,
    /// Color written over shadowed points
    pub shadow_color: Color,
    /// Lighting coefficients
    pub shading: ShadingParams,
    /// Root choice for primary and mirror rays against spheres
    pub sphere_root: SphereRoot,
    /// Tile edge length for the parallel renderer
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            max_distance: 200.0,
            background: Color::ZERO,
            shadow_color: Color::splat(0.1),
            shading: ShadingParams::default(),
            sphere_root: SphereRoot::Far,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the nearest-hit cutoff distance.
    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Set background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the color of shadowed points.
    pub fn with_shadow_color(mut self, color: Color) -> Self {
        self.shadow_color = color;
        self
    }

    /// Set lighting coefficients.
    pub fn with_shading(mut self, shading: ShadingParams) -> Self {
        self.shading = shading;
        self
    }

    /// Set the sphere root policy.
    pub fn with_sphere_root(mut self, root: SphereRoot) -> Self {
        self.sphere_root = root;
        self
    }

    /// Set the parallel tile size.
    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size.max(1);
        self
    }
}

/// Primary ray through the centre of pixel `(x, y)`.
///
/// The eye sits at the origin looking down -Z; the image plane lies at
/// `focal_z` with one world unit per pixel. Row 0 is the top of the image.
pub fn primary_ray(x: u32, y: u32, width: u32, height: u32, focal_z: f32) -> Ray {
    let px = x as f32 - (width as f32 / 2.0 - 0.5);
    let py = (height as f32 / 2.0 - 0.5) - y as f32;
    Ray::new(Vec3::ZERO, Vec3::new(px, py, focal_z))
}

/// Nearest primitive along `ray`, with its index in the scene.
///
/// A candidate only replaces the current winner when it is strictly closer,
/// so equal distances resolve to the primitive tested first.
pub fn nearest_hit(scene: &Scene, ray: &Ray, config: &RenderConfig) -> Option<(usize, Hit)> {
    let mut closest = config.max_distance;
    let mut winner = None;

    for (index, primitive) in scene.primitives.iter().enumerate() {
        if let Some(hit) = primitive.hit(ray, Interval::FORWARD, config.sphere_root) {
            if hit.distance < closest {
                closest = hit.distance;
                winner = Some((index, hit));
            }
        }
    }

    winner
}

/// Final color of primitive `index` at `hit`, seen along `ray`.
///
/// An index outside the scene shades as background.
pub fn shade_hit(
    scene: &Scene,
    index: usize,
    hit: &Hit,
    ray: &Ray,
    config: &RenderConfig,
) -> Color {
    let Some(primitive) = scene.primitives.get(index) else {
        return config.background;
    };
    let material = primitive.material();
    let mut color = material.color;

    if material.mirror {
        if let Some(reflected) = reflected_color(scene, index, hit, ray, config.sphere_root) {
            color = reflected;
        }
    }

    if material.lit {
        color = shade(
            color,
            hit.normal,
            scene.light.position,
            hit.point,
            ray.direction(),
            &config.shading,
        );
    }

    if material.receives_shadows && occluded(scene, index, hit.point) {
        color = config.shadow_color;
    }

    color
}

/// Color seen through pixel `(x, y)` of a `width` x `height` image.
pub fn trace_pixel(scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let ray = primary_ray(x, y, config.width, config.height, scene.focal_z);

    match nearest_hit(scene, &ray, config) {
        Some((index, hit)) => shade_hit(scene, index, &hit, &ray, config),
        None => config.background,
    }
}

/// Render the scene into any pixel sink, one pixel at a time in row-major
/// order. The sink's dimensions override `config.width`/`config.height`.
pub fn render_into(scene: &Scene, config: &RenderConfig, sink: &mut dyn PixelSink) {
    let config = RenderConfig {
        width: sink.width(),
        height: sink.height(),
        ..config.clone()
    };
    let start = Instant::now();

    for y in 0..config.height {
        for x in 0..config.width {
            sink.set_pixel(x, y, trace_pixel(scene, x, y, &config));
        }
    }

    log::info!(
        "Rendered '{}' at {}x{} in {:?}",
        scene.name,
        config.width,
        config.height,
        start.elapsed()
    );
}

/// Render the scene with default settings at the given resolution.
pub fn render(scene: &Scene, width: u32, height: u32) -> ImageBuffer {
    render_with(scene, &RenderConfig::default().with_resolution(width, height))
}

/// Render the entire scene to a new image buffer on the calling thread.
pub fn render_with(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(config.width, config.height);
    render_into(scene, config, &mut image);
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{presets, Light, Material, Plane, Sphere, Triangle};

    fn approx(a: Color, b: Color) -> bool {
        (a - b).length() < 1e-4
    }

    /// Shade the room's back wall by hand for pixel `(x, y)` of a 4x4 image.
    fn back_wall_color(x: u32, y: u32) -> Color {
        let t = -10.5 / -500.0;
        let point = Vec3::new(t * (x as f32 - 1.5), t * (1.5 - y as f32), -10.5);
        let to_light = Vec3::new(0.0, 2.5, -7.75) - point;
        let intensity = 0.2 + to_light.z / to_light.length();
        Color::splat(0.5 * intensity)
    }

    #[test]
    fn test_primary_ray_through_pixel_centres() {
        let ray = primary_ray(0, 0, 4, 4, -500.0);
        assert_eq!(ray.origin, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::new(-1.5, 1.5, -500.0));

        let ray = primary_ray(3, 3, 4, 4, -950.0);
        assert_eq!(ray.direction, Vec3::new(1.5, -1.5, -950.0));
    }

    #[test]
    fn test_room_4x4_sees_only_back_wall() {
        let scene = presets::room();
        let image = render(&scene, 4, 4);

        for y in 0..4 {
            for x in 0..4 {
                let ray = primary_ray(x, y, 4, 4, scene.focal_z);
                let (index, _) = nearest_hit(&scene, &ray, &RenderConfig::default()).unwrap();
                assert_eq!(index, 0, "pixel ({}, {}) should hit the back plane", x, y);

                let expected = back_wall_color(x, y);
                assert!(
                    approx(image.get(x, y), expected),
                    "pixel ({}, {}) = {:?}, expected {:?}",
                    x,
                    y,
                    image.get(x, y),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_room_without_back_wall_is_black() {
        let mut scene = presets::room();
        scene.primitives.remove(0);

        let image = render(&scene, 4, 4);
        assert!(image.pixels.iter().all(|c| *c == Color::ZERO));
    }

    #[test]
    fn test_empty_scene_renders_background() {
        let scene = Scene::new("empty", Light::new(Vec3::Y));
        let config = RenderConfig::default()
            .with_resolution(2, 2)
            .with_background(Color::new(0.1, 0.2, 0.3));

        let image = render_with(&scene, &config);
        assert!(image.pixels.iter().all(|c| *c == Color::new(0.1, 0.2, 0.3)));
        assert_eq!(render(&scene, 2, 2).get(1, 1), Color::ZERO);
    }

    #[test]
    fn test_max_distance_cutoff() {
        let scene = presets::room();
        let config = RenderConfig::default()
            .with_resolution(4, 4)
            .with_max_distance(10.0)
            .with_background(Color::new(0.0, 0.0, 1.0));

        // The back wall sits ~10.5 away, past the cutoff
        assert_eq!(trace_pixel(&scene, 1, 1, &config), Color::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_nearest_surface_wins_in_any_order() {
        let near = Color::new(0.7, 0.0, 0.0);
        let far = Color::new(0.0, 0.0, 0.7);
        let light = Light::new(Vec3::new(0.0, 0.0, 10.0));
        let config = RenderConfig::default()
            .with_resolution(1, 1)
            .with_shading(ShadingParams {
                ambient: 0.0,
                ..Default::default()
            });

        let near_tri = Triangle::new(
            Vec3::new(-1.0, -1.0, -3.0),
            Vec3::new(1.0, -1.0, -3.0),
            Vec3::new(0.0, 1.0, -3.0),
            Material::flat(near),
        );
        let far_plane = Plane::new(Vec3::new(0.0, 0.0, -8.0), Vec3::Z, Material::flat(far));

        let mut forward = Scene::new("forward", light);
        forward.add(far_plane);
        forward.add(near_tri);

        let mut backward = Scene::new("backward", light);
        backward.add(near_tri);
        backward.add(far_plane);

        assert_eq!(trace_pixel(&forward, 0, 0, &config), near);
        assert_eq!(trace_pixel(&backward, 0, 0, &config), near);
    }

    #[test]
    fn test_ties_go_to_first_primitive() {
        let light = Light::new(Vec3::new(0.0, 0.0, 10.0));
        let first = Color::new(1.0, 0.0, 0.0);
        let second = Color::new(0.0, 1.0, 0.0);
        let config = RenderConfig::default().with_resolution(1, 1);

        let mut scene = Scene::new("tie", light);
        scene.add(Plane::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, Material::flat(first)));
        scene.add(Plane::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, Material::flat(second)));

        assert_eq!(trace_pixel(&scene, 0, 0, &config), first);
    }

    #[test]
    fn test_shadowed_floor_is_exact_shadow_color() {
        let mut scene = Scene::new("shadow", Light::new(Vec3::new(0.0, 10.0, -5.0)));
        scene.add(Plane::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::Y,
            Material::matte(Color::splat(0.5)).with_shadows(),
        ));
        let config = RenderConfig::default().with_resolution(1, 1);

        // Eye ray straight down onto the floor
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -5.0));
        let (index, hit) = nearest_hit(&scene, &ray, &config).unwrap();
        let lit = shade_hit(&scene, index, &hit, &ray, &config);
        assert_ne!(lit, Color::splat(0.1));

        // Drop a blocker between the hit point and the light
        let midway = (hit.point + scene.light.position) / 2.0;
        scene.add(Sphere::new(midway, 0.5, Material::default()));
        let shadowed = shade_hit(&scene, index, &hit, &ray, &config);
        assert_eq!(shadowed, Color::splat(0.1));
    }

    #[test]
    fn test_custom_shadow_color() {
        let mut scene = Scene::new("shadow", Light::new(Vec3::new(0.0, 10.0, -1.0)))
            .with_focal_z(-1.0);
        scene.add(Plane::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::Y,
            Material::matte(Color::splat(0.5)).with_shadows(),
        ));
        scene.add(Sphere::new(Vec3::new(0.0, 4.0, -1.0), 0.5, Material::default()));

        let shadow = Color::new(0.3, 0.0, 0.6);
        let config = RenderConfig::default()
            .with_resolution(1, 3)
            .with_shadow_color(shadow);

        // Bottom row looks along (0, -1, -1) and lands on the floor at (0, -1, -1)
        assert_eq!(trace_pixel(&scene, 0, 2, &config), shadow);
    }

    #[test]
    fn test_sphere_root_changes_visible_face() {
        let color = Color::splat(0.5);
        let mut scene = Scene::new("ball", Light::new(Vec3::new(0.0, 0.0, 1.0)));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::matte(color)));

        let far = RenderConfig::default().with_resolution(1, 1);
        let near = far.clone().with_sphere_root(SphereRoot::Near);

        // Near face at z = -4 faces the light; far face at z = -6 faces away
        assert!(approx(trace_pixel(&scene, 0, 0, &near), color * 1.2));
        assert!(approx(trace_pixel(&scene, 0, 0, &far), color * -0.8));
    }

    #[test]
    fn test_shade_hit_out_of_range_is_background() {
        let scene = presets::room();
        let config = RenderConfig::default().with_background(Color::new(0.0, 0.0, 1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let (_, hit) = nearest_hit(&scene, &ray, &config).unwrap();

        let color = shade_hit(&scene, scene.len(), &hit, &ray, &config);
        assert_eq!(color, Color::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_mirror_color_is_shaded_after_reflection() {
        // Mirror floor; the eye ray misses the red ball but its bounce does not
        let mut scene = Scene::new("mirror", Light::new(Vec3::new(0.0, 5.0, 0.0)));
        scene.add(Plane::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::Y,
            Material::mirror(Color::splat(0.5)),
        ));
        let red = Color::new(0.8, 0.0, 0.0);
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.3, Material::matte(red)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -1.0));
        let config = RenderConfig::default();
        let (index, hit) = nearest_hit(&scene, &ray, &config).unwrap();
        assert_eq!(index, 0);

        let color = shade_hit(&scene, index, &hit, &ray, &config);
        let expected = shade(red, hit.normal, scene.light.position, hit.point, ray.direction(), &config.shading);
        assert!(approx(color, expected));
        assert!(color.y.abs() < 1e-6 && color.z.abs() < 1e-6);
    }

    #[test]
    fn test_unlit_surface_keeps_base_color() {
        let scene = presets::face();
        let config = RenderConfig::default().with_resolution(512, 512);

        // Top-left corner only sees the flat backdrop
        assert_eq!(trace_pixel(&scene, 0, 0, &config), Color::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn test_render_into_uses_sink_size() {
        let scene = presets::room();
        let mut image = ImageBuffer::new(3, 2);
        render_into(&scene, &RenderConfig::default(), &mut image);

        assert_eq!(image.pixels.len(), 6);
        assert!(image.pixels.iter().all(|c| c.x > 0.0));
    }
}
