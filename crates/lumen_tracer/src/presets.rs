//! The three built-in scenes.

use crate::{Color, Light, Material, Plane, Scene, SceneError, SceneResult, Sphere, Triangle};
use lumen_math::Vec3;

#[inline]
fn v(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Build triangles that share one material from `[p0, p1, p2]` vertex lists.
fn faces(vertices: &[[Vec3; 3]], material: Material) -> Vec<Triangle> {
    vertices
        .iter()
        .map(|[p0, p1, p2]| Triangle::new(*p0, *p1, *p2, material))
        .collect()
}

impl Scene {
    /// Build one of the built-in scenes by index (1, 2 or 3).
    pub fn preset(index: u32) -> SceneResult<Scene> {
        let scene = match index {
            1 => room(),
            2 => tableau(),
            3 => face(),
            other => return Err(SceneError::UnknownPreset(other)),
        };
        log::debug!("Built preset {} '{}' with {} primitives", index, scene.name, scene.len());
        Ok(scene)
    }
}

/// Box room with a mirrored blue pyramid and a mirrored grey sphere.
pub fn room() -> Scene {
    let mut scene = Scene::new("room", Light::new(v(0.0, 2.5, -7.75)));

    scene.add(Plane::new(
        v(0.0, 0.0, -10.5),
        v(0.0, 0.0, 1.0),
        Material::matte(Color::splat(0.5)),
    ));

    let apex = v(-0.93, 0.55, -8.51);
    scene.extend(faces(
        &[
            [v(-0.4, -2.75, -9.55), apex, v(0.11, -2.75, -7.98)],
            [v(0.11, -2.75, -7.98), apex, v(-1.46, -2.75, -7.47)],
            [v(-1.46, -2.75, -7.47), apex, v(-1.97, -2.75, -9.04)],
            [v(-1.97, -2.75, -9.04), apex, v(-0.4, -2.75, -9.55)],
        ],
        Material::mirror(Color::new(0.0, 0.0, 0.7)),
    ));

    scene.extend(faces(
        &[
            [v(2.75, -2.75, -5.0), v(2.75, -2.75, -10.5), v(-2.75, -2.75, -10.5)],
            [v(-2.75, -2.75, -5.0), v(2.75, -2.75, -5.0), v(-2.75, -2.75, -10.5)],
        ],
        Material::matte(Color::splat(0.3)).with_shadows(),
    ));

    scene.extend(faces(
        &[
            [v(2.75, 2.75, -10.5), v(2.75, 2.75, -5.0), v(-2.75, 2.75, -5.0)],
            [v(-2.75, 2.75, -10.5), v(2.75, 2.75, -10.5), v(-2.75, 2.75, -5.0)],
        ],
        Material::matte(Color::splat(0.3)),
    ));

    // Green wall on the right
    scene.extend(faces(
        &[
            [v(2.75, 2.75, -5.0), v(2.75, 2.75, -10.5), v(2.75, -2.75, -10.5)],
            [v(2.75, -2.75, -5.0), v(2.75, 2.75, -5.0), v(2.75, -2.75, -10.5)],
        ],
        Material::matte(Color::new(0.0, 0.5, 0.0)),
    ));

    // Red wall on the left
    scene.extend(faces(
        &[
            [v(-2.75, -2.75, -5.0), v(-2.75, -2.75, -10.5), v(-2.75, 2.75, -10.5)],
            [v(-2.75, 2.75, -5.0), v(-2.75, -2.75, -5.0), v(-2.75, 2.75, -10.5)],
        ],
        Material::matte(Color::new(0.5, 0.0, 0.0)),
    ));

    scene.add(Sphere::new(
        v(0.9, -1.925, -6.69),
        0.825,
        Material::mirror(Color::splat(0.5)),
    ));

    scene
}

/// Floor and back wall with a cone, an icosahedron and three spheres.
pub fn tableau() -> Scene {
    let mut scene = Scene::new("tableau", Light::new(v(4.0, 6.0, 1.0)));

    scene.add(Plane::new(
        v(0.0, -1.0, 0.0),
        v(0.0, 1.0, 0.0),
        Material::matte(Color::splat(0.5)).with_shadows(),
    ));
    scene.add(Plane::new(
        v(0.0, 0.0, -12.0),
        v(0.0, 0.0, 1.0),
        Material::matte(Color::new(0.0, 0.5, 0.5)),
    ));

    // Twelve-sided cone around (0, _, -5)
    let tip = v(0.0, 0.6, -5.0);
    let rim = [
        v(0.0, -1.0, -5.8),
        v(0.4, -1.0, -5.693),
        v(0.6928, -1.0, -5.4),
        v(0.8, -1.0, -5.0),
        v(0.6928, -1.0, -4.6),
        v(0.4, -1.0, -4.307),
        v(0.0, -1.0, -4.2),
        v(-0.4, -1.0, -4.307),
        v(-0.6928, -1.0, -4.6),
        v(-0.8, -1.0, -5.0),
        v(-0.6928, -1.0, -5.4),
        v(-0.4, -1.0, -5.693),
    ];
    let cone: Vec<[Vec3; 3]> = (0..rim.len())
        .map(|i| [rim[i], tip, rim[(i + 1) % rim.len()]])
        .collect();
    scene.extend(faces(&cone, Material::matte(Color::new(0.0, 0.7, 0.0))));

    // Shiny red icosahedron centred on (-2, 0, -7)
    let bottom = v(-2.0, -1.0, -7.0);
    let top = v(-2.0, 1.0, -7.0);
    let l0 = v(-1.276, -0.4472, -6.474);
    let l1 = v(-2.276, -0.4472, -6.149);
    let l2 = v(-2.894, -0.4472, -7.0);
    let l3 = v(-2.276, -0.4472, -7.851);
    let l4 = v(-1.276, -0.4472, -7.526);
    let u0 = v(-1.106, 0.4472, -7.0);
    let u1 = v(-1.724, 0.4472, -6.149);
    let u2 = v(-2.724, 0.4472, -6.474);
    let u3 = v(-2.724, 0.4472, -7.526);
    let u4 = v(-1.724, 0.4472, -7.851);
    scene.extend(faces(
        &[
            [bottom, l0, l1],
            [l0, bottom, l4],
            [bottom, l1, l2],
            [bottom, l2, l3],
            [bottom, l3, l4],
            [l0, l4, u0],
            [l1, l0, u1],
            [l2, l1, u2],
            [l3, l2, u3],
            [l4, l3, u4],
            [l0, u0, u1],
            [l1, u1, u2],
            [l2, u2, u3],
            [l3, u3, u4],
            [l4, u4, u0],
            [u1, u0, top],
            [u2, u1, top],
            [u3, u2, top],
            [u4, u3, top],
            [u0, u4, top],
        ],
        Material::mirror(Color::new(0.7, 0.0, 0.0)),
    ));

    scene.add(Sphere::new(v(1.0, -0.5, -3.5), 0.5, Material::matte(Color::new(0.5, 0.5, 0.0))));
    scene.add(Sphere::new(v(0.0, 1.0, -5.0), 0.4, Material::mirror(Color::splat(0.5))));
    scene.add(Sphere::new(v(-0.8, -0.75, -4.0), 0.25, Material::mirror(Color::new(0.5, 0.0, 0.5))));

    scene
}

/// A face made of spheres and two mouth triangles in front of an unlit wall.
pub fn face() -> Scene {
    let mut scene = Scene::new("face", Light::new(v(1.0, 1.0, -12.0)));

    scene.add(Plane::new(
        v(0.0, 0.0, -10.5),
        v(0.0, 0.0, 1.0),
        Material::flat(Color::new(0.5, 0.0, 0.5)),
    ));

    let blue = Material::matte(Color::new(0.0, 0.0, 0.5));
    let white = Material::matte(Color::splat(0.5));
    let black = Material::matte(Color::ZERO);

    scene.add(Sphere::new(v(0.8, -0.8, -3.5), 1.0, blue));
    scene.add(Sphere::new(v(1.1, -3.5, -3.5), 2.0, blue));
    scene.add(Sphere::new(v(0.9, 0.1, -3.1), 0.2, white));
    scene.add(Sphere::new(v(0.78, 0.15, -2.8), 0.08, black));
    scene.add(Sphere::new(v(0.5, 0.05, -2.9), 0.08, black));
    scene.add(Sphere::new(v(0.5, 0.1, -3.1), 0.2, white));

    scene.extend(faces(
        &[
            [v(-0.2, -0.8, -3.1), v(1.8, -0.8, -3.1), v(0.7, -1.4, -3.1)],
            [v(-0.2, -0.8, -3.1), v(1.8, -0.8, -3.1), v(0.7, -0.4, -3.1)],
        ],
        black,
    ));

    scene
}
