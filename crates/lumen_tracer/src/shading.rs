//! Local illumination: ambient + diffuse + Phong-style specular.

use crate::Color;
use lumen_math::{reflect, Vec3};
use serde::{Deserialize, Serialize};

/// When the specular term is added, based on `s = dot(D, R)` where `R` is
/// the light vector mirrored about the normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpecularGate {
    /// Only when `s < 0`.
    #[default]
    BackFacing,
    /// Only when `s > 0`.
    FrontFacing,
}

impl SpecularGate {
    #[inline]
    fn admits(self, s: f32) -> bool {
        match self {
            SpecularGate::BackFacing => s < 0.0,
            SpecularGate::FrontFacing => s > 0.0,
        }
    }
}

/// Lighting coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadingParams {
    /// Constant floor added to the diffuse term
    pub ambient: f32,
    /// Weight of `dot(N, L)`
    pub diffuse: f32,
    /// Weight of the specular highlight
    pub specular: f32,
    /// Phong exponent
    pub shininess: f32,
    pub gate: SpecularGate,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            ambient: 0.2,
            diffuse: 1.0,
            specular: 1.0,
            shininess: 256.0,
            gate: SpecularGate::BackFacing,
        }
    }
}

/// Shade `color` at `point` with surface normal `normal`, lit by a point
/// light at `light` and seen along `direction`.
///
/// Neither input vector needs to be normalized. The result is not clamped.
pub fn shade(
    color: Color,
    normal: Vec3,
    light: Vec3,
    point: Vec3,
    direction: Vec3,
    params: &ShadingParams,
) -> Color {
    let n = normal.normalize_or_zero();
    if n == Vec3::ZERO {
        return color * params.ambient;
    }

    let l = (light - point).normalize_or_zero();
    let d = direction.normalize_or_zero();

    let intensity = params.ambient + params.diffuse * n.dot(l);
    let mut out = color * intensity;

    // The gate picks the side; the highlight itself is always additive.
    let s = d.dot(reflect(l, n));
    if params.gate.admits(s) {
        out += params.specular * color * s.abs().powf(params.shininess);
    }

    out
}
