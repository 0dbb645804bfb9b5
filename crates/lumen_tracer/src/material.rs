//! Surface description shared by every primitive.

use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

/// Type alias for RGB color. Channels are not clamped.
pub type Color = Vec3;

/// How a surface responds to the light and to the rest of the scene.
///
/// `color` is both what the surface shows when shaded and what a mirror
/// picks up when it reflects this surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: Color,
    /// Apply ambient/diffuse/specular shading. Unlit surfaces show `color` as-is.
    #[serde(default = "default_lit")]
    pub lit: bool,
    /// Replace `color` with the flat color of whatever the mirror ray hits.
    #[serde(default)]
    pub mirror: bool,
    /// Darken to the shadow color when something blocks the light.
    #[serde(default)]
    pub receives_shadows: bool,
}

fn default_lit() -> bool {
    true
}

impl Material {
    /// A plain shaded surface.
    pub fn matte(color: Color) -> Self {
        Self {
            color,
            lit: true,
            mirror: false,
            receives_shadows: false,
        }
    }

    /// A shaded surface that also reflects one bounce.
    pub fn mirror(color: Color) -> Self {
        Self {
            mirror: true,
            ..Self::matte(color)
        }
    }

    /// An unshaded surface that always shows its base color.
    pub fn flat(color: Color) -> Self {
        Self {
            lit: false,
            ..Self::matte(color)
        }
    }

    /// Enable the shadow test for this surface.
    pub fn with_shadows(mut self) -> Self {
        self.receives_shadows = true;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::matte(Color::splat(0.5))
    }
}
