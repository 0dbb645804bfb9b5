//! Scene description: an ordered list of primitives plus one point light.

use std::fs;
use std::path::Path;

use crate::Primitive;
use lumen_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building or loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Unknown scene preset {0} (expected 1, 2 or 3)")]
    UnknownPreset(u32),

    #[error("Invalid scene: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// A point light. Intensity is derived per shading call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
}

impl Light {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

/// A complete renderable scene.
///
/// Primitive order is significant: primary rays test primitives in this
/// order and the earliest one wins a distance tie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub name: String,
    pub light: Light,
    /// Depth of the image plane primary rays are shot through. Larger
    /// magnitudes narrow the field of view.
    #[serde(default = "default_focal_z")]
    pub focal_z: f32,
    pub primitives: Vec<Primitive>,
}

fn default_focal_z() -> f32 {
    Scene::DEFAULT_FOCAL_Z
}

impl Scene {
    pub const DEFAULT_FOCAL_Z: f32 = -500.0;

    /// Create an empty scene lit by `light`.
    pub fn new(name: impl Into<String>, light: Light) -> Self {
        Self {
            name: name.into(),
            light,
            focal_z: Self::DEFAULT_FOCAL_Z,
            primitives: Vec::new(),
        }
    }

    /// Set the image plane depth.
    pub fn with_focal_z(mut self, focal_z: f32) -> Self {
        self.focal_z = focal_z;
        self
    }

    /// Append a primitive to the end of the test order.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Append several primitives sharing one construction site.
    pub fn extend<I, P>(&mut self, primitives: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Primitive>,
    {
        self.primitives.extend(primitives.into_iter().map(Into::into));
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Reject scenes that would feed NaN or infinity into the renderer.
    pub fn validate(&self) -> SceneResult<()> {
        if !self.focal_z.is_finite() || self.focal_z == 0.0 {
            return Err(SceneError::Invalid(format!(
                "focal_z must be finite and non-zero, got {}",
                self.focal_z
            )));
        }
        if !self.light.position.is_finite() {
            return Err(SceneError::Invalid("light position is not finite".to_string()));
        }

        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Err(reason) = primitive.validate() {
                log::warn!("Rejecting {} #{} in scene '{}': {}", primitive.kind(), index, self.name, reason);
                return Err(SceneError::Invalid(format!(
                    "{} #{}: {}",
                    primitive.kind(),
                    index,
                    reason
                )));
            }
        }

        Ok(())
    }

    /// Parse and validate a scene from JSON text.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load and validate a scene from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let mut scene = Self::from_json_str(&text)?;

        if scene.name.is_empty() {
            scene.name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
        }

        log::info!(
            "Loaded scene '{}' from {} ({} primitives)",
            scene.name,
            path.display(),
            scene.len()
        );
        Ok(scene)
    }

    /// Serialize the scene as pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere, Triangle};

    fn one_sphere() -> Scene {
        let mut scene = Scene::new("one", Light::new(Vec3::new(0.0, 5.0, 0.0)));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::default()));
        scene
    }

    #[test]
    fn test_builder() {
        let scene = one_sphere().with_focal_z(-950.0);
        assert_eq!(scene.len(), 1);
        assert!(!scene.is_empty());
        assert_eq!(scene.focal_z, -950.0);
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_focal() {
        let scene = one_sphere().with_focal_z(0.0);
        assert!(matches!(scene.validate(), Err(SceneError::Invalid(_))));
    }

    #[test]
    fn test_validate_reports_index() {
        let mut scene = one_sphere();
        scene.add(Triangle::new(Vec3::ZERO, Vec3::ZERO, Vec3::X, Material::default()));

        match scene.validate() {
            Err(SceneError::Invalid(msg)) => assert!(msg.contains("triangle #1"), "{}", msg),
            other => panic!("expected invalid scene, got {:?}", other),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let scene = one_sphere();
        let json = scene.to_json_string().unwrap();
        let back = Scene::from_json_str(&json).unwrap();
        assert_eq!(scene, back);
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"{
            "light": { "position": [0.0, 2.5, -7.75] },
            "primitives": [
                { "type": "sphere", "center": [0.0, 0.0, -5.0], "radius": 1.0,
                  "material": { "color": [0.5, 0.5, 0.5] } }
            ]
        }"#;
        let scene = Scene::from_json_str(json).unwrap();
        assert_eq!(scene.focal_z, Scene::DEFAULT_FOCAL_Z);
        assert!(scene.name.is_empty());
    }

    #[test]
    fn test_json_rejects_negative_radius() {
        let json = r#"{
            "light": { "position": [0.0, 0.0, 0.0] },
            "primitives": [
                { "type": "sphere", "center": [0.0, 0.0, -5.0], "radius": -1.0,
                  "material": { "color": [0.5, 0.5, 0.5] } }
            ]
        }"#;
        assert!(matches!(Scene::from_json_str(json), Err(SceneError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Scene::from_json_str("{ nope"), Err(SceneError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Scene::load("/definitely/not/here.json");
        assert!(matches!(result, Err(SceneError::Io(_))));
    }
}
