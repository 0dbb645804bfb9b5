//! Lumen tracer - Whitted-style CPU ray tracing
//!
//! Analytic plane/sphere/triangle intersection, ambient + diffuse + specular
//! shading, one hard shadow test and one mirror bounce per pixel.

mod bucket;
mod hittable;
mod material;
mod output;
mod plane;
pub mod presets;
mod primitive;
mod reflection;
mod renderer;
mod scene;
mod shading;
mod shadow;
mod sphere;
mod triangle;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use hittable::{Hit, Hittable, SphereRoot};
pub use material::{Color, Material};
pub use output::{color_to_rgba, ImageBuffer, OutputError, OutputResult, PixelSink};
pub use plane::Plane;
pub use primitive::Primitive;
pub use reflection::reflected_color;
pub use renderer::{
    nearest_hit, primary_ray, render, render_into, render_with, shade_hit, trace_pixel,
    RenderConfig,
};
pub use scene::{Light, Scene, SceneError, SceneResult};
pub use shading::{shade, ShadingParams, SpecularGate};
pub use shadow::{occluded, SECONDARY_EPSILON};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
