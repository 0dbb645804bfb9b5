// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Mirror `v` about the unit normal `n`: `v - 2 (v . n) n`.
///
/// `n` must be normalized; the result keeps the magnitude of `v`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
