//! Pixel sinks and image export.

use std::path::Path;

use crate::Color;
use lumen_math::Interval;
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Cannot save an empty {0}x{1} image")]
    EmptyImage(u32, u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Anything the renderer can write pixels into.
pub trait PixelSink {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Store `color` at column `x`, row `y` (row 0 at the top).
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    Interval::UNIT.clamp(x)
}

/// Convert a color to 8-bit RGBA. Channels outside [0, 1] are clipped.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * clamp_01(color.x)).round() as u8;
    let g = (255.0 * clamp_01(color.y)).round() as u8;
    let b = (255.0 * clamp_01(color.z)).round() as u8;
    [r, g, b, 255]
}

/// Simple image buffer for storing render output.
///
/// Holds the raw, unclamped colors; clipping only happens on export.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Save as PNG (or any format `image` infers from the extension).
    pub fn save(&self, path: impl AsRef<Path>) -> OutputResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(OutputError::EmptyImage(self.width, self.height));
        }

        let path = path.as_ref();
        image::save_buffer(
            path,
            &self.to_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )?;

        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

impl PixelSink for ImageBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.set(x, y, color);
    }
}
