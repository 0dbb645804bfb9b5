//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon, then stitched into one image.

use std::time::Instant;

use rayon::prelude::*;

use crate::renderer::trace_pixel;
use crate::{Color, ImageBuffer, RenderConfig, Scene};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets covering a `width` x `height` image, centre-out.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_spiral(&mut buckets, width, height);

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    buckets.sort_by(|a, b| {
        let a_dist = (a.x as f32 + a.width as f32 / 2.0 - center_x).powi(2)
            + (a.y as f32 + a.height as f32 / 2.0 - center_y).powi(2);
        let b_dist = (b.x as f32 + b.width as f32 / 2.0 - center_x).powi(2)
            + (b.y as f32 + b.height as f32 / 2.0 - center_y).powi(2);

        a_dist.partial_cmp(&b_dist).unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the bucket's pixels into their place in `image`.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let mut pixels = self.pixels.iter();
        for local_y in 0..self.bucket.height {
            for local_x in 0..self.bucket.width {
                if let Some(color) = pixels.next() {
                    image.set(self.bucket.x + local_x, self.bucket.y + local_y, *color);
                }
            }
        }
    }
}

/// Render a single bucket. Returns pixels in row-major order within the bucket.
pub fn render_bucket(bucket: &Bucket, scene: &Scene, config: &RenderConfig) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            pixels.push(trace_pixel(scene, bucket.x + local_x, bucket.y + local_y, config));
        }
    }

    BucketResult::new(*bucket, pixels)
}

/// Render the whole image across the rayon thread pool.
///
/// Produces exactly the same pixels as [`crate::render_with`].
pub fn render_parallel(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let start = Instant::now();
    let buckets = generate_buckets(config.width, config.height, config.bucket_size);
    log::debug!(
        "Rendering '{}' as {} buckets of up to {}px on {} threads",
        scene.name,
        buckets.len(),
        config.bucket_size,
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, scene, config))
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        result.write_into(&mut image);
    }

    log::info!(
        "Rendered '{}' at {}x{} in {:?}",
        scene.name,
        config.width,
        config.height,
        start.elapsed()
    );
    image
}
