//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon. Pixels never depend on each other, so the
//! only synchronization is the join before results reach the image sink.

use std::time::Instant;

use glint_core::{Color, ImageBuffer, ImageSink, RenderConfig};
use rayon::prelude::*;

use crate::{render_pixel, Camera, RenderResult, Scene};

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
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Generate buckets for an image, sorted in spiral order from center.
///
/// Edge buckets are clipped to the image.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_spiral(&mut buckets, width, height);

    // Update indices after sorting
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;
    let distance = |b: &Bucket| {
        let bx = b.x as f64 + b.width as f64 / 2.0;
        let by = b.y as f64 + b.height as f64 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    buckets.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
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
    /// Copy the bucket's pixels into their place in the full image.
    pub fn write_to<S: ImageSink>(&self, sink: &mut S) {
        let rows = self.pixels.chunks(self.bucket.width as usize);
        for (local_y, row) in (0u32..).zip(rows) {
            for (local_x, &color) in (0u32..).zip(row) {
                sink.set_pixel(self.bucket.x + local_x, self.bucket.y + local_y, color);
            }
        }
    }
}

/// Render a single bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> RenderResult<BucketResult> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count());

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let color = render_pixel(camera, scene, bucket.x + local_x, bucket.y + local_y, config)?;
            pixels.push(color);
        }
    }

    Ok(BucketResult {
        bucket: *bucket,
        pixels,
    })
}

/// Render every bucket in parallel, then hand all pixels to `sink`.
///
/// Nothing is written unless the whole image rendered successfully.
pub fn render_to_sink<S: ImageSink>(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    sink: &mut S,
) -> RenderResult<()> {
    config.validate()?;

    let buckets = generate_buckets(camera.width(), camera.height(), config.bucket_size);
    log::info!(
        "Rendering {}x{} in {} buckets, {} spp, max depth {}, {} shapes, {} lights",
        camera.width(),
        camera.height(),
        buckets.len(),
        config.samples_per_pixel(),
        config.max_depth,
        scene.shapes().len(),
        scene.lights().len()
    );

    let start = Instant::now();
    let results = buckets
        .par_iter()
        .map(|bucket| {
            let result = render_bucket(bucket, camera, scene, config);
            log::debug!("Bucket {} done", bucket.index);
            result
        })
        .collect::<RenderResult<Vec<_>>>()?;
    log::info!("Rendered in {:?}", start.elapsed());

    for result in &results {
        result.write_to(sink);
    }

    Ok(())
}

/// Render the scene in parallel into a new `ImageBuffer`.
pub fn render_parallel(camera: &Camera, scene: &Scene, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    let mut image = ImageBuffer::new(camera.width(), camera.height());
    render_to_sink(camera, scene, config, &mut image)?;
    Ok(image)
}
