//! Image sink for finished renders.
//!
//! The renderer only needs to write a color at a pixel and, once every
//! pixel is known, hand the buffer over. `ImageBuffer` keeps unclamped
//! floating point colors until then and normalizes the whole image
//! (a single min/max across all channels) into 8-bit RGB.

use std::path::Path;

use ::image::{Rgb, RgbImage};
use glint_math::Interval;
use thiserror::Error;

use crate::Color;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Encode(#[from] ::image::ImageError),
}

pub type ImageResult<T> = Result<T, ImageError>;

/// Destination for rendered pixels.
pub trait ImageSink {
    /// What the sink produces once rendering is complete.
    type Output;

    /// Store the color of pixel (x, y). Origin is the top-left corner.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);

    /// Consume the sink after the last pixel has been written.
    fn finalize(self) -> Self::Output;
}

/// Floating point RGB image.
#[derive(Clone, Debug)]
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
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Smallest and largest channel value over the whole image.
    pub fn value_range(&self) -> Interval {
        self.pixels
            .iter()
            .flat_map(|c| c.to_array())
            .fold(Interval::EMPTY, |range, v| range.include(v))
    }

    /// Map the image's global value range onto 0..=255.
    ///
    /// Scaled values are rounded to the nearest byte rather than truncated,
    /// so some bytes come out one higher than a truncating conversion.
    /// A constant image has no range to stretch and maps to black.
    pub fn to_rgb8(&self) -> RgbImage {
        let range = self.value_range();
        let scale = if range.size() > 0.0 {
            255.0 / range.size()
        } else {
            0.0
        };
        let bytes = Interval::new(0.0, 255.0);
        let to_byte = |v: f64| bytes.clamp(((v - range.min) * scale).round()) as u8;

        RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = self.get(x, y);
            Rgb([to_byte(c.x), to_byte(c.y), to_byte(c.z)])
        })
    }

    /// Normalize and write the image as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        let path = path.as_ref();
        self.to_rgb8().save(path)?;
        log::info!(
            "Saved {}x{} image to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

impl ImageSink for ImageBuffer {
    type Output = RgbImage;

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    fn finalize(self) -> RgbImage {
        self.to_rgb8()
    }
}
