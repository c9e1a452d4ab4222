//! Glint Core - scene data, render settings and image output.
//!
//! This crate provides:
//!
//! - **Scene data**: `Material` (Phong coefficients) and point `Light`s
//! - **Configuration**: `RenderConfig`, loadable from JSON
//! - **Image output**: the `ImageSink` trait and `ImageBuffer`, which
//!   normalizes the finished image and encodes it as PNG
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{ImageBuffer, ImageSink, RenderConfig};
//!
//! let config = RenderConfig::load("render.json")?;
//! let mut image = ImageBuffer::new(config.width, config.height);
//! image.set_pixel(0, 0, glint_core::Color::ONE);
//! image.save_png("out.png")?;
//! ```

pub mod config;
pub mod output;
pub mod material;

// Re-export commonly used types
pub use config::{ConfigError, ConfigResult, RenderConfig, RenderMode, ScenePreset, MAX_DEPTH};
pub use output::{ImageBuffer, ImageError, ImageResult, ImageSink};
pub use material::{Color, Light, Material};
