//! Render settings.
//!
//! Resolution, field of view, recursion depth and supersampling grid are
//! injected into the renderer through `RenderConfig`. Every field has a
//! default, so a JSON file only needs the keys it wants to change:
//!
//! ```json
//! { "width": 256, "height": 256, "samples_per_axis": 2 }
//! ```

use std::f64::consts::{FRAC_PI_2, PI};
use std::path::Path;

use glint_math::Interval;
use serde::Deserialize;
use thiserror::Error;

/// Default recursion bound for reflection rays.
pub const MAX_DEPTH: u32 = 8;

/// Errors that can occur while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which integrator colors each camera ray.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Phong shading, hard shadows and recursive mirror reflection.
    #[default]
    Whitted,

    /// Grey-scale cosine between the surface normal and the view ray.
    FacingRatio,
}

/// Built-in scene to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenePreset {
    /// Four Phong spheres under one light.
    #[default]
    Reference,

    /// Spheres standing on a reflective floor plane.
    MirrorFloor,
}

/// Render configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,

    /// Vertical field of view in radians. The projection scale is
    /// `tan(fov_y)`, not `tan(fov_y / 2)`.
    pub fov_y: f64,

    /// Rays at this recursion depth return black
    pub max_depth: u32,

    /// Supersampling grid is `samples_per_axis` × `samples_per_axis`
    pub samples_per_axis: u32,

    /// Edge length of the square tiles rendered in parallel
    pub bucket_size: u32,

    pub mode: RenderMode,

    pub scene: ScenePreset,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            fov_y: PI / 15.0,
            max_depth: MAX_DEPTH,
            samples_per_axis: 3,
            bucket_size: 64,
            mode: RenderMode::Whitted,
            scene: ScenePreset::Reference,
        }
    }
}

impl RenderConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded render config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_axis: u32, max_depth: u32) -> Self {
        self.samples_per_axis = samples_per_axis;
        self.max_depth = max_depth;
        self
    }

    /// Set the integrator.
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check that every field is usable by the renderer.
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("samples_per_axis", self.samples_per_axis),
            ("bucket_size", self.bucket_size),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    message: "must be greater than zero".into(),
                });
            }
        }

        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::Invalid {
                field: "width",
                message: format!("{}x{} pixels overflows u32", self.width, self.height),
            });
        }
        if self.samples_per_axis.checked_mul(self.samples_per_axis).is_none() {
            return Err(ConfigError::Invalid {
                field: "samples_per_axis",
                message: format!("{} squared overflows u32", self.samples_per_axis),
            });
        }

        // tan(fov_y) must stay finite and positive
        if !Interval::new(0.0, FRAC_PI_2).surrounds(self.fov_y) {
            return Err(ConfigError::Invalid {
                field: "fov_y",
                message: format!("{} is outside (0, pi/2)", self.fov_y),
            });
        }

        Ok(())
    }

    /// Number of camera rays averaged into one pixel.
    ///
    /// Only meaningful on a validated config.
    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_axis * self.samples_per_axis
    }
}
