//! Surface materials and point lights.

use glint_math::DVec3;

/// Color type alias (RGB, nominally 0-1 but never clamped here)
pub type Color = DVec3;

/// Phong surface description.
///
/// Shared read-only by every shape that references it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Base color (RGB, 0-1)
    pub color: Color,

    /// Diffuse coefficient
    pub kd: f64,

    /// Specular coefficient
    pub ks: f64,

    /// Mirror reflection coefficient (0 = no reflection, 1 = full mirror)
    pub kr: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::splat(0.5),
            kd: 1.0,
            ks: 0.0,
            kr: 0.0,
        }
    }
}

impl Material {
    /// Create a new material.
    pub fn new(color: Color, kd: f64, ks: f64, kr: f64) -> Self {
        Self { color, kd, ks, kr }
    }

    /// Purely diffuse material of the given color.
    pub fn diffuse(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Check if this material spawns reflection rays.
    pub fn is_reflective(&self) -> bool {
        self.kr != 0.0
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: DVec3,

    /// Intensity per channel; may exceed 1.0
    pub color: Color,
}

impl Light {
    pub fn new(position: DVec3, color: Color) -> Self {
        Self { position, color }
    }
}
