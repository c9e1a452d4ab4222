//! Error types for scene construction and rendering.

use glint_core::ConfigError;
use glint_math::MathError;
use thiserror::Error;

/// Errors raised while building a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("Plane normal is degenerate: {0}")]
    InvalidNormal(#[from] MathError),

    #[error("Unknown material id {0}")]
    UnknownMaterial(usize),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Errors raised while rendering.
///
/// A render either completes the full image or returns one of these.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render config: {0}")]
    Config(#[from] ConfigError),

    #[error("Numerical precondition violated: {0}")]
    Math(#[from] MathError),
}

pub type RenderResult<T> = Result<T, RenderError>;
