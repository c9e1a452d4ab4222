//! Glint Renderer - CPU Whitted ray tracing
//!
//! A recursive ray tracer: Phong local lighting with hard shadows from
//! point lights, plus mirror reflection traced to a fixed depth.
//! Pixels are supersampled on a regular grid and rendered in parallel
//! buckets.

mod error;
mod hit;
mod shape;
mod scene;
mod camera;
mod shading;
mod integrator;
mod renderer;
mod bucket;
pub mod presets;

pub use error::{RenderError, RenderResult, SceneError, SceneResult};
pub use hit::Hit;
pub use shape::Shape;
pub use scene::{MaterialId, Scene};
pub use camera::Camera;
pub use shading::{local_lighting, AMBIENT_FLOOR, SHADOW_EPSILON, SPECULAR_EXPONENT};
pub use integrator::{facing_ratio, trace, BACKGROUND, REFLECTION_EPSILON};
pub use renderer::{ray_color, render, render_pixel, sample_offsets};
pub use bucket::{
    generate_buckets, render_bucket, render_parallel, render_to_sink, Bucket, BucketResult,
};

/// Re-export common types from the lower crates
pub use glint_core::{Color, ImageBuffer, ImageSink, Light, Material, RenderConfig, RenderMode};
pub use glint_math::{DMat3, DVec3, Ray};
