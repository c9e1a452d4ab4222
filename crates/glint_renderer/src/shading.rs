//! Phong local lighting with hard shadows.
//!
//! Per light: back-facing and shadowed lights are filtered out, the rest
//! contribute a diffuse and a specular term, and the sum is floored at
//! `AMBIENT_FLOOR` on every channel in place of an ambient term.

use glint_core::{Color, Light, Material};
use glint_math::{reflect_about, try_normalize, DVec3, MathResult};

use crate::{Hit, Scene};

/// Lowest value any channel of a local color can take.
pub const AMBIENT_FLOOR: f64 = 0.1;

/// Phong highlight exponent.
pub const SPECULAR_EXPONENT: i32 = 64;

/// Offset of a shadow ray's origin along the light direction.
pub const SHADOW_EPSILON: f64 = 1e-4;

/// Non-recursive color at `hit` as seen from `eye`.
///
/// The specular base `dot(view, reflected)` is not clamped. The exponent
/// is even, so a negative base still yields a non-negative highlight.
pub fn local_lighting(hit: &Hit, eye: DVec3, scene: &Scene) -> MathResult<Color> {
    let material = scene.material(hit.material);
    let view_dir = try_normalize(eye - hit.position)?;

    let color = scene
        .lights()
        .iter()
        .try_fold(Color::ZERO, |color, light| -> MathResult<Color> {
            Ok(match light_contribution(hit, material, view_dir, light, scene)? {
                Some(c) => color + c,
                None => color,
            })
        })?;

    Ok(color.max(Color::splat(AMBIENT_FLOOR)))
}

/// Diffuse plus specular from one light, or `None` when the light faces the
/// back of the surface or is blocked.
fn light_contribution(
    hit: &Hit,
    material: &Material,
    view_dir: DVec3,
    light: &Light,
    scene: &Scene,
) -> MathResult<Option<Color>> {
    let light_dir = try_normalize(light.position - hit.position)?;
    let cos_theta = hit.normal.dot(light_dir);

    if cos_theta < 0.0 || scene.is_shadowed(hit.position, light_dir)? {
        return Ok(None);
    }

    let reflected = try_normalize(reflect_about(light_dir, hit.normal))?;

    let diffuse = material.color * material.kd * cos_theta;
    let specular = light.color * material.ks * view_dir.dot(reflected).powi(SPECULAR_EXPONENT);

    Ok(Some(diffuse + specular))
}
