//! Recursive Whitted trace and the facing-ratio debug integrator.

use glint_core::Color;
use glint_math::{reflect_about, DVec3, Ray};

use crate::{local_lighting, RenderResult, Scene};

/// Color of rays that escape the scene.
pub const BACKGROUND: Color = Color::ZERO;

/// Offset of a reflection ray's origin along its direction.
pub const REFLECTION_EPSILON: f64 = 1e-3;

/// Compute the color seen by a ray.
///
/// Local Phong lighting at the nearest hit plus `kr` times the color of the
/// mirror-reflected ray. Rays at `depth >= max_depth` are black; there is no
/// adaptive cutoff. `eye` is the camera position, used as the viewpoint for
/// highlights at every depth.
pub fn trace(ray: &Ray, scene: &Scene, eye: DVec3, depth: u32, max_depth: u32) -> RenderResult<Color> {
    if depth >= max_depth {
        return Ok(Color::ZERO);
    }

    let Some(hit) = scene.nearest_hit(ray) else {
        return Ok(BACKGROUND);
    };
    let material = scene.material(hit.material);

    // A zero kr would multiply the reflected color away anyway.
    let reflected = if material.is_reflective() {
        let direction = reflect_about(-ray.direction(), hit.normal);
        let reflection = Ray::offset(hit.position, direction, REFLECTION_EPSILON)?;
        trace(&reflection, scene, eye, depth + 1, max_depth)?
    } else {
        Color::ZERO
    };

    let local = local_lighting(&hit, eye, scene)?;
    Ok(local + reflected * material.kr)
}

/// Grey-scale cosine between the surface normal and the reversed ray.
///
/// Ignores lights and materials; useful for checking geometry and camera.
pub fn facing_ratio(ray: &Ray, scene: &Scene) -> Color {
    match scene.nearest_hit(ray) {
        Some(hit) => Color::splat(hit.normal.dot(-ray.direction())),
        None => BACKGROUND,
    }
}
