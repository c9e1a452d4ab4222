//! Geometric primitives.
//!
//! The primitive set is small and fixed, so shapes are a closed enum and
//! intersection dispatches with a `match`.

use glint_math::{try_normalize, DVec3, Ray};

use crate::{Hit, MaterialId, SceneError, SceneResult};

/// Rays closer than this to parallel with a plane never hit it.
const PARALLEL_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere {
        center: DVec3,
        radius: f64,
        material: MaterialId,
    },
    Plane {
        point: DVec3,
        /// Unit normal
        normal: DVec3,
        material: MaterialId,
    },
}

impl Shape {
    /// Create a sphere. The radius must be positive.
    pub fn sphere(center: DVec3, radius: f64, material: MaterialId) -> SceneResult<Self> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }
        Ok(Shape::Sphere {
            center,
            radius,
            material,
        })
    }

    /// Create an infinite plane through `point`. `normal` need not be unit length.
    pub fn plane(point: DVec3, normal: DVec3, material: MaterialId) -> SceneResult<Self> {
        Ok(Shape::Plane {
            point,
            normal: try_normalize(normal)?,
            material,
        })
    }

    pub fn material(&self) -> MaterialId {
        match *self {
            Shape::Sphere { material, .. } | Shape::Plane { material, .. } => material,
        }
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, p: DVec3) -> DVec3 {
        match *self {
            // p lies on a sphere of positive radius, so p - center is never zero
            Shape::Sphere { center, .. } => (p - center).normalize(),
            Shape::Plane { normal, .. } => normal,
        }
    }

    /// Intersect the forward half-line of `ray` with this shape.
    ///
    /// Returns the nearest non-negative root. A ray starting on the surface
    /// can therefore report `t == 0`; scene queries discard that.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let t = match *self {
            Shape::Sphere { center, radius, .. } => intersect_sphere(ray, center, radius)?,
            Shape::Plane { point, normal, .. } => intersect_plane(ray, point, normal)?,
        };

        let position = ray.at(t);
        Some(Hit {
            t,
            position,
            normal: self.normal_at(position),
            material: self.material(),
        })
    }
}

// https://en.wikipedia.org/wiki/Line%E2%80%93sphere_intersection
fn intersect_sphere(ray: &Ray, center: DVec3, radius: f64) -> Option<f64> {
    let diff = ray.origin() - center;
    let dir = ray.direction();
    let a = dir.dot(dir);
    let b = 2.0 * diff.dot(dir);
    let c = diff.dot(diff) - radius * radius;

    let d = b * b - 4.0 * a * c;
    if d < 0.0 {
        return None;
    }

    // Stable roots: add quantities of the same sign, never subtract them.
    let q = -0.5 * (b + b.signum() * d.sqrt());
    let r1 = q / a;
    // q == 0 only when b == 0 and c == 0, a double root at t = 0
    let r2 = if q != 0.0 { c / q } else { r1 };

    match (r1 >= 0.0, r2 >= 0.0) {
        (false, false) => None,
        (true, false) => Some(r1),
        (false, true) => Some(r2),
        (true, true) => Some(r1.min(r2)),
    }
}

fn intersect_plane(ray: &Ray, point: DVec3, normal: DVec3) -> Option<f64> {
    let denom = ray.direction().dot(normal);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = (point - ray.origin()).dot(normal) / denom;
    (t >= 0.0).then_some(t)
}
