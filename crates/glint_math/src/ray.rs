use crate::{try_normalize, DVec3, MathResult};

/// A ray in 3D space with origin and unit direction.
///
/// Rays are built fresh for every primary, shadow and reflection cast and
/// are never mutated afterwards. The direction is normalized on
/// construction, so intersection code may assume `direction · direction == 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: DVec3,
    direction: DVec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    ///
    /// Fails if `direction` has zero or non-finite length.
    pub fn new(origin: DVec3, direction: DVec3) -> MathResult<Self> {
        Ok(Self {
            origin,
            direction: try_normalize(direction)?,
        })
    }

    /// Create a ray whose origin is nudged `epsilon` along its direction.
    ///
    /// Secondary rays start this way so they do not immediately hit the
    /// surface they leave from.
    pub fn offset(origin: DVec3, direction: DVec3, epsilon: f64) -> MathResult<Self> {
        let direction = try_normalize(direction)?;
        Ok(Self {
            origin: origin + direction * epsilon,
            direction,
        })
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}
