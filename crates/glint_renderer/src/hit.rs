//! Ray-surface intersection record.

use glint_math::DVec3;

use crate::MaterialId;

/// Where a ray meets a surface.
///
/// Built fresh by every intersection test; only the nearest one survives
/// a scene query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter of the intersection
    pub t: f64,
    /// Point of intersection
    pub position: DVec3,
    /// Outward unit surface normal, independent of the ray's side
    pub normal: DVec3,
    /// Material of the surface that was hit
    pub material: MaterialId,
}
