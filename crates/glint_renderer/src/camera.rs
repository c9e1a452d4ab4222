//! Pinhole camera for ray generation.

use std::f64::consts::{FRAC_PI_2, PI};

use glint_core::RenderConfig;
use glint_math::{basis_rotation, format_rows, spherical, DMat3, DVec3, MathResult, Ray};

/// Camera for generating rays into the scene.
///
/// Looks down its local -Z axis. Set up once with `look_at`, then only
/// read while rendering.
#[derive(Debug, Clone)]
pub struct Camera {
    width: u32,
    height: u32,
    /// Half-height of the image plane at distance 1
    scale: f64,
    position: DVec3,
    orientation: DMat3,
}

impl Camera {
    /// Create a camera at the origin looking down -Z.
    ///
    /// The projection scale is `tan(fov_y)`. Note this is the full angle,
    /// not the usual half angle, so the visible vertical extent is wider
    /// than `fov_y`.
    pub fn new(fov_y: f64, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scale: fov_y.tan(),
            position: DVec3::ZERO,
            orientation: DMat3::IDENTITY,
        }
    }

    /// Camera with the resolution and field of view of `config`.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.fov_y, config.width, config.height)
    }

    /// Orbit-style placement around `target`.
    ///
    /// The camera sits at distance `rho` in the direction given by polar
    /// angle `phi` and azimuth `theta` (see `glint_math::spherical`),
    /// facing the target.
    pub fn look_at(&mut self, target: DVec3, rho: f64, phi: f64, theta: f64) {
        let z = spherical(1.0, phi, theta);
        let y = spherical(1.0, FRAC_PI_2 - phi, theta + PI);

        self.orientation = basis_rotation(DVec3::Y, DVec3::Z, y, z);
        self.position = z * rho + target;

        log::debug!(
            "Camera at {:?} looking at {:?} (rho={:.2}, phi={:.3}, theta={:.3})",
            self.position,
            target,
            rho,
            phi,
            theta
        );
        log::debug!("Camera orientation:\n{}", format_rows(&self.orientation));
    }

    /// Builder form of `look_at`.
    pub fn looking_at(mut self, target: DVec3, rho: f64, phi: f64, theta: f64) -> Self {
        self.look_at(target, rho, phi, theta);
        self
    }

    /// World-space ray through continuous pixel coordinates.
    ///
    /// `(0, 0)` is the top-left corner of the image, `(width, height)` the
    /// bottom-right; pixel centers sit at half-integers.
    pub fn get_ray(&self, screen_x: f64, screen_y: f64) -> MathResult<Ray> {
        let x = (2.0 * screen_x / self.width as f64 - 1.0) * self.scale;
        let y = (1.0 - 2.0 * screen_y / self.height as f64) * self.scale;

        Ray::new(self.position, self.orientation * DVec3::new(x, y, -1.0))
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn orientation(&self) -> DMat3 {
        self.orientation
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
