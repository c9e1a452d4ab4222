//! Vector helpers on top of `glam::DVec3`.

use glam::DVec3;
use thiserror::Error;

/// Numerical precondition violations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// A vector with zero or non-finite length was normalized.
    #[error("cannot normalize degenerate vector {0}")]
    ZeroLength(DVec3),
}

pub type MathResult<T> = Result<T, MathError>;

/// Normalize `v`, failing instead of producing NaN components.
///
/// Callers must never normalize a zero vector; this turns that mistake
/// into an error at the point it happens.
#[inline]
pub fn try_normalize(v: DVec3) -> MathResult<DVec3> {
    v.try_normalize().ok_or(MathError::ZeroLength(v))
}

/// Mirror `incoming` about `axis`: `2·(axis·incoming)·axis − incoming`.
///
/// `incoming` points away from the surface, so the result does too.
/// Length and the angle to `axis` are preserved when `axis` is unit length.
#[inline]
pub fn reflect_about(incoming: DVec3, axis: DVec3) -> DVec3 {
    2.0 * axis.dot(incoming) * axis - incoming
}

/// Point at radius `r`, polar angle `phi` (from +Z) and azimuth `theta`
/// (from +X, towards +Y).
#[inline]
pub fn spherical(r: f64, phi: f64, theta: f64) -> DVec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    DVec3::new(r * sin_phi * cos_theta, r * sin_phi * sin_theta, r * cos_phi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f64 = 1e-12;

    #[test]
    fn test_normalize_unit_is_idempotent() {
        for v in [DVec3::X, DVec3::new(0.6, 0.8, 0.0), DVec3::new(1.0, 2.0, 3.0).normalize()] {
            let n = try_normalize(v).unwrap();
            assert!((n - v).length() < EPS);
            assert!((n.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_normalize_zero_fails() {
        assert_eq!(try_normalize(DVec3::ZERO), Err(MathError::ZeroLength(DVec3::ZERO)));
        assert!(try_normalize(DVec3::new(f64::NAN, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_reflect_preserves_angle_and_length() {
        let normals = [
            DVec3::Y,
            DVec3::new(1.0, 1.0, 0.0).normalize(),
            DVec3::new(-0.3, 0.2, 0.9).normalize(),
        ];
        let vectors = [
            DVec3::X,
            DVec3::new(0.5, -0.5, 0.7).normalize(),
            DVec3::new(-1.0, 4.0, 2.0).normalize(),
        ];

        for n in normals {
            for v in vectors {
                let r = reflect_about(v, n);
                assert!((r.dot(n) - v.dot(n)).abs() < EPS);
                assert!((r.length() - v.length()).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_reflect_along_axis() {
        // Along the axis stays put, perpendicular flips.
        assert_eq!(reflect_about(DVec3::Y, DVec3::Y), DVec3::Y);
        assert_eq!(reflect_about(DVec3::X, DVec3::Y), -DVec3::X);
    }

    #[test]
    fn test_spherical() {
        assert!((spherical(1.0, 0.0, 0.0) - DVec3::Z).length() < EPS);
        assert!((spherical(2.0, FRAC_PI_2, 0.0) - DVec3::new(2.0, 0.0, 0.0)).length() < EPS);
        assert!((spherical(1.0, FRAC_PI_2, FRAC_PI_2) - DVec3::Y).length() < EPS);
        assert!((spherical(3.0, FRAC_PI_4, PI).length() - 3.0).abs() < EPS);
    }

    #[test]
    fn test_spherical_up_is_perpendicular() {
        // The camera builds its up vector this way.
        for (phi, theta) in [(0.3, 0.1), (FRAC_PI_4, FRAC_PI_4), (1.2, -2.0)] {
            let z = spherical(1.0, phi, theta);
            let y = spherical(1.0, FRAC_PI_2 - phi, theta + PI);
            assert!(z.dot(y).abs() < EPS);
        }
    }
}
