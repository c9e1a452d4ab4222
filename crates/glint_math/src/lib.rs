// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod interval;
mod matrix;
mod ray;
mod vector;

pub use interval::Interval;
pub use matrix::{basis_rotation, element, format_rows};
pub use ray::Ray;
pub use vector::{reflect_about, spherical, try_normalize, MathError, MathResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, DVec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(DVec3::Y.cross(DVec3::Z), DVec3::X);
    }
}
