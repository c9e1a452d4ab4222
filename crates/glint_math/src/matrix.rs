// Matrix utilities for DMat3
//
// glam stores matrices column-major; these helpers give the row-major
// view (plus a text dump of it) and the change-of-basis constructor used
// by the camera.

use glam::{DMat3, DVec3};

/// Element at `(row, col)`.
///
/// Panics if either index is out of `0..3`.
#[inline]
pub fn element(m: &DMat3, row: usize, col: usize) -> f64 {
    m.col(col)[row]
}

/// Row-major text form, one bracketed row per line.
pub fn format_rows(m: &DMat3) -> String {
    (0..3)
        .map(|row| {
            let cols: Vec<String> = (0..3).map(|col| format!("{:.4}", element(m, row, col))).collect();
            format!("[{}]", cols.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Linear map taking `u` to `a`, `v` to `b` and `u × v` to `a × b`.
///
/// Both pairs are assumed orthonormal; no orthonormalization happens here.
pub fn basis_rotation(u: DVec3, v: DVec3, a: DVec3, b: DVec3) -> DMat3 {
    let from = DMat3::from_cols(u, v, u.cross(v));
    let to = DMat3::from_cols(a, b, a.cross(b));
    // Orthonormal `from`, so its inverse is the transpose.
    to * from.transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn approx(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn test_element_row_major() {
        let m = DMat3::from_cols(
            DVec3::new(1.0, 4.0, 7.0),
            DVec3::new(2.0, 5.0, 8.0),
            DVec3::new(3.0, 6.0, 9.0),
        );
        assert_eq!(element(&m, 0, 0), 1.0);
        assert_eq!(element(&m, 0, 2), 3.0);
        assert_eq!(element(&m, 1, 0), 4.0);
        assert_eq!(element(&m, 2, 1), 8.0);
    }

    #[test]
    fn test_format_rows() {
        let m = DMat3::from_cols(DVec3::X, DVec3::new(2.0, 1.0, 0.0), DVec3::new(0.0, -0.5, 1.0));
        assert_eq!(
            format_rows(&m),
            "[1.0000, 2.0000, 0.0000]\n[0.0000, 1.0000, -0.5000]\n[0.0000, 0.0000, 1.0000]"
        );
    }

    #[test]
    fn test_basis_rotation_identity() {
        let m = basis_rotation(DVec3::Y, DVec3::Z, DVec3::Y, DVec3::Z);
        assert!(approx(m * DVec3::new(1.0, 2.0, 3.0), DVec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_basis_rotation_maps_pairs() {
        let a = DVec3::new(1.0, 1.0, 0.0).normalize();
        let b = DVec3::new(-1.0, 1.0, 0.0).normalize();
        let m = basis_rotation(DVec3::Y, DVec3::Z, a, b);

        assert!(approx(m * DVec3::Y, a));
        assert!(approx(m * DVec3::Z, b));
        assert!(approx(m * DVec3::X, a.cross(b)));
    }

    #[test]
    fn test_basis_rotation_preserves_length() {
        let a = DVec3::new(0.0, 0.6, 0.8);
        let b = DVec3::new(0.0, -0.8, 0.6);
        let m = basis_rotation(DVec3::Y, DVec3::Z, a, b);
        let v = DVec3::new(0.3, -2.0, 5.0);
        assert!(((m * v).length() - v.length()).abs() < EPS);
    }
}
