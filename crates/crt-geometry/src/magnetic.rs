//! Magnetic correction.
//!
//! Correction magnets on the yoke push the raster back out against the
//! deflection pincushion. Coil strength is limited in real hardware, so the
//! correction is partial: `strength` scales the deflection angle that the
//! barrel-shaped counter-distortion is computed for. Typical physical values
//! are 0.3 to 0.7.

use crt_core::{Coord, NEGLIGIBLE};

use crate::distortion::barrel;

/// Applies partial magnetic correction for deflection angle `theta`.
///
/// # Formula
///
/// ```text
/// e = theta * strength
/// if e < NEGLIGIBLE: uv
/// else:              barrel(uv * e) / e
/// ```
///
/// The guard compares the signed product: a negative effective angle is
/// also treated as "no correction".
///
/// # Example
///
/// ```rust
/// use crt_geometry::magnetic::magnetic_correction;
/// use crt_core::Coord;
///
/// let uv = Coord::new(0.5, 0.5);
/// assert_eq!(magnetic_correction(uv, 0.0, 1.2), uv);
///
/// let corrected = magnetic_correction(uv, 0.5, 1.2);
/// assert!(corrected.x > uv.x);
/// ```
#[inline]
pub fn magnetic_correction(uv: Coord, strength: f32, theta: f32) -> Coord {
    let effective_theta = theta * strength;
    if effective_theta < NEGLIGIBLE {
        return uv;
    }
    barrel(uv * effective_theta) / effective_theta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distortion::pincushion_theta;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_guard_returns_input() {
        let uv = Coord::new(0.3, -0.7);
        assert_eq!(magnetic_correction(uv, 0.0, 1.0), uv);
        assert_eq!(magnetic_correction(uv, 0.5, 0.0019), uv);
        assert_eq!(magnetic_correction(uv, -0.5, 1.0), uv);
    }

    #[test]
    fn test_guard_boundary() {
        let uv = Coord::new(0.3, -0.7);
        // 0.002 * 0.5 = 0.001, which is not below the threshold
        let out = magnetic_correction(uv, 0.5, 0.002);
        assert_abs_diff_eq!(out.x, uv.x, epsilon = 1e-5);
        assert_abs_diff_eq!(out.y, uv.y, epsilon = 1e-5);
    }

    #[test]
    fn test_matches_barrel_shape() {
        let uv = Coord::new(0.4, 0.2);
        let e = 0.6;
        let out = magnetic_correction(uv, 0.5, 1.2);
        let expected_x = (uv.x * e).tan() / (uv.y * e).cos() / e;
        let expected_y = (uv.y * e).tan() / (uv.x * e).cos() / e;
        assert_abs_diff_eq!(out.x, expected_x, epsilon = 1e-6);
        assert_abs_diff_eq!(out.y, expected_y, epsilon = 1e-6);
    }

    #[test]
    fn test_partial_correction_is_monotonic() {
        let theta = 1.0;
        let distorted = pincushion_theta(Coord::new(0.8, 0.6), theta);
        let weak = magnetic_correction(distorted, 0.3, theta);
        let strong = magnetic_correction(distorted, 0.7, theta);
        assert!(distorted.x < weak.x);
        assert!(weak.x < strong.x);
    }
}
