//! Beam-deflection and screen-curvature distortion.
//!
//! Magnetic deflection of the electron beam pinches the raster inward
//! ([`pincushion`], [`pincushion_nl`]); a curved glass surface bows it
//! outward ([`barrel`]). The two families are approximate inverses of each
//! other near the center of the screen. Off-axis they diverge because each
//! axis is modulated by the cosine of the *other* axis.
//!
//! # Unit and Scaled Forms
//!
//! The unit forms apply the shape directly to the coordinate. The `_theta`
//! forms simulate a deflection half-angle `theta` in radians:
//!
//! ```text
//! T   = theta / (pi / 2)
//! out = shape(uv * T) / T
//! ```
//!
//! so `theta -> 0` tends to the identity and `theta -> pi/2` is the extreme
//! case. The singular point `T == 0` is never evaluated: for
//! `|T| < NEGLIGIBLE` the limit value (the input) is returned.
//!
//! # Domain
//!
//! Every shape divides by or takes the arctangent of cosines and becomes
//! unstable as `|x|` or `|y|` approaches `pi/2`. [`pincushion_nl`] is further
//! restricted to `|x|, |y| <= 1` by its `asin`; outside that range it returns
//! NaN. No stage clamps or validates its input.

use crt_core::{is_negligible, Coord, HALF_PI};

/// Normalized deflection factor, or `None` at the removable singularity.
#[inline]
fn deflection_scale(theta: f32) -> Option<f32> {
    let t = theta / HALF_PI;
    if is_negligible(t) { None } else { Some(t) }
}

/// Pincushion distortion from magnetic beam deflection.
///
/// # Formula
///
/// ```text
/// x' = atan(x * cos(y))
/// y' = atan(y * cos(x))
/// ```
///
/// Both axes are computed from the input coordinate.
///
/// # Example
///
/// ```rust
/// use crt_geometry::distortion::pincushion;
/// use crt_core::Coord;
///
/// let uv = pincushion(Coord::new(0.5, 0.0));
/// assert!((uv.x - 0.5f32.atan()).abs() < 1e-6);
/// assert_eq!(uv.y, 0.0);
/// ```
#[inline]
pub fn pincushion(uv: Coord) -> Coord {
    Coord::new((uv.x * uv.y.cos()).atan(), (uv.y * uv.x.cos()).atan())
}

/// Non-linear (magnetic) pincushion.
///
/// # Formula
///
/// ```text
/// x' = atan(asin(x) * cos(asin(y)))
/// y' = atan(asin(y) * cos(asin(x)))
/// ```
///
/// Only defined for `|x|, |y| <= 1`. Inputs outside that range are a
/// contract violation and produce NaN.
#[inline]
pub fn pincushion_nl(uv: Coord) -> Coord {
    let ax = uv.x.asin();
    let ay = uv.y.asin();
    Coord::new((ax * ay.cos()).atan(), (ay * ax.cos()).atan())
}

/// Barrel distortion from a curved screen surface.
///
/// # Formula
///
/// ```text
/// x' = tan(x) / cos(y)
/// y' = tan(y) / cos(x)
/// ```
///
/// Approximate inverse of [`pincushion`] near the center.
#[inline]
pub fn barrel(uv: Coord) -> Coord {
    Coord::new(uv.x.tan() / uv.y.cos(), uv.y.tan() / uv.x.cos())
}

/// [`pincushion`] for a deflection half-angle `theta` (radians).
#[inline]
pub fn pincushion_theta(uv: Coord, theta: f32) -> Coord {
    match deflection_scale(theta) {
        Some(t) => pincushion(uv * t) / t,
        None => uv,
    }
}

/// [`pincushion_nl`] for a deflection half-angle `theta` (radians).
///
/// The `asin` domain applies to `uv * theta / (pi/2)`, so the usable range
/// widens as `theta` shrinks.
#[inline]
pub fn pincushion_nl_theta(uv: Coord, theta: f32) -> Coord {
    match deflection_scale(theta) {
        Some(t) => pincushion_nl(uv * t) / t,
        None => uv,
    }
}

/// [`barrel`] for a curvature half-angle `theta` (radians).
///
/// Undoes [`pincushion_theta`] with the same `theta` near the center.
#[inline]
pub fn barrel_theta(uv: Coord, theta: f32) -> Coord {
    match deflection_scale(theta) {
        Some(t) => barrel(uv * t) / t,
        None => uv,
    }
}

/// Horizontal component of [`barrel_theta`].
#[inline]
pub fn barrel_x(uv: Coord, theta: f32) -> f32 {
    match deflection_scale(theta) {
        Some(t) => (uv.x * t).tan() / (uv.y * t).cos() / t,
        None => uv.x,
    }
}

/// Vertical component of [`barrel_theta`].
#[inline]
pub fn barrel_y(uv: Coord, theta: f32) -> f32 {
    match deflection_scale(theta) {
        Some(t) => (uv.y * t).tan() / (uv.x * t).cos() / t,
        None => uv.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_center_is_fixed() {
        assert_eq!(pincushion(Coord::ZERO), Coord::ZERO);
        assert_eq!(pincushion_nl(Coord::ZERO), Coord::ZERO);
        assert_eq!(barrel(Coord::ZERO), Coord::ZERO);
        assert_eq!(barrel_theta(Coord::ZERO, 1.0), Coord::ZERO);
    }

    #[test]
    fn test_pincushion_pulls_inward() {
        let uv = Coord::new(0.6, 0.6);
        let out = pincushion(uv);
        assert!(out.x < uv.x && out.y < uv.y);
    }

    #[test]
    fn test_barrel_pushes_outward() {
        let uv = Coord::new(0.6, 0.6);
        let out = barrel(uv);
        assert!(out.x > uv.x && out.y > uv.y);
    }

    #[test]
    fn test_pincushion_cross_term() {
        // Off-axis points are pinched harder than on-axis points
        let on_axis = pincushion(Coord::new(0.5, 0.0));
        let off_axis = pincushion(Coord::new(0.5, 0.5));
        assert!(off_axis.x < on_axis.x);
    }

    #[test]
    fn test_barrel_inverts_pincushion_near_center() {
        let uv = Coord::new(0.05, 0.03);
        let round = barrel(pincushion(uv));
        assert_abs_diff_eq!(round.x, uv.x, epsilon = 1e-3);
        assert_abs_diff_eq!(round.y, uv.y, epsilon = 1e-3);
    }

    #[test]
    fn test_barrel_theta_inverts_pincushion_theta_near_center() {
        let uv = Coord::new(0.1, -0.08);
        let theta = 0.8;
        let round = barrel_theta(pincushion_theta(uv, theta), theta);
        assert_abs_diff_eq!(round.x, uv.x, epsilon = 1e-3);
        assert_abs_diff_eq!(round.y, uv.y, epsilon = 1e-3);
    }

    #[test]
    fn test_theta_at_half_pi_matches_unit_form() {
        let uv = Coord::new(0.4, 0.3);
        let unit = pincushion(uv);
        let scaled = pincushion_theta(uv, HALF_PI);
        assert_abs_diff_eq!(unit.x, scaled.x, epsilon = 1e-6);
        assert_abs_diff_eq!(unit.y, scaled.y, epsilon = 1e-6);

        let unit = barrel(uv);
        let scaled = barrel_theta(uv, HALF_PI);
        assert_abs_diff_eq!(unit.x, scaled.x, epsilon = 1e-5);
        assert_abs_diff_eq!(unit.y, scaled.y, epsilon = 1e-5);
    }

    #[test]
    fn test_theta_zero_is_identity() {
        let uv = Coord::new(0.7, -0.2);
        assert_eq!(pincushion_theta(uv, 0.0), uv);
        assert_eq!(pincushion_nl_theta(uv, 0.0), uv);
        assert_eq!(barrel_theta(uv, 0.0), uv);
        assert_eq!(barrel_x(uv, 0.0), uv.x);
        assert_eq!(barrel_y(uv, 0.0), uv.y);
    }

    #[test]
    fn test_small_theta_approaches_identity() {
        let uv = Coord::new(0.7, -0.2);
        let out = pincushion_theta(uv, 0.01);
        assert_abs_diff_eq!(out.x, uv.x, epsilon = 1e-4);
        assert_abs_diff_eq!(out.y, uv.y, epsilon = 1e-4);
    }

    #[test]
    fn test_barrel_components_match_vector_form() {
        let uv = Coord::new(0.35, -0.45);
        let theta = 1.1;
        let full = barrel_theta(uv, theta);
        assert_abs_diff_eq!(barrel_x(uv, theta), full.x, epsilon = 1e-6);
        assert_abs_diff_eq!(barrel_y(uv, theta), full.y, epsilon = 1e-6);
    }

    #[test]
    fn test_pincushion_nl_symmetry() {
        let a = pincushion_nl(Coord::new(0.3, 0.6));
        let b = pincushion_nl(Coord::new(-0.3, -0.6));
        assert_abs_diff_eq!(a.x, -b.x, epsilon = 1e-6);
        assert_abs_diff_eq!(a.y, -b.y, epsilon = 1e-6);
    }

    #[test]
    fn test_pincushion_nl_outside_domain_is_nan() {
        // Known domain restriction: asin is undefined past |1|, not clamped
        let out = pincushion_nl(Coord::new(1.2, 0.0));
        assert!(out.x.is_nan());
        assert!(out.y.is_nan());
    }

    #[test]
    fn test_barrel_near_singularity_is_non_finite_or_huge() {
        let out = barrel(Coord::new(HALF_PI, 0.0));
        assert!(!out.x.is_finite() || out.x.abs() > 1e6);
    }
}
