//! Electronic geometry correction.
//!
//! The monitor's correction circuits modulate the deflection signal with
//! low-order polynomials of the beam position. Each primitive here is one
//! such circuit:
//!
//! | Function | Effect | Order |
//! |----------|--------|-------|
//! | [`trapezoid`] | Width of top/bottom edges | 2 |
//! | [`s_correction`] | Axis-coupled parabolic linearity | 2 |
//! | [`corner_correction`] | Corners only | 4 |
//!
//! Strength sign selects expansion (positive) or compression (negative).

use crt_core::Coord;

/// Trapezoid (keystone) correction.
///
/// # Formula
///
/// ```text
/// x' = x * (1 + strength * y^2)
/// y' = y
/// ```
///
/// # Example
///
/// ```rust
/// use crt_geometry::correction::trapezoid;
/// use crt_core::Coord;
///
/// // No effect on the horizontal center line
/// let uv = Coord::new(0.8, 0.0);
/// assert_eq!(trapezoid(uv, 0.3), uv);
/// ```
#[inline]
pub fn trapezoid(uv: Coord, strength: f32) -> Coord {
    Coord::new(uv.x * (1.0 + strength * uv.y * uv.y), uv.y)
}

/// S-correction with horizontal and vertical strengths.
///
/// # Formula
///
/// ```text
/// x' = x * (1 + h * y^2)
/// y' = y * (1 + v * x'^2)
/// ```
///
/// The vertical term uses the already-corrected `x'`, coupling the two axes
/// the way the analog feedback path does.
///
/// # Example
///
/// ```rust
/// use crt_geometry::correction::s_correction;
/// use crt_core::Coord;
///
/// let uv = s_correction(Coord::new(1.0, 1.0), 0.1, 0.2);
/// assert!((uv.x - 1.1).abs() < 1e-6);
/// assert!((uv.y - 1.242).abs() < 1e-6);
/// ```
#[inline]
pub fn s_correction(uv: Coord, h_strength: f32, v_strength: f32) -> Coord {
    let x = uv.x * (1.0 + h_strength * uv.y * uv.y);
    let y = uv.y * (1.0 + v_strength * x * x);
    Coord::new(x, y)
}

/// Corner correction.
///
/// # Formula
///
/// ```text
/// f  = x^2 * y^2
/// x' = x * (1 + strength * f)
/// y' = y * (1 + strength * f)
/// ```
///
/// `f` is taken from the input coordinate and vanishes on both axes.
#[inline]
pub fn corner_correction(uv: Coord, strength: f32) -> Coord {
    let x2 = uv.x * uv.x;
    let y2 = uv.y * uv.y;
    let corner_factor = x2 * y2;
    uv * (1.0 + strength * corner_factor)
}
