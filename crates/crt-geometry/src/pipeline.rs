//! Correction pipeline.
//!
//! Composes the electronic correction primitives in the order of a real
//! CRT's correction signal chain:
//!
//! ```text
//! uv -> trapezoid -> s_correction -> corner_correction -> uv'
//! ```
//!
//! Coarsest first, most localized last. Each stage reads the previous
//! stage's output, so the order changes the result and is part of the
//! contract.
//!
//! Every stage is gated by [`NEGLIGIBLE`](crt_core::NEGLIGIBLE): a stage
//! whose strength is below the threshold is skipped even when its siblings
//! are active, and the whole pipeline returns its input untouched when all
//! four strengths are negligible.

use crt_core::{is_negligible, Coord};

use crate::correction::{corner_correction, s_correction, trapezoid};

/// Full geometric correction.
///
/// # Arguments
/// * `uv` - Coordinate in square space
/// * `trap_strength` - [`trapezoid`] strength
/// * `corner_strength` - [`corner_correction`] strength
/// * `s_h_strength` - Horizontal [`s_correction`] strength
/// * `s_v_strength` - Vertical [`s_correction`] strength
///
/// # Example
///
/// ```rust
/// use crt_geometry::geometric_correction;
/// use crt_core::Coord;
///
/// let uv = Coord::new(0.5, 0.5);
/// assert_eq!(geometric_correction(uv, 0.0, 0.0, 0.0, 0.0), uv);
///
/// let out = geometric_correction(uv, 0.1, 0.05, 0.1, 0.1);
/// assert!((out.x - 0.5272).abs() < 1e-4);
/// assert!((out.y - 0.5157).abs() < 1e-4);
/// ```
#[inline]
pub fn geometric_correction(
    uv: Coord,
    trap_strength: f32,
    corner_strength: f32,
    s_h_strength: f32,
    s_v_strength: f32,
) -> Coord {
    correct_observed(uv, trap_strength, corner_strength, s_h_strength, s_v_strength, |_, _| {})
}

/// Gated pipeline body. `on_stage` sees the coordinate after every stage
/// that actually ran.
#[inline]
fn correct_observed<F>(
    uv: Coord,
    trap_strength: f32,
    corner_strength: f32,
    s_h_strength: f32,
    s_v_strength: f32,
    mut on_stage: F,
) -> Coord
where
    F: FnMut(Stage, Coord),
{
    let apply_trap = !is_negligible(trap_strength);
    let apply_corner = !is_negligible(corner_strength);
    let apply_s = !is_negligible(s_h_strength) || !is_negligible(s_v_strength);

    if !(apply_trap || apply_corner || apply_s) {
        return uv;
    }

    let mut uv = uv;
    if apply_trap {
        uv = trapezoid(uv, trap_strength);
        on_stage(Stage::Trapezoid, uv);
    }
    if apply_s {
        uv = s_correction(uv, s_h_strength, s_v_strength);
        on_stage(Stage::SCorrection, uv);
    }
    if apply_corner {
        uv = corner_correction(uv, corner_strength);
        on_stage(Stage::Corner, uv);
    }
    uv
}

/// One stage of the CRT signal chain, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Deflection pincushion.
    Deflection,
    /// Magnetic correction.
    Magnetic,
    /// Trapezoid correction.
    Trapezoid,
    /// S-correction.
    SCorrection,
    /// Corner correction.
    Corner,
}

impl Stage {
    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deflection => "deflection",
            Self::Magnetic => "magnetic",
            Self::Trapezoid => "trapezoid",
            Self::SCorrection => "s_correction",
            Self::Corner => "corner",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Strengths for the four correction circuits.
///
/// The default is all zeros, which is the identity.
///
/// # Example
///
/// ```rust
/// use crt_geometry::CorrectionParams;
/// use crt_core::Coord;
///
/// let params = CorrectionParams { trapezoid: 0.1, ..Default::default() };
/// assert!(!params.is_identity());
/// let out = params.apply(Coord::new(0.5, 0.5));
/// assert!(out.x > 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CorrectionParams {
    /// Trapezoid strength.
    pub trapezoid: f32,
    /// Corner correction strength.
    pub corner: f32,
    /// Horizontal S-correction strength.
    pub s_h: f32,
    /// Vertical S-correction strength.
    pub s_v: f32,
}

impl CorrectionParams {
    /// All strengths zero.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a parameter set in pipeline argument order.
    #[inline]
    pub const fn new(trapezoid: f32, corner: f32, s_h: f32, s_v: f32) -> Self {
        Self {
            trapezoid,
            corner,
            s_h,
            s_v,
        }
    }

    /// Returns `true` when every strength is negligible.
    #[inline]
    pub fn is_identity(&self) -> bool {
        is_negligible(self.trapezoid)
            && is_negligible(self.corner)
            && is_negligible(self.s_h)
            && is_negligible(self.s_v)
    }

    /// Applies [`geometric_correction`] with these strengths.
    #[inline]
    pub fn apply(&self, uv: Coord) -> Coord {
        geometric_correction(uv, self.trapezoid, self.corner, self.s_h, self.s_v)
    }

    /// Like [`apply`](Self::apply), reporting each stage that runs.
    #[inline]
    pub fn apply_observed<F>(&self, uv: Coord, on_stage: F) -> Coord
    where
        F: FnMut(Stage, Coord),
    {
        correct_observed(uv, self.trapezoid, self.corner, self.s_h, self.s_v, on_stage)
    }
}
