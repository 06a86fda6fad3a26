//! Full CRT signal chain.
//!
//! [`geometric_correction`](crate::geometric_correction) only models the
//! correction half of the display. [`ChainParams`] strings the whole beam
//! path together for pipelines that simulate distortion before correcting
//! it:
//!
//! ```text
//! uv -> deflection (pincushion / pincushion_nl)
//!    -> magnetic_correction
//!    -> geometric_correction
//! ```
//!
//! The default parameters describe an ideal flat display: every stage is
//! skipped and [`ChainParams::apply`] returns its input.

use crt_core::{is_negligible, Coord};

use crate::distortion::{pincushion_nl_theta, pincushion_theta};
use crate::magnetic::magnetic_correction;
use crate::pipeline::{CorrectionParams, Stage};

/// Parameters for the complete distortion and correction chain.
///
/// # Example
///
/// ```rust
/// use crt_geometry::{ChainParams, CorrectionParams};
/// use crt_core::Coord;
///
/// let chain = ChainParams {
///     theta: 1.0,
///     magnetic_strength: 0.5,
///     correction: CorrectionParams::new(0.05, 0.0, 0.0, 0.0),
///     ..Default::default()
/// };
/// let out = chain.apply(Coord::new(0.5, 0.5));
/// assert!(out.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ChainParams {
    /// Deflection half-angle in radians. Negligible values disable
    /// deflection distortion and magnetic correction.
    pub theta: f32,
    /// Use the non-linear (`asin`) deflection model.
    pub nonlinear: bool,
    /// Magnetic correction strength, typically 0.3 to 0.7.
    pub magnetic_strength: f32,
    /// Electronic correction strengths.
    pub correction: CorrectionParams,
}

impl ChainParams {
    /// The identity chain.
    pub const IDENTITY: Self = Self {
        theta: 0.0,
        nonlinear: false,
        magnetic_strength: 0.0,
        correction: CorrectionParams::IDENTITY,
    };

    /// Chain with correction only, no simulated distortion.
    #[inline]
    pub const fn correction_only(correction: CorrectionParams) -> Self {
        Self {
            correction,
            ..Self::IDENTITY
        }
    }

    /// Returns `true` when every stage would be skipped.
    #[inline]
    pub fn is_identity(&self) -> bool {
        is_negligible(self.theta) && self.correction.is_identity()
    }

    /// Runs `uv` through deflection, magnetic correction and the
    /// electronic correction pipeline.
    #[inline]
    pub fn apply(&self, uv: Coord) -> Coord {
        self.apply_observed(uv, |_, _| {})
    }

    /// Like [`apply`](Self::apply), reporting the coordinate after each
    /// stage that runs.
    ///
    /// Magnetic correction is reported whenever deflection is, even if its
    /// own guard leaves the coordinate unchanged.
    pub fn apply_observed<F>(&self, uv: Coord, mut on_stage: F) -> Coord
    where
        F: FnMut(Stage, Coord),
    {
        let mut uv = uv;
        if !is_negligible(self.theta) {
            uv = if self.nonlinear {
                pincushion_nl_theta(uv, self.theta)
            } else {
                pincushion_theta(uv, self.theta)
            };
            on_stage(Stage::Deflection, uv);
            uv = magnetic_correction(uv, self.magnetic_strength, self.theta);
            on_stage(Stage::Magnetic, uv);
        }
        self.correction.apply_observed(uv, on_stage)
    }

    /// Every stage that runs for `uv`, with the coordinate after it.
    pub fn stages(&self, uv: Coord) -> Vec<(Stage, Coord)> {
        let mut out = Vec::new();
        self.apply_observed(uv, |stage, uv| out.push((stage, uv)));
        out
    }
}
