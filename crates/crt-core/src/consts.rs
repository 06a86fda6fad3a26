//! Process-wide constants shared by every geometry stage.
//!
//! There is exactly one definition of each constant; stages never
//! re-derive their own thresholds.

/// Archimedes' constant.
pub const PI: f32 = std::f32::consts::PI;

/// Quarter turn. Deflection angles are normalized against this value.
pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;

/// Strength or angle below which a stage is a numerical no-op.
///
/// Every gated stage compares against this value: correction strengths by
/// magnitude, deflection angles to avoid the `1 / theta` singularity.
pub const NEGLIGIBLE: f32 = 0.001;

/// Returns `true` when `|value| < NEGLIGIBLE`.
///
/// # Example
///
/// ```rust
/// use crt_core::is_negligible;
///
/// assert!(is_negligible(0.0));
/// assert!(is_negligible(-0.0009));
/// assert!(!is_negligible(0.001));
/// ```
#[inline]
pub fn is_negligible(value: f32) -> bool {
    value.abs() < NEGLIGIBLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!is_negligible(NEGLIGIBLE));
        assert!(!is_negligible(-NEGLIGIBLE));
        assert!(is_negligible(NEGLIGIBLE * 0.5));
    }

    #[test]
    fn test_nan_is_not_negligible() {
        // NaN strengths must reach the stage and propagate
        assert!(!is_negligible(f32::NAN));
    }

    #[test]
    fn test_half_pi() {
        assert_eq!(HALF_PI * 2.0, PI);
    }
}
