//! # crt-geometry
//!
//! Per-pixel coordinate transforms that emulate CRT display geometry.
//!
//! A CRT bends its raster twice: the deflection yoke pinches it inward and
//! the curved glass bows it back out. Monitors fight this with correction
//! magnets and analog correction circuits. This crate models every one of
//! those stages as a pure function from one square-space coordinate to
//! another.
//!
//! # Modules
//!
//! - [`distortion`] - Pincushion and barrel distortion
//! - [`magnetic`] - Partial magnetic correction
//! - [`correction`] - Trapezoid, S-correction and corner correction circuits
//! - [`pipeline`] - Fixed-order correction pipeline
//! - [`chain`] - Full distortion and correction chain
//! - [`map`] - ST map generation over pixel grids
//!
//! # Example
//!
//! ```rust
//! use crt_geometry::{geometric_correction, CorrectionParams};
//! use crt_core::Coord;
//!
//! let uv = Coord::new(0.5, 0.5);
//! let corrected = geometric_correction(uv, 0.1, 0.05, 0.1, 0.1);
//!
//! let params = CorrectionParams::new(0.1, 0.05, 0.1, 0.1);
//! assert_eq!(params.apply(uv), corrected);
//! ```
//!
//! # Numerics
//!
//! No stage validates its input. Coordinates that drive a cosine toward
//! zero, or push `pincushion_nl` outside `[-1, 1]`, yield NaN or infinity,
//! which then propagates through later stages unchanged.
//!
//! # Feature Flags
//!
//! - `parallel` - Row-parallel map evaluation with rayon (enabled by default)
//! - `serde` - Serialization for [`CorrectionParams`] and [`ChainParams`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chain;
pub mod correction;
pub mod distortion;
pub mod magnetic;
pub mod map;
pub mod pipeline;

pub use chain::ChainParams;
pub use correction::{corner_correction, s_correction, trapezoid};
pub use distortion::{
    barrel, barrel_theta, barrel_x, barrel_y, pincushion, pincushion_nl, pincushion_nl_theta,
    pincushion_theta,
};
pub use magnetic::magnetic_correction;
pub use map::{correction_map, map_stats, MapStats};
pub use pipeline::{geometric_correction, CorrectionParams, Stage};
