//! # crt-core
//!
//! Core types for CRT geometry emulation.
//!
//! This crate provides the foundational pieces shared by the rest of CRT-RS:
//!
//! - [`Coord`] - 2D coordinate in normalized square space
//! - [`consts`] - Process-wide constants table (`PI`, `HALF_PI`, `NEGLIGIBLE`)
//! - [`Error`], [`Result`] - Error type for the non-transform surfaces
//!
//! ## Square Space
//!
//! All geometry transforms operate on coordinates whose aspect ratio has
//! already been compensated to 1:1, centered on the screen. The nominal
//! range is `|x|, |y| <= 1`, but nothing clamps coordinates:
//!
//! ```rust
//! use crt_core::Coord;
//!
//! let center = Coord::ZERO;
//! let corner = Coord::new(1.0, 1.0);
//! assert_eq!(corner - center, Coord::ONE);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! crt-core (this crate)
//!    ^
//!    |
//!    +-- crt-geometry (distortion, correction, pipeline)
//!    +-- crt-preset (parameter set loading)
//!    +-- crt-cli (command line front end)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`Coord`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod consts;
pub mod error;

pub use consts::{is_negligible, HALF_PI, NEGLIGIBLE, PI};
pub use error::*;

/// A coordinate in normalized square space.
///
/// Plain [`glam::Vec2`]: immutable by convention, `Copy`, no identity
/// beyond its value.
pub type Coord = glam::Vec2;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use crt_core::prelude::*;
///
/// let uv = Coord::new(0.25, -0.5);
/// assert!(is_negligible(0.0005));
/// ```
pub mod prelude {
    pub use crate::consts::{is_negligible, HALF_PI, NEGLIGIBLE, PI};
    pub use crate::error::{Error, Result};
    pub use crate::Coord;
}
