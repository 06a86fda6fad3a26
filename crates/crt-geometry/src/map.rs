//! Batch evaluation over pixel grids.
//!
//! Builds ST maps: for every destination pixel, the source pixel coordinate
//! a renderer should sample. The transform itself runs in square space; this
//! module handles the conversion from pixel space and back.
//!
//! When the `parallel` feature is enabled, rows are processed with rayon.

use crt_core::{Coord, Error, Result};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Pixel-center position mapped to [-1, 1] across `size` pixels.
#[inline]
fn normalize_centered(coord: f32, size: u32) -> f32 {
    ((coord + 0.5) / size as f32).mul_add(2.0, -1.0)
}

/// Inverse of [`normalize_centered`].
#[inline]
fn denormalize_centered(value: f32, size: u32) -> f32 {
    (value + 1.0) * 0.5 * size as f32 - 0.5
}

#[inline]
fn aspect(width: u32, height: u32) -> f32 {
    if height == 0 { 1.0 } else { width as f32 / height as f32 }
}

/// Converts a pixel coordinate to square space.
///
/// Pixel `(px, py)` is sampled at its center. The vertical axis spans
/// [-1, 1] edge to edge; the horizontal axis spans [-aspect, aspect], so a
/// one-pixel step has the same length `2 / height` on both axes.
///
/// # Example
///
/// ```rust
/// use crt_geometry::map::to_square_space;
///
/// let uv = to_square_space(0.0, 479.0, 640, 480);
/// assert!((uv.x + 639.0 / 480.0).abs() < 1e-5);
/// assert!((uv.y - 479.0 / 480.0).abs() < 1e-5);
/// ```
#[inline]
pub fn to_square_space(px: f32, py: f32, width: u32, height: u32) -> Coord {
    Coord::new(
        normalize_centered(px, width) * aspect(width, height),
        normalize_centered(py, height),
    )
}

/// Converts a square-space coordinate back to pixel space.
#[inline]
pub fn from_square_space(uv: Coord, width: u32, height: u32) -> Coord {
    Coord::new(
        denormalize_centered(uv.x / aspect(width, height), width),
        denormalize_centered(uv.y, height),
    )
}

/// Applies `f` to every coordinate in place.
#[cfg(feature = "parallel")]
pub fn apply_in_place<F>(coords: &mut [Coord], f: F)
where
    F: Fn(Coord) -> Coord + Sync + Send,
{
    trace!(len = coords.len(), "apply_in_place");
    coords.par_iter_mut().for_each(|uv| *uv = f(*uv));
}

/// Applies `f` to every coordinate in place (single-threaded fallback).
#[cfg(not(feature = "parallel"))]
pub fn apply_in_place<F>(coords: &mut [Coord], f: F)
where
    F: Fn(Coord) -> Coord,
{
    trace!(len = coords.len(), "apply_in_place");
    for uv in coords.iter_mut() {
        *uv = f(*uv);
    }
}

fn checked_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(
            width,
            height,
            "width and height must be > 0",
        ));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "coordinate count overflows"))
}

/// Builds an ST map for a `width` x `height` grid.
///
/// Every pixel is converted to square space, passed through `f`, and
/// converted back. The result is row-major source coordinates in pixels.
/// Non-finite outputs are kept as-is.
///
/// # Example
///
/// ```rust
/// use crt_geometry::{map::correction_map, CorrectionParams};
///
/// let params = CorrectionParams::new(0.1, 0.0, 0.0, 0.0);
/// let st = correction_map(64, 48, |uv| params.apply(uv)).unwrap();
/// assert_eq!(st.len(), 64 * 48);
/// ```
pub fn correction_map<F>(width: u32, height: u32, f: F) -> Result<Vec<Coord>>
where
    F: Fn(Coord) -> Coord + Sync + Send,
{
    let len = checked_len(width, height)?;
    trace!(width, height, "correction_map");
    debug!(width, height, "Building correction map");

    let mut map = vec![Coord::ZERO; len];
    let fill_row = |y: usize, row: &mut [Coord]| {
        for (x, out) in row.iter_mut().enumerate() {
            let uv = to_square_space(x as f32, y as f32, width, height);
            *out = from_square_space(f(uv), width, height);
        }
    };

    #[cfg(feature = "parallel")]
    map.par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| fill_row(y, row));

    #[cfg(not(feature = "parallel"))]
    map.chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| fill_row(y, row));

    Ok(map)
}

/// Summary of an ST map.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapStats {
    /// Largest distance in pixels between a destination pixel and its
    /// source coordinate, over finite samples.
    pub max_displacement: f32,
    /// Mean displacement in pixels over finite samples.
    pub mean_displacement: f32,
    /// Number of samples with a NaN or infinite component.
    pub non_finite: usize,
}

/// Measures how far an ST map moves each pixel.
///
/// Returns [`Error::LengthMismatch`] if `map` does not hold exactly
/// `width * height` coordinates.
pub fn map_stats(map: &[Coord], width: u32, height: u32) -> Result<MapStats> {
    let len = checked_len(width, height)?;
    if map.len() != len {
        return Err(Error::length_mismatch(len, map.len()));
    }

    let mut stats = MapStats::default();
    let mut sum = 0.0f64;
    let mut finite = 0usize;
    for (i, src) in map.iter().enumerate() {
        if !src.is_finite() {
            stats.non_finite += 1;
            continue;
        }
        let dst = Coord::new((i % width as usize) as f32, (i / width as usize) as f32);
        let d = src.distance(dst);
        stats.max_displacement = stats.max_displacement.max(d);
        sum += d as f64;
        finite += 1;
    }
    if finite > 0 {
        stats.mean_displacement = (sum / finite as f64) as f32;
    }
    debug!(
        max = stats.max_displacement,
        mean = stats.mean_displacement,
        non_finite = stats.non_finite,
        "Map stats"
    );
    Ok(stats)
}
