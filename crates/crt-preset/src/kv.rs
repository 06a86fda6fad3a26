//! Shader-preset `key = value` parameter format.
//!
//! ```text
//! # Consumer TV, mild correction
//! crt_theta = "1.1"
//! crt_magnetic = "0.5"
//! crt_trapezoid = 0.05
//! ```
//!
//! Blank lines and `#` comments are ignored, values may be quoted. Keys
//! that are not geometry parameters (shader passes, scale options, other
//! effects' parameters) are skipped in lenient mode so a whole preset file
//! can be read as-is.

use crt_geometry::ChainParams;
use tracing::debug;

use crate::error::{PresetError, PresetResult};

/// Deflection half-angle in radians.
pub const KEY_THETA: &str = "crt_theta";
/// Non-zero selects the non-linear deflection model.
pub const KEY_NONLINEAR: &str = "crt_nonlinear";
/// Magnetic correction strength.
pub const KEY_MAGNETIC: &str = "crt_magnetic";
/// Trapezoid strength.
pub const KEY_TRAPEZOID: &str = "crt_trapezoid";
/// Corner correction strength.
pub const KEY_CORNER: &str = "crt_corner";
/// Horizontal S-correction strength.
pub const KEY_S_H: &str = "crt_s_h";
/// Vertical S-correction strength.
pub const KEY_S_V: &str = "crt_s_v";

/// All recognized keys, in output order.
pub const KEYS: [&str; 7] = [
    KEY_THETA,
    KEY_NONLINEAR,
    KEY_MAGNETIC,
    KEY_TRAPEZOID,
    KEY_CORNER,
    KEY_S_H,
    KEY_S_V,
];

fn parse_f32(key: &str, value: &str) -> PresetResult<f32> {
    value
        .parse::<f32>()
        .map_err(|_| PresetError::invalid_value(key, value))
}

fn parse_flag(key: &str, value: &str) -> PresetResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        _ => parse_f32(key, value).map(|v| v != 0.0),
    }
}

fn unquote(value: &str) -> &str {
    let value = value.trim();
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
        .trim()
}

/// Sets one parameter. Returns `false` if `key` is not a geometry key.
fn assign(chain: &mut ChainParams, key: &str, value: &str) -> PresetResult<bool> {
    match key {
        KEY_THETA => chain.theta = parse_f32(key, value)?,
        KEY_NONLINEAR => chain.nonlinear = parse_flag(key, value)?,
        KEY_MAGNETIC => chain.magnetic_strength = parse_f32(key, value)?,
        KEY_TRAPEZOID => chain.correction.trapezoid = parse_f32(key, value)?,
        KEY_CORNER => chain.correction.corner = parse_f32(key, value)?,
        KEY_S_H => chain.correction.s_h = parse_f32(key, value)?,
        KEY_S_V => chain.correction.s_v = parse_f32(key, value)?,
        _ => return Ok(false),
    }
    Ok(true)
}

/// Parses a key/value preset into chain parameters.
///
/// Missing keys keep their identity defaults. With `strict`, any key that
/// is not a geometry parameter is an error.
pub fn parse(text: &str, strict: bool) -> PresetResult<ChainParams> {
    let mut chain = ChainParams::default();
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let (key, value) = line.split_once('=').ok_or_else(|| {
            PresetError::parse(line_no, format!("expected 'key = value', got '{line}'"))
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(PresetError::parse(line_no, "empty key"));
        }
        let value = unquote(value);

        if !assign(&mut chain, key, value)? {
            if strict {
                return Err(PresetError::UnknownKey {
                    key: key.to_string(),
                    line: line_no,
                });
            }
            debug!(key, line = line_no, "Skipping non-geometry parameter");
        }
    }
    Ok(chain)
}

/// Writes chain parameters as quoted key/value lines.
pub fn write(chain: &ChainParams) -> String {
    let nonlinear = if chain.nonlinear { 1.0f32 } else { 0.0 };
    let values = [
        chain.theta,
        nonlinear,
        chain.magnetic_strength,
        chain.correction.trapezoid,
        chain.correction.corner,
        chain.correction.s_h,
        chain.correction.s_v,
    ];
    KEYS.iter()
        .zip(values)
        .map(|(key, value)| format!("{key} = \"{value:?}\"\n"))
        .collect()
}
