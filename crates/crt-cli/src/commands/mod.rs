//! CLI command implementations

pub mod eval;
pub mod map;
pub mod preset;

use anyhow::{Context, Result};
use crt_geometry::ChainParams;
use crt_preset::Preset;
use std::path::Path;
use tracing::debug;

use crate::GeometryArgs;

/// Load preset from path
pub fn load_preset(path: &Path) -> Result<Preset> {
    Preset::from_file(path).with_context(|| format!("Failed to load preset: {}", path.display()))
}

/// Build chain parameters from an optional preset plus flag overrides
pub fn resolve_chain(args: &GeometryArgs) -> Result<ChainParams> {
    let mut chain = match &args.preset {
        Some(path) => load_preset(path)?.chain,
        None => ChainParams::default(),
    };

    if let Some(theta) = args.theta {
        chain.theta = theta;
    }
    if args.nonlinear {
        chain.nonlinear = true;
    } else if args.linear {
        chain.nonlinear = false;
    }
    if let Some(m) = args.magnetic {
        chain.magnetic_strength = m;
    }
    if let Some(t) = args.trapezoid {
        chain.correction.trapezoid = t;
    }
    if let Some(c) = args.corner {
        chain.correction.corner = c;
    }
    if let Some(h) = args.s_h {
        chain.correction.s_h = h;
    }
    if let Some(v) = args.s_v {
        chain.correction.s_v = v;
    }

    debug!(?chain, "Resolved chain parameters");
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_flags_override_preset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tv.slangp");
        std::fs::write(
            &path,
            "crt_theta = 1.2\ncrt_nonlinear = 1\ncrt_trapezoid = 0.1\ncrt_s_h = 0.05\n",
        )
        .unwrap();

        let args = GeometryArgs {
            preset: Some(path),
            linear: true,
            trapezoid: Some(-0.2),
            corner: Some(0.03),
            ..Default::default()
        };
        let chain = resolve_chain(&args).unwrap();
        assert!(!chain.nonlinear);
        assert_eq!(chain.correction.trapezoid, -0.2);
        assert_eq!(chain.correction.corner, 0.03);
        // Untouched preset values survive
        assert_eq!(chain.theta, 1.2);
        assert_eq!(chain.correction.s_h, 0.05);
    }

    #[test]
    fn test_preset_nonlinear_kept_without_flag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tv.json");
        std::fs::write(&path, r#"{"chain": {"theta": 1.0, "nonlinear": true}}"#).unwrap();

        let args = GeometryArgs {
            preset: Some(path),
            ..Default::default()
        };
        assert!(resolve_chain(&args).unwrap().nonlinear);
    }

    #[test]
    fn test_flags_without_preset() {
        let args = GeometryArgs {
            theta: Some(0.9),
            nonlinear: true,
            magnetic: Some(0.4),
            s_v: Some(-0.1),
            ..Default::default()
        };
        let chain = resolve_chain(&args).unwrap();
        assert_eq!(chain.theta, 0.9);
        assert!(chain.nonlinear);
        assert_eq!(chain.magnetic_strength, 0.4);
        assert_eq!(chain.correction.s_v, -0.1);
    }

    #[test]
    fn test_missing_preset_has_context() {
        let args = GeometryArgs {
            preset: Some("/nonexistent/tv.slangp".into()),
            ..Default::default()
        };
        let err = resolve_chain(&args).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load preset"));
    }
}
