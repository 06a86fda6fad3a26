//! Preset command - show or convert a preset file

use anyhow::{bail, Context, Result};
use crt_preset::Preset;

use crate::PresetArgs;
use crate::commands::load_preset;

pub fn run(args: PresetArgs, verbose: u8) -> Result<()> {
    let preset = load_preset(&args.input)?;

    // stdout carries the preset itself, so progress goes to stderr
    if verbose > 0 {
        eprintln!("Loaded: {} ({})", args.input.display(), preset.name);
    }

    if let Some(path) = &args.output {
        preset
            .to_file(path)
            .with_context(|| format!("Failed to save: {}", path.display()))?;
        if verbose > 0 {
            eprintln!("Saved: {}", path.display());
        }
        return Ok(());
    }

    print!("{}", render(&preset, &args.format)?);

    if preset.chain.is_identity() {
        eprintln!("note: preset is the identity chain");
    }
    Ok(())
}

/// Preset text in the requested format, newline-terminated.
fn render(preset: &Preset, format: &str) -> Result<String> {
    let mut text = match format.to_lowercase().as_str() {
        "kv" | "slangp" => preset.to_kv_string(),
        "json" => preset.to_json_string()?,
        "yaml" | "yml" => preset.to_yaml_string()?,
        _ => bail!("Unknown format: '{}'. Valid: kv, json, yaml", format),
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crt_preset::{ChainParams, CorrectionParams};
    use tempfile::tempdir;

    fn sample() -> Preset {
        Preset::new(
            "pvm",
            ChainParams {
                theta: 1.0,
                nonlinear: true,
                magnetic_strength: 0.5,
                correction: CorrectionParams::new(0.05, 0.0, 0.02, 0.0),
            },
        )
    }

    #[test]
    fn test_render_formats() {
        let preset = sample();
        let json = render(&preset, "JSON").unwrap();
        assert_eq!(Preset::from_json_str(&json).unwrap(), preset);

        let yaml = render(&preset, "yml").unwrap();
        assert_eq!(Preset::from_yaml_str(&yaml).unwrap(), preset);

        let kv = render(&preset, "kv").unwrap();
        assert!(kv.starts_with("# pvm"));
        assert_eq!(Preset::from_kv_str_strict(&kv).unwrap().chain, preset.chain);
    }

    #[test]
    fn test_render_unknown_format() {
        let err = render(&sample(), "toml").unwrap_err();
        assert!(err.to_string().contains("Unknown format"));
    }

    #[test]
    fn test_convert_kv_to_yaml() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pvm.slangp");
        let output = dir.path().join("pvm.yaml");
        sample().to_file(&input).unwrap();

        let args = PresetArgs {
            input,
            format: "kv".into(),
            output: Some(output.clone()),
        };
        run(args, 1).unwrap();

        let converted = Preset::from_file(&output).unwrap();
        assert_eq!(converted, sample());
    }

    #[test]
    fn test_missing_input() {
        let dir = tempdir().unwrap();
        let args = PresetArgs {
            input: dir.path().join("none.json"),
            format: "kv".into(),
            output: None,
        };
        assert!(run(args, 0).is_err());
    }
}
