//! Map command - build an ST map for a pixel grid

use anyhow::{Context, Result};
use crt_geometry::{correction_map, map_stats};
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::info;

use crate::MapArgs;
use crate::commands::resolve_chain;

pub fn run(args: MapArgs, verbose: u8) -> Result<()> {
    let chain = resolve_chain(&args.geometry)?;

    if verbose > 0 {
        println!("Grid: {}x{}", args.width, args.height);
        println!("Chain: {:?}", chain);
    }

    let map = correction_map(args.width, args.height, |uv| chain.apply(uv))
        .context("Failed to build correction map")?;
    let stats = map_stats(&map, args.width, args.height)?;
    info!(width = args.width, height = args.height, "Map built");

    println!("max displacement:  {:.3} px", stats.max_displacement);
    println!("mean displacement: {:.3} px", stats.mean_displacement);
    if stats.non_finite > 0 {
        println!("non-finite samples: {}", stats.non_finite);
    }

    if let Some(path) = &args.output {
        let coords: Vec<[f32; 2]> = map.iter().map(|uv| uv.to_array()).collect();
        let doc = serde_json::json!({
            "width": args.width,
            "height": args.height,
            "map": coords,
        });
        let file = File::create(path)
            .with_context(|| format!("Failed to create: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &doc)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to write: {}", path.display()))?;

        if verbose > 0 {
            println!("Saved: {}", path.display());
        }
    }

    Ok(())
}
