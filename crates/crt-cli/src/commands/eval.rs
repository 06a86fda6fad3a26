//! Eval command - transform a single coordinate

use anyhow::Result;
use crt_core::Coord;
use crt_geometry::ChainParams;
use std::fmt::Write;
use tracing::info;

use crate::EvalArgs;
use crate::commands::resolve_chain;

pub fn run(args: EvalArgs, verbose: u8) -> Result<()> {
    let chain = resolve_chain(&args.geometry)?;
    let input = Coord::new(args.x, args.y);
    info!(x = input.x, y = input.y, "Evaluating chain");

    print!("{}", report(&args, &chain, verbose)?);

    if !chain.apply(input).is_finite() {
        eprintln!("warning: result is not finite (input outside the stable domain)");
    }
    Ok(())
}

/// Everything `eval` writes to stdout.
///
/// JSON output is a single document; verbose chain details only appear in
/// text mode.
fn report(args: &EvalArgs, chain: &ChainParams, verbose: u8) -> Result<String> {
    let input = Coord::new(args.x, args.y);
    let output = chain.apply(input);

    if args.json {
        let stages: Vec<serde_json::Value> = if args.stages {
            chain
                .stages(input)
                .into_iter()
                .map(|(stage, uv)| {
                    serde_json::json!({ "stage": stage.name(), "uv": [uv.x, uv.y] })
                })
                .collect()
        } else {
            Vec::new()
        };
        let doc = serde_json::json!({
            "input": [input.x, input.y],
            "output": [output.x, output.y],
            "stages": stages,
        });
        return Ok(serde_json::to_string_pretty(&doc)? + "\n");
    }

    let mut out = String::new();
    if verbose > 0 {
        writeln!(out, "Chain: {:?}", chain)?;
    }
    if args.stages {
        writeln!(out, "{:<12} {:>12.6} {:>12.6}", "input", input.x, input.y)?;
        for (stage, uv) in chain.stages(input) {
            writeln!(out, "{:<12} {:>12.6} {:>12.6}", stage.name(), uv.x, uv.y)?;
        }
    } else {
        writeln!(out, "{:.6} {:.6}", output.x, output.y)?;
    }
    Ok(out)
}
