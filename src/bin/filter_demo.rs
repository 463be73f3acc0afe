//! Demonstration binary for the caption-driven filter pipeline.
//!
//! The demo mirrors the serving flow end to end:
//! 1. Load the grayscale input (plus the optional second input).
//! 2. Resolve the caption to an operation.
//! 3. Apply the operation in place, timed.
//! 4. Save the processed grid and, optionally, a JSON run report.
//!
//! On failure the underlying error goes to stderr and the collaborator-style
//! retry message goes to stdout, mirroring what a chat user would see.

use pixelgrid::config::load_config;
use pixelgrid::grid::io::{load_grayscale, save_grayscale, write_json_file};
use pixelgrid::{apply, user_retry_message, OpKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        println!("{}", user_retry_message(&err));
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: filter_demo <config.json>".to_string()
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let kind = OpKind::from_caption(&config.op)
        .ok_or_else(|| format!("Unknown operation '{}'", config.op))?;

    let mut grid = load_grayscale(Path::new(&config.input))?;
    let second = match &config.second_input {
        Some(path) => Some(load_grayscale(Path::new(path))?),
        None => None,
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = apply(kind, &mut grid, second.as_ref(), &config.params, &mut rng)
        .map_err(|e| e.to_string())?;

    save_grayscale(&grid, Path::new(&config.output))?;
    println!(
        "{}: {}x{} -> {} ({:.3} ms)",
        report.op, report.width, report.height, config.output, report.elapsed_ms
    );

    if let Some(report_path) = &config.report {
        write_json_file(Path::new(report_path), &report)?;
        println!("Report written to {report_path}");
    }

    Ok(())
}
