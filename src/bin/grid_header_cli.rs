//! CLI tool for sheetgrid - lays out a column header spec and outputs JSON
//!
//! Usage:
//!   grid_header_cli <spec.json>                       # Output report to stdout
//!   grid_header_cli <spec.json> -o out.json           # Output report to file
//!   grid_header_cli <spec.json> --scroll 500          # Scroll before laying out
//!
//! Set `RUST_LOG=sheetgrid=debug` to trace layout decisions.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use sheetgrid::header::{ColHeader, HeaderSpec};
use sheetgrid::render::SceneGraph;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: grid_header_cli <spec.json> [-o output.json] [--scroll X]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let mut output_path = None;
    let mut scroll_x = None;
    let mut rest = args.iter().skip(2);
    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "-o" => output_path = rest.next(),
            "--scroll" => {
                scroll_x = rest.next().and_then(|v| v.parse::<f32>().ok());
                if scroll_x.is_none() {
                    eprintln!("--scroll expects a number");
                    std::process::exit(1);
                }
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    // Read input file
    let json = match fs::read_to_string(input_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    // Parse header description
    let spec = match HeaderSpec::from_json(&json) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Error parsing header spec: {}", e);
            std::process::exit(1);
        }
    };

    let mut header = ColHeader::new(spec);
    if let Some(x) = scroll_x {
        let y = header.config().scroll_y;
        header.set_scroll(x, y);
    }
    let report = header.layout_report(&mut SceneGraph::new());

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&report) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!(
                "Written: {} ({} cells, {} resize zones)",
                path,
                report.cells.len(),
                report.zones.len()
            );
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
