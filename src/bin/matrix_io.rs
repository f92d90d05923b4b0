//! Import businesses from JSON, optionally reposition them, export normalized JSON
//!
//! Usage: matrix_io businesses.json [--place 1:ltv-cac:72:40] [--reset 2] [--output out.json]

use anyhow::{Context, Result};
use clap::Parser;
use saas_simulator::matrix::{matrices_in_group, BusinessBoard, MatrixGroup};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Normalize and edit strategy-matrix business data")]
struct Args {
    /// JSON file holding one business or an array of businesses
    input: PathBuf,

    /// Move a business on a matrix: ID:MATRIX:X:Y with X, Y in 0-100 (repeatable)
    #[arg(long, value_parser = parse_placement)]
    place: Vec<Placement>,

    /// Restore a business's scores to its last analysis (repeatable)
    #[arg(long)]
    reset: Vec<u64>,

    /// Write the result here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
struct Placement {
    id: u64,
    matrix: String,
    x: f64,
    y: f64,
}

fn parse_placement(raw: &str) -> Result<Placement, String> {
    let parts: Vec<&str> = raw.split(':').collect();
    let [id, matrix, x, y] = parts.as_slice() else {
        return Err(format!("expected ID:MATRIX:X:Y, got '{}'", raw));
    };
    Ok(Placement {
        id: id.trim().parse().map_err(|e| format!("bad business id '{}': {}", id, e))?,
        matrix: matrix.trim().to_string(),
        x: x.trim().parse().map_err(|e| format!("bad x '{}': {}", x, e))?,
        y: y.trim().parse().map_err(|e| format!("bad y '{}': {}", y, e))?,
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let json = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let mut board = BusinessBoard::new();
    let count = board.import_json(&json)?;
    eprintln!("Imported {} business(es)", count);

    for p in &args.place {
        board.place(p.id, &p.matrix, p.x, p.y)?;
    }
    for &id in &args.reset {
        board.reset(id)?;
    }

    for group in [MatrixGroup::Financials, MatrixGroup::Market, MatrixGroup::Product, MatrixGroup::Operations] {
        eprintln!("{:?}:", group);
        for matrix in matrices_in_group(group) {
            let positions: Vec<String> = board
                .businesses()
                .iter()
                .filter_map(|b| b.position(matrix.x_key, matrix.y_key).map(|(x, y)| format!("{}=({}, {})", b.name, x, y)))
                .collect();
            eprintln!("  {:<20} {}", matrix.id, positions.join("  "));
        }
    }

    let exported = board.export_json()?;
    match &args.output {
        Some(path) => {
            fs::write(path, exported).with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Written to {}", path.display());
        }
        None => println!("{}", exported),
    }

    Ok(())
}
