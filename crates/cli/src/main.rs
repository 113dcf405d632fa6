use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use geocoords::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod input;
mod provenance;

use input::Input;

#[derive(Parser)]
#[command(name = "geocoords")]
#[command(about = "Extract, map and generate GeoJSON-shaped coordinates")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate random geometries and print them as JSON
    Generate {
        /// Point, LineString or Polygon
        kind: GeometryKind,
        /// More than one wraps the output in a GeometryCollection
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long, default_value_t = 3)]
        vertices: usize,
        /// min_lon,min_lat,max_lon,max_lat
        #[arg(long, default_value = "-180,-90,180,90", allow_hyphen_values = true)]
        bbox: BoundingBox,
        /// RNG seed; drawn from the clock when omitted and recorded in provenance
        #[arg(long)]
        seed: Option<u64>,
        /// Write JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print every coordinate of a geometry, feature or raw array, one per line
    Coords {
        /// JSON file, or `-` for stdin
        input: String,
    },
    /// Apply `x * scale + offset` to every coordinate component of a geometry
    Map {
        /// JSON file, or `-` for stdin
        input: String,
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        scale: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        offset: f64,
        /// Round results to this many decimals
        #[arg(long)]
        round: Option<i32>,
    },
}

#[derive(Serialize)]
struct GenerateParams {
    kind: String,
    count: usize,
    vertices: usize,
    bbox: [f64; 4],
    seed: u64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate {
            kind,
            count,
            vertices,
            bbox,
            seed,
            out,
        } => {
            let params = GenerateParams {
                kind: kind.to_string(),
                count,
                vertices,
                bbox: bbox.to_array(),
                seed: seed.unwrap_or_else(clock_seed),
            };
            generate_cmd(kind, params, out.as_deref())
        }
        Action::Coords { input } => coords_cmd(&input),
        Action::Map {
            input,
            scale,
            offset,
            round,
        } => map_cmd(&input, scale, offset, round),
    }
}

fn generate_cmd(kind: GeometryKind, params: GenerateParams, out: Option<&Path>) -> Result<()> {
    tracing::info!(
        kind = %kind,
        count = params.count,
        vertices = params.vertices,
        seed = params.seed,
        "generate"
    );
    let cfg = RandomCfg {
        number_features: params.count,
        number_vertices: params.vertices,
        bbox: BoundingBox::from_slice(&params.bbox)?,
        ..RandomCfg::default()
    };
    let geometry = generate_seeded(kind, &cfg, params.seed)?;
    let json = serde_json::to_vec_pretty(&geometry)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            let payload = provenance::Payload::new("generate", serde_json::to_value(&params)?);
            let sidecar = provenance::write_sidecar(path, payload)?;
            tracing::info!(out = %path.display(), provenance = %sidecar.display(), "wrote");
        }
        None => println!("{}", String::from_utf8_lossy(&json)),
    }
    Ok(())
}

fn coords_cmd(input: &str) -> Result<()> {
    tracing::info!(input, "coords");
    let parsed = Input::read(input)?;
    let mut n = 0usize;
    for c in extract(parsed.source())? {
        // Coordinates before a malformed level are already printed.
        let c = c?;
        println!("{}", serde_json::to_string(&c)?);
        n += 1;
    }
    tracing::debug!(count = n, "coords done");
    Ok(())
}

fn map_cmd(input: &str, scale: f64, offset: f64, round: Option<i32>) -> Result<()> {
    tracing::info!(input, scale, offset, round = ?round, "map");
    let geometry = match Input::read(input)? {
        Input::Geometry(g) => g,
        Input::Feature(_) | Input::Raw(_) => bail!("map expects a geometry object"),
    };
    let mapped = map_coords(|x| affine(x, scale, offset, round), &geometry)?;
    println!("{}", serde_json::to_string_pretty(&mapped)?);
    Ok(())
}

fn affine(x: f64, scale: f64, offset: f64, round: Option<i32>) -> f64 {
    let y = x * scale + offset;
    match round {
        Some(p) => {
            let f = 10f64.powi(p);
            (y * f).round() / f
        }
        None => y,
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
