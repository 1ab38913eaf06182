//! Command-line front end for the street-network extractor.
//!
//! Reads one OSM XML extract, runs the segmentation pipeline and writes
//! the rendered network to the chosen frontend format.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use geo::Point;
use log::{error, info};

use stradario_core::render::{GeoJsonCanvas, WktCanvas, render_network};
use stradario_core::{Error, Result, StreetNetwork, extract_street_network};

#[derive(Parser)]
#[command(name = "stradario")]
#[command(about = "Extract and segment the street network of an OSM XML extract")]
#[command(version)]
struct Cli {
    /// Input .osm file
    input: PathBuf,

    /// Output file path; defaults to the input path with the frontend's extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rendering frontend
    #[arg(long, value_enum, default_value_t = Frontend::Geojson)]
    frontend: Frontend,

    /// Print a JSON summary of the extracted network to stdout
    #[arg(long)]
    stats: bool,

    /// Report the graph node nearest to LON,LAT instead of rendering
    #[arg(long, value_name = "LON,LAT")]
    nearest: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Frontend {
    Geojson,
    Wkt,
}

impl Frontend {
    fn extension(self) -> &'static str {
        match self {
            Frontend::Geojson => "geojson",
            Frontend::Wkt => "wkt",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let network = extract_street_network(&cli.input)?;

    if cli.stats {
        let summary = network.summary();
        println!(
            "{}",
            serde_json::to_string_pretty(&summary)
                .map_err(|e| Error::InvalidData(e.to_string()))?
        );
    }

    if let Some(coords) = &cli.nearest {
        report_nearest(&network, coords)?;
        return Ok(());
    }

    let output = resolve_output(&cli.input, cli.output.as_deref(), cli.frontend);
    write_rendered(&network, cli.frontend, &output)?;
    info!("Wrote {}", output.display());
    Ok(())
}

/// Default output path sits next to the input with the frontend extension.
fn resolve_output(input: &Path, output: Option<&Path>, frontend: Frontend) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension(frontend.extension()),
    }
}

fn write_rendered(network: &StreetNetwork, frontend: Frontend, output: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(output)?);
    match frontend {
        Frontend::Geojson => {
            let mut canvas = GeoJsonCanvas::new();
            render_network(network, &mut canvas);
            canvas.write_to(&mut writer)?;
        }
        Frontend::Wkt => {
            let mut canvas = WktCanvas::new();
            render_network(network, &mut canvas);
            canvas.write_to(&mut writer)?;
        }
    }
    Ok(())
}

fn report_nearest(network: &StreetNetwork, coords: &str) -> Result<()> {
    let point = parse_lon_lat(coords)?;
    match network.nodes.nearest(&point) {
        Some(node) => {
            // coordinate is present for every registered node
            let location = network.nodes.get(node).unwrap_or(point);
            println!("{node}\t{}\t{}", location.x(), location.y());
        }
        None => println!("no nodes in extract"),
    }
    Ok(())
}

fn parse_lon_lat(coords: &str) -> Result<Point<f64>> {
    let invalid = || Error::InvalidData(format!("expected LON,LAT, got `{coords}`"));
    let (lon, lat) = coords.split_once(',').ok_or_else(invalid)?;
    Ok(Point::new(
        lon.trim().parse().map_err(|_| invalid())?,
        lat.trim().parse().map_err(|_| invalid())?,
    ))
}
