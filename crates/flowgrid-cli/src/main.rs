//! flowgrid CLI - lay out numbered tiles with the wrap layout.

#![cfg_attr(test, allow(clippy::unwrap_used))]

mod report;

use clap::{ArgAction, Parser, ValueEnum};
use flowgrid_core::{Constraints, Rect, Size, View};
use flowgrid_widgets::{DynamicWrapLayout, Tile, WrapLayoutConfig, WrapLayoutError};
use report::LayoutReport;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flowgrid")]
#[command(about = "Lay out a grid of numbered tiles with the wrap layout")]
#[command(version)]
struct Cli {
    /// Number of tiles
    #[arg(short = 'n', long, default_value_t = 40)]
    items: usize,

    /// Available width (unbounded if omitted)
    #[arg(short, long)]
    width: Option<f32>,

    /// Available height (unbounded if omitted)
    #[arg(long)]
    height: Option<f32>,

    /// Natural width of every tile
    #[arg(long, default_value_t = 50.0)]
    tile_width: f32,

    /// Natural height of every tile
    #[arg(long, default_value_t = 50.0)]
    tile_height: f32,

    /// YAML file with spacing and alignment settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comma-separated tile indices to hide
    #[arg(long, value_delimiter = ',')]
    hidden: Vec<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_grid(cli: &Cli) -> Result<DynamicWrapLayout<String>, WrapLayoutError> {
    let config = match &cli.config {
        Some(path) => WrapLayoutConfig::load(path)?,
        None => WrapLayoutConfig::default(),
    };
    debug!(?config, "loaded wrap layout config");

    let (tile_width, tile_height) = (cli.tile_width, cli.tile_height);
    let mut grid = DynamicWrapLayout::from_config(&config)?
        .item_template(move |label: &String| {
            Box::new(Tile::new(label.clone()).size(tile_width, tile_height)) as Box<dyn View>
        })
        .items_source((0..cli.items).map(|i| i.to_string()).collect());
    grid.bind()?;

    for &index in &cli.hidden {
        if !grid.set_child_visible(index, false) {
            tracing::warn!(index, items = cli.items, "ignoring out-of-range hidden index");
        }
    }

    Ok(grid)
}

fn run(cli: &Cli) -> Result<LayoutReport, WrapLayoutError> {
    let mut grid = build_grid(cli)?;

    let constraints = Constraints::new(
        0.0,
        cli.width.unwrap_or(f32::INFINITY),
        0.0,
        cli.height.unwrap_or(f32::INFINITY),
    );
    let available = constraints.max_size();
    let requested = grid.measure(constraints);

    // Arrange in the box a host would hand back: the available extent where
    // bounded, the requested one otherwise.
    let final_size = Size::new(
        if constraints.has_bounded_width() {
            available.width
        } else {
            requested.width
        },
        if constraints.has_bounded_height() {
            available.height
        } else {
            requested.height
        },
    );
    grid.layout(Rect::from_size(final_size));
    let layout = grid.layout_data(final_size);

    info!(
        columns = layout.columns(),
        rows = layout.rows(),
        visible = layout.visible_child_count(),
        "laid out grid"
    );

    Ok(LayoutReport::collect(&grid, available, requested, layout))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let report = match run(&cli) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.format {
        Format::Text => print!("{}", report.to_text()),
        Format::Json => match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
