mod config;
mod file_io;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::AlbumConfig;
use shapealbum_export::{render, Format};
use shapealbum_session::Album;

/// Run a shape script and export its snapshots
#[derive(Parser, Debug)]
#[command(name = "shapealbum")]
#[command(version, about, long_about = None)]
struct Args {
    /// Action script to run
    #[arg(short = 'i', long = "in", value_name = "SCRIPT")]
    input: PathBuf,

    /// How to present the album: web (html), text (txt) or json
    #[arg(short, long, value_name = "VIEW")]
    view: Format,

    /// Output file (required for the web view)
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Replace the output file if it already exists
    #[arg(long)]
    force: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/shapealbum/config.json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log every applied operation
    #[arg(long)]
    verbose: bool,

    /// Canvas width for the web view
    #[arg(value_name = "XMAX")]
    xmax: Option<u32>,

    /// Canvas height for the web view
    #[arg(value_name = "YMAX")]
    ymax: Option<u32>,
}

const EMPTY_ALBUM: &str = "No snapshots in this album.\n";

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SHAPEALBUM_LOG")
        .or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

/// Command-line values take precedence over the config file
fn apply_overrides(args: &Args, mut config: AlbumConfig) -> AlbumConfig {
    if let Some(width) = args.xmax {
        config.canvas_width = width;
    }
    if let Some(height) = args.ymax {
        config.canvas_height = height;
    }
    if args.force {
        config.overwrite = true;
    }
    config
}

/// Run the script and export the album. Returns what belongs on stdout,
/// or `None` when the export went to `--out`.
fn run(args: &Args, config: AlbumConfig) -> Result<Option<String>> {
    let config = apply_overrides(args, config);
    if args.view == Format::Web && args.out.is_none() {
        bail!("The web view needs an output file (--out)");
    }

    let script = file_io::read_script(&args.input)?;
    let mut album = Album::new();
    let applied = album
        .run_script(&script)
        .with_context(|| format!("Failed to run {:?}", args.input))?;
    info!(applied, snapshots = album.snapshot_count(), "script finished");

    let snapshots = album.snapshots();
    if snapshots.is_empty() {
        return Ok(Some(EMPTY_ALBUM.to_string()));
    }

    let rendered = render(args.view, &snapshots, &config.web_options())
        .with_context(|| format!("Failed to render album as {}", args.view))?;

    match &args.out {
        Some(path) => {
            file_io::write_output(path, &rendered, config.overwrite)?;
            info!(?path, view = %args.view, "album written");
            Ok(None)
        }
        None => Ok(Some(rendered)),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config_path = args.config.clone().unwrap_or_else(AlbumConfig::default_path);
    let config = AlbumConfig::load(&config_path)?;
    debug!(?config_path, ?config, "configuration loaded");

    if let Some(output) = run(&args, config)? {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}
