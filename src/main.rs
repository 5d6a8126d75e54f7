//! Advect - 1D Non-Linear Convection Simulator & Curve Viewer
//!
//! Solves du/dt + u * du/dx = 0 with an explicit upwind scheme and overlays
//! the initial and final velocity profiles in an interactive chart window.

mod charts;
mod data;
mod gui;
mod sim;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use charts::{Chart, Series};
use data::SampleTable;
use gui::ViewerApp;
use sim::{SimParams, Simulation};

/// Chart decorations shared by the viewer and the PNG export.
const CHART_TITLE: &str = "1D Non-Linear Convection";
const X_LABEL: &str = "space(x)";
const Y_LABEL: &str = "magnitude(u)";

/// Data files exchanged between the solver and the renderers.
const INPUT_FILE: &str = "input.dat";
const OUTPUT_FILE: &str = "output.dat";
const INITIAL_LABEL: &str = "initial condition";
const FINAL_LABEL: &str = "final condition";

#[derive(Parser, Debug)]
#[command(name = "advect")]
#[command(about = "1D non-linear convection simulator & curve viewer", long_about = None)]
struct Args {
    /// Enable logging to specified file
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the solver and write input.dat / output.dat
    Simulate {
        /// Directory receiving the data files
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
    /// Render the overlay chart to a PNG image
    Export {
        /// Directory holding input.dat / output.dat
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Output image path
        #[arg(short, long, default_value = "convection.png")]
        out: PathBuf,
    },
    /// Open the interactive viewer (the default)
    View {
        /// Directory holding input.dat / output.dat
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        init_logging(log_path)?;
        info!("Starting advect");
    }

    let command = args.command.unwrap_or_else(|| Command::View {
        dir: PathBuf::from("."),
    });
    match command {
        Command::Simulate { dir } => simulate(&dir),
        Command::Export { dir, out } => export(&dir, &out),
        Command::View { dir } => view(&dir),
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Run the solver, writing the profile before and after time stepping.
fn simulate(dir: &Path) -> Result<()> {
    let params = SimParams::default();
    let mut sim = Simulation::new(params);
    info!(nx = params.nx, nt = params.nt, "running solver");

    data::write_table(dir.join(INPUT_FILE), sim.samples())?;
    sim.run();
    let u_max = sim.profile().iter().copied().fold(f64::NEG_INFINITY, f64::max);
    info!(u_max, "solver finished");
    data::write_table(dir.join(OUTPUT_FILE), sim.samples())?;

    println!(
        "Wrote {} and {} ({} nodes, {} steps)",
        dir.join(INPUT_FILE).display(),
        dir.join(OUTPUT_FILE).display(),
        params.nx,
        params.nt
    );
    Ok(())
}

/// Render the overlay chart to a PNG without opening a window.
fn export(dir: &Path, out: &Path) -> Result<()> {
    let chart = load_chart(dir)?;
    charts::render_png(&chart, out, (960, 640))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Load the data files, then display the chart until the window closes.
fn view(dir: &Path) -> Result<()> {
    let chart = load_chart(dir)?;

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title(chart.title()),
        ..Default::default()
    };

    // Run the application; this blocks until the user closes the window
    eframe::run_native(
        "advect",
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(cc, chart)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to open viewer window: {e}"))
}

/// Load both data files and assemble the overlay chart.
///
/// Any load failure aborts here, before a window can open.
fn load_chart(dir: &Path) -> Result<Chart> {
    let input = SampleTable::load(dir.join(INPUT_FILE))?;
    let output = SampleTable::load(dir.join(OUTPUT_FILE))?;
    info!(
        initial_rows = input.len(),
        final_rows = output.len(),
        "loaded data files"
    );
    if input.is_empty() || output.is_empty() {
        warn!("a data file contained no samples; the chart will be empty");
    }

    let mut chart = Chart::new(CHART_TITLE, X_LABEL, Y_LABEL);
    chart.push_series(Series::new(INITIAL_LABEL, input.points()));
    chart.push_series(Series::new(FINAL_LABEL, output.points()));
    debug!(labels = ?chart.legend_labels(), "assembled overlay chart");
    Ok(chart)
}
