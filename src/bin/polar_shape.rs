use std::error::Error;
use std::f64::consts::PI;
use std::fs::create_dir_all;
use std::path::PathBuf;

use clap::Parser;
use plotters::style::{BLUE, GREEN, RED};

use polarcurves::{cardioid_radius, evaluate, linspace, plot_polar_shape, sine_radius, unit_radius};

/// Number of angular samples over one revolution
const N_POINTS: usize = 100;

/// Name of the plot
const NAME: &str = "Shape";

/// A simple CLI for passing arguments
#[derive(Parser, Debug)]
#[command(name = "polar_shape")]
struct Args {
    #[arg(short, long, default_value_t = N_POINTS)]
    n_points: usize,

    #[arg(short, long, default_value = "target/plots")]
    out_dir: PathBuf,
}

// Draws the cardioid and its comparators on the polar plane
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    create_dir_all(&args.out_dir)?;

    let theta = linspace(0.0, 2.0 * PI, args.n_points)?;
    let unit = evaluate(&theta, unit_radius);
    let sine = evaluate(&theta, sine_radius);
    let cardioid = evaluate(&theta, cardioid_radius);

    let out_path = args.out_dir.join("shape.png");
    plot_polar_shape(
        &out_path,
        NAME,
        &theta,
        &[
            ("r=1", &unit, RED),
            ("r=sin(theta)", &sine, GREEN),
            ("r=1+sin(theta)", &cardioid, BLUE),
        ],
    )?;

    println!("Saved shape plot to {}", out_path.display());
    Ok(())
}
