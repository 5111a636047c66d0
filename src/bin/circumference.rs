use std::error::Error;
use std::f64::consts::PI;
use std::fs::create_dir_all;
use std::path::PathBuf;

use clap::Parser;
use plotters::style::{BLUE, GREEN, RED};

use polarcurves::quad::CumulativeIntegrator;
use polarcurves::{cardioid_radius, linspace, plot_series, sine_radius, unit_radius};

/// Number of angular samples over one revolution
const N_POINTS: usize = 100;

/// Target absolute error handed to the quadrature routine
const TARGET_ERROR: f64 = 1e-9;

/// Name of the plot
const NAME: &str = "Circumference";

/// A simple CLI for passing arguments
#[derive(Parser, Debug)]
#[command(name = "circumference")]
struct Args {
    #[arg(short, long, default_value_t = N_POINTS)]
    n_points: usize,

    #[arg(short, long, default_value_t = TARGET_ERROR)]
    target_error: f64,

    #[arg(short, long, default_value = "target/plots")]
    out_dir: PathBuf,
}

// Integrates each radius function from 0 to every sample angle and plots the
// cumulative curves
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    create_dir_all(&args.out_dir)?;

    let theta = linspace(0.0, 2.0 * PI, args.n_points)?;

    let integrator = CumulativeIntegrator::new(args.target_error);
    let unit_arc = integrator.cumulative(unit_radius, &theta);
    let sine_arc = integrator.cumulative(sine_radius, &theta);
    let cardioid_arc = integrator.cumulative(cardioid_radius, &theta);

    // Print the results
    let last = theta.len() - 1;
    println!("target_error:                 {:?}", args.target_error);
    println!("r=1 over one revolution:      {:?}", unit_arc[last]);
    println!("sine over one revolution:     {:?}", sine_arc[last]);
    println!("cardioid over one revolution: {:?}", cardioid_arc[last]);

    let out_path = args.out_dir.join("circumference.png");
    plot_series(
        &out_path,
        NAME,
        "theta",
        "circumference",
        &theta,
        &[
            ("r=1", &unit_arc, RED),
            ("r=sin(theta)", &sine_arc, GREEN),
            ("r=1+sin(theta)", &cardioid_arc, BLUE),
        ],
    )?;

    println!("Saved circumference plot to {}", out_path.display());
    Ok(())
}
