use std::error::Error;
use std::f64::consts::PI;
use std::fs::create_dir_all;
use std::path::PathBuf;

use clap::Parser;
use plotters::style::{BLUE, GREEN, RED};
use statrs::statistics::Statistics;

use polarcurves::quad::CumulativeIntegrator;
use polarcurves::wave::SineWave;
use polarcurves::{
    cardioid_radius, evaluate, linspace, plot_polar_shape, plot_series, plot_waveform,
    sine_radius, unit_radius,
};

/// Number of angular samples over one revolution
const N_POINTS: usize = 100;

/// Target absolute error handed to the quadrature routine
const TARGET_ERROR: f64 = 1e-9;

/// Where the rendered charts land
const OUT_DIR: &str = "target/plots";

// Waveform parameters
const AMPLITUDE: f64 = 1.0;
const FREQUENCY_HZ: f64 = 1.0;
const PHASE_SHIFT: f64 = 0.0;

/// A simple CLI for passing arguments
#[derive(Parser, Debug)]
#[command(name = "polarcurves")]
struct Args {
    #[arg(short, long, default_value_t = N_POINTS)]
    n_points: usize,

    #[arg(short, long, default_value_t = TARGET_ERROR)]
    target_error: f64,

    #[arg(short, long, default_value = OUT_DIR)]
    out_dir: PathBuf,
}

// Plots the cardioid r = 1 + sin(theta) against its comparators, the
// cumulative integral of each radius function, and a basic sine waveform
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Parse the arguments
    let args = Args::parse();
    create_dir_all(&args.out_dir)?;

    // 1. Sample one revolution
    let rotation_range = 2.0 * PI;
    let theta = linspace(0.0, rotation_range, args.n_points)?;

    // 2. Evaluate each radius function over the samples
    let unit = evaluate(&theta, unit_radius);
    let sine = evaluate(&theta, sine_radius);
    let cardioid = evaluate(&theta, cardioid_radius);

    // 3. Radius comparison in Cartesian axes
    let radius_path = args.out_dir.join("radius.png");
    plot_series(
        &radius_path,
        "Radius",
        "Theta",
        "Radius",
        &theta,
        &[
            ("r=1", &unit, RED),
            ("r=sin(theta)", &sine, GREEN),
            ("r=1+sin(theta)", &cardioid, BLUE),
        ],
    )?;

    // 4. The same curves on the polar plane
    let shape_path = args.out_dir.join("shape.png");
    plot_polar_shape(
        &shape_path,
        "Shape",
        &theta,
        &[
            ("r=1", &unit, RED),
            ("r=sin(theta)", &sine, GREEN),
            ("r=1+sin(theta)", &cardioid, BLUE),
        ],
    )?;

    // 5. Integrate each radius function from 0 to every sample angle
    let integrator = CumulativeIntegrator::new(args.target_error);
    let unit_arc = integrator.cumulative(unit_radius, &theta);
    let sine_arc = integrator.cumulative(sine_radius, &theta);
    let cardioid_arc = integrator.cumulative(cardioid_radius, &theta);

    let circumference_path = args.out_dir.join("circumference.png");
    plot_series(
        &circumference_path,
        "Circumference",
        "theta",
        "circumference",
        &theta,
        &[
            ("r=1", &unit_arc, RED),
            ("r=sin(theta)", &sine_arc, GREEN),
            ("r=1+sin(theta)", &cardioid_arc, BLUE),
        ],
    )?;

    // 6. Independently, a basic sine waveform over one period
    let wave = SineWave::new(AMPLITUDE, FREQUENCY_HZ, PHASE_SHIFT);
    let times = linspace(0.0, wave.period(), args.n_points)?;
    let samples = wave.samples(&times);

    let waveform_path = args.out_dir.join("waveform.png");
    plot_waveform(&waveform_path, "Sine Waveform", &times, &samples, wave.period())?;

    // Print the results
    let last = theta.len() - 1;
    let max_radius = cardioid.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    println!("------------------------- Input -------------------------");
    println!("n_points:                     {:?}", args.n_points);
    println!("rotation_range:               {:?}", rotation_range);
    println!("target_error:                 {:?}", args.target_error);
    println!("\n------------------------- Radius ------------------------");
    println!("first cardioid radius:        {:?}", cardioid[0]);
    println!("max cardioid radius:          {:?}", max_radius);
    println!("mean cardioid radius:         {:?}", cardioid.iter().copied().mean());
    println!("\n--------------------- Circumference ---------------------");
    println!("r=1 over one revolution:      {:?}", unit_arc[last]);
    println!("sine over one revolution:     {:?}", sine_arc[last]);
    println!("cardioid over one revolution: {:?}", cardioid_arc[last]);

    println!("\nSaved charts to {}", args.out_dir.display());
    Ok(())
}
