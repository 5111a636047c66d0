use std::error::Error;
use std::fs::create_dir_all;
use std::path::PathBuf;

use clap::Parser;

use polarcurves::wave::SineWave;
use polarcurves::{linspace, plot_waveform};

/// Peak amplitude of the waveform
const AMPLITUDE: f64 = 1.0;

/// Oscillation frequency in Hz
const FREQUENCY_HZ: f64 = 1.0;

/// Phase shift added to the sine argument
const PHASE_SHIFT: f64 = 0.0;

/// Number of samples over one period
const N_POINTS: usize = 100;

/// Name of the plot
const NAME: &str = "Sine Waveform";

/// A simple CLI for passing arguments
#[derive(Parser, Debug)]
#[command(name = "sine_waveform")]
struct Args {
    #[arg(short, long, default_value_t = AMPLITUDE)]
    amplitude: f64,

    #[arg(short, long, default_value_t = FREQUENCY_HZ)]
    frequency_hz: f64,

    #[arg(short, long, default_value_t = PHASE_SHIFT)]
    phase_shift: f64,

    #[arg(short, long, default_value_t = N_POINTS)]
    n_points: usize,

    #[arg(short, long, default_value = "target/plots")]
    out_dir: PathBuf,
}

// Plots a basic sinusoid over one period
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    create_dir_all(&args.out_dir)?;

    let wave = SineWave::new(args.amplitude, args.frequency_hz, args.phase_shift);
    let times = linspace(0.0, wave.period(), args.n_points)?;
    let samples = wave.samples(&times);

    // Print the results
    println!("amplitude:                    {:?}", wave.amplitude());
    println!("frequency_hz:                 {:?}", args.frequency_hz);
    println!("period_sec:                   {:?}", wave.period());
    println!("phase_shift:                  {:?}", args.phase_shift);

    let out_path = args.out_dir.join("waveform.png");
    plot_waveform(&out_path, NAME, &times, &samples, wave.period())?;

    println!("Saved waveform plot to {}", out_path.display());
    Ok(())
}
