//! Epicycles - Fourier decomposition of sampled signals and hand-drawn curves
//!
//! Computes the DFT straight from its definition, reconstructs signals on
//! arbitrary grids and turns 2D traces into chains of rotating vectors.

use clap::Parser;

use epicycles::cli::{read_input, Args, Command};
use epicycles::dft::{linspace, periodic_grid, Normalization, Spectrum};
use epicycles::epicycle::decompose_epicycles;
use epicycles::reference::{max_deviation, reference_transform};
use epicycles::render::{write_frames, write_wav, ReconstructionPlot};
use epicycles::signal::{parse_points, parse_values};
use epicycles::sketch::Sketch;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match &args.command {
        Command::Spectrum { input, normalize } => run_spectrum(input, *normalize),
        Command::Reconstruct {
            input, plot, wav, ..
        } => run_reconstruct(&args.command, input, plot.as_deref(), wav.as_deref()),
        Command::Epicycles { input, step, .. } => run_epicycles(&args.command, input, *step),
        Command::Check { input } => run_check(input),
    }
}

/// Print one row per coefficient
fn run_spectrum(input: &str, normalize: bool) -> Result<()> {
    let samples = parse_values(&read_input(input)?)?;
    let spectrum = Spectrum::analyze(&samples, Normalization::from(normalize))?;

    println!("# N={} ({:?})", spectrum.len(), spectrum.normalization());
    println!("# k frequency re im amplitude phase");
    for (c, sine) in spectrum
        .coefficients()
        .iter()
        .zip(spectrum.sine_components())
    {
        println!(
            "{} {:.6} {:.9} {:.9} {:.9} {:.9}",
            sine.index, sine.frequency, c.re, c.im, sine.amplitude, sine.phase
        );
    }
    Ok(())
}

/// Print the dense reconstruction and optionally write chart and audio
fn run_reconstruct(
    command: &Command,
    input: &str,
    plot_path: Option<&std::path::Path>,
    wav_path: Option<&std::path::Path>,
) -> Result<()> {
    let config = command.reconstruction_config();
    config
        .validate()
        .map_err(|e| format!("Invalid reconstruction config: {}", e))?;

    let samples = parse_values(&read_input(input)?)?;
    let spectrum = Spectrum::analyze(&samples, Normalization::Unnormalized)?;

    let last = (samples.len() - 1) as f64;
    let grid = linspace(0.0, last, config.points);
    let values = spectrum.reconstruct(&grid)?;

    for (t, v) in grid.iter().zip(values.iter()) {
        println!("{:.6} {:.9}", t, v);
    }

    if let Some(path) = plot_path {
        let plot = ReconstructionPlot::build(&samples, &spectrum, config.points)?;
        plot.save(path, &command.plot_config())?;
    }

    if let Some(path) = wav_path {
        // One full period with the endpoint excluded so repeats join cleanly
        let period = periodic_grid(samples.len() as f64, config.points);
        write_wav(path, &spectrum.reconstruct(&period)?, &config)?;
    }

    Ok(())
}

/// Print the sorted components and optionally render the animation
fn run_epicycles(command: &Command, input: &str, step: usize) -> Result<()> {
    let points = parse_points(&read_input(input)?)?;

    // Replay the trace through the recorder so decimation matches live capture
    let mut sketch = Sketch::new();
    sketch.begin();
    for p in &points {
        sketch.push(p.re, p.im);
    }
    let samples = sketch.finish(step)?;
    log::info!("Decomposing {} of {} points", samples.len(), points.len());

    let components = decompose_epicycles(&samples)?;

    println!("# frequency amplitude phase");
    for c in &components {
        println!("{} {:.9} {:.9}", c.frequency, c.amplitude, c.phase);
    }

    if let Some(config) = command.animation_config() {
        let written = write_frames(components, &config)?;
        println!("# {} frames written to {}", written, config.output_dir);
    }

    Ok(())
}

/// Report how far the direct DFT strays from the fast reference
fn run_check(input: &str) -> Result<()> {
    let samples = parse_values(&read_input(input)?)?;

    for normalization in [Normalization::Unnormalized, Normalization::PerSample] {
        let direct = epicycles::forward_transform(&samples, normalization)?;
        let fast = reference_transform(&samples, normalization);
        let deviation = max_deviation(&direct, &fast).ok_or("reference length mismatch")?;
        println!(
            "{:?}: N={} max deviation {:.3e}",
            normalization,
            samples.len(),
            deviation
        );
        if deviation > 1e-9 * samples.len() as f64 {
            log::warn!("{:?} deviation {:.3e} exceeds tolerance", normalization, deviation);
        }
    }
    Ok(())
}
