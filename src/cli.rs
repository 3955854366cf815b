//! Command-line argument parsing.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::params::{AnimationConfig, PlotConfig, ReconstructionConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "epicycles")]
#[command(about = "Direct DFT, signal reconstruction and epicycle decomposition", long_about = None)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the coefficients of a whitespace-separated value list
    Spectrum {
        /// Input file, or '-' for stdin
        #[arg(value_name = "FILE", default_value = "-")]
        input: String,

        /// Divide coefficients by N in the forward transform
        #[arg(long)]
        normalize: bool,
    },

    /// Reconstruct a value list on a dense grid
    Reconstruct {
        /// Input file, or '-' for stdin
        #[arg(value_name = "FILE", default_value = "-")]
        input: String,

        /// Number of evaluation points spanning 0..N-1
        #[arg(long, value_name = "COUNT", default_value_t = 1000)]
        points: usize,

        /// Write a PNG chart of samples, reconstruction and sinusoids
        #[arg(long, value_name = "PATH")]
        plot: Option<PathBuf>,

        /// Omit the per-frequency sinusoids from the chart
        #[arg(long)]
        no_components: bool,

        /// Write the reconstruction as a mono WAV file
        #[arg(long, value_name = "PATH")]
        wav: Option<PathBuf>,

        /// WAV sample rate (Hz)
        #[arg(long, value_name = "HZ", default_value_t = 44100)]
        sample_rate: u32,

        /// Number of times the period [0, N) is repeated in the WAV
        #[arg(long, value_name = "COUNT", default_value_t = 1)]
        repeats: usize,
    },

    /// Decompose a 2D point trace into epicycles
    Epicycles {
        /// Input file with one 'x y' point per line, or '-' for stdin
        #[arg(value_name = "FILE", default_value = "-")]
        input: String,

        /// Keep every STEP-th point of the trace
        #[arg(long, value_name = "STEP", default_value_t = 1)]
        step: usize,

        /// Render one PNG per animation frame into this directory
        #[arg(long, value_name = "DIR")]
        frames: Option<String>,

        /// Frame size in pixels (square)
        #[arg(long, value_name = "PIXELS", default_value_t = 800)]
        size: u32,

        /// Constant angle added to every epicycle (radians)
        #[arg(long, value_name = "RADIANS", default_value_t = 0.0, allow_hyphen_values = true)]
        rotation: f64,
    },

    /// Compare the direct DFT of a value list against a fast transform
    Check {
        /// Input file, or '-' for stdin
        #[arg(value_name = "FILE", default_value = "-")]
        input: String,
    },
}

impl Args {
    /// Log filter matching the verbosity flag
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

impl Command {
    /// Create reconstruction configuration from the `reconstruct` flags
    pub fn reconstruction_config(&self) -> ReconstructionConfig {
        match self {
            Command::Reconstruct {
                points,
                sample_rate,
                repeats,
                ..
            } => ReconstructionConfig {
                points: *points,
                wav_sample_rate_hz: *sample_rate,
                wav_repeats: *repeats,
            },
            _ => ReconstructionConfig::default(),
        }
    }

    /// Create plot configuration from the `reconstruct` flags
    pub fn plot_config(&self) -> PlotConfig {
        match self {
            Command::Reconstruct { no_components, .. } => PlotConfig {
                show_components: !no_components,
                ..PlotConfig::default()
            },
            _ => PlotConfig::default(),
        }
    }

    /// Create animation configuration if frame output is requested
    pub fn animation_config(&self) -> Option<AnimationConfig> {
        match self {
            Command::Epicycles {
                frames: Some(dir),
                size,
                rotation,
                ..
            } => Some(AnimationConfig {
                width: *size,
                height: *size,
                rotation: *rotation,
                output_dir: dir.clone(),
                ..AnimationConfig::default()
            }),
            _ => None,
        }
    }
}

/// Read the whole input, treating '-' as stdin
pub fn read_input(input: &str) -> std::io::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reconstruct() {
        let args = Args::parse_from([
            "epicycles",
            "-v",
            "reconstruct",
            "values.txt",
            "--points",
            "250",
            "--wav",
            "out.wav",
            "--sample-rate",
            "8000",
        ]);
        assert_eq!(args.log_level(), log::LevelFilter::Info);

        let config = args.command.reconstruction_config();
        assert_eq!(config.points, 250);
        assert_eq!(config.wav_sample_rate_hz, 8000);
        assert_eq!(config.wav_repeats, 1);
        assert!(args.command.plot_config().show_components);

        match args.command {
            Command::Reconstruct { input, wav, plot, .. } => {
                assert_eq!(input, "values.txt");
                assert_eq!(wav, Some(PathBuf::from("out.wav")));
                assert!(plot.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_epicycles_frames() {
        let args = Args::parse_from([
            "epicycles",
            "epicycles",
            "trace.txt",
            "--frames",
            "out",
            "--size",
            "400",
            "--rotation",
            "-0.5",
        ]);
        let config = args.command.animation_config().unwrap();
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 400);
        assert_eq!(config.rotation, -0.5);
        assert_eq!(config.output_dir, "out");
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["epicycles", "spectrum"]);
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
        match &args.command {
            Command::Spectrum { input, normalize } => {
                assert_eq!(input, "-");
                assert!(!normalize);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(args.command.animation_config().is_none());
    }
}
