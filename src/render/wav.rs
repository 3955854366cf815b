//! Export a reconstructed signal as audio.

use std::path::Path;

use crate::error::RenderError;
use crate::params::ReconstructionConfig;

/// Write `values` as a mono 32-bit float WAV, repeated `wav_repeats` times.
///
/// Signals whose peak exceeds 1.0 are scaled down to fit; quieter signals are
/// written unchanged. Returns the number of samples written.
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    values: &[f64],
    config: &ReconstructionConfig,
) -> Result<usize, RenderError> {
    config.validate().map_err(RenderError::Config)?;

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: config.wav_sample_rate_hz,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let peak = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    let gain = if peak > 1.0 { 1.0 / peak } else { 1.0 };

    let mut writer = hound::WavWriter::create(path.as_ref(), spec)?;
    for _ in 0..config.wav_repeats {
        for v in values {
            writer.write_sample((v * gain) as f32)?;
        }
    }
    writer.finalize()?;

    let written = values.len() * config.wav_repeats;
    log::info!(
        "Wrote {} samples @ {}Hz to {}",
        written,
        config.wav_sample_rate_hz,
        path.as_ref().display()
    );
    Ok(written)
}
