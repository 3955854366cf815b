//! Signal reconstruction and audio export configuration.

/// Dense reconstruction grid and WAV export settings
#[derive(Debug, Clone)]
pub struct ReconstructionConfig {
    /// Number of evaluation points: over `0..=N-1` for the printed curve and
    /// over the period `[0, N)` for the WAV
    pub points: usize,

    /// WAV sample rate (Hz) when the reconstruction is exported as audio
    pub wav_sample_rate_hz: u32,

    /// Times the period `[0, N)` is repeated in the WAV file
    pub wav_repeats: usize,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            points: 1000,
            wav_sample_rate_hz: 44100,
            wav_repeats: 1,
        }
    }
}

impl ReconstructionConfig {
    /// Validate configuration (at least two points so the grid spans the signal)
    pub fn validate(&self) -> Result<(), String> {
        if self.points < 2 {
            return Err(format!(
                "Reconstruction needs at least 2 points, got {}",
                self.points
            ));
        }
        if self.wav_sample_rate_hz == 0 {
            return Err("WAV sample rate must be > 0".to_string());
        }
        if self.wav_repeats == 0 {
            return Err("WAV repeats must be > 0".to_string());
        }
        Ok(())
    }
}
