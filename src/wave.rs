use nalgebra::DVector;

/// A sinusoid sampled over a time domain.
pub struct SineWave {
    amplitude: f64,
    angular_frequency: f64,
    phase_shift: f64,
}

impl SineWave {
    /// Create a new SineWave from a frequency in Hz
    pub fn new(amplitude: f64, frequency_hz: f64, phase_shift: f64) -> Self {
        Self {
            amplitude,
            angular_frequency: 2.0 * std::f64::consts::PI * frequency_hz,
            phase_shift,
        }
    }

    /// Gets the period of one oscillation in seconds
    pub fn period(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.angular_frequency
    }

    /// Gets the peak amplitude
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Gets the waveform value at a given time
    pub fn sample(&self, time: f64) -> f64 {
        self.amplitude * (self.angular_frequency * time + self.phase_shift).sin()
    }

    /// Gets the waveform values over a whole time domain
    pub fn samples(&self, times: &DVector<f64>) -> DVector<f64> {
        times.map(|time| self.sample(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linspace;
    use approx::assert_abs_diff_eq;

    #[test]
    fn one_hertz_wave_has_unit_period() {
        let wave = SineWave::new(1.0, 1.0, 0.0);
        assert_abs_diff_eq!(wave.period(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_phase_wave_starts_at_zero_and_peaks_a_quarter_period_in() {
        let wave = SineWave::new(2.5, 1.0, 0.0);
        assert_abs_diff_eq!(wave.sample(0.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            wave.sample(wave.period() / 4.0),
            wave.amplitude(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn samples_cover_the_whole_time_domain() {
        let wave = SineWave::new(1.0, 2.0, 0.0);
        let times = linspace(0.0, wave.period(), 100).unwrap();
        let samples = wave.samples(&times);
        assert_eq!(samples.len(), times.len());
        assert_abs_diff_eq!(samples[99], 0.0, epsilon = 1e-9);
    }
}
