use nalgebra::DVector;

pub mod plot;
pub mod quad;
pub mod wave;

pub use plot::{plot_polar_shape, plot_series, plot_waveform};

/// Error type for building sample domains.
#[derive(thiserror::Error, Debug)]
pub enum CurveError {
    #[error("invalid sample count: {0} (at least two samples are required)")]
    InvalidSampleCount(usize),
}

/// Constant unit radius, the circle the other curves are compared against.
pub fn unit_radius(_theta: f64) -> f64 {
    1.0
}

/// Radius of the sine comparator r = sin(theta).
pub fn sine_radius(theta: f64) -> f64 {
    theta.sin()
}

/// Radius of the cardioid r = 1 + sin(theta).
pub fn cardioid_radius(theta: f64) -> f64 {
    1.0 + theta.sin()
}

/// Evenly spaced samples over `[start, end]`, both endpoints included.
///
/// The step is `(end - start) / (count - 1)`, so `count` must be at least 2.
pub fn linspace(start: f64, end: f64, count: usize) -> Result<DVector<f64>, CurveError> {
    if count < 2 {
        return Err(CurveError::InvalidSampleCount(count));
    }
    let step = (end - start) / (count - 1) as f64;
    Ok(DVector::from_fn(count, |i, _| start + step * i as f64))
}

/// Applies a scalar function to every sample, producing a same-length sequence.
pub fn evaluate<F: Fn(f64) -> f64>(samples: &DVector<f64>, f: F) -> DVector<f64> {
    samples.map(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn linspace_covers_endpoints() {
        let samples = linspace(0.0, 2.0 * PI, 100).unwrap();
        assert_eq!(samples.len(), 100);
        assert_relative_eq!(samples[0], 0.0);
        assert_relative_eq!(samples[99], 2.0 * PI, max_relative = 1e-12);
    }

    #[test]
    fn linspace_is_monotonic() {
        let samples = linspace(-1.0, 1.0, 37).unwrap();
        for i in 1..samples.len() {
            assert!(samples[i] >= samples[i - 1]);
        }
    }

    #[test]
    fn linspace_rejects_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_err());
        assert!(linspace(0.0, 1.0, 1).is_err());
    }

    #[test]
    fn evaluate_identity_returns_input() {
        let samples = linspace(0.0, 1.0, 11).unwrap();
        let mapped = evaluate(&samples, |x| x);
        assert_eq!(mapped.len(), samples.len());
        for i in 0..samples.len() {
            assert_eq!(mapped[i], samples[i]);
        }
    }

    #[test]
    fn cardioid_starts_at_one_and_peaks_at_two() {
        let theta = linspace(0.0, 2.0 * PI, 100).unwrap();
        let radius = evaluate(&theta, cardioid_radius);
        assert_relative_eq!(radius[0], 1.0);
        let max = radius.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        // The peak at theta = pi/2 falls between grid points for N = 100.
        assert_relative_eq!(max, 2.0, epsilon = 1e-3);
    }

    #[test]
    fn sine_radius_dips_negative_past_pi() {
        assert!(sine_radius(3.0 * PI / 2.0) < 0.0);
        assert_relative_eq!(unit_radius(3.0 * PI / 2.0), 1.0);
    }
}
