use log::debug;
use nalgebra::DVector;

/// Target absolute error handed to the quadrature routine when none is given.
pub const DEFAULT_TARGET_ERROR: f64 = 1e-9;

/// Helper that wraps the `quadrature` routine for cumulative integrals.
pub struct CumulativeIntegrator {
    target_absolute_error: f64,
}

impl CumulativeIntegrator {
    pub fn new(target_absolute_error: f64) -> Self {
        Self {
            target_absolute_error,
        }
    }

    /// Definite integral of `f` from 0 to `upper`.
    pub fn definite<F>(&self, f: &F, upper: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let output = quadrature::integrate(f, 0.0, upper, self.target_absolute_error);
        debug!(
            "integral over [0, {:.6}]: {:.9} (error estimate {:.3e}, {} evaluations)",
            upper, output.integral, output.error_estimate, output.num_function_evaluations
        );
        output.integral
    }

    /// Integral of `f` from 0 to every value in `uppers`.
    ///
    /// Each element is an independent quadrature call; nothing is reused
    /// between neighbouring samples.
    pub fn cumulative<F>(&self, f: F, uppers: &DVector<f64>) -> DVector<f64>
    where
        F: Fn(f64) -> f64,
    {
        uppers.map(|upper| self.definite(&f, upper))
    }
}

impl Default for CumulativeIntegrator {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cardioid_radius, linspace};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn constant_integrand_matches_the_angle() {
        let integrator = CumulativeIntegrator::default();
        for theta in [0.0, PI / 2.0, PI, 3.0 * PI / 2.0, 2.0 * PI] {
            assert_abs_diff_eq!(integrator.definite(&|_| 1.0, theta), theta, epsilon = 1e-6);
        }
    }

    #[test]
    fn sine_integrand_matches_closed_form() {
        let integrator = CumulativeIntegrator::default();
        assert_abs_diff_eq!(
            integrator.definite(&|x: f64| x.sin(), PI),
            2.0,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            integrator.definite(&|x: f64| x.sin(), 2.0 * PI),
            0.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn cumulative_integrates_every_sample_independently() {
        let integrator = CumulativeIntegrator::default();
        let theta = linspace(0.0, 2.0 * PI, 25).unwrap();
        let arcs = integrator.cumulative(cardioid_radius, &theta);
        assert_eq!(arcs.len(), theta.len());
        assert_abs_diff_eq!(arcs[0], 0.0, epsilon = 1e-9);
        // Closed form for the cardioid: theta + 1 - cos(theta).
        for i in 0..theta.len() {
            let expected = theta[i] + 1.0 - theta[i].cos();
            assert_abs_diff_eq!(arcs[i], expected, epsilon = 1e-6);
        }
    }
}
