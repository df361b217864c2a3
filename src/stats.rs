//! Summary statistics over timing samples.
//!
//! Each sample is the mean time of one iteration within a timed batch, in
//! seconds. [`SampleStats`] condenses a strategy's samples into the numbers the
//! report prints.

use std::time::Duration;

/// Two-sided 95% Student-t critical values for 1 to 30 degrees of freedom.
const T_TABLE: [f64; 30] = [
    12.706, 4.303, 3.182, 2.776, 2.571, 2.447, 2.365, 2.306, 2.262, 2.228, 2.201, 2.179, 2.160,
    2.145, 2.131, 2.120, 2.110, 2.101, 2.093, 2.086, 2.080, 2.074, 2.069, 2.064, 2.060, 2.056,
    2.052, 2.048, 2.045, 2.042,
];

/// Critical value used past the end of [`T_TABLE`].
const T_INFINITY: f64 = 1.96;

/// Critical value for the given degrees of freedom.
fn critical_value(degrees_of_freedom: usize) -> f64 {
    match degrees_of_freedom {
        0 => 0.0,
        df => T_TABLE.get(df - 1).copied().unwrap_or(T_INFINITY),
    }
}

/// Statistics over the per-iteration sample means of one strategy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleStats {
    /// Per-iteration mean of every sample, in seconds.
    pub samples: Vec<f64>,
    /// Mean seconds per iteration.
    pub mean: f64,
    /// Sample variance.
    pub variance: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
    /// Standard error of the mean.
    pub sem: f64,
    /// Margin of error at 95% confidence.
    pub moe: f64,
    /// Relative margin of error, in percent of the mean.
    pub rme: f64,
}

impl SampleStats {
    /// Computes statistics from per-iteration sample means.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_samples(samples: Vec<f64>) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = if samples.len() > 1 {
            samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1.0)
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let sem = std_dev / n.sqrt();
        let moe = sem * critical_value(samples.len() - 1);
        let rme = if mean > 0.0 { moe / mean * 100.0 } else { 0.0 };

        Self {
            samples,
            mean,
            variance,
            std_dev,
            sem,
            moe,
            rme,
        }
    }

    /// Number of samples taken.
    #[must_use]
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// Mean time per iteration.
    #[must_use]
    pub fn mean_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.mean).unwrap_or(Duration::ZERO)
    }

    /// Iterations per second implied by the mean.
    #[must_use]
    pub fn ops_per_sec(&self) -> f64 {
        if self.mean > 0.0 {
            1.0 / self.mean
        } else {
            0.0
        }
    }
}
