//! Configuration for a benchmark suite run.
//!
//! This module provides the [`SuiteConfig`] struct which controls how long each
//! strategy is measured, how samples are sized and whether the input mutation
//! is part of the timed region.

use std::time::Duration;

/// Name of the suite printed at the end of a run.
pub const DEFAULT_SUITE_NAME: &str = "Compare String Prefix";

/// Configuration for a benchmark suite run.
///
/// # Examples
///
/// ```
/// use prefix_bench::SuiteConfig;
/// use std::time::Duration;
///
/// // Short, reproducible run
/// let config = SuiteConfig::default()
///     .with_max_time(Duration::from_millis(50))
///     .with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Suite name used in the `Completed <name>` line.
    pub name: String,

    // === Sampling ===
    /// Time spent running a strategy before calibration starts.
    pub warmup: Duration,

    /// Minimum duration of one sample.
    ///
    /// Calibration doubles the iteration count of a sample until one sample
    /// takes at least this long.
    pub min_sample_time: Duration,

    /// Time budget for measuring one strategy.
    ///
    /// Measuring stops once the budget is spent and at least
    /// [`min_samples`](Self::min_samples) samples were taken.
    pub max_time: Duration,

    /// Samples taken per strategy even when the time budget runs out.
    pub min_samples: usize,

    /// Hard cap on samples per strategy.
    pub max_samples: usize,

    // === Methodology ===
    /// Time the input mutation together with the comparison.
    ///
    /// When true (default), every timed iteration mutates the sample pair and
    /// then runs the strategy, which keeps caching effects out of the
    /// comparison at the cost of adding the mutation to every strategy's
    /// time. When false, mutated pairs are prepared before the timer starts
    /// and only the strategy calls are timed.
    pub time_mutation: bool,

    /// Seed for input generation. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    // === Output ===
    /// Append ops/sec, margin of error and sample count to ranked lines.
    pub detailed: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SUITE_NAME.to_string(),
            warmup: Duration::from_millis(100),
            min_sample_time: Duration::from_millis(10),
            max_time: Duration::from_secs(1),
            min_samples: 5,
            max_samples: 1000,
            time_mutation: true,
            seed: None,
            detailed: false,
        }
    }
}

impl SuiteConfig {
    /// Create a configuration with the given suite name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set warmup duration.
    #[must_use]
    pub fn with_warmup(mut self, warmup: Duration) -> Self {
        self.warmup = warmup;
        self
    }

    /// Set minimum sample duration.
    #[must_use]
    pub fn with_min_sample_time(mut self, min_sample_time: Duration) -> Self {
        self.min_sample_time = min_sample_time;
        self
    }

    /// Set the per-strategy time budget.
    #[must_use]
    pub fn with_max_time(mut self, max_time: Duration) -> Self {
        self.max_time = max_time;
        self
    }

    /// Set sample count bounds. `min` is raised to 1 and `max` to `min`.
    #[must_use]
    pub fn with_samples(mut self, min: usize, max: usize) -> Self {
        self.min_samples = min.max(1);
        self.max_samples = max.max(self.min_samples);
        self
    }

    /// Choose whether the input mutation is timed.
    #[must_use]
    pub fn with_time_mutation(mut self, time_mutation: bool) -> Self {
        self.time_mutation = time_mutation;
        self
    }

    /// Seed input generation for a reproducible run.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Print statistics next to each ranked line.
    #[must_use]
    pub fn with_detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SuiteConfig::default();
        assert_eq!(config.name, DEFAULT_SUITE_NAME);
        assert!(config.time_mutation);
        assert!(config.seed.is_none());
        assert!(!config.detailed);
    }

    #[test]
    fn test_builder() {
        let config = SuiteConfig::new("custom")
            .with_warmup(Duration::ZERO)
            .with_min_sample_time(Duration::from_millis(1))
            .with_max_time(Duration::from_millis(20))
            .with_time_mutation(false)
            .with_seed(9)
            .with_detailed(true);

        assert_eq!(config.name, "custom");
        assert_eq!(config.warmup, Duration::ZERO);
        assert_eq!(config.max_time, Duration::from_millis(20));
        assert!(!config.time_mutation);
        assert_eq!(config.seed, Some(9));
        assert!(config.detailed);
    }

    #[test]
    fn test_sample_bounds_are_normalised() {
        let config = SuiteConfig::default().with_samples(0, 0);
        assert_eq!(config.min_samples, 1);
        assert_eq!(config.max_samples, 1);

        let config = SuiteConfig::default().with_samples(10, 3);
        assert_eq!(config.min_samples, 10);
        assert_eq!(config.max_samples, 10);
    }
}
