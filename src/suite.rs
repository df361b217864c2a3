//! The benchmark driver.
//!
//! A [`Suite`] measures each registered candidate in turn. For every candidate
//! it generates a fresh [`SamplePair`], warms the candidate up, calibrates how
//! many iterations one sample needs, and then takes samples until the time
//! budget is spent. Every iteration mutates the pair, runs the candidate and
//! checks the answer against [`strategy::reference`]; a wrong answer aborts
//! the whole run.
//!
//! Progress is reported through [`SuiteObserver`].
//!
//! # Examples
//!
//! ```
//! use prefix_bench::{Suite, SuiteConfig, SuiteEvent, SuiteObserver};
//! use std::time::Duration;
//!
//! struct Quiet;
//!
//! impl SuiteObserver for Quiet {
//!     fn on_event(&mut self, _event: &SuiteEvent<'_>) {}
//! }
//!
//! let config = SuiteConfig::default()
//!     .with_warmup(Duration::ZERO)
//!     .with_min_sample_time(Duration::from_micros(100))
//!     .with_max_time(Duration::from_millis(5));
//! let records = Suite::standard(config).run(&mut Quiet)?;
//! assert_eq!(records.len(), 7);
//! # Ok::<(), prefix_bench::BenchError>(())
//! ```

use std::hint::black_box;
use std::time::{Duration, Instant};

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SuiteConfig;
use crate::error::{BenchError, Result};
use crate::report::{self, RankedEntry};
use crate::sample::SamplePair;
use crate::stats::SampleStats;
use crate::strategy::{self, PrefixFn, Strategy};

/// Largest iteration count calibration will settle on.
const MAX_ITERATIONS_PER_SAMPLE: usize = 1 << 30;

/// Pairs prepared at once when the mutation is kept out of the timer.
const PREPARED_CHUNK: usize = 1 << 14;

/// Driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has run yet.
    Idle,
    /// Exercising a candidate before measuring it.
    Warming,
    /// Taking samples of a candidate.
    Measuring,
    /// Ranking the finished records.
    Aggregating,
    /// Handing the ranking to the observer.
    Reporting,
    /// The run finished.
    Done,
    /// A candidate failed validation.
    Aborted,
}

/// Measurements of one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    /// Candidate name.
    pub name: &'static str,
    /// Statistics over the per-iteration sample means.
    pub stats: SampleStats,
    /// Iterations run while measuring.
    pub iterations: u64,
    /// Timed duration of all measured iterations.
    pub elapsed: Duration,
}

/// Progress notification from a running suite.
#[derive(Debug)]
pub enum SuiteEvent<'a> {
    /// A candidate is about to be measured.
    Start {
        /// Candidate name.
        name: &'static str,
    },
    /// A candidate finished measuring.
    Cycle {
        /// Its record.
        record: &'a BenchmarkRecord,
    },
    /// A candidate failed validation; the run stops after this event.
    Error {
        /// Candidate name.
        name: &'static str,
        /// The failure.
        error: &'a BenchError,
    },
    /// Every candidate finished.
    Complete {
        /// Suite name.
        suite: &'a str,
        /// Records from fastest to slowest.
        ranking: &'a [RankedEntry<'a>],
    },
}

/// Receives [`SuiteEvent`]s while a suite runs.
pub trait SuiteObserver {
    /// Called for each event, in order.
    fn on_event(&mut self, event: &SuiteEvent<'_>);
}

/// A named comparison routine registered with a suite.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    name: &'static str,
    run: PrefixFn,
}

/// Checks one answer against the reference predicate for the pair it was
/// computed on.
///
/// # Errors
///
/// Returns [`BenchError::ResultMismatch`] when the answers differ.
pub fn validate(name: &'static str, pair: &SamplePair, actual: bool) -> Result<()> {
    let expected = strategy::reference(pair.subject(), pair.prefix());
    if actual == expected {
        return Ok(());
    }

    Err(BenchError::ResultMismatch {
        strategy: name,
        subject: pair.subject().to_string(),
        prefix: pair.prefix().to_string(),
        expected,
        actual,
    })
}

/// Benchmark suite over a list of candidates.
#[derive(Debug)]
pub struct Suite {
    config: SuiteConfig,
    candidates: Vec<Candidate>,
    phase: Phase,
    rng: StdRng,
}

impl Suite {
    /// Creates an empty suite.
    #[must_use]
    pub fn new(config: SuiteConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            candidates: Vec::new(),
            phase: Phase::Idle,
            rng,
        }
    }

    /// Creates a suite with every [`Strategy`] registered in run order.
    #[must_use]
    pub fn standard(config: SuiteConfig) -> Self {
        let mut suite = Self::new(config);
        for strategy in Strategy::ALL {
            suite.add(strategy);
        }
        suite
    }

    /// Registers a strategy.
    pub fn add(&mut self, strategy: Strategy) -> &mut Self {
        self.add_fn(strategy.name(), strategy.as_fn())
    }

    /// Registers an arbitrary comparison routine under a name.
    pub fn add_fn(&mut self, name: &'static str, run: PrefixFn) -> &mut Self {
        self.candidates.push(Candidate { name, run });
        self
    }

    /// Names of the registered candidates, in run order.
    #[must_use]
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.candidates.iter().map(|candidate| candidate.name)
    }

    /// Current driver state.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The configuration the suite runs with.
    #[must_use]
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Measures every candidate, then reports the ranking.
    ///
    /// Returns the records in run order.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::ResultMismatch`] as soon as any candidate gives
    /// a wrong answer. The observer receives an [`SuiteEvent::Error`] first
    /// and no ranking is reported.
    pub fn run(&mut self, observer: &mut dyn SuiteObserver) -> Result<Vec<BenchmarkRecord>> {
        let mut records = Vec::with_capacity(self.candidates.len());

        for candidate in self.candidates.clone() {
            observer.on_event(&SuiteEvent::Start {
                name: candidate.name,
            });

            match self.measure(candidate) {
                Ok(record) => {
                    observer.on_event(&SuiteEvent::Cycle { record: &record });
                    records.push(record);
                }
                Err(error) => {
                    self.set_phase(Phase::Aborted);
                    observer.on_event(&SuiteEvent::Error {
                        name: candidate.name,
                        error: &error,
                    });
                    return Err(error);
                }
            }
        }

        self.set_phase(Phase::Aggregating);
        let ranking = report::rank(&records);

        self.set_phase(Phase::Reporting);
        observer.on_event(&SuiteEvent::Complete {
            suite: &self.config.name,
            ranking: &ranking,
        });

        self.set_phase(Phase::Done);
        Ok(records)
    }

    fn set_phase(&mut self, phase: Phase) {
        trace!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn measure(&mut self, candidate: Candidate) -> Result<BenchmarkRecord> {
        let mut pair = SamplePair::generate(&mut self.rng);
        let mut prepared = Vec::new();

        self.set_phase(Phase::Warming);
        let warmup_end = Instant::now() + self.config.warmup;
        while Instant::now() < warmup_end {
            self.run_batch(candidate, &mut pair, &mut prepared, 1)?;
        }

        let mut iterations = 1;
        loop {
            let elapsed = self.run_batch(candidate, &mut pair, &mut prepared, iterations)?;
            if elapsed >= self.config.min_sample_time || iterations >= MAX_ITERATIONS_PER_SAMPLE {
                break;
            }
            iterations *= 2;
        }
        debug!("{}: {} iterations per sample", candidate.name, iterations);

        self.set_phase(Phase::Measuring);
        let started = Instant::now();
        let mut samples = Vec::new();
        let mut elapsed = Duration::ZERO;

        while samples.len() < self.config.max_samples
            && (samples.len() < self.config.min_samples || started.elapsed() < self.config.max_time)
        {
            let sample = self.run_batch(candidate, &mut pair, &mut prepared, iterations)?;
            elapsed += sample;
            #[allow(clippy::cast_precision_loss)]
            samples.push(sample.as_secs_f64() / iterations as f64);
        }

        let sample_count = samples.len();
        let record = BenchmarkRecord {
            name: candidate.name,
            stats: SampleStats::from_samples(samples),
            iterations: (iterations * sample_count) as u64,
            elapsed,
        };
        debug!(
            "{}: {} samples, mean {:?}, \u{b1}{:.2}%",
            record.name,
            record.stats.count(),
            record.stats.mean_duration(),
            record.stats.rme
        );

        Ok(record)
    }

    /// Runs `iterations` validated calls and returns the timed duration.
    fn run_batch(
        &mut self,
        candidate: Candidate,
        pair: &mut SamplePair,
        prepared: &mut Vec<(SamplePair, bool)>,
        iterations: usize,
    ) -> Result<Duration> {
        if self.config.time_mutation {
            let start = Instant::now();
            for _ in 0..iterations {
                pair.mutate(&mut self.rng);
                let actual = black_box((candidate.run)(
                    black_box(pair.subject()),
                    black_box(pair.prefix()),
                ));
                validate(candidate.name, pair, actual)?;
            }
            return Ok(start.elapsed());
        }

        let mut elapsed = Duration::ZERO;
        let mut remaining = iterations;
        while remaining > 0 {
            let chunk = remaining.min(PREPARED_CHUNK);
            remaining -= chunk;

            prepared.clear();
            for _ in 0..chunk {
                pair.mutate(&mut self.rng);
                prepared.push((pair.clone(), false));
            }

            let start = Instant::now();
            for (input, result) in prepared.iter_mut() {
                *result = black_box((candidate.run)(
                    black_box(input.subject()),
                    black_box(input.prefix()),
                ));
            }
            elapsed += start.elapsed();

            for (input, actual) in prepared.iter() {
                validate(candidate.name, input, *actual)?;
            }
        }

        Ok(elapsed)
    }
}
