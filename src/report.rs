//! Ranking and console output.
//!
//! [`rank`] orders finished benchmark records from fastest to slowest and
//! expresses each one relative to the fastest. [`ConsoleReporter`] turns suite
//! events into the plain text report:
//!
//! ```text
//! Starting substring
//!     Completed substring
//! ...
//! Completed Compare String Prefix
//!     startsWith; Fastest
//!     substring; 1.204 times slower
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::suite::{BenchmarkRecord, SuiteEvent, SuiteObserver};

/// Ratio to the best mean at or below which a record still counts as fastest.
pub const FASTEST_TOLERANCE: f64 = 1.001;

/// Speed of a record relative to the fastest one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Relative {
    /// Within [`FASTEST_TOLERANCE`] of the best mean.
    Fastest,
    /// This many times slower than the best mean.
    Slower(f64),
}

impl Relative {
    /// Classifies a mean against the best mean of the run.
    #[must_use]
    pub fn from_means(mean: f64, best: f64) -> Self {
        let ratio = if best > 0.0 {
            mean / best
        } else if mean > 0.0 {
            f64::INFINITY
        } else {
            1.0
        };

        if ratio > FASTEST_TOLERANCE {
            Self::Slower(ratio)
        } else {
            Self::Fastest
        }
    }
}

impl fmt::Display for Relative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fastest => f.write_str("Fastest"),
            Self::Slower(ratio) => write!(f, "{ratio:.3} times slower"),
        }
    }
}

/// One line of the final ranking.
#[derive(Debug, Clone, Copy)]
pub struct RankedEntry<'a> {
    /// The measured record.
    pub record: &'a BenchmarkRecord,
    /// Its speed relative to the fastest record.
    pub relative: Relative,
}

impl RankedEntry<'_> {
    /// Renders the entry, optionally with the record's statistics.
    #[must_use]
    pub fn line(&self, detailed: bool) -> String {
        let record = self.record;
        if detailed {
            format!(
                "{} x {} ops/sec \u{b1}{:.2}% ({} runs sampled); {}",
                record.name,
                format_ops(record.stats.ops_per_sec()),
                record.stats.rme,
                record.stats.count(),
                self.relative
            )
        } else {
            format!("{}; {}", record.name, self.relative)
        }
    }
}

/// Sorts records by ascending mean time and rates each against the fastest.
///
/// Records with equal means keep their registration order.
#[must_use]
pub fn rank(records: &[BenchmarkRecord]) -> Vec<RankedEntry<'_>> {
    let mut sorted: Vec<&BenchmarkRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.stats.mean.total_cmp(&b.stats.mean));

    let Some(best) = sorted.first().map(|record| record.stats.mean) else {
        return Vec::new();
    };

    sorted
        .into_iter()
        .map(|record| RankedEntry {
            record,
            relative: Relative::from_means(record.stats.mean, best),
        })
        .collect()
}

/// Formats operations per second with thousands separators; rates below 100
/// keep two decimals.
#[must_use]
pub fn format_ops(ops: f64) -> String {
    if ops < 100.0 {
        return format!("{ops:.2}");
    }

    let digits = format!("{ops:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Writes suite events as the plain text report.
///
/// Progress and ranking go to `out`, validation failures to `err`.
#[derive(Debug)]
pub struct ConsoleReporter<O: Write, E: Write> {
    out: O,
    err: E,
    detailed: bool,
}

impl ConsoleReporter<io::Stdout, io::Stderr> {
    /// Reporter writing to the process's standard output and error.
    #[must_use]
    pub fn stdio(detailed: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), detailed)
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    /// Reporter writing to the given streams.
    #[must_use]
    pub fn new(out: O, err: E, detailed: bool) -> Self {
        Self { out, err, detailed }
    }

    /// Returns the output and error streams.
    #[must_use]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn write_event(&mut self, event: &SuiteEvent<'_>) -> io::Result<()> {
        match event {
            SuiteEvent::Start { name } => writeln!(self.out, "Starting {name}"),
            SuiteEvent::Cycle { record } => writeln!(self.out, "    Completed {}", record.name),
            SuiteEvent::Error { name, error } => {
                writeln!(self.err, "    Error in {name}: {error}")?;
                self.err.flush()
            }
            SuiteEvent::Complete { suite, ranking } => {
                writeln!(self.out, "Completed {suite}")?;
                for entry in *ranking {
                    writeln!(self.out, "    {}", entry.line(self.detailed))?;
                }
                self.out.flush()
            }
        }
    }
}

impl<O: Write, E: Write> SuiteObserver for ConsoleReporter<O, E> {
    fn on_event(&mut self, event: &SuiteEvent<'_>) {
        if let Err(err) = self.write_event(event) {
            log::warn!("failed to write report: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;
    use crate::stats::SampleStats;
    use std::time::Duration;

    fn record(name: &'static str, mean: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            name,
            stats: SampleStats::from_samples(vec![mean, mean]),
            iterations: 10,
            elapsed: Duration::from_millis(1),
        }
    }

    #[test]
    fn test_rank_orders_by_mean() {
        let records = vec![record("slow", 3.0), record("fast", 1.0), record("mid", 1.5)];
        let ranking = rank(&records);

        let names: Vec<_> = ranking.iter().map(|e| e.record.name).collect();
        assert_eq!(names, ["fast", "mid", "slow"]);
        assert_eq!(ranking[0].relative, Relative::Fastest);
        assert_eq!(ranking[1].relative, Relative::Slower(1.5));
        assert_eq!(ranking[2].relative, Relative::Slower(3.0));
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn test_near_ties_are_fastest() {
        assert_eq!(Relative::from_means(1.0005, 1.0), Relative::Fastest);
        assert_eq!(Relative::from_means(1.001, 1.0), Relative::Fastest);
        assert!(matches!(
            Relative::from_means(1.002, 1.0),
            Relative::Slower(_)
        ));
        assert_eq!(Relative::from_means(0.0, 0.0), Relative::Fastest);
    }

    #[test]
    fn test_relative_display() {
        assert_eq!(Relative::Fastest.to_string(), "Fastest");
        assert_eq!(Relative::Slower(2.0).to_string(), "2.000 times slower");
        assert_eq!(Relative::Slower(1.23456).to_string(), "1.235 times slower");
    }

    #[test]
    fn test_format_ops() {
        assert_eq!(format_ops(12.345), "12.35");
        assert_eq!(format_ops(100.0), "100");
        assert_eq!(format_ops(1234.4), "1,234");
        assert_eq!(format_ops(12_345_678.0), "12,345,678");
    }

    #[test]
    fn test_detailed_line() {
        let records = vec![record("startsWith", 0.001)];
        let ranking = rank(&records);
        assert_eq!(
            ranking[0].line(true),
            "startsWith x 1,000 ops/sec \u{b1}0.00% (2 runs sampled); Fastest"
        );
        assert_eq!(ranking[0].line(false), "startsWith; Fastest");
    }

    #[test]
    fn test_console_output() {
        let records = vec![record("b", 2.0), record("a", 1.0)];
        let ranking = rank(&records);
        let error = BenchError::ResultMismatch {
            strategy: "b",
            subject: "x".to_string(),
            prefix: "y".to_string(),
            expected: false,
            actual: true,
        };

        let mut reporter = ConsoleReporter::new(Vec::new(), Vec::new(), false);
        reporter.on_event(&SuiteEvent::Start { name: "a" });
        reporter.on_event(&SuiteEvent::Cycle {
            record: &records[1],
        });
        reporter.on_event(&SuiteEvent::Error {
            name: "b",
            error: &error,
        });
        reporter.on_event(&SuiteEvent::Complete {
            suite: "Suite",
            ranking: &ranking,
        });

        let (out, err) = reporter.into_inner();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Starting a\n    Completed a\nCompleted Suite\n    a; Fastest\n    b; 2.000 times slower\n"
        );
        assert!(String::from_utf8(err)
            .unwrap()
            .starts_with("    Error in b: Invalid result"));
    }
}
