//! Runs every prefix comparison strategy and prints the ranking.

use std::process::ExitCode;

use prefix_bench::{BenchmarkRecord, ConsoleReporter, Result, Suite, SuiteConfig};

/// Process status for a finished run: 0 on completion, 1 when a strategy
/// failed validation.
fn exit_status(result: &Result<Vec<BenchmarkRecord>>) -> u8 {
    match result {
        Ok(records) => {
            log::debug!("measured {} strategies", records.len());
            0
        }
        Err(error) => {
            log::debug!("aborted: {error}");
            1
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = SuiteConfig::default();
    let mut reporter = ConsoleReporter::stdio(config.detailed);

    let result = Suite::standard(config).run(&mut reporter);
    ExitCode::from(exit_status(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefix_bench::{BenchError, SampleStats};
    use std::time::Duration;

    #[test]
    fn test_completed_run_exits_zero() {
        let records = vec![BenchmarkRecord {
            name: "startsWith",
            stats: SampleStats::from_samples(vec![1e-9]),
            iterations: 1,
            elapsed: Duration::from_nanos(1),
        }];
        assert_eq!(exit_status(&Ok(records)), 0);
        assert_eq!(exit_status(&Ok(Vec::new())), 0);
    }

    #[test]
    fn test_validation_failure_exits_one() {
        let error = BenchError::ResultMismatch {
            strategy: "slice",
            subject: "abc".to_string(),
            prefix: "ab".to_string(),
            expected: true,
            actual: false,
        };
        assert_eq!(exit_status(&Err(error)), 1);
    }
}
