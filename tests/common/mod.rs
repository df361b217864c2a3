//! Common test helpers shared across the integration tests.

use prefix_bench::{SuiteConfig, SuiteEvent, SuiteObserver};
use std::time::Duration;

/// A configuration that measures each strategy for a couple of milliseconds.
pub fn quick_config(seed: u64) -> SuiteConfig {
    SuiteConfig::default()
        .with_warmup(Duration::from_micros(200))
        .with_min_sample_time(Duration::from_micros(50))
        .with_max_time(Duration::from_millis(2))
        .with_samples(3, 50)
        .with_seed(seed)
}

/// Observer that keeps a one-line summary of every event.
#[derive(Debug, Default)]
pub struct EventLog {
    /// One line per event received.
    pub lines: Vec<String>,
}

impl SuiteObserver for EventLog {
    fn on_event(&mut self, event: &SuiteEvent<'_>) {
        let line = match event {
            SuiteEvent::Start { name } => format!("start {name}"),
            SuiteEvent::Cycle { record } => format!("cycle {}", record.name),
            SuiteEvent::Error { name, error } => format!("error {name}: {error}"),
            SuiteEvent::Complete { suite, ranking } => {
                let names: Vec<_> = ranking.iter().map(|e| e.record.name).collect();
                format!("complete {suite}: {}", names.join(", "))
            }
        };
        self.lines.push(line);
    }
}
