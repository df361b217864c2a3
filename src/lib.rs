#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Modules
//!
//! - [`strategy`] — The prefix comparison strategies and the reference predicate
//! - [`sample`] — The subject/prefix pair and its mutation step
//! - [`suite`] — The benchmark driver, its events and the validator
//! - [`stats`] — Summary statistics over timing samples
//! - [`report`] — Ranking and console output
//! - [`config`] — Suite configuration
//! - [`error`] — Error types and result type

pub mod config;
pub mod error;
pub mod report;
pub mod sample;
pub mod stats;
pub mod strategy;
pub mod suite;

pub use config::SuiteConfig;
pub use error::{BenchError, Result};
pub use report::{rank, ConsoleReporter, RankedEntry, Relative};
pub use sample::{Mutation, SamplePair};
pub use stats::SampleStats;
pub use strategy::{PrefixFn, Strategy};
pub use suite::{validate, BenchmarkRecord, Phase, Suite, SuiteEvent, SuiteObserver};
