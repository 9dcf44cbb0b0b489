//! FILENAME: core/report/src/timer.rs
//! PURPOSE: Wall-clock timing of table construction.
//! CONTEXT: A benchmark times one `tab(size)` call on a fresh or warm
//! table and logs the elapsed seconds under the table's name.

use std::time::{Duration, Instant};

use tabl_engine::{log_info, Table, TableRegistry};
use thiserror::Error;

use crate::error::ReportError;

/// Rows built by a default benchmark.
pub const DEFAULT_BENCH_SIZE: usize = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("Timer is running. First stop it.")]
    AlreadyRunning,

    #[error("Timer is not running.")]
    NotRunning,
}

/// A labelled start/stop stopwatch.
#[derive(Debug, Clone)]
pub struct Timer {
    label: String,
    started: Option<Instant>,
}

impl Timer {
    pub fn new(label: impl Into<String>) -> Self {
        Timer {
            label: label.into(),
            started: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.started.is_some() {
            return Err(TimerError::AlreadyRunning);
        }
        self.started = Some(Instant::now());
        Ok(())
    }

    /// Stops the timer and logs the elapsed time.
    pub fn stop(&mut self) -> Result<Duration, TimerError> {
        let started = self.started.take().ok_or(TimerError::NotRunning)?;
        let elapsed = started.elapsed();
        log_info!("BENCH", "{}", format_elapsed(&self.label, elapsed));
        Ok(elapsed)
    }
}

/// `label` right-aligned to 17 columns, then seconds with 4 decimals.
pub fn format_elapsed(label: &str, elapsed: Duration) -> String {
    format!("{:>17} {:.4} sec", label, elapsed.as_secs_f64())
}

/// Times a single `tab(size)` call.
pub fn benchmark(table: &Table, size: usize) -> Result<Duration, ReportError> {
    let mut timer = Timer::new(table.id());
    timer.start()?;
    table.tab(size)?;
    Ok(timer.stop()?)
}

/// Benchmarks every table of the registry, in registration order.
pub fn benchmark_all(
    registry: &TableRegistry,
    size: usize,
) -> Result<Vec<(String, Duration)>, ReportError> {
    registry
        .iter()
        .map(|table| benchmark(table, size).map(|d| (table.id().to_string(), d)))
        .collect()
}
