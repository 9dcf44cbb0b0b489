//! FILENAME: core/report/src/bin/tabl-preview.rs
// PURPOSE: Previews and benchmarks the demo tables.
// CONTEXT: Installs a console sink for the engine's unified log lines
//          (seq|level|category|message) so timings show up as they happen.

use log::{Level, LevelFilter, Log, Metadata, Record};
use tabl_engine::families::demo_registry;
use tabl_report::{benchmark_all, preview_lenient, ReportError, DEFAULT_BENCH_SIZE};

/// Rows shown by each preview.
const PREVIEW_SIZE: usize = 8;

struct ConsoleLog;

impl Log for ConsoleLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            Level::Error => "E",
            Level::Warn => "W",
            Level::Info => "I",
            Level::Debug => "D",
            Level::Trace => "T",
        };
        // The engine prefixes every message with its sequence number.
        let line = record.args().to_string();
        let (seq, message) = line.split_once('|').unwrap_or(("0", line.as_str()));
        eprintln!("{}|{}|{}|{}", seq, level, record.target(), message);
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLog = ConsoleLog;

fn main() -> Result<(), ReportError> {
    if let Err(e) = log::set_logger(&LOGGER) {
        eprintln!("[LOG_INIT] console logger not installed: {}", e);
    }
    log::set_max_level(LevelFilter::Info);

    let registry = demo_registry();

    for table in &registry {
        print!("{}", preview_lenient(table, PREVIEW_SIZE));
    }

    let timings = benchmark_all(&registry, DEFAULT_BENCH_SIZE)?;
    println!("\n{} tables tested!\n", timings.len());
    Ok(())
}
