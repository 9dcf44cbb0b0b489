//! FILENAME: core/report/src/lib.rs
//! Reporting utilities for tabl-engine tables.
//!
//! These only call into the public accessors of `Table` and format what
//! they return:
//! - `format`: sequence and triangle rendering
//! - `timer`: stopwatch and benchmarks
//! - `preview`: the full accessor dump of a table

mod error;
pub mod format;
pub mod preview;
pub mod timer;

pub use error::ReportError;
pub use format::{format_seq, format_triangle, seq_to_string};
pub use preview::{preview, preview_lenient};
pub use timer::{benchmark, benchmark_all, format_elapsed, Timer, TimerError, DEFAULT_BENCH_SIZE};
