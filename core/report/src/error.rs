//! FILENAME: core/report/src/error.rs

use tabl_engine::TablError;
use thiserror::Error;

use crate::timer::TimerError;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Table error: {0}")]
    Table(#[from] TablError),

    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),
}
