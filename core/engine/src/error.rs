//! FILENAME: core/engine/src/error.rs

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TablError {
    /// A column index beyond its row, or an offset that would cut rows short.
    #[error("Invalid index: T({n}, {k}) is outside the triangle")]
    InvalidIndex { n: usize, k: usize },

    #[error("Not invertible: diagonal entry {value} in row {row} is not a unit")]
    NotInvertible { row: usize, value: BigInt },

    #[error("Generator contract violation at row {row}: {reason}")]
    GeneratorContractViolation { row: usize, reason: String },
}

pub type TablResult<T> = Result<T, TablError>;
