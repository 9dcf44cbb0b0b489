//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the integer triangle engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.
//!
//! Layers:
//! - `definition`: Serializable configuration (what a table IS)
//! - `cache`: Memoized rows (HOW rows are produced)
//! - `table`: Derived views of one triangle (WHAT callers read)
//! - `algebra`: Transforms over finite triangle slices (HOW we calculate)
//! - `registry`: Explicit collections of tables for cross-referencing

pub mod logging;

pub mod algebra;
pub mod cache;
pub mod definition;
pub mod error;
pub mod families;
pub mod registry;
pub mod table;

// Re-export commonly used types at the crate root
pub use algebra::{Matrix, Triangle};
pub use cache::{CacheStats, Row, RowCache, RowGenerator, SharedRow};
pub use definition::{CacheConfig, RowIndex, TableDefinition};
pub use error::{TablError, TablResult};
pub use registry::TableRegistry;
pub use table::{Offset, Table};
