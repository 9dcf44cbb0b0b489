//! FILENAME: core/engine/src/definition.rs
//! Table Definition - The serializable configuration.
//!
//! This module contains the types needed to DESCRIBE a table: its identity
//! metadata and how its row cache is allowed to grow. The generator itself
//! is code and is supplied separately when the table is built.

use serde::{Deserialize, Serialize};

/// Index of a row in a triangle (0-based).
pub type RowIndex = usize;

// ============================================================================
// CACHE CONFIGURATION
// ============================================================================

/// Growth policy for a table's row cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of rows retained. `None` means unbounded: every row
    /// ever requested stays cached for the life of the table.
    #[serde(default)]
    pub max_rows: Option<usize>,
}

impl CacheConfig {
    pub fn unbounded() -> Self {
        CacheConfig { max_rows: None }
    }

    pub fn bounded(max_rows: usize) -> Self {
        CacheConfig {
            max_rows: Some(max_rows),
        }
    }
}

// ============================================================================
// TABLE DEFINITION
// ============================================================================

/// Identity metadata of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Display name.
    pub name: String,

    /// Related catalog identifiers, e.g. "A000027". Opaque, in caller order.
    #[serde(default)]
    pub sim: Vec<String>,

    /// Caller's declaration that every diagonal entry is a unit (±1).
    #[serde(default)]
    pub invertible: bool,

    #[serde(default)]
    pub cache: CacheConfig,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        TableDefinition {
            name: name.into(),
            sim: Vec::new(),
            invertible: false,
            cache: CacheConfig::default(),
        }
    }

    pub fn with_sim<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sim = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_invertible(mut self, invertible: bool) -> Self {
        self.invertible = invertible;
        self
    }

    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }
}
