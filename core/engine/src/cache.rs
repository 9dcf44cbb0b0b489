//! FILENAME: core/engine/src/cache.rs
//! Row Cache - Memoizing layer over a row generator.
//!
//! The cache is designed for:
//! - Computing each row at most once for the life of the table
//! - Handing out cached rows without copying (`Rc<[BigInt]>`)
//! - Catching generators that break the row-length contract
//!
//! Trade-off: nothing is ever evicted. Unless a `CacheConfig::max_rows`
//! bound is configured, memory grows with the number of distinct rows
//! requested. `stats()` and `len()` expose the growth; a bound stops
//! retention but never recomputes a row that is already cached.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use num_bigint::BigInt;
use rustc_hash::FxHashMap;

use crate::definition::{CacheConfig, RowIndex};
use crate::error::{TablError, TablResult};
use crate::logging::{log_debug, log_error, log_warn};

/// A materialized row of a triangle.
pub type Row = Vec<BigInt>;

/// A row as handed out by the cache, shared with every other reader.
pub type SharedRow = Rc<[BigInt]>;

// ============================================================================
// ROW GENERATOR
// ============================================================================

/// Produces row `n` of a triangle. Row `n` must have exactly `n + 1`
/// entries, and the same `n` must always produce the same row.
pub trait RowGenerator {
    fn generate(&self, n: RowIndex) -> Row;

    /// Fallible form used by `RowCache`. Generators derived from another
    /// table override it to pass that table's errors through.
    fn try_generate(&self, n: RowIndex) -> TablResult<Row> {
        Ok(self.generate(n))
    }
}

impl<F> RowGenerator for F
where
    F: Fn(RowIndex) -> Row,
{
    fn generate(&self, n: RowIndex) -> Row {
        self(n)
    }
}

// ============================================================================
// STATISTICS
// ============================================================================

/// Statistics about the cache, for sizing decisions in long-lived processes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests answered from the cache.
    pub hits: u64,
    /// Requests that invoked the generator.
    pub misses: u64,
    /// Rows currently retained.
    pub cached_rows: usize,
    /// Rows computed but not retained because the bound was reached.
    pub uncached_rows: u64,
}

// ============================================================================
// MAIN CACHE STRUCT
// ============================================================================

pub struct RowCache {
    generator: Rc<dyn RowGenerator>,
    config: CacheConfig,
    rows: RefCell<FxHashMap<RowIndex, SharedRow>>,
    stats: Cell<CacheStats>,
    /// Whether the "bound reached" warning has been logged.
    warned_full: Cell<bool>,
}

impl RowCache {
    /// Creates an unbounded cache over `generator`.
    pub fn new(generator: impl RowGenerator + 'static) -> Self {
        Self::with_config(generator, CacheConfig::default())
    }

    pub fn with_config(generator: impl RowGenerator + 'static, config: CacheConfig) -> Self {
        Self::from_shared(Rc::new(generator), config)
    }

    /// Creates a cache over a generator that may also be used elsewhere.
    pub fn from_shared(generator: Rc<dyn RowGenerator>, config: CacheConfig) -> Self {
        RowCache {
            generator,
            config,
            rows: RefCell::new(FxHashMap::default()),
            stats: Cell::new(CacheStats::default()),
            warned_full: Cell::new(false),
        }
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Returns row `n`, invoking the generator only if the row is not cached.
    pub fn get_row(&self, n: RowIndex) -> TablResult<SharedRow> {
        if let Some(row) = self.rows.borrow().get(&n) {
            self.bump(|s| s.hits += 1);
            return Ok(Rc::clone(row));
        }

        // The generator runs with no borrow held on the row map.
        let row: SharedRow = Rc::from(self.generate_checked(n)?);
        self.bump(|s| s.misses += 1);

        if self.has_room() {
            self.rows.borrow_mut().insert(n, Rc::clone(&row));
        } else {
            self.bump(|s| s.uncached_rows += 1);
            if !self.warned_full.replace(true) {
                log_warn!(
                    "CACHE",
                    "row cache full at {} rows; row {} and later new rows are not retained",
                    self.len(),
                    n
                );
            }
        }
        Ok(row)
    }

    /// Regenerates row `n` and checks it against the cached copy.
    /// A disagreement means the generator is not deterministic.
    pub fn verify_row(&self, n: RowIndex) -> TablResult<()> {
        let cached = self.get_row(n)?;
        let fresh = self.generate_checked(n)?;
        if cached[..] != fresh[..] {
            log_error!("CACHE", "row {} changed between generator calls", n);
            return Err(TablError::GeneratorContractViolation {
                row: n,
                reason: "regenerated row differs from cached row".to_string(),
            });
        }
        Ok(())
    }

    /// Number of rows currently retained.
    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, n: RowIndex) -> bool {
        self.rows.borrow().contains_key(&n)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            cached_rows: self.len(),
            ..self.stats.get()
        }
    }

    fn generate_checked(&self, n: RowIndex) -> TablResult<Row> {
        log_debug!("CACHE", "generate row {}", n);
        let row = self.generator.try_generate(n)?;
        if row.len() != n + 1 {
            log_error!(
                "CACHE",
                "generator returned {} entries for row {}",
                row.len(),
                n
            );
            return Err(TablError::GeneratorContractViolation {
                row: n,
                reason: format!("expected {} entries, got {}", n + 1, row.len()),
            });
        }
        Ok(row)
    }

    fn has_room(&self) -> bool {
        match self.config.max_rows {
            Some(max) => self.len() < max,
            None => true,
        }
    }

    fn bump(&self, update: impl FnOnce(&mut CacheStats)) {
        let mut stats = self.stats.get();
        update(&mut stats);
        self.stats.set(stats);
    }
}

impl fmt::Debug for RowCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowCache")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}
