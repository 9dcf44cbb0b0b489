//! FILENAME: core/engine/src/table.rs
//! Table - An infinite integer triangle backed by a cached row generator.
//!
//! This module takes a TableDefinition (identity metadata) and a
//! RowGenerator (the rows) and exposes every derived view of the triangle.
//!
//! Layers:
//! - core accessors (`val`, `row`, `tab`, `col`, `diag`, `adtab`, `mat`,
//!   `flat`, `off`) read rows straight from the cache
//! - transforms (`poly`, `acc`, `rev`, `inv` and their compositions) slice
//!   `tab(size)` and hand it to `algebra`

use std::fmt;
use std::rc::Rc;

use num_bigint::BigInt;

use crate::algebra::{self, Matrix, Triangle};
use crate::cache::{Row, RowCache, RowGenerator, SharedRow};
use crate::definition::{RowIndex, TableDefinition};
use crate::error::{TablError, TablResult};
use crate::logging::{log_debug, log_warn};

// ============================================================================
// OFFSET GENERATOR
// ============================================================================

/// The sub-triangle of another table starting at row `row_offset` with
/// the first `col_offset` columns of each row dropped.
///
/// Row n is `source(n + row_offset)[col_offset ..= col_offset + n]`. Source
/// rows are read through the source table's cache, so they are generated at
/// most once and their contract errors reach the caller.
#[derive(Clone)]
pub struct Offset {
    source: Rc<RowCache>,
    row_offset: usize,
    col_offset: usize,
}

impl Offset {
    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    pub fn col_offset(&self) -> usize {
        self.col_offset
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Offset")
            .field("row_offset", &self.row_offset)
            .field("col_offset", &self.col_offset)
            .finish_non_exhaustive()
    }
}

impl RowGenerator for Offset {
    /// Infallible form: a failing source row yields an empty row, which any
    /// `RowCache` rejects as a contract violation. Prefer `try_generate`.
    fn generate(&self, n: RowIndex) -> Row {
        self.try_generate(n).unwrap_or_default()
    }

    fn try_generate(&self, n: RowIndex) -> TablResult<Row> {
        // The source cache has already checked the row length (n + row_offset + 1),
        // and col_offset <= row_offset keeps the slice inside it.
        let row = self.source.get_row(n + self.row_offset)?;
        Ok(row[self.col_offset..=self.col_offset + n].to_vec())
    }
}

// ============================================================================
// TABLE
// ============================================================================

#[derive(Debug)]
pub struct Table {
    definition: TableDefinition,
    cache: Rc<RowCache>,
}

impl Table {
    /// Creates a table with an unbounded row cache.
    pub fn new<I, S>(
        generator: impl RowGenerator + 'static,
        name: impl Into<String>,
        sim: I,
        inv_q: bool,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let definition = TableDefinition::new(name)
            .with_sim(sim)
            .with_invertible(inv_q);
        Self::from_definition(definition, generator)
    }

    pub fn from_definition(
        definition: TableDefinition,
        generator: impl RowGenerator + 'static,
    ) -> Self {
        let cache = Rc::new(RowCache::with_config(generator, definition.cache));
        Table { definition, cache }
    }

    /// Name of the table.
    pub fn id(&self) -> &str {
        &self.definition.name
    }

    /// Related catalog identifiers.
    pub fn sim(&self) -> &[String] {
        &self.definition.sim
    }

    /// Whether the caller declared the triangle invertible.
    pub fn inv_q(&self) -> bool {
        self.definition.invertible
    }

    pub fn definition(&self) -> &TableDefinition {
        &self.definition
    }

    pub fn cache(&self) -> &RowCache {
        &self.cache
    }

    // ========================================================================
    // CORE ACCESSORS
    // ========================================================================

    /// T(n, k). Requires k <= n.
    pub fn val(&self, n: RowIndex, k: usize) -> TablResult<BigInt> {
        if k > n {
            return Err(TablError::InvalidIndex { n, k });
        }
        Ok(self.row(n)?[k].clone())
    }

    pub fn row(&self, n: RowIndex) -> TablResult<SharedRow> {
        self.cache.get_row(n)
    }

    /// Rows 0..size.
    pub fn tab(&self, size: usize) -> TablResult<Triangle> {
        log_debug!("TABLE", "{} tab size={}", self.id(), size);
        (0..size)
            .map(|n| self.row(n).map(|row| row.to_vec()))
            .collect()
    }

    /// Column k: T(k, k), T(k+1, k), ..., T(size-1, k).
    pub fn col(&self, k: usize, size: usize) -> TablResult<Row> {
        (k..size)
            .map(|n| self.row(n).map(|row| row[k].clone()))
            .collect()
    }

    /// Diagonal k: T(k, 0), T(k+1, 1), ..., T(size-1, size-1-k).
    pub fn diag(&self, k: usize, size: usize) -> TablResult<Row> {
        (k..size)
            .map(|n| self.row(n).map(|row| row[n - k].clone()))
            .collect()
    }

    /// One anti-diagonal (constant n+k) for each m in 0..size.
    pub fn adtab(&self, size: usize) -> TablResult<Triangle> {
        Ok(algebra::antidiagonals(&self.tab(size)?))
    }

    /// The first `size` rows as a square matrix, zero above the diagonal.
    pub fn mat(&self, size: usize) -> TablResult<Matrix> {
        Ok(algebra::to_matrix(&self.tab(size)?, size))
    }

    /// `tab(size)` read row by row into one sequence.
    pub fn flat(&self, size: usize) -> TablResult<Row> {
        Ok(algebra::flatten(&self.tab(size)?))
    }

    /// A generator for the sub-triangle anchored at row `i`, column `j`,
    /// sharing this table's row cache.
    /// Requires j <= i so that every reindexed row keeps n+1 entries.
    pub fn off(&self, i: usize, j: usize) -> TablResult<Offset> {
        if j > i {
            return Err(TablError::InvalidIndex { n: i, k: j });
        }
        Ok(Offset {
            source: Rc::clone(&self.cache),
            row_offset: i,
            col_offset: j,
        })
    }

    // ========================================================================
    // TRANSFORMS
    // ========================================================================

    /// Row n evaluated as a polynomial at x.
    pub fn poly(&self, n: RowIndex, x: &BigInt) -> TablResult<BigInt> {
        Ok(algebra::poly_eval(&self.row(n)?, x))
    }

    /// Row-wise partial sums.
    pub fn acc(&self, size: usize) -> TablResult<Triangle> {
        Ok(algebra::accumulate(&self.tab(size)?))
    }

    /// Row-wise reversal.
    pub fn rev(&self, size: usize) -> TablResult<Triangle> {
        Ok(algebra::reverse(&self.tab(size)?))
    }

    /// Inverse of `mat(size)`, as a triangle.
    pub fn inv(&self, size: usize) -> TablResult<Triangle> {
        self.invert(&self.tab(size)?, "inv")
    }

    /// Reversal of the inverse.
    pub fn revinv(&self, size: usize) -> TablResult<Triangle> {
        Ok(algebra::reverse(&self.inv(size)?))
    }

    /// Inverse of the reversal.
    pub fn invrev(&self, size: usize) -> TablResult<Triangle> {
        self.invert(&self.rev(size)?, "invrev")
    }

    /// Inverse of the reversal of the 1-indexed sub-triangle
    /// T'(n, k) = T(n+1, k+1).
    pub fn invrev11(&self, size: usize) -> TablResult<Triangle> {
        let shifted: Triangle = (1..=size)
            .map(|n| self.row(n).map(|row| row[1..].to_vec()))
            .collect::<TablResult<_>>()?;
        self.invert(&algebra::reverse(&shifted), "invrev11")
    }

    /// `f` applied to every entry, then row-wise partial sums.
    pub fn summap<F>(&self, f: F, size: usize) -> TablResult<Triangle>
    where
        F: Fn(&BigInt) -> BigInt,
    {
        Ok(algebra::accumulate(&algebra::map_entries(&self.tab(size)?, f)))
    }

    /// `f` applied to every entry, then inverted.
    pub fn invmap<F>(&self, f: F, size: usize) -> TablResult<Triangle>
    where
        F: Fn(&BigInt) -> BigInt,
    {
        let mapped = algebra::map_entries(&self.tab(size)?, f);
        self.invert(&mapped, "invmap")
    }

    /// Runs the inversion and reports when the outcome contradicts the
    /// declared invertibility flag. The flag never short-circuits.
    fn invert(&self, triangle: &[Row], op: &str) -> TablResult<Triangle> {
        let result = algebra::invert(triangle);
        match (&result, self.inv_q()) {
            (Err(e), true) => {
                log_warn!("TABLE", "{} {} failed on a declared-invertible table: {}", self.id(), op, e)
            }
            (Ok(_), false) if !triangle.is_empty() => {
                log_debug!("TABLE", "{} {} succeeded although not declared invertible", self.id(), op)
            }
            _ => {}
        }
        result
    }
}
