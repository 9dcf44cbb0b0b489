//! FILENAME: core/engine/src/algebra.rs
//! PURPOSE: Algorithms over finite, already-materialized triangles.
//! CONTEXT: A triangle here is a slice of rows where row n has n+1 entries.
//! Every function returns a new triangle; inputs are never modified.
//! Arithmetic is exact (`BigInt`) throughout.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::cache::Row;
use crate::error::{TablError, TablResult};
use crate::logging::{log_enter, log_exit};

/// A finite triangle: rows 0..len, row n with n+1 entries.
pub type Triangle = Vec<Row>;

/// A dense square matrix, row-major.
pub type Matrix = Vec<Vec<BigInt>>;

// ============================================================================
// ROW-WISE TRANSFORMS
// ============================================================================

/// Evaluates `row` as a polynomial, Σ row[k]·x^k, by Horner's rule.
pub fn poly_eval(row: &[BigInt], x: &BigInt) -> BigInt {
    row.iter()
        .rev()
        .fold(BigInt::zero(), |acc, coeff| acc * x + coeff)
}

/// Replaces every row by its prefix sums.
pub fn accumulate(triangle: &[Row]) -> Triangle {
    triangle
        .iter()
        .map(|row| {
            let mut sum = BigInt::zero();
            let prefix: Row = row
                .iter()
                .map(|v| {
                    sum += v;
                    sum.clone()
                })
                .collect();
            prefix
        })
        .collect()
}

/// Reverses every row: rev[n][k] = T[n][n-k].
pub fn reverse(triangle: &[Row]) -> Triangle {
    triangle
        .iter()
        .map(|row| row.iter().rev().cloned().collect())
        .collect()
}

/// Applies `f` to every entry.
pub fn map_entries<F>(triangle: &[Row], f: F) -> Triangle
where
    F: Fn(&BigInt) -> BigInt,
{
    triangle
        .iter()
        .map(|row| row.iter().map(&f).collect())
        .collect()
}

/// Row-major concatenation.
pub fn flatten(triangle: &[Row]) -> Vec<BigInt> {
    triangle.iter().flat_map(|row| row.iter().cloned()).collect()
}

/// Anti-diagonal m holds T(m,0), T(m-1,1), ..., i.e. all n+k = m with k <= n.
/// One anti-diagonal per row of the input.
pub fn antidiagonals(triangle: &[Row]) -> Triangle {
    (0..triangle.len())
        .map(|m| (0..=m / 2).map(|k| triangle[m - k][k].clone()).collect())
        .collect()
}

// ============================================================================
// INVERSION
// ============================================================================

/// The multiplicative inverse of `value` in the integers, if it has one.
fn unit_inverse(value: &BigInt) -> Option<BigInt> {
    // ±1 are their own inverses
    if value.abs().is_one() {
        Some(value.clone())
    } else {
        None
    }
}

/// Inverts a lower-triangular matrix given as a triangle, by forward
/// substitution:
///
/// ```text
/// inv(n, n) = 1 / T(n, n)
/// inv(n, k) = -(1 / T(n, n)) * sum_{j=k}^{n-1} T(n, j) * inv(j, k)    (k < n)
/// ```
///
/// Fails with `NotInvertible` at the first diagonal entry that is not ±1,
/// and with `GeneratorContractViolation` at the first row whose length is
/// not n+1.
pub fn invert(triangle: &[Row]) -> TablResult<Triangle> {
    log_enter!("ALGEBRA", "invert", "size={}", triangle.len());

    let mut inverse: Triangle = Vec::with_capacity(triangle.len());
    for (n, row) in triangle.iter().enumerate() {
        if row.len() != n + 1 {
            return Err(TablError::GeneratorContractViolation {
                row: n,
                reason: format!("expected {} entries, got {}", n + 1, row.len()),
            });
        }

        let diagonal = &row[n];
        let d_inv = unit_inverse(diagonal).ok_or_else(|| TablError::NotInvertible {
            row: n,
            value: diagonal.clone(),
        })?;

        let mut inv_row = vec![BigInt::zero(); n + 1];
        for k in 0..n {
            let sum: BigInt = (k..n).map(|j| &row[j] * &inverse[j][k]).sum();
            inv_row[k] = -(&d_inv * sum);
        }
        inv_row[n] = d_inv;
        inverse.push(inv_row);
    }

    log_exit!("ALGEBRA", "invert");
    Ok(inverse)
}

// ============================================================================
// MATRIX FORM
// ============================================================================

/// Embeds the first `size` rows in a size×size matrix, zero above the diagonal.
///
/// # Panics
///
/// If `triangle` has fewer than `size` rows or row n has fewer than n+1
/// entries. `Table::mat` always passes `tab(size)`.
pub fn to_matrix(triangle: &[Row], size: usize) -> Matrix {
    (0..size)
        .map(|n| {
            (0..size)
                .map(|k| {
                    if k <= n {
                        triangle[n][k].clone()
                    } else {
                        BigInt::zero()
                    }
                })
                .collect()
        })
        .collect()
}

/// The lower triangle of a square matrix.
pub fn from_matrix(matrix: &[Vec<BigInt>]) -> Triangle {
    matrix
        .iter()
        .enumerate()
        .map(|(n, row)| row[..=n].to_vec())
        .collect()
}

pub fn identity(size: usize) -> Matrix {
    (0..size)
        .map(|n| {
            (0..size)
                .map(|k| if n == k { BigInt::one() } else { BigInt::zero() })
                .collect()
        })
        .collect()
}

/// Product of two square matrices of equal size.
pub fn mat_mul(a: &[Vec<BigInt>], b: &[Vec<BigInt>]) -> Matrix {
    let size = a.len();
    (0..size)
        .map(|i| {
            (0..size)
                .map(|j| (0..size).map(|k| &a[i][k] * &b[k][j]).sum::<BigInt>())
                .collect()
        })
        .collect()
}
