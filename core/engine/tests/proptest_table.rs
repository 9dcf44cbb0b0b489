//! FILENAME: tests/proptest_table.rs
//! PURPOSE: Property tests for table accessors and triangle algebra.

mod common;

use common::linear_table;
use num_bigint::BigInt;
use proptest::prelude::*;
use tabl_engine::algebra::{identity, invert, mat_mul, reverse, to_matrix};
use tabl_engine::Triangle;

/// A random unit-lower-triangular triangle with small off-diagonal entries.
fn arb_unit_triangle(max_size: usize) -> impl Strategy<Value = Triangle> {
    (0..=max_size).prop_flat_map(|size| {
        (
            proptest::collection::vec(-5i64..=5, size * (size + 1) / 2),
            proptest::collection::vec(any::<bool>(), size),
        )
            .prop_map(move |(entries, signs)| {
                let mut entries = entries.into_iter();
                (0..size)
                    .map(|n| {
                        let mut row: Vec<BigInt> =
                            entries.by_ref().take(n + 1).map(BigInt::from).collect();
                        row[n] = if signs[n] { BigInt::from(1) } else { BigInt::from(-1) };
                        row
                    })
                    .collect::<Triangle>()
            })
    })
}

proptest! {
    /// rev(rev(tab)) == tab
    #[test]
    fn reversal_is_an_involution(
        a in -20i64..20, b in -20i64..20, c in -20i64..20, size in 0usize..16
    ) {
        let t = linear_table(a, b, c);
        let tab = t.tab(size).unwrap();
        prop_assert_eq!(reverse(&reverse(&tab)), tab.clone());
        prop_assert_eq!(reverse(&t.rev(size).unwrap()), tab);
    }

    /// flat is the row-major concatenation of tab, of length size(size+1)/2
    #[test]
    fn flat_concatenates_rows(
        a in -20i64..20, b in -20i64..20, c in -20i64..20, size in 0usize..16
    ) {
        let t = linear_table(a, b, c);
        let flat = t.flat(size).unwrap();
        prop_assert_eq!(flat.len(), size * (size + 1) / 2);
        let concat: Vec<BigInt> = t.tab(size).unwrap().into_iter().flatten().collect();
        prop_assert_eq!(flat, concat);
    }

    /// val(n, k) == row(n)[k] and rows have n + 1 entries
    #[test]
    fn val_agrees_with_row(
        a in -20i64..20, b in -20i64..20, c in -20i64..20,
        (n, k) in (0usize..40).prop_flat_map(|n| (Just(n), 0..=n))
    ) {
        let t = linear_table(a, b, c);
        let row = t.row(n).unwrap();
        prop_assert_eq!(row.len(), n + 1);
        prop_assert_eq!(t.val(n, k).unwrap(), row[k].clone());
        prop_assert_eq!(t.val(n, k).unwrap(), BigInt::from(a * n as i64 + b * k as i64 + c));
    }

    /// col and diag read the same entries as tab
    #[test]
    fn col_and_diag_agree_with_tab(
        a in -20i64..20, b in -20i64..20, size in 0usize..12, k in 0usize..12
    ) {
        let t = linear_table(a, b, 1);
        let tab = t.tab(size).unwrap();
        let col: Vec<BigInt> = (k..size).map(|n| tab[n][k].clone()).collect();
        let diag: Vec<BigInt> = (k..size).map(|n| tab[n][n - k].clone()).collect();
        prop_assert_eq!(t.col(k, size).unwrap(), col);
        prop_assert_eq!(t.diag(k, size).unwrap(), diag);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// mat × inv == identity for every unit-lower-triangular matrix
    #[test]
    fn inverse_is_exact(triangle in arb_unit_triangle(9)) {
        let size = triangle.len();
        let inverse = invert(&triangle).unwrap();
        prop_assert_eq!(
            mat_mul(&to_matrix(&triangle, size), &to_matrix(&inverse, size)),
            identity(size)
        );
        prop_assert_eq!(
            mat_mul(&to_matrix(&inverse, size), &to_matrix(&triangle, size)),
            identity(size)
        );
    }

    /// Inverting twice gives the triangle back
    #[test]
    fn inverse_is_an_involution(triangle in arb_unit_triangle(9)) {
        let twice = invert(&invert(&triangle).unwrap()).unwrap();
        prop_assert_eq!(twice, triangle);
    }
}
