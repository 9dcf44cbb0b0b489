//! FILENAME: core/engine/src/families.rs
//! PURPOSE: A handful of concrete triangles.
//! CONTEXT: Used by the preview binary, the benchmarks and the tests as
//! known reference points. `naturals` is the simplest possible generator;
//! the others are unit-lower-triangular and therefore invertible.

use num_bigint::BigInt;
use num_traits::One;

use crate::cache::Row;
use crate::definition::RowIndex;
use crate::registry::TableRegistry;
use crate::table::Table;

/// The natural numbers read row by row: row n is n(n+1)/2 + 1 ..= (n+1)(n+2)/2.
pub fn naturals(n: RowIndex) -> Row {
    let start = n * (n + 1) / 2;
    (start..start + n + 1).map(|i| BigInt::from(i + 1)).collect()
}

/// T(n, k) = 1.
pub fn ones(n: RowIndex) -> Row {
    vec![BigInt::one(); n + 1]
}

/// Pascal's triangle, T(n, k) = C(n, k).
pub fn binomial(n: RowIndex) -> Row {
    let mut row = Vec::with_capacity(n + 1);
    let mut c = BigInt::one();
    for k in 0..=n {
        row.push(c.clone());
        c = c * BigInt::from(n - k) / BigInt::from(k + 1);
    }
    row
}

/// T(n, k) = (-1)^(n-k).
pub fn alternating(n: RowIndex) -> Row {
    (0..=n)
        .map(|k| {
            if (n - k) % 2 == 0 {
                BigInt::one()
            } else {
                -BigInt::one()
            }
        })
        .collect()
}

pub fn naturals_table() -> Table {
    Table::new(naturals, "Naturals", ["A000027", "A001477"], true)
}

pub fn ones_table() -> Table {
    Table::new(ones, "Ones", ["A000012"], true)
}

pub fn binomial_table() -> Table {
    Table::new(binomial, "Binomial", ["A007318"], true)
}

pub fn alternating_table() -> Table {
    Table::new(alternating, "Alternating", ["A097807"], true)
}

/// Every table in this module, in one registry.
pub fn demo_registry() -> TableRegistry {
    let mut registry = TableRegistry::new();
    registry.register(naturals_table());
    registry.register(ones_table());
    registry.register(binomial_table());
    registry.register(alternating_table());
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Row {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_naturals() {
        assert_eq!(naturals(0), ints(&[1]));
        assert_eq!(naturals(3), ints(&[7, 8, 9, 10]));
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(0), ints(&[1]));
        assert_eq!(binomial(4), ints(&[1, 4, 6, 4, 1]));
        assert_eq!(binomial(6), ints(&[1, 6, 15, 20, 15, 6, 1]));
    }

    #[test]
    fn test_binomial_does_not_overflow() {
        // C(100, 50) = 100891344545564193334812497256
        let middle = &binomial(100)[50];
        assert_eq!(middle.to_string(), "100891344545564193334812497256");
    }

    #[test]
    fn test_alternating() {
        assert_eq!(alternating(3), ints(&[-1, 1, -1, 1]));
    }

    #[test]
    fn test_rows_have_contract_length() {
        for n in 0..12 {
            assert_eq!(naturals(n).len(), n + 1);
            assert_eq!(ones(n).len(), n + 1);
            assert_eq!(binomial(n).len(), n + 1);
            assert_eq!(alternating(n).len(), n + 1);
        }
    }

    #[test]
    fn test_demo_registry() {
        let registry = demo_registry();
        assert_eq!(registry.len(), 4);
        assert!(registry.get("Binomial").is_some());
    }
}
