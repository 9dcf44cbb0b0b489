//! FILENAME: tests/common/mod.rs
//! Fixtures shared by the tabl-engine integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use num_bigint::BigInt;
use tabl_engine::families::naturals;
use tabl_engine::{Row, RowIndex, Table, Triangle};

/// A row of small integers.
pub fn ints(values: &[i64]) -> Row {
    values.iter().map(|&v| BigInt::from(v)).collect()
}

/// A triangle of small integers.
pub fn tri(rows: &[&[i64]]) -> Triangle {
    rows.iter().map(|r| ints(r)).collect()
}

/// The naturals table, plus a counter of how often its generator ran.
pub fn counted_naturals() -> (Table, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let table = Table::new(
        move |n: RowIndex| {
            counter.set(counter.get() + 1);
            naturals(n)
        },
        "CountedNaturals",
        ["A000027"],
        false,
    );
    (table, calls)
}

/// T(n, k) = a*n + b*k + c, for property tests over many shapes of data.
pub fn linear_table(a: i64, b: i64, c: i64) -> Table {
    Table::new(
        move |n: RowIndex| -> Row {
            (0..=n)
                .map(|k| BigInt::from(a * n as i64 + b * k as i64 + c))
                .collect()
        },
        "Linear",
        Vec::<String>::new(),
        false,
    )
}
