//! FILENAME: core/report/src/preview.rs
//! PURPOSE: A textual dump of every accessor of a table.
//! CONTEXT: `preview` stops at the first failing accessor and returns its
//! error; `preview_lenient` keeps going and renders failures inline, for
//! catalog-wide dumps where some triangles are not invertible.

use num_bigint::BigInt;
use tabl_engine::{TablResult, Table};

use crate::error::ReportError;
use crate::format::{format_seq, format_triangle};
use crate::timer::{benchmark, format_elapsed, DEFAULT_BENCH_SIZE};

/// Rows listed in the TABLE section.
const LISTED_ROWS: usize = 10;

struct PreviewWriter {
    out: String,
    lenient: bool,
}

impl PreviewWriter {
    fn line(&mut self, label: &str, value: TablResult<String>) -> Result<(), ReportError> {
        let text = match value {
            Ok(text) => text,
            Err(e) if self.lenient => format!("<error: {}>", e),
            Err(e) => return Err(e.into()),
        };
        self.out.push_str(&format!("{:<11} {}\n", label, text));
        Ok(())
    }
}

pub fn preview(table: &Table, size: usize) -> Result<String, ReportError> {
    render(table, size, false)
}

pub fn preview_lenient(table: &Table, size: usize) -> String {
    // Only timer misuse can fail in lenient mode, and render never misuses it.
    render(table, size, true).unwrap_or_else(|e| format!("<error: {}>\n", e))
}

fn render(table: &Table, size: usize, lenient: bool) -> Result<String, ReportError> {
    let mut w = PreviewWriter {
        out: String::from("\n"),
        lenient,
    };
    let last = size.saturating_sub(1);
    let square = |v: &BigInt| v * v;

    w.line("NAME", Ok(table.id().to_string()))?;
    w.line("similars", Ok(format!("{:?}", table.sim())))?;
    w.line("invertible", Ok(table.inv_q().to_string()))?;
    w.line("table", table.tab(size).map(|t| format_triangle(&t)))?;
    w.line("value", table.val(last, last / 2).map(|v| v.to_string()))?;
    w.line("row", table.row(last).map(|r| format_seq(&r[..])))?;
    w.line("col", table.col(2, size).map(|c| format_seq(&c)))?;
    w.line("diag", table.diag(2, size).map(|d| format_seq(&d)))?;
    let one = BigInt::from(1);
    w.line(
        "poly",
        (0..size)
            .map(|n| table.poly(n, &one))
            .collect::<TablResult<Vec<_>>>()
            .map(|p| format_seq(&p)),
    )?;
    w.line("antidiagtab", table.adtab(size).map(|t| format_triangle(&t)))?;
    w.line("accumulated", table.acc(size).map(|t| format_triangle(&t)))?;
    w.line("inverted", table.inv(size).map(|t| format_triangle(&t)))?;
    w.line("reverted", table.rev(size).map(|t| format_triangle(&t)))?;
    w.line("rev of inv", table.revinv(size).map(|t| format_triangle(&t)))?;
    w.line("inv of rev", table.invrev(size).map(|t| format_triangle(&t)))?;
    w.line("matrix", table.mat(size).map(|m| format_triangle(&m)))?;
    w.line("flat seq", table.flat(size).map(|f| format_seq(&f)))?;
    w.line("inv rev 11", table.invrev11(last).map(|t| format_triangle(&t)))?;
    w.line(
        "1-1-based",
        table.off(1, 1).and_then(|offset| {
            Table::new(offset, "Toffset11", Vec::<String>::new(), false)
                .tab(last)
                .map(|t| format_triangle(&t))
        }),
    )?;
    w.line("summap", table.summap(square, size).map(|t| format_triangle(&t)))?;
    w.line("invmap", table.invmap(square, size).map(|t| format_triangle(&t)))?;

    w.out.push_str("TABLE\n");
    for n in 0..LISTED_ROWS {
        w.line(&format!("[{}]", n), table.row(n).map(|r| format_seq(&r[..])))?;
    }

    match benchmark(table, DEFAULT_BENCH_SIZE) {
        Ok(elapsed) => w.out.push_str(&format!(
            "Timing {} rows: {}\n",
            DEFAULT_BENCH_SIZE,
            format_elapsed(table.id(), elapsed)
        )),
        Err(e) if lenient => w.out.push_str(&format!("Timing: <error: {}>\n", e)),
        Err(e) => return Err(e),
    }

    Ok(w.out)
}
