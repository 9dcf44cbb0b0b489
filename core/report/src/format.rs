//! FILENAME: core/report/src/format.rs
//! PURPOSE: Text rendering of sequences and triangles.

use std::fmt::Display;

/// Concatenates `term + sep` for the terms of `seq` starting at `offset`.
/// Stops before the piece that would exceed `max_terms` terms or push the
/// text past `max_chars` characters (separators included).
pub fn seq_to_string<T: Display>(
    seq: &[T],
    max_chars: usize,
    max_terms: usize,
    sep: &str,
    offset: usize,
) -> String {
    let mut out = String::new();
    let mut chars = 0;
    for (count, term) in seq.iter().skip(offset).enumerate() {
        if count + 1 > max_terms {
            break;
        }
        let piece = format!("{}{}", term, sep);
        chars += piece.chars().count();
        if chars > max_chars {
            break;
        }
        out.push_str(&piece);
    }
    out
}

/// `[a, b, c]`
pub fn format_seq<T: Display>(seq: &[T]) -> String {
    let items: Vec<String> = seq.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// `[[a], [b, c], ...]`
pub fn format_triangle<T: Display>(rows: &[Vec<T>]) -> String {
    let items: Vec<String> = rows.iter().map(|r| format_seq(r)).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_to_string_all_terms() {
        assert_eq!(seq_to_string(&[1, 2, 3], 100, 100, " ", 0), "1 2 3 ");
    }

    #[test]
    fn test_seq_to_string_max_terms() {
        assert_eq!(seq_to_string(&[1, 2, 3, 4], 100, 2, ",", 0), "1,2,");
    }

    #[test]
    fn test_seq_to_string_max_chars_counts_separator() {
        // "10 " + "20 " = 6 chars; "30 " would make 9
        assert_eq!(seq_to_string(&[10, 20, 30], 8, 10, " ", 0), "10 20 ");
        assert_eq!(seq_to_string(&[10, 20, 30], 9, 10, " ", 0), "10 20 30 ");
    }

    #[test]
    fn test_seq_to_string_offset() {
        assert_eq!(seq_to_string(&[1, 2, 3], 100, 100, " ", 1), "2 3 ");
        assert_eq!(seq_to_string(&[1, 2, 3], 100, 100, " ", 5), "");
    }

    #[test]
    fn test_format_triangle() {
        let rows = vec![vec![1], vec![2, 3]];
        assert_eq!(format_triangle(&rows), "[[1], [2, 3]]");
        assert_eq!(format_seq::<i32>(&[]), "[]");
    }
}
