//! Human-readable listings of explicit entries.
//!
//! ```text
//! vector:  Index: 2, Value: 3.5
//! matrix:  Row: 0, Col: 1, Value: 2
//! ```
//!
//! One line per stored entry, in storage order. These listings are for
//! inspection only and carry no shape information, so they are not a
//! serialization format.

use sparsa_core::Scalar;
use std::fmt;

use super::matrix::SparseMatrix;
use super::vector::SparseVector;

impl<T: Scalar> fmt::Display for SparseVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter() {
            writeln!(f, "Index: {}, Value: {}", index, value)?;
        }
        Ok(())
    }
}

impl<T: Scalar> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, value) in self.iter() {
            writeln!(f, "Row: {}, Col: {}, Value: {}", pos.row, pos.col, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn parse_matrix_lines(text: &str) -> HashSet<(usize, usize, String)> {
        text.lines()
            .map(|line| {
                let fields: Vec<&str> = line
                    .split(", ")
                    .map(|field| field.split(": ").nth(1).unwrap())
                    .collect();
                (
                    fields[0].parse().unwrap(),
                    fields[1].parse().unwrap(),
                    fields[2].to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_matrix_listing_contents() {
        let m = SparseMatrix::from_triplets(3, 3, [(2, 1, 1.5), (0, 0, -2.0)]).unwrap();
        let listed = parse_matrix_lines(&m.to_string());
        let expected: HashSet<_> = [(0, 0, "-2".to_string()), (2, 1, "1.5".to_string())]
            .into_iter()
            .collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_vector_listing_contents() {
        let v = SparseVector::from_entries(5, [(4, 1.0), (1, 0.25)]).unwrap();
        let text = v.to_string();
        let lines: HashSet<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.contains("Index: 4, Value: 1"));
        assert!(lines.contains("Index: 1, Value: 0.25"));
    }

    #[test]
    fn test_empty_listing() {
        let m: SparseMatrix<f64> = SparseMatrix::new(2, 2);
        assert!(m.to_string().is_empty());
    }
}
