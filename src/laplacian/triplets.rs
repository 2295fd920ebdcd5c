//! Coordinate-list arena for sparse matrix assembly.
use serde::{Deserialize, Serialize};
use sprs::{CsMat, TriMat};

/// Flat `(row, col, value)` arrays.
///
/// Duplicate coordinates are allowed and are summed on accumulation; this is
/// how overlapping windows add up their contributions to a pixel pair.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Triplets {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    pub vals: Vec<f64>,
}

impl Triplets {
    /// Arena of exactly `len` zeroed entries, filled in place by the
    /// assembler.
    pub fn zeroed(len: usize) -> Self {
        Self {
            rows: vec![0; len],
            cols: vec![0; len],
            vals: vec![0.0; len],
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
            cols: Vec::with_capacity(capacity),
            vals: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: usize, col: usize, val: f64) {
        self.rows.push(row);
        self.cols.push(col);
        self.vals.push(val);
    }

    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows
            .iter()
            .zip(&self.cols)
            .zip(&self.vals)
            .map(|((&r, &c), &v)| (r, c, v))
    }

    /// Build the `n × n` CSR matrix, summing values that share a coordinate.
    ///
    /// Panics if any index is `>= n`.
    pub fn accumulate(self, n: usize) -> CsMat<f64> {
        let tri = TriMat::from_triplets((n, n), self.rows, self.cols, self.vals);
        tri.to_csr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_coordinates_are_summed() {
        let mut t = Triplets::with_capacity(5);
        t.push(0, 1, 0.25);
        t.push(2, 2, 1.0);
        t.push(0, 1, 0.5);
        t.push(1, 0, 0.75);
        t.push(2, 2, -0.5);
        let m = t.accumulate(3);
        assert_eq!(m.nnz(), 3);
        assert_eq!(m.get(0, 1), Some(&0.75));
        assert_eq!(m.get(1, 0), Some(&0.75));
        assert_eq!(m.get(2, 2), Some(&0.5));
        assert_eq!(m.get(1, 1), None);
    }

    #[test]
    fn zeroed_arena_has_exact_length() {
        let t = Triplets::zeroed(12);
        assert_eq!(t.len(), 12);
        assert_eq!(t.iter().count(), 12);
        assert!(Triplets::default().is_empty());
    }
}
