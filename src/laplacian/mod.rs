//! Graph Laplacian from accumulated window affinities.
//!
//! The triplets of all windows are summed into `M` (N × N, N = W·H) and the
//! Laplacian is `L = diag(degree) − M` with `degree(i) = Σ_j M[i, j]`. Rows of
//! `L` sum to zero by construction and `L` is symmetric because every window
//! block is.
pub mod triplets;

pub use triplets::Triplets;

use serde::Serialize;
use sprs::{CsMat, TriMat};

/// Row sums of a CSR matrix.
pub fn degrees(m: &CsMat<f64>) -> Vec<f64> {
    debug_assert!(m.is_csr());
    m.outer_iterator()
        .map(|row| row.iter().map(|(_, &v)| v).sum())
        .collect()
}

/// `diag(degree(m)) − m`.
pub fn from_affinity(m: &CsMat<f64>) -> CsMat<f64> {
    let n = m.rows();
    let degree = degrees(m);
    let mut tri = TriMat::with_capacity((n, m.cols()), m.nnz() + n);
    for (i, row) in m.outer_iterator().enumerate() {
        for (j, &v) in row.iter() {
            tri.add_triplet(i, j, -v);
        }
    }
    for (i, &d) in degree.iter().enumerate() {
        if d != 0.0 {
            tri.add_triplet(i, i, d);
        }
    }
    tri.to_csr()
}

/// Accumulate triplets into `M` and convert to the Laplacian in one go.
pub fn build(triplets: Triplets, n: usize) -> CsMat<f64> {
    from_affinity(&triplets.accumulate(n))
}

/// Diagonal entries of `l` (zero where no entry is stored).
pub fn diagonal(l: &CsMat<f64>) -> Vec<f64> {
    (0..l.rows())
        .map(|i| l.get(i, i).copied().unwrap_or(0.0))
        .collect()
}

/// `xᵀ L x`, the smoothness energy of a per-pixel signal.
pub fn quadratic_form(l: &CsMat<f64>, x: &[f64]) -> f64 {
    assert_eq!(l.rows(), x.len(), "signal length must match matrix size");
    l.outer_iterator()
        .enumerate()
        .map(|(i, row)| x[i] * row.iter().map(|(j, &v)| v * x[j]).sum::<f64>())
        .sum()
}

/// Measured deviation from the two Laplacian invariants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaplacianChecks {
    /// `max_i |Σ_j L[i, j]|`
    pub max_abs_row_sum: f64,
    /// `max_{i,j} |L[i, j] − L[j, i]|`
    pub max_asymmetry: f64,
}

impl LaplacianChecks {
    pub fn within(&self, tol: f64) -> bool {
        self.max_abs_row_sum <= tol && self.max_asymmetry <= tol
    }
}

pub fn check(l: &CsMat<f64>) -> LaplacianChecks {
    let max_abs_row_sum = degrees(l).iter().fold(0.0f64, |acc, s| acc.max(s.abs()));
    let mut max_asymmetry = 0.0f64;
    for (i, row) in l.outer_iterator().enumerate() {
        for (j, &v) in row.iter() {
            let mirrored = l.get(j, i).copied().unwrap_or(0.0);
            max_asymmetry = max_asymmetry.max((v - mirrored).abs());
        }
    }
    LaplacianChecks {
        max_abs_row_sum,
        max_asymmetry,
    }
}
