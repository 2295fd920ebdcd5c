//! Closed-form inverse of 3×3 matrices via the adjugate.
//!
//! The regularized covariance is always exactly 3×3, so cofactor expansion is
//! cheaper than a generic factorization and runs once per interior pixel.
use nalgebra::Matrix3;

/// Determinants at or below this magnitude are treated as singular. It sits
/// far below `ε³` for any usable regularization, so a regularized covariance
/// only trips it when the arithmetic has underflowed.
pub const MIN_DET: f64 = f64::MIN_POSITIVE;

#[inline]
pub fn determinant3(m: &Matrix3<f64>) -> f64 {
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}

/// Inverse of `m`, or `None` if the determinant is non-finite or
/// `|det| <= MIN_DET`.
pub fn invert3(m: &Matrix3<f64>) -> Option<Matrix3<f64>> {
    let det = determinant3(m);
    if !det.is_finite() || det.abs() <= MIN_DET {
        return None;
    }
    let adj = Matrix3::new(
        m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)],
        m[(0, 2)] * m[(2, 1)] - m[(0, 1)] * m[(2, 2)],
        m[(0, 1)] * m[(1, 2)] - m[(0, 2)] * m[(1, 1)],
        m[(1, 2)] * m[(2, 0)] - m[(1, 0)] * m[(2, 2)],
        m[(0, 0)] * m[(2, 2)] - m[(0, 2)] * m[(2, 0)],
        m[(0, 2)] * m[(1, 0)] - m[(0, 0)] * m[(1, 2)],
        m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)],
        m[(0, 1)] * m[(2, 0)] - m[(0, 0)] * m[(2, 1)],
        m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
    );
    Some(adj / det)
}
