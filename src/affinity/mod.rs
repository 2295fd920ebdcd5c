//! Closed-form matting affinities over every interior window.
//!
//! For an interior pixel `p` with window pixels `I₁..I_k` (row-major, `k = w²`)
//! the affinity between window members `i` and `j` is
//!
//! ```text
//! A[i, j] = (1 + (I_i − μ(p))ᵀ (Σ(p) + εI)⁻¹ (I_j − μ(p))) / k
//! ```
//!
//! Every interior pixel contributes exactly `k²` triplets. Blocks are laid out
//! back to back in interior raster order, so pixel `n` (counting interior
//! pixels row by row) owns `triplets[n·k² .. (n+1)·k²]`. The blocks are
//! disjoint and are filled in parallel when the `parallel` feature is on.
pub mod inverse;

use crate::error::MattingError;
use crate::image::ColorImage;
use crate::laplacian::Triplets;
use crate::matting::MattingParams;
use crate::stats::LocalStatistics;
use nalgebra::{DMatrix, Vector3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub use inverse::{determinant3, invert3};

/// Window geometry derived from the radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowShape {
    pub radius: usize,
    /// Side length `2r + 1`.
    pub side: usize,
    /// Pixels per window, `side²`.
    pub len: usize,
}

impl WindowShape {
    pub const fn new(radius: usize) -> Self {
        let side = 2 * radius + 1;
        Self {
            radius,
            side,
            len: side * side,
        }
    }

    /// Triplets contributed by one interior pixel, `k²`.
    pub const fn block_len(&self) -> usize {
        self.len * self.len
    }

    /// Interior extent `(W − 2r, H − 2r)`, zero when the window does not fit.
    pub fn interior(&self, width: usize, height: usize) -> (usize, usize) {
        (
            width.saturating_sub(2 * self.radius),
            height.saturating_sub(2 * self.radius),
        )
    }
}

/// Affinity matrix of a single window together with the linear pixel indices
/// of its members.
#[derive(Clone, Debug)]
pub struct WindowAffinity {
    pub indices: Vec<usize>,
    pub values: DMatrix<f64>,
}

/// Per-worker buffers reused across windows.
#[derive(Default)]
struct Scratch {
    indices: Vec<usize>,
    centered: Vec<Vector3<f64>>,
    projected: Vec<Vector3<f64>>,
}

/// Compute the affinity matrix of the window centred on the interior pixel
/// (x, y).
pub fn window_affinity(
    image: &ColorImage,
    stats: &LocalStatistics,
    epsilon: f64,
    x: usize,
    y: usize,
) -> Result<WindowAffinity, MattingError> {
    let shape = WindowShape::new(stats.radius);
    let n = shape.block_len();
    let mut rows = vec![0usize; n];
    let mut cols = vec![0usize; n];
    let mut vals = vec![0.0; n];
    let mut scratch = Scratch::default();
    fill_window_block(
        image,
        stats,
        shape,
        epsilon,
        (x, y),
        &mut scratch,
        (&mut rows, &mut cols, &mut vals),
    )?;
    Ok(WindowAffinity {
        indices: scratch.indices,
        values: DMatrix::from_row_slice(shape.len, shape.len, &vals),
    })
}

/// Emit the `k²·(W−2r)·(H−2r)` affinity triplets of every interior window.
///
/// `stats` must have been computed with `params.radius`. The output arrays are
/// allocated once at their final size. The first pixel whose regularized
/// covariance cannot be inverted aborts the whole call.
pub fn assemble_triplets(
    image: &ColorImage,
    stats: &LocalStatistics,
    params: &MattingParams,
) -> Result<Triplets, MattingError> {
    debug_assert_eq!(stats.radius, params.radius);
    let shape = WindowShape::new(params.radius);
    let (inner_w, inner_h) = shape.interior(image.w, image.h);
    let block = shape.block_len();
    let mut triplets = Triplets::zeroed(block * inner_w * inner_h);
    if inner_w == 0 || inner_h == 0 {
        return Ok(triplets);
    }

    let r = shape.radius;
    let centre_of = move |n: usize| (n % inner_w + r, n / inner_w + r);
    let epsilon = params.epsilon;
    let Triplets { rows, cols, vals } = &mut triplets;

    #[cfg(feature = "parallel")]
    {
        rows.par_chunks_mut(block)
            .zip(cols.par_chunks_mut(block))
            .zip(vals.par_chunks_mut(block))
            .enumerate()
            .try_for_each_init(Scratch::default, |scratch, (n, ((rs, cs), vs))| {
                fill_window_block(
                    image,
                    stats,
                    shape,
                    epsilon,
                    centre_of(n),
                    scratch,
                    (rs, cs, vs),
                )
            })?;
    }
    #[cfg(not(feature = "parallel"))]
    {
        let mut scratch = Scratch::default();
        for (n, ((rs, cs), vs)) in rows
            .chunks_mut(block)
            .zip(cols.chunks_mut(block))
            .zip(vals.chunks_mut(block))
            .enumerate()
        {
            fill_window_block(
                image,
                stats,
                shape,
                epsilon,
                centre_of(n),
                &mut scratch,
                (rs, cs, vs),
            )?;
        }
    }

    Ok(triplets)
}

/// Write the `k²` triplets of the window centred on `centre` into the block.
///
/// Only the upper triangle is evaluated; each value is written to both (i, j)
/// and (j, i) so the block is exactly symmetric.
fn fill_window_block(
    image: &ColorImage,
    stats: &LocalStatistics,
    shape: WindowShape,
    epsilon: f64,
    centre: (usize, usize),
    scratch: &mut Scratch,
    block: (&mut [usize], &mut [usize], &mut [f64]),
) -> Result<(), MattingError> {
    let (x, y) = centre;
    let (rows, cols, vals) = block;
    let k = shape.len;
    debug_assert_eq!(vals.len(), k * k);

    let sigma = stats.regularized_covariance_at(x, y, epsilon);
    let inv = inverse::invert3(&sigma).ok_or_else(|| MattingError::NumericalDegeneracy {
        x,
        y,
        det: inverse::determinant3(&sigma),
    })?;
    let mean = stats.mean_at(x, y);

    scratch.indices.clear();
    scratch.centered.clear();
    scratch.projected.clear();
    for wy in y - shape.radius..=y + shape.radius {
        for wx in x - shape.radius..=x + shape.radius {
            let [r, g, b] = image.rgb(wx, wy);
            let c = Vector3::new(r, g, b) - mean;
            scratch.indices.push(image.pixel_index(wx, wy));
            scratch.projected.push(inv * c);
            scratch.centered.push(c);
        }
    }

    let inv_k = 1.0 / k as f64;
    for i in 0..k {
        let row_idx = scratch.indices[i];
        let proj = &scratch.projected[i];
        for j in i..k {
            let col_idx = scratch.indices[j];
            let value = (1.0 + proj.dot(&scratch.centered[j])) * inv_k;
            let upper = i * k + j;
            let lower = j * k + i;
            rows[upper] = row_idx;
            cols[upper] = col_idx;
            vals[upper] = value;
            rows[lower] = col_idx;
            cols[lower] = row_idx;
            vals[lower] = value;
        }
    }
    Ok(())
}
