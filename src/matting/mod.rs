//! Matting Laplacian construction orchestrating the four stages.
//!
//! Overview
//! - Validates the image shape and the radius/epsilon configuration.
//! - Computes window means and covariances with separable box sums
//!   ([`crate::stats`]).
//! - Evaluates the closed-form affinity of every interior window and writes
//!   `k²` triplets per window into a preallocated arena
//!   ([`crate::affinity`]).
//! - Sums the triplets into `M` and returns `L = diag(M·1) − M`
//!   ([`crate::laplacian`]).
//!
//! The computation is pure: no state survives between calls, so repeated
//! calls on the same input return identical matrices.

pub mod params;

pub use params::MattingParams;

use crate::affinity::{self, WindowShape};
use crate::diagnostics::{InputDescriptor, MattingReport, TimingBreakdown};
use crate::error::MattingError;
use crate::image::ColorImage;
use crate::laplacian;
use crate::stats::LocalStatistics;
use log::debug;
use sprs::CsMat;
use std::time::Instant;

/// Laplacian together with the run report.
#[derive(Clone, Debug)]
pub struct MattingOutput {
    pub laplacian: CsMat<f64>,
    pub report: MattingReport,
}

/// Builds matting Laplacians for a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct MattingLaplacian {
    params: MattingParams,
}

impl MattingLaplacian {
    pub fn new(params: MattingParams) -> Self {
        Self { params }
    }

    /// Build the `N × N` Laplacian (`N = width · height`) of `image`.
    pub fn compute(&self, image: &ColorImage) -> Result<CsMat<f64>, MattingError> {
        self.compute_with_report(image).map(|out| out.laplacian)
    }

    /// Build the Laplacian and report sizes and per-stage timings.
    pub fn compute_with_report(&self, image: &ColorImage) -> Result<MattingOutput, MattingError> {
        let params = self.params;
        if image.channels != 3 {
            return Err(MattingError::ShapeMismatch {
                expected: 3,
                found: image.channels,
            });
        }
        params.validate(image.w, image.h)?;

        let shape = WindowShape::new(params.radius);
        let (inner_w, inner_h) = shape.interior(image.w, image.h);
        let n = image.w * image.h;
        debug!(
            "MattingLaplacian::compute start w={} h={} radius={} epsilon={:e} interior={}x{}",
            image.w, image.h, params.radius, params.epsilon, inner_w, inner_h
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let start = Instant::now();
        let stats = LocalStatistics::compute(image, params.radius)?;
        let stats_ms = timings.push_since("statistics", start);
        debug!("MattingLaplacian::compute statistics in {stats_ms:.3} ms");

        let start = Instant::now();
        let triplets = affinity::assemble_triplets(image, &stats, &params)?;
        let triplet_count = triplets.len();
        let affinity_ms = timings.push_since("affinity", start);
        debug!(
            "MattingLaplacian::compute affinity triplets={} in {affinity_ms:.3} ms",
            triplet_count
        );

        let start = Instant::now();
        let m = triplets.accumulate(n);
        let accumulate_ms = timings.push_since("accumulate", start);
        debug!(
            "MattingLaplacian::compute accumulated nnz={} in {accumulate_ms:.3} ms",
            m.nnz()
        );

        let start = Instant::now();
        let l = laplacian::from_affinity(&m);
        timings.push_since("laplacian", start);
        timings.total_ms = crate::diagnostics::elapsed_ms(total_start);
        debug!(
            "MattingLaplacian::compute done nnz={} total {:.3} ms",
            l.nnz(),
            timings.total_ms
        );

        let report = MattingReport {
            input: InputDescriptor {
                width: image.w,
                height: image.h,
                channels: image.channels,
            },
            params,
            interior_pixels: inner_w * inner_h,
            triplet_count,
            nnz: l.nnz(),
            checks: None,
            timings,
        };
        Ok(MattingOutput {
            laplacian: l,
            report,
        })
    }
}

/// One-shot convenience wrapper around [`MattingLaplacian::compute`].
pub fn matting_laplacian(
    image: &ColorImage,
    params: &MattingParams,
) -> Result<CsMat<f64>, MattingError> {
    MattingLaplacian::new(*params).compute(image)
}
