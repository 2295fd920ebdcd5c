use super::TimingBreakdown;
use crate::laplacian::LaplacianChecks;
use crate::matting::MattingParams;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

/// Summary of one Laplacian construction, suitable for JSON output.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MattingReport {
    pub input: InputDescriptor,
    pub params: MattingParams,
    /// Pixels whose window lies fully inside the image.
    pub interior_pixels: usize,
    /// Triplets emitted before accumulation, `k² · interior_pixels`.
    pub triplet_count: usize,
    /// Stored entries of the final Laplacian.
    pub nnz: usize,
    /// Invariant check, filled in by callers that ask for it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<LaplacianChecks>,
    pub timings: TimingBreakdown,
}
