#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod laplacian;
pub mod matting;

// Stage modules, public so tools and tests can run the pipeline step by step.
pub mod affinity;
pub mod config;
pub mod stats;
pub mod window;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::MattingError;
pub use crate::image::{ColorImage, ImageF64};
pub use crate::laplacian::{LaplacianChecks, Triplets};
pub use crate::matting::{matting_laplacian, MattingLaplacian, MattingOutput, MattingParams};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use matting_laplacian::prelude::*;
///
/// let img = ColorImage::from_fn_rgb(6, 5, |x, y| [x as f64 / 6.0, y as f64 / 5.0, 0.5]);
/// let l = MattingLaplacian::new(MattingParams::new(1, 1e-5))
///     .compute(&img)
///     .expect("valid configuration");
/// assert_eq!(l.rows(), 30);
/// ```
pub mod prelude {
    pub use crate::{ColorImage, MattingError, MattingLaplacian, MattingParams};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::affinity::{assemble_triplets, window_affinity, WindowAffinity, WindowShape};
    pub use crate::laplacian::{build as build_laplacian, from_affinity};
    pub use crate::stats::LocalStatistics;
    pub use crate::window::BoxSum;
}
