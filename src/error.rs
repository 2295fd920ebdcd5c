//! Error type shared by every stage of the Laplacian construction.

/// Reasons why a matting Laplacian cannot be built.
///
/// All variants are fatal to the call; no partial matrix is returned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MattingError {
    /// The window radius must be at least 1.
    InvalidRadius { radius: usize },
    /// The regularization strength must be finite and strictly positive.
    InvalidEpsilon { epsilon: f64 },
    /// `2 * radius >= min(width, height)`, so no pixel has a full window.
    NoInteriorRegion {
        radius: usize,
        width: usize,
        height: usize,
    },
    /// The image does not carry exactly three color channels.
    ShapeMismatch { expected: usize, found: usize },
    /// A raw sample buffer does not match `width * height * channels`.
    BufferSize { expected: usize, found: usize },
    /// The regularized covariance at pixel (x, y) could not be inverted.
    NumericalDegeneracy { x: usize, y: usize, det: f64 },
}

impl MattingError {
    /// True for errors caused by the radius/epsilon configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            MattingError::InvalidRadius { .. }
                | MattingError::InvalidEpsilon { .. }
                | MattingError::NoInteriorRegion { .. }
        )
    }
}

impl std::fmt::Display for MattingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MattingError::InvalidRadius { radius } => {
                write!(f, "window radius must be >= 1 (got {radius})")
            }
            MattingError::InvalidEpsilon { epsilon } => {
                write!(f, "epsilon must be finite and > 0 (got {epsilon:e})")
            }
            MattingError::NoInteriorRegion {
                radius,
                width,
                height,
            } => write!(
                f,
                "radius {radius} leaves no interior pixels in a {width}x{height} image"
            ),
            MattingError::ShapeMismatch { expected, found } => {
                write!(f, "expected {expected} color channels, found {found}")
            }
            MattingError::BufferSize { expected, found } => {
                write!(f, "sample buffer holds {found} values, expected {expected}")
            }
            MattingError::NumericalDegeneracy { x, y, det } => write!(
                f,
                "local covariance at ({x}, {y}) is singular (det {det:e})"
            ),
        }
    }
}

impl std::error::Error for MattingError {}
