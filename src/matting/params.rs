//! Configuration of the Laplacian construction.

use crate::error::MattingError;
use serde::{Deserialize, Serialize};

/// Window radius and covariance regularization.
///
/// The window side is `2·radius + 1`. `epsilon` is added to the diagonal of
/// every local covariance so that flat windows stay invertible; larger values
/// smooth the affinities towards the uniform `1/k`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MattingParams {
    pub radius: usize,
    pub epsilon: f64,
}

impl Default for MattingParams {
    fn default() -> Self {
        Self {
            radius: 1,
            epsilon: 1e-5,
        }
    }
}

impl MattingParams {
    pub fn new(radius: usize, epsilon: f64) -> Self {
        Self { radius, epsilon }
    }

    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Check the parameters against an image of the given size.
    pub fn validate(&self, width: usize, height: usize) -> Result<(), MattingError> {
        if self.radius == 0 {
            return Err(MattingError::InvalidRadius {
                radius: self.radius,
            });
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(MattingError::InvalidEpsilon {
                epsilon: self.epsilon,
            });
        }
        if 2 * self.radius >= width.min(height) {
            return Err(MattingError::NoInteriorRegion {
                radius: self.radius,
                width,
                height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_for_small_images() {
        let p = MattingParams::default();
        assert!(p.validate(3, 3).is_ok());
    }

    #[test]
    fn rejects_bad_configuration() {
        let p = MattingParams::default();
        assert!(matches!(
            p.with_radius(0).validate(10, 10),
            Err(MattingError::InvalidRadius { radius: 0 })
        ));
        assert!(matches!(
            p.with_epsilon(0.0).validate(10, 10),
            Err(MattingError::InvalidEpsilon { .. })
        ));
        assert!(p.with_epsilon(f64::NAN).validate(10, 10).is_err());
        let err = p.with_radius(2).validate(10, 4).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(
            err,
            MattingError::NoInteriorRegion {
                radius: 2,
                width: 10,
                height: 4
            }
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let p: MattingParams = serde_json::from_str(r#"{ "radius": 2 }"#).unwrap();
        assert_eq!(p, MattingParams::new(2, 1e-5));
    }
}
