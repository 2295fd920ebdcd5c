//! Per-pixel color statistics over square windows.
//!
//! For every pixel `p` the window mean `μ(p) ∈ ℝ³` and the window covariance
//! `Σ(p) ∈ ℝ³ˣ³` are derived from ten box sums: the all-ones field (window
//! pixel count), the three color planes and the six distinct channel
//! products. Only pixels whose full window lies inside the image are read by
//! the affinity stage; border values are computed with clamped windows and are
//! consistent but never used.
use crate::error::MattingError;
use crate::image::{ColorImage, ImageF64};
use crate::window::BoxSum;
use nalgebra::{Matrix3, Vector3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Channel pairs stored in `LocalStatistics::cov`, upper triangle row-major.
pub const COV_PAIRS: [(usize, usize); 6] = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)];

#[derive(Clone, Debug)]
pub struct LocalStatistics {
    pub radius: usize,
    /// Window pixel count per position (`(2r+1)²` in the interior).
    pub denom: ImageF64,
    /// Window mean of each color channel.
    pub mean: [ImageF64; 3],
    /// Window covariance entries in `COV_PAIRS` order (not regularized).
    pub cov: [ImageF64; 6],
}

impl LocalStatistics {
    /// Compute window means and covariances for a three-channel image.
    pub fn compute(image: &ColorImage, radius: usize) -> Result<Self, MattingError> {
        if image.channels != 3 {
            return Err(MattingError::ShapeMismatch {
                expected: 3,
                found: image.channels,
            });
        }
        let boxsum = BoxSum::new(radius);
        let planes = [image.plane(0), image.plane(1), image.plane(2)];

        let mut fields = Vec::with_capacity(10);
        fields.push(ImageF64::filled(image.w, image.h, 1.0));
        fields.extend(planes.iter().cloned());
        fields.extend(COV_PAIRS.iter().map(|&(c, d)| planes[c].product(&planes[d])));

        #[cfg(feature = "parallel")]
        let mut sums: Vec<ImageF64> = fields.par_iter().map(|f| boxsum.apply(f)).collect();
        #[cfg(not(feature = "parallel"))]
        let mut sums: Vec<ImageF64> = fields.iter().map(|f| boxsum.apply(f)).collect();

        let denom = &sums[0];
        let mean: [ImageF64; 3] = std::array::from_fn(|c| ratio(&sums[1 + c], denom));
        let cov: [ImageF64; 6] = std::array::from_fn(|i| {
            let (c, d) = COV_PAIRS[i];
            let mut second = ratio(&sums[4 + i], denom);
            for ((v, mc), md) in second
                .data
                .iter_mut()
                .zip(&mean[c].data)
                .zip(&mean[d].data)
            {
                *v -= mc * md;
            }
            second
        });

        Ok(Self {
            radius,
            denom: sums.swap_remove(0),
            mean,
            cov,
        })
    }

    #[inline]
    pub fn mean_at(&self, x: usize, y: usize) -> Vector3<f64> {
        Vector3::new(
            self.mean[0].get(x, y),
            self.mean[1].get(x, y),
            self.mean[2].get(x, y),
        )
    }

    /// Window covariance at (x, y) without regularization.
    #[inline]
    pub fn covariance_at(&self, x: usize, y: usize) -> Matrix3<f64> {
        let v: [f64; 6] = std::array::from_fn(|i| self.cov[i].get(x, y));
        Matrix3::new(
            v[0], v[1], v[2], //
            v[1], v[3], v[4], //
            v[2], v[4], v[5],
        )
    }

    /// `Σ(p) + ε·I₃`, the matrix inverted by the affinity stage.
    #[inline]
    pub fn regularized_covariance_at(&self, x: usize, y: usize, epsilon: f64) -> Matrix3<f64> {
        self.covariance_at(x, y) + Matrix3::identity() * epsilon
    }
}

fn ratio(sum: &ImageF64, denom: &ImageF64) -> ImageF64 {
    ImageF64 {
        w: sum.w,
        h: sum.h,
        stride: sum.w,
        data: sum.data.iter().zip(&denom.data).map(|(s, d)| s / d).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_image_has_zero_covariance() {
        let img = ColorImage::from_fn_rgb(6, 5, |_, _| [0.2, 0.5, 0.9]);
        let stats = LocalStatistics::compute(&img, 1).expect("three channels");
        assert_eq!(stats.denom.get(2, 2), 9.0);
        let mean = stats.mean_at(2, 2);
        assert!((mean - Vector3::new(0.2, 0.5, 0.9)).norm() < 1e-12);
        assert!(stats.covariance_at(2, 2).amax() < 1e-12);
    }

    #[test]
    fn horizontal_ramp_variance_matches_closed_form() {
        // Red = x, so a 3x3 window around any interior pixel sees x-1, x, x+1
        // three times each: variance 2/3.
        let img = ColorImage::from_fn_rgb(7, 7, |x, _| [x as f64, 0.0, 1.0]);
        let stats = LocalStatistics::compute(&img, 1).expect("three channels");
        let cov = stats.covariance_at(3, 4);
        assert!((cov[(0, 0)] - 2.0 / 3.0).abs() < 1e-12);
        assert!(cov[(1, 1)].abs() < 1e-12);
        assert!(cov[(0, 2)].abs() < 1e-12);
        assert!((stats.mean_at(3, 4)[0] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn covariance_is_symmetric_and_regularized() {
        let img = ColorImage::from_fn_rgb(5, 5, |x, y| {
            [x as f64 * 0.1, y as f64 * 0.2, (x * y) as f64 * 0.05]
        });
        let stats = LocalStatistics::compute(&img, 1).expect("three channels");
        let sigma = stats.regularized_covariance_at(2, 2, 1e-3);
        assert_eq!(sigma, sigma.transpose());
        let raw = stats.covariance_at(2, 2);
        assert!((sigma[(1, 1)] - raw[(1, 1)] - 1e-3).abs() < 1e-15);
    }

    #[test]
    fn rejects_non_rgb_input() {
        let img = ColorImage::new(5, 5, 4);
        let err = LocalStatistics::compute(&img, 1).unwrap_err();
        assert_eq!(
            err,
            MattingError::ShapeMismatch {
                expected: 3,
                found: 4
            }
        );
    }
}
