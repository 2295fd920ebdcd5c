//! Owned multi-channel f64 image with interleaved samples.
//!
//! Sample `c` of pixel `(x, y)` lives at `data[(y * w + x) * channels + c]`.
//! The matting pipeline expects three channels with values roughly in
//! `[0, 1]`; the range is not enforced here.
use super::ImageF64;
use crate::error::MattingError;

#[derive(Clone, Debug, PartialEq)]
pub struct ColorImage {
    pub w: usize,
    pub h: usize,
    pub channels: usize,
    pub data: Vec<f64>,
}

impl ColorImage {
    /// Zero-initialized image of size `w × h` with `channels` samples per pixel.
    pub fn new(w: usize, h: usize, channels: usize) -> Self {
        Self {
            w,
            h,
            channels,
            data: vec![0.0; w * h * channels],
        }
    }

    /// Wrap an interleaved buffer, checking that its length matches the shape.
    pub fn from_raw(
        w: usize,
        h: usize,
        channels: usize,
        data: Vec<f64>,
    ) -> Result<Self, MattingError> {
        let expected = w * h * channels;
        if data.len() != expected {
            return Err(MattingError::BufferSize {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            channels,
            data,
        })
    }

    /// Replicate a scalar field into three identical channels.
    pub fn from_gray(gray: &ImageF64) -> Self {
        let mut data = Vec::with_capacity(gray.w * gray.h * 3);
        for y in 0..gray.h {
            for x in 0..gray.w {
                let v = gray.get(x, y);
                data.extend_from_slice(&[v, v, v]);
            }
        }
        Self {
            w: gray.w,
            h: gray.h,
            channels: 3,
            data,
        }
    }

    /// Build an RGB image from `f(x, y)` evaluated at every pixel.
    pub fn from_fn_rgb(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> [f64; 3]) -> Self {
        let mut data = Vec::with_capacity(w * h * 3);
        for y in 0..h {
            for x in 0..w {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            w,
            h,
            channels: 3,
            data,
        }
    }

    /// Linear pixel index of (x, y); the coordinate space of the Laplacian.
    #[inline]
    pub fn pixel_index(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    /// First three channels of pixel (x, y).
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> [f64; 3] {
        let base = self.pixel_index(x, y) * self.channels;
        [self.data[base], self.data[base + 1], self.data[base + 2]]
    }

    /// Copy channel `c` out into its own scalar field.
    pub fn plane(&self, c: usize) -> ImageF64 {
        assert!(c < self.channels, "channel {c} out of range");
        ImageF64 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: self
                .data
                .iter()
                .skip(c)
                .step_by(self.channels)
                .copied()
                .collect(),
        }
    }
}

impl crate::image::traits::ImageView for ColorImage {
    type Sample = f64;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f64] {
        let len = self.w * self.channels;
        &self.data[y * len..(y + 1) * len]
    }
}
