//! Separable box summation over square windows.
//!
//! Each pass builds a 1D prefix sum along one axis and reads every window sum
//! as the difference of two prefix entries, so the cost is O(W·H) whatever the
//! radius. Windows that cross the field border are clamped to the field and
//! sum only the samples that exist; positions whose full window fits inside
//! the field get the exact `(2r+1)²` window sum.
use crate::image::{ImageF64, ImageView, ImageViewMut};

/// Sliding `(2r+1) × (2r+1)` window sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxSum {
    pub radius: usize,
}

impl BoxSum {
    pub const fn new(radius: usize) -> Self {
        Self { radius }
    }

    /// Window sum of `src` at every position.
    pub fn apply(&self, src: &ImageF64) -> ImageF64 {
        let mut out = ImageF64::new(src.w, src.h);
        self.apply_into(src, &mut out);
        out
    }

    /// Same as [`BoxSum::apply`] but writes into a caller-owned buffer of the
    /// same shape.
    pub fn apply_into(&self, src: &ImageF64, dst: &mut ImageF64) {
        let (w, h) = (src.width(), src.height());
        assert_eq!(
            (w, h),
            (dst.width(), dst.height()),
            "box sum requires matching shapes"
        );
        if w == 0 || h == 0 {
            return;
        }
        let mut prefix = Vec::with_capacity(w.max(h) + 1);

        // Horizontal pass: src rows -> dst rows.
        for y in 0..h {
            prefix_sum(src.row(y).iter().copied(), &mut prefix);
            window_from_prefix(&prefix, self.radius, dst.row_mut(y));
        }

        // Vertical pass, in place on dst one column at a time.
        let mut column = vec![0.0; h];
        for x in 0..w {
            prefix_sum((0..h).map(|y| dst.get(x, y)), &mut prefix);
            window_from_prefix(&prefix, self.radius, &mut column);
            for (y, &v) in column.iter().enumerate() {
                dst.set(x, y, v);
            }
        }
    }
}

/// Fill `prefix` with `[0, s0, s0+s1, ...]`.
fn prefix_sum(samples: impl Iterator<Item = f64>, prefix: &mut Vec<f64>) {
    prefix.clear();
    prefix.push(0.0);
    let mut acc = 0.0;
    for v in samples {
        acc += v;
        prefix.push(acc);
    }
}

/// Clamped window sums along one line of length `out.len()`.
fn window_from_prefix(prefix: &[f64], radius: usize, out: &mut [f64]) {
    let n = out.len();
    debug_assert_eq!(prefix.len(), n + 1);
    for (i, dst) in out.iter_mut().enumerate() {
        let lo = i.saturating_sub(radius);
        let hi = (i + radius + 1).min(n);
        *dst = prefix[hi] - prefix[lo];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn brute_force(src: &ImageF64, radius: usize, x: usize, y: usize) -> f64 {
        let mut sum = 0.0;
        for yy in y - radius..=y + radius {
            for xx in x - radius..=x + radius {
                sum += src.get(xx, yy);
            }
        }
        sum
    }

    #[test]
    fn interior_matches_brute_force_on_random_fields() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..20 {
            let w = rng.gen_range(3..14);
            let h = rng.gen_range(3..14);
            let radius = rng.gen_range(1..=(w.min(h) - 1) / 2);
            let src = ImageF64::from_fn(w, h, |_, _| rng.gen_range(-1.0..1.0));
            let out = BoxSum::new(radius).apply(&src);
            for y in radius..h - radius {
                for x in radius..w - radius {
                    let expected = brute_force(&src, radius, x, y);
                    assert!(
                        (out.get(x, y) - expected).abs() < 1e-10,
                        "w={w} h={h} r={radius} at ({x},{y}): {} vs {expected}",
                        out.get(x, y)
                    );
                }
            }
        }
    }

    #[test]
    fn ones_field_counts_window_pixels() {
        let ones = ImageF64::filled(7, 6, 1.0);
        let out = BoxSum::new(2).apply(&ones);
        assert_eq!(out.get(3, 2), 25.0);
        // Corner windows are clamped to the 3x3 samples that exist.
        assert_eq!(out.get(0, 0), 9.0);
        assert_eq!(out.get(6, 0), 9.0);
        assert_eq!(out.get(0, 3), 15.0);
    }

    #[test]
    fn zero_radius_is_identity() {
        let src = ImageF64::from_fn(4, 3, |x, y| (x * 10 + y) as f64);
        assert_eq!(BoxSum::new(0).apply(&src), src);
    }

    #[test]
    fn empty_field_is_left_untouched() {
        let src = ImageF64::new(0, 5);
        let out = BoxSum::new(3).apply(&src);
        assert!(out.data.is_empty());
    }
}
