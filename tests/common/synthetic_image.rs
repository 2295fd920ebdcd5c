use matting_laplacian::{ColorImage, ImageF64};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Grayscale-as-RGB image with every sample equal to `value`.
pub fn flat_rgb(width: usize, height: usize, value: f64) -> ColorImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    ColorImage::from_gray(&ImageF64::filled(width, height, value))
}

/// Uniform random samples in `[0, 1)`, reproducible from `seed`.
pub fn random_rgb(width: usize, height: usize, seed: u64) -> ColorImage {
    let mut rng = StdRng::seed_from_u64(seed);
    ColorImage::from_fn_rgb(width, height, |_, _| {
        [rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>()]
    })
}

/// Red left of `split_x`, blue from `split_x` on.
pub fn two_tone(width: usize, height: usize, split_x: usize) -> ColorImage {
    ColorImage::from_fn_rgb(width, height, |x, _| {
        if x < split_x {
            [0.9, 0.1, 0.1]
        } else {
            [0.1, 0.1, 0.9]
        }
    })
}

/// Grayscale-as-RGB step: black left of `split_x`, white from `split_x` on.
pub fn gray_edge(width: usize, height: usize, split_x: usize) -> ColorImage {
    ColorImage::from_gray(&ImageF64::from_fn(width, height, |x, _| {
        if x < split_x {
            0.0
        } else {
            1.0
        }
    }))
}
