/// Read access to a row-major sample buffer.
///
/// `row(y)` returns every sample of row `y`, so for interleaved color images a
/// row holds `width() * channels` values.
pub trait ImageView {
    type Sample: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Sample];
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Sample];
}
