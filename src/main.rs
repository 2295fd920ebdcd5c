use matting_laplacian::{ColorImage, MattingLaplacian, MattingParams};
use std::time::Instant;

fn main() {
    // Demo stub: builds a synthetic two-tone gradient and computes its Laplacian
    let (w, h) = (160usize, 120usize);
    let img = ColorImage::from_fn_rgb(w, h, |x, y| {
        let t = x as f64 / (w - 1) as f64;
        let v = y as f64 / (h - 1) as f64;
        if x < w / 2 {
            [t, 0.2, v]
        } else {
            [0.9, t, 1.0 - v]
        }
    });

    let start = Instant::now();
    match MattingLaplacian::new(MattingParams::default()).compute(&img) {
        Ok(l) => println!(
            "n={} nnz={} latency_ms={:.3}",
            l.rows(),
            l.nnz(),
            start.elapsed().as_secs_f64() * 1000.0
        ),
        Err(e) => eprintln!("Error: {e}"),
    }
}
