mod common;

use common::synthetic_image::random_rgb;
use matting_laplacian::laplacian;
use matting_laplacian::stages::{assemble_triplets, build_laplacian, BoxSum, LocalStatistics};
use matting_laplacian::{ImageF64, MattingLaplacian, MattingParams, Triplets};

#[test]
fn triplet_count_is_window_area_squared_times_interior() {
    for (w, h, radius) in [(5, 5, 1), (9, 6, 2), (13, 7, 3), (4, 30, 1)] {
        let img = random_rgb(w, h, (w * h) as u64);
        let stats = LocalStatistics::compute(&img, radius).unwrap();
        let params = MattingParams::new(radius, 1e-5);
        let triplets = assemble_triplets(&img, &stats, &params).unwrap();
        let side = 2 * radius + 1;
        assert_eq!(
            triplets.len(),
            side.pow(4) * (h - 2 * radius) * (w - 2 * radius),
            "{w}x{h} r={radius}"
        );
        assert!(triplets.iter().all(|(r, c, v)| r < w * h && c < w * h && v.is_finite()));
    }
}

#[test]
fn stage_pipeline_matches_one_shot_builder() {
    let img = random_rgb(10, 9, 99);
    let params = MattingParams::new(1, 1e-5);
    let stats = LocalStatistics::compute(&img, params.radius).unwrap();
    let triplets = assemble_triplets(&img, &stats, &params).unwrap();
    let staged = build_laplacian(triplets, img.w * img.h);
    let direct = MattingLaplacian::new(params).compute(&img).unwrap();
    assert_eq!(staged.indices(), direct.indices());
    assert_eq!(staged.data(), direct.data());
}

#[test]
fn triplets_round_trip_through_json() {
    let img = random_rgb(5, 5, 3);
    let params = MattingParams::new(1, 1e-4);
    let stats = LocalStatistics::compute(&img, 1).unwrap();
    let triplets = assemble_triplets(&img, &stats, &params).unwrap();
    let json = serde_json::to_string(&triplets).unwrap();
    let back: Triplets = serde_json::from_str(&json).unwrap();
    assert_eq!(back.rows, triplets.rows);
    assert_eq!(back.cols, triplets.cols);
    let l = laplacian::build(back, 25);
    assert!(laplacian::check(&l).within(1e-9));
}

#[test]
fn box_sum_of_ones_gives_window_area_in_interior() {
    let ones = ImageF64::filled(11, 9, 1.0);
    for radius in 1..=4 {
        let sums = BoxSum::new(radius).apply(&ones);
        let area = ((2 * radius + 1) * (2 * radius + 1)) as f64;
        for y in radius..9 - radius {
            for x in radius..11 - radius {
                assert_eq!(sums.get(x, y), area);
            }
        }
    }
}
