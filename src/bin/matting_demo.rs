use matting_laplacian::config::load_config;
use matting_laplacian::image::io::{load_rgb_image, save_field_png, write_json_file};
use matting_laplacian::image::ImageF64;
use matting_laplacian::laplacian;
use matting_laplacian::stages::{assemble_triplets, LocalStatistics};
use matting_laplacian::MattingLaplacian;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_rgb_image(&config.input)?;
    let builder = MattingLaplacian::new(config.params);
    let mut output = builder
        .compute_with_report(&image)
        .map_err(|e| format!("Laplacian construction failed: {e}"))?;
    let checks = laplacian::check(&output.laplacian);
    output.report.checks = Some(checks);

    println!(
        "{}x{} image, radius={} epsilon={:e}",
        image.w, image.h, config.params.radius, config.params.epsilon
    );
    println!(
        "interior pixels={} triplets={} nnz={}",
        output.report.interior_pixels, output.report.triplet_count, output.report.nnz
    );
    println!(
        "max |row sum|={:.3e} max asymmetry={:.3e}",
        checks.max_abs_row_sum, checks.max_asymmetry
    );
    for stage in &output.report.timings.stages {
        println!("  {:<12} {:>10.3} ms", stage.label, stage.elapsed_ms);
    }
    println!("  {:<12} {:>10.3} ms", "total", output.report.timings.total_ms);

    write_json_file(&config.output.report_json, &output.report)?;
    println!("Report written to {}", config.output.report_json.display());

    if let Some(path) = &config.output.diagonal_png {
        let diag = ImageF64 {
            w: image.w,
            h: image.h,
            stride: image.w,
            data: laplacian::diagonal(&output.laplacian),
        };
        save_field_png(&diag, path)?;
        println!("Diagonal written to {}", path.display());
    }

    if let Some(path) = &config.output.triplets_json {
        let stats = LocalStatistics::compute(&image, config.params.radius)
            .map_err(|e| e.to_string())?;
        let triplets =
            assemble_triplets(&image, &stats, &config.params).map_err(|e| e.to_string())?;
        write_json_file(path, &triplets)?;
        println!("{} triplets written to {}", triplets.len(), path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: matting_demo <config.json>".to_string()
}
