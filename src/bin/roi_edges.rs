use roi_edges::config::load_config;
use roi_edges::io::{write_json_file, write_raw};
use roi_edges::{BgraImage, RoiEdgeDetector, RoiRect};
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

    let (frame, width, height) = config.input.load()?;
    let image = BgraImage::new(&frame, width, height).map_err(|e| e.to_string())?;
    let roi = config.roi.unwrap_or_else(|| RoiRect::full(width, height));

    let detector = RoiEdgeDetector::new(config.edge);
    let report = detector
        .detect_with_diagnostics(&image, roi)
        .map_err(|e| format!("{e} (status {})", e.status_code()))?;

    if let Some(mask_path) = &config.output.mask_raw {
        write_raw(mask_path, report.mask.data())?;
        println!(
            "Saved {}x{} mask to {}",
            report.mask.width(),
            report.mask.height(),
            mask_path.display()
        );
    }
    write_json_file(&config.output.report_json, &report)?;

    let region = report.trace.region;
    println!(
        "Region ({}, {}) {}x{}: {} edge pixels in {:.3} ms",
        region.x,
        region.y,
        region.width,
        region.height,
        report.trace.edges.edge_pixels,
        report.trace.timings.total_ms
    );
    println!(
        "Saved report to {}",
        config.output.report_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: roi_edges <config.json>".to_string()
}
