//! End-to-end knockout: load, filter, save.

use std::time::Instant;

use log::{debug, info};

use crate::{
    config::KnockoutConfig,
    error::KnockoutError,
    filter, io,
    report::{KnockoutReport, TimingsMs},
};

/// Run the full pipeline described by `cfg` and return the run summary.
///
/// The output file is written only after the whole pass has completed.
pub fn knock_out_file(cfg: &KnockoutConfig) -> Result<KnockoutReport, KnockoutError> {
    let t_total = Instant::now();

    let (mut img, load_ms) = timed_result(|| io::load_rgba(&cfg.image_path))?;
    let (width, height) = img.dimensions();
    debug!(
        "loaded {}x{} rgba image from {}",
        width,
        height,
        cfg.image_path.display()
    );

    let params = cfg.params();
    let (cleared, filter_ms) = timed_value(|| filter::knock_out_background(&mut img, &params));
    let total_pixels = u64::from(width) * u64::from(height);
    info!(
        "cleared {cleared} of {total_pixels} pixels at threshold {}",
        params.threshold
    );

    let output_path = cfg.output_path();
    let (_, save_ms) = timed_result(|| io::save_png(&output_path, &img))?;
    debug!("wrote png to {}", output_path.display());

    Ok(KnockoutReport {
        image_path: cfg.image_path.clone(),
        output_path,
        width,
        height,
        threshold: params.threshold,
        total_pixels,
        cleared_pixels: cleared,
        timings_ms: TimingsMs {
            load_image: load_ms,
            filter: filter_ms,
            save_image: save_ms,
            total: t_total.elapsed().as_millis() as u64,
        },
    })
}

fn timed_result<T, E, F: FnOnce() -> Result<T, E>>(f: F) -> Result<(T, u64), E> {
    let start = Instant::now();
    let value = f()?;
    Ok((value, start.elapsed().as_millis() as u64))
}

fn timed_value<T, F: FnOnce() -> T>(f: F) -> (T, u64) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed().as_millis() as u64)
}
