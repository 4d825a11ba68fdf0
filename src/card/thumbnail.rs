//! Thumbnail loading and compositing.
//!
//! The preview image comes from wherever the item config or Steam points —
//! usually an `https://` preview URL, sometimes a local file when the config
//! overrides it. Whatever the source aspect ratio, the result is a fixed-size
//! canvas with the image contain-fitted and centered, letterboxed with
//! transparency on the shorter axis.

use super::RenderError;
use super::layout::fit_contain;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use std::io::BufWriter;
use std::path::Path;

/// Load and decode an image from a URL or filesystem path.
///
/// Any failure — unreachable host, non-success status, unreadable file,
/// undecodable bytes — maps to [`RenderError::ImageLoad`] naming the source.
pub fn load_source(source: &str) -> Result<DynamicImage, RenderError> {
    let bytes = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_remote(source)?
    } else {
        std::fs::read(source).map_err(|e| image_load_error(source, &e.to_string()))?
    };

    image::load_from_memory(&bytes).map_err(|e| image_load_error(source, &e.to_string()))
}

fn fetch_remote(url: &str) -> Result<Vec<u8>, RenderError> {
    let response =
        reqwest::blocking::get(url).map_err(|e| image_load_error(url, &e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(image_load_error(url, &format!("HTTP status {status}")));
    }

    let bytes = response
        .bytes()
        .map_err(|e| image_load_error(url, &e.to_string()))?;
    Ok(bytes.to_vec())
}

fn image_load_error(source: &str, reason: &str) -> RenderError {
    RenderError::ImageLoad {
        origin: source.to_string(),
        reason: reason.to_string(),
    }
}

/// Contain-fit the image onto a transparent canvas of the given size.
pub fn compose(img: &DynamicImage, canvas_w: u32, canvas_h: u32) -> RgbaImage {
    let fit = fit_contain((img.width(), img.height()), (canvas_w, canvas_h));

    let mut canvas = RgbaImage::new(canvas_w, canvas_h);
    if fit.scaled_w == 0 || fit.scaled_h == 0 {
        return canvas;
    }

    let scaled = img
        .resize_exact(fit.scaled_w, fit.scaled_h, FilterType::Lanczos3)
        .to_rgba8();
    image::imageops::overlay(&mut canvas, &scaled, fit.offset_x as i64, fit.offset_y as i64);
    canvas
}

/// Encode the canvas as PNG at the given path.
pub fn write_png(canvas: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);
    canvas
        .write_with_encoder(PngEncoder::new(writer))
        .map_err(|e| RenderError::Encode(e.to_string()))
}
