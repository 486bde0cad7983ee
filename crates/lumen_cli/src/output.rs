//! Image file output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use image::RgbImage;
use lumen_renderer::ImageBuffer;

/// Output encodings chosen from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ppm,
    Png,
}

impl Format {
    pub fn from_path(path: &str) -> Self {
        let is_png = Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png {
            Format::Png
        } else {
            Format::Ppm
        }
    }
}

/// Save a finished framebuffer to `path` in the format its extension names.
pub fn save_image(image: &ImageBuffer, path: &str) -> Result<()> {
    match Format::from_path(path) {
        Format::Png => save_png(image, path),
        Format::Ppm => {
            let file = File::create(path).with_context(|| format!("Failed to create {}", path))?;
            let mut out = BufWriter::new(file);
            image
                .write_ppm(&mut out)
                .and_then(|_| out.flush())
                .with_context(|| format!("Failed to write {}", path))
        }
    }
}

/// Encode with the same gamma and quantization as the PPM writer.
fn save_png(image: &ImageBuffer, path: &str) -> Result<()> {
    let rgb = RgbImage::from_raw(image.width, image.height, image.to_rgb8())
        .ok_or_else(|| anyhow!("Framebuffer size does not match {}x{}", image.width, image.height))?;
    rgb.save(path)
        .with_context(|| format!("Failed to save PNG {}", path))?;
    log::info!("Saved {}", path);
    Ok(())
}
