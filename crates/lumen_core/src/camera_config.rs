//! Camera settings and their key-value file format.
//!
//! ```text
//! aspect_ratio 16/9
//! image_width 400
//! samples_per_pixel 100
//! max_depth 20
//! vfov 20
//! lookfrom 13 2 3
//! lookat 0 0 0
//! vup 0 1 0
//! background 0.7 0.8 1.0
//! seed 7
//! ```
//!
//! Unknown keys and malformed values are logged and skipped. Keys that do
//! not appear keep their defaults.

use std::fs;
use std::path::Path;

use lumen_math::Vec3;

use crate::error::{ParseError, ParseResult};
use crate::tokens::Tokens;

/// What a ray that escapes the scene sees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Background {
    /// A constant color.
    Solid(Vec3),
    /// Vertical white-to-sky-blue gradient keyed on the ray direction.
    #[default]
    SkyGradient,
}

/// User-facing camera and render settings.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraSettings {
    /// Ratio of image width over height
    pub aspect_ratio: f32,
    /// Rendered image width in pixels
    pub image_width: u32,
    /// Count of random samples for each pixel
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces into the scene
    pub max_depth: u32,
    /// Vertical field of view in degrees
    pub vfov: f32,
    pub lookfrom: Vec3,
    pub lookat: Vec3,
    pub vup: Vec3,
    pub background: Background,
    /// Seed for the per-pixel random streams
    pub seed: u64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            image_width: 400,
            samples_per_pixel: 100,
            max_depth: 20,
            vfov: 20.0,
            lookfrom: Vec3::new(13.0, 2.0, 3.0),
            lookat: Vec3::ZERO,
            vup: Vec3::Y,
            background: Background::SkyGradient,
            seed: 0,
        }
    }
}

/// Load camera settings from disk.
///
/// A missing or unreadable file is logged and the defaults are returned.
pub fn load_camera_settings<P: AsRef<Path>>(path: P) -> CameraSettings {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(source) => {
            let settings = parse_camera_settings(&source);
            log::info!("Loaded camera settings from {}", path.display());
            settings
        }
        Err(e) => {
            log::warn!(
                "Could not read camera file {}: {}; using default camera",
                path.display(),
                e
            );
            CameraSettings::default()
        }
    }
}

/// Parse camera settings from a string, starting from the defaults.
pub fn parse_camera_settings(source: &str) -> CameraSettings {
    let mut settings = CameraSettings::default();

    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Err(e) = apply_setting(&mut settings, trimmed) {
            log::warn!("Camera line {}: {}; skipping", index + 1, e);
        }
    }

    settings
}

/// Apply one `key value...` line. Settings are untouched on error.
fn apply_setting(settings: &mut CameraSettings, line: &str) -> ParseResult<()> {
    let mut tokens = Tokens::new(line);
    let key = tokens.word("camera key")?;

    match key {
        "aspect_ratio" => settings.aspect_ratio = parse_ratio(tokens.word("aspect_ratio")?)?,
        "image_width" => settings.image_width = tokens.number("image_width")?,
        "samples_per_pixel" => settings.samples_per_pixel = tokens.number("samples_per_pixel")?,
        "max_depth" => settings.max_depth = tokens.number("max_depth")?,
        "vfov" => settings.vfov = tokens.number("vfov")?,
        "lookfrom" => settings.lookfrom = tokens.vec3("lookfrom")?,
        "lookat" => settings.lookat = tokens.vec3("lookat")?,
        "vup" => settings.vup = tokens.vec3("vup")?,
        "background" => settings.background = Background::Solid(tokens.vec3("background")?),
        "sky_gradient" => settings.background = Background::SkyGradient,
        "seed" => settings.seed = tokens.number("seed")?,
        other => return Err(ParseError::UnknownKey(other.to_string())),
    }

    Ok(())
}

/// Parse `1.7778` or `16/9`.
fn parse_ratio(value: &str) -> ParseResult<f32> {
    let invalid = || ParseError::InvalidNumber {
        field: "aspect_ratio",
        value: value.to_string(),
    };

    let ratio = match value.split_once('/') {
        Some((num, den)) => {
            let num: f32 = num.parse().map_err(|_| invalid())?;
            let den: f32 = den.parse().map_err(|_| invalid())?;
            num / den
        }
        None => value.parse().map_err(|_| invalid())?,
    };

    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_keys() {
        let settings = parse_camera_settings(
            "aspect_ratio 2.0\n\
             image_width 64\n\
             samples_per_pixel 4\n\
             max_depth 3\n\
             vfov 90\n\
             lookfrom -2 2 1\n\
             lookat 0 0 -1\n\
             vup 0 0 1\n\
             background 0.1 0.2 0.3\n\
             seed 99\n",
        );

        assert_eq!(settings.aspect_ratio, 2.0);
        assert_eq!(settings.image_width, 64);
        assert_eq!(settings.samples_per_pixel, 4);
        assert_eq!(settings.max_depth, 3);
        assert_eq!(settings.vfov, 90.0);
        assert_eq!(settings.lookfrom, Vec3::new(-2.0, 2.0, 1.0));
        assert_eq!(settings.lookat, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(settings.vup, Vec3::Z);
        assert_eq!(settings.background, Background::Solid(Vec3::new(0.1, 0.2, 0.3)));
        assert_eq!(settings.seed, 99);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let settings = parse_camera_settings("image_width 200\n");
        let defaults = CameraSettings::default();

        assert_eq!(settings.image_width, 200);
        assert_eq!(settings.samples_per_pixel, defaults.samples_per_pixel);
        assert_eq!(settings.lookfrom, defaults.lookfrom);
        assert_eq!(settings.background, Background::SkyGradient);
    }

    #[test]
    fn test_unknown_and_malformed_keys_are_skipped() {
        let settings = parse_camera_settings(
            "focus_dist 10 20\n\
             image_width wide\n\
             lookfrom 1 2\n\
             max_depth 7\n",
        );
        let defaults = CameraSettings::default();

        assert_eq!(settings.image_width, defaults.image_width);
        assert_eq!(settings.lookfrom, defaults.lookfrom);
        assert_eq!(settings.max_depth, 7);
    }

    #[test]
    fn test_aspect_ratio_fraction() {
        let settings = parse_camera_settings("aspect_ratio 16/9");
        assert!((settings.aspect_ratio - 16.0 / 9.0).abs() < 1e-6);

        assert!(parse_ratio("4/0").is_err());
        assert!(parse_ratio("-1").is_err());
        assert!(parse_ratio("a/b").is_err());
    }

    #[test]
    fn test_sky_gradient_key_overrides_background() {
        let settings = parse_camera_settings("background 1 0 0\nsky_gradient\n");
        assert_eq!(settings.background, Background::SkyGradient);
    }

    #[test]
    fn test_missing_camera_file_uses_defaults() {
        assert_eq!(
            load_camera_settings("no/such/camera.txt"),
            CameraSettings::default()
        );
    }
}
