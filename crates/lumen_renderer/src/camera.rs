//! Camera for ray generation.

use crate::{sampling::sample_square, Ray};
use lumen_core::{Background, CameraSettings};
use lumen_math::Vec3;
use rand::RngCore;

/// Camera for generating rays into the scene.
///
/// Configure through the builder methods or [`Camera::from_settings`], then
/// call [`initialize`](Camera::initialize) once before generating rays.
#[derive(Clone, Debug)]
pub struct Camera {
    // Image settings
    pub aspect_ratio: f32,
    pub image_width: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,

    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,
    vfov: f32, // Vertical field of view in degrees

    pub background: Background,

    // Cached computed values (set by initialize())
    image_height: u32,
    center: Vec3,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    samples_scale: f32,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::from_settings(&CameraSettings::default())
    }

    /// Create an uninitialized camera from parsed settings.
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self {
            aspect_ratio: settings.aspect_ratio,
            image_width: settings.image_width,
            samples_per_pixel: settings.samples_per_pixel,
            max_depth: settings.max_depth,
            look_from: settings.lookfrom,
            look_at: settings.lookat,
            vup: settings.vup,
            vfov: settings.vfov,
            background: settings.background,
            // Cached values (initialized to defaults)
            image_height: 1,
            center: Vec3::ZERO,
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
            samples_scale: 1.0,
        }
    }

    /// Set image width and aspect ratio. The height follows from both.
    ///
    /// A ratio that is not positive and finite is ignored.
    pub fn with_resolution(mut self, width: u32, aspect_ratio: f32) -> Self {
        self.image_width = width;
        if is_valid_aspect(aspect_ratio) {
            self.aspect_ratio = aspect_ratio;
        } else {
            log::warn!(
                "Ignoring aspect ratio {}; keeping {}",
                aspect_ratio,
                self.aspect_ratio
            );
        }
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples;
        self.max_depth = max_depth;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set vertical field of view in degrees.
    pub fn with_vfov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) {
        if !is_valid_aspect(self.aspect_ratio) {
            let fallback = CameraSettings::default().aspect_ratio;
            log::warn!(
                "Aspect ratio {} is not usable; falling back to {}",
                self.aspect_ratio,
                fallback
            );
            self.aspect_ratio = fallback;
        }
        self.image_height = ((self.image_width as f32 / self.aspect_ratio) as u32).max(1);
        self.samples_scale = 1.0 / self.samples_per_pixel.max(1) as f32;
        self.center = self.look_from;

        // Calculate viewport dimensions
        let focal_length = (self.look_from - self.look_at).length();
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * focal_length;
        let viewport_width =
            viewport_height * (self.image_width as f32 / self.image_height as f32);

        // Calculate camera basis vectors
        self.w = (self.look_from - self.look_at).normalize();
        self.u = self.vup.cross(self.w).normalize();
        self.v = self.w.cross(self.u);

        // Calculate viewport vectors
        let viewport_u = viewport_width * self.u;
        let viewport_v = -viewport_height * self.v;

        // Calculate pixel delta vectors
        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        // Calculate upper left pixel location
        let viewport_upper_left =
            self.center - focal_length * self.w - viewport_u / 2.0 - viewport_v / 2.0;

        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        log::debug!(
            "Camera initialized: {}x{}, {} spp, depth {}, vfov {}",
            self.image_width,
            self.image_height,
            self.samples_per_pixel,
            self.max_depth,
            self.vfov
        );
    }

    /// Generate a ray for pixel (i, j) with random sampling.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);

        let pixel_sample = self.pixel00_loc
            + ((i as f32) + offset.x) * self.pixel_delta_u
            + ((j as f32) + offset.y) * self.pixel_delta_v;

        Ray::new(self.center, pixel_sample - self.center)
    }

    /// Image height in pixels, valid after `initialize()`.
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Get the samples scale factor (1 / samples_per_pixel).
    pub fn samples_scale(&self) -> f32 {
        self.samples_scale
    }
}

fn is_valid_aspect(ratio: f32) -> bool {
    ratio.is_finite() && ratio > 0.0
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
