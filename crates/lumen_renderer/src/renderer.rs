//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with configurable depth
//! - Anti-aliasing via jittered multi-sampling
//! - Sequential (streamed) and row-band parallel drivers
//!
//! Every pixel draws from its own generator seeded by the render seed and the
//! pixel index, so both drivers produce the same image for the same seed.

use std::io::{self, Write};
use std::ops::Range;
use std::time::Instant;

use crate::image::{write_color, write_ppm_header, ImageBuffer};
use crate::sampling::pixel_rng;
use crate::{Camera, Color, HitRecord, Hittable, Ray, World};
use lumen_core::Background;
use lumen_math::Interval;
use rand::RngCore;
use rayon::prelude::*;

/// Smallest accepted hit distance. Keeps bounced rays off their own surface.
const SHADOW_ACNE_EPSILON: f32 = 0.001;

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It traces the ray through
/// the scene, bouncing off surfaces and accumulating color.
pub fn ray_color(
    ray: &Ray,
    world: &World,
    depth: u32,
    background: &Background,
    rng: &mut dyn RngCore,
) -> Color {
    // If we've exceeded max depth, return black (no light)
    if depth == 0 {
        return Color::ZERO;
    }

    let mut rec = HitRecord::default();

    if !world.hit(ray, Interval::new(SHADOW_ACNE_EPSILON, f32::INFINITY), &mut rec) {
        return match background {
            Background::Solid(color) => *color,
            Background::SkyGradient => sky_gradient(ray),
        };
    }

    let Some(material) = world.material(rec.material) else {
        return Color::ZERO;
    };

    let emission = material.emitted();

    match material.scatter(ray, &rec, rng) {
        Some(result) => {
            let scattered_color = ray_color(&result.scattered, world, depth - 1, background, rng);
            emission + result.attenuation * scattered_color
        }
        // Ray was absorbed
        None => emission,
    }
}

/// Compute sky gradient background.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel(
    camera: &Camera,
    world: &World,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, camera.max_depth, &camera.background, rng);
    }

    pixel_color * camera.samples_scale()
}

/// Render a single pixel with its own generator for `seed`.
pub fn pixel_color(camera: &Camera, world: &World, x: u32, y: u32, seed: u64) -> Color {
    let pixel_index = y as u64 * camera.image_width as u64 + x as u64;
    let mut rng = pixel_rng(seed, pixel_index);
    render_pixel(camera, world, x, y, &mut rng)
}

/// Render the entire scene to an image buffer on the calling thread.
///
/// The camera must already be initialized.
pub fn render(camera: &Camera, world: &World, seed: u64) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height());
    log_render_start(camera, "sequential");
    let started = Instant::now();

    for y in 0..image.height {
        for x in 0..image.width {
            image.set(x, y, pixel_color(camera, world, x, y, seed));
        }
    }

    log::info!("Render finished in {:.2?}", started.elapsed());
    image
}

/// Split `height` rows into one contiguous band per worker.
///
/// Every band gets `height / workers` rows and the last one also takes the
/// remainder. The worker count is capped at the number of rows.
pub fn row_bands(height: u32, workers: usize) -> Vec<Range<u32>> {
    if height == 0 {
        return Vec::new();
    }

    let workers = workers.clamp(1, height as usize) as u32;
    let rows_per_band = height / workers;

    (0..workers)
        .map(|i| {
            let start = i * rows_per_band;
            let end = if i + 1 == workers {
                height
            } else {
                start + rows_per_band
            };
            start..end
        })
        .collect()
}

/// Render with one row band per worker thread.
///
/// `threads` picks the worker count; `None` uses rayon's global pool. Returns
/// once every band is finished. The camera must already be initialized.
pub fn render_parallel(
    camera: &Camera,
    world: &World,
    seed: u64,
    threads: Option<usize>,
) -> ImageBuffer {
    let width = camera.image_width;
    let height = camera.image_height();
    let mut image = ImageBuffer::new(width, height);
    if width == 0 {
        return image;
    }

    let workers = threads.unwrap_or_else(rayon::current_num_threads);
    let bands = row_bands(height, workers);
    log_render_start(camera, &format!("parallel, {} bands", bands.len()));
    let started = Instant::now();

    // Carve the framebuffer into disjoint row bands
    let mut rest: &mut [Color] = &mut image.pixels;
    let mut jobs = Vec::with_capacity(bands.len());
    for band in bands {
        let len = (band.end - band.start) as usize * width as usize;
        let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(len);
        rest = tail;
        jobs.push((band, chunk));
    }

    let run = move || {
        jobs.into_par_iter()
            .for_each(|(rows, pixels)| render_band(camera, world, seed, rows, pixels));
    };

    match threads {
        Some(n) => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                log::warn!("Could not build a {}-thread pool ({}); using the global pool", n, e);
                run();
            }
        },
        None => run(),
    }

    log::info!("Render finished in {:.2?}", started.elapsed());
    image
}

/// Fill `pixels` with the rows in `rows`.
fn render_band(camera: &Camera, world: &World, seed: u64, rows: Range<u32>, pixels: &mut [Color]) {
    let width = camera.image_width as usize;
    for (row, y) in pixels.chunks_mut(width).zip(rows) {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = pixel_color(camera, world, x as u32, y, seed);
        }
    }
}

/// Render on the calling thread, streaming a P3 PPM to `out` pixel by pixel.
///
/// The camera must already be initialized.
pub fn render_to_writer<W: Write>(
    camera: &Camera,
    world: &World,
    seed: u64,
    out: &mut W,
) -> io::Result<()> {
    let width = camera.image_width;
    let height = camera.image_height();
    log_render_start(camera, "sequential");
    let started = Instant::now();

    write_ppm_header(out, width, height)?;
    for y in 0..height {
        log::debug!("Scanlines remaining: {}", height - y);
        for x in 0..width {
            write_color(out, pixel_color(camera, world, x, y, seed))?;
        }
    }
    out.flush()?;

    log::info!("Render finished in {:.2?}", started.elapsed());
    Ok(())
}

fn log_render_start(camera: &Camera, mode: &str) {
    log::info!(
        "Rendering {}x{} at {} spp, depth {} ({})",
        camera.image_width,
        camera.image_height(),
        camera.samples_per_pixel,
        camera.max_depth,
        mode
    );
}
