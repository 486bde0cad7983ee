//! Renders the random-spheres demo scene and saves it in PPM format.
//!
//! Run with `cargo run --release -p lumen_renderer --example render_demo`.

use std::fs::File;
use std::io::BufWriter;

use lumen_core::{demo, CameraSettings};
use lumen_renderer::{render_parallel, Accelerator, Camera, World};

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Lumen Path Tracer - Demo");
    println!("========================");

    // Build the scene
    let start = std::time::Instant::now();
    let scene = demo::random_spheres(7);
    let world = World::from_scene(&scene, Accelerator::Bvh);
    println!("Scene built in {:?} ({} shapes)", start.elapsed(), scene.shape_count());

    // Defaults already frame the demo scene; keep the preview quick
    let settings = CameraSettings {
        samples_per_pixel: 16,
        max_depth: 10,
        ..CameraSettings::default()
    };
    let mut camera = Camera::from_settings(&settings);
    camera.initialize();

    println!(
        "Rendering {}x{} @ {} spp...",
        camera.image_width,
        camera.image_height(),
        camera.samples_per_pixel
    );

    let start = std::time::Instant::now();
    let image = render_parallel(&camera, &world, settings.seed, None);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    let mut out = BufWriter::new(File::create(filename)?);
    image.write_ppm(&mut out)?;
    println!("Saved to {}", filename);

    Ok(())
}
