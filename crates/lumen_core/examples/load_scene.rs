//! Example: Load and inspect a scene file and an optional camera file.
//!
//! Run with: cargo run --example load_scene -- scene.txt [camera.txt]

use std::env;

use lumen_core::{load_camera_settings, load_scene, Material, Shape};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_scene <scene-file> [camera-file]");
        return;
    }

    let scene = load_scene(&args[1]);
    println!("\n=== Scene: {} ===", args[1]);
    println!("Materials: {}", scene.materials.len());
    println!("Shapes: {}", scene.shape_count());
    println!("Triangles: {}", scene.triangle_count());

    let bounds = scene.bounds();
    if !scene.is_empty() {
        println!(
            "Bounds: ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
            bounds.x.min, bounds.y.min, bounds.z.min, bounds.x.max, bounds.y.max, bounds.z.max
        );
    }

    println!("\n--- Shapes ---");
    for (i, shape) in scene.shapes.iter().enumerate().take(20) {
        let material = match scene.materials[shape.material()] {
            Material::Lambertian { .. } => "lambertian",
            Material::Metal { .. } => "metal",
            Material::Light { .. } => "light",
        };
        match shape {
            Shape::Sphere { center, radius, .. } => println!(
                "  [{}] sphere at ({:.2}, {:.2}, {:.2}) r={:.2} ({})",
                i, center.x, center.y, center.z, radius, material
            ),
            Shape::Triangle { vertices, .. } => println!(
                "  [{}] triangle starting at ({:.2}, {:.2}, {:.2}) ({})",
                i, vertices[0].x, vertices[0].y, vertices[0].z, material
            ),
        }
    }
    if scene.shape_count() > 20 {
        println!("  ... {} more", scene.shape_count() - 20);
    }

    if let Some(camera_path) = args.get(2) {
        let settings = load_camera_settings(camera_path);
        println!("\n--- Camera ---");
        println!("{:#?}", settings);
    }
}
