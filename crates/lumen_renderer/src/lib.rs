//! Lumen Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer: shapes and a BVH behind the `Hittable` seam,
//! a small closed set of materials, a pinhole camera and sequential or
//! row-band parallel drivers that write PPM images.

mod bvh;
mod camera;
mod hittable;
pub mod image;
mod material;
mod primitive;
mod renderer;
pub mod sampling;
mod sphere;
mod triangle;
mod world;

pub use bvh::Bvh;
pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use image::{color_to_rgb, linear_to_gamma, ImageBuffer};
pub use material::{Color, DiffuseLight, Lambertian, Material, MaterialId, Metal, ScatterResult};
pub use primitive::Primitive;
pub use renderer::{
    pixel_color, ray_color, render, render_parallel, render_pixel, render_to_writer, row_bands,
};
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use world::{Accelerator, World};

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Aabb, Interval, Ray, Vec3};
