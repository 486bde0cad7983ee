//! Lumen Core - scene description and file loading.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Material`, `Shape`, `Mesh`
//! - **Camera settings**: `CameraSettings`, `Background`
//! - **Loaders**: the line-oriented scene format, the key-value camera
//!   format and Wavefront OBJ meshes
//! - **Demo content**: the random-spheres scene
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::{load_camera_settings, load_scene};
//!
//! let scene = load_scene("scene.txt");
//! let settings = load_camera_settings("camera.txt");
//! println!("{} shapes, {} px wide", scene.shape_count(), settings.image_width);
//! ```

pub mod camera_config;
pub mod demo;
pub mod error;
pub mod mesh;
pub mod scene;
pub mod scene_file;
mod tokens;

// Re-export commonly used types
pub use camera_config::{load_camera_settings, parse_camera_settings, Background, CameraSettings};
pub use error::{ParseError, ParseResult};
pub use mesh::Mesh;
pub use scene::{Material, MaterialIndex, Scene, Shape};
pub use scene_file::{load_scene, parse_scene};
