//! Line-oriented scene description parser.
//!
//! Each non-empty line is one record; the first field names the record type.
//!
//! - `sphere x y z radius mat r g b [fuzz]`
//! - `triangle x0 y0 z0 x1 y1 z1 x2 y2 z2 mat r g b [fuzz]`
//! - `obj path mat r g b [fuzz]`
//!
//! `mat` is one of `lambertian`, `metal` (fuzz required) or `light`.
//! Lines starting with `#` are comments. A malformed record is logged and
//! skipped; the rest of the file still loads.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ParseError, ParseResult};
use crate::mesh::Mesh;
use crate::scene::{Material, Scene};
use crate::tokens::Tokens;

/// Load a scene file from disk.
///
/// A missing or unreadable file is not fatal: it is logged and an empty
/// scene is returned so the render can still run.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Scene {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(source) => {
            let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
            let scene = parse_scene(&source, base_dir);
            log::info!(
                "Loaded scene {}: {} shapes, {} materials",
                path.display(),
                scene.shape_count(),
                scene.materials.len()
            );
            scene
        }
        Err(e) => {
            log::warn!(
                "Could not read scene file {}: {}; rendering an empty scene",
                path.display(),
                e
            );
            Scene::new()
        }
    }
}

/// Parse scene records from a string.
///
/// Relative `obj` paths are resolved against `base_dir`.
pub fn parse_scene(source: &str, base_dir: &Path) -> Scene {
    let mut scene = Scene::new();

    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Err(e) = parse_record(trimmed, base_dir, &mut scene) {
            log::warn!("Scene line {}: {}; skipping", index + 1, e);
        }
    }

    scene
}

/// Parse one record and append it to the scene.
///
/// The scene is only modified once the whole record has parsed.
fn parse_record(line: &str, base_dir: &Path, scene: &mut Scene) -> ParseResult<()> {
    let mut tokens = Tokens::new(line);
    let kind = tokens.word("record type")?;

    match kind {
        "sphere" => {
            let center = tokens.vec3("sphere center")?;
            let radius = tokens.number("sphere radius")?;
            let material = parse_material(&mut tokens)?;

            let material = scene.add_material(material);
            scene.add_sphere(center, radius, material);
        }
        "triangle" => {
            let v0 = tokens.vec3("triangle vertex")?;
            let v1 = tokens.vec3("triangle vertex")?;
            let v2 = tokens.vec3("triangle vertex")?;
            let material = parse_material(&mut tokens)?;

            let material = scene.add_material(material);
            scene.add_triangle(v0, v1, v2, material);
        }
        "obj" => {
            let file = tokens.word("obj path")?;
            let material = parse_material(&mut tokens)?;

            let mesh_path = base_dir.join(file);
            if !mesh_path.is_file() {
                return Err(ParseError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("mesh file {} not found", mesh_path.display()),
                )));
            }
            let mesh = Mesh::load_obj(&mesh_path)?;

            // One material entry shared by every face of the mesh
            let material = scene.add_material(material);
            for [v0, v1, v2] in mesh.triangles() {
                scene.add_triangle(v0, v1, v2, material);
            }
        }
        other => return Err(ParseError::UnknownRecord(other.to_string())),
    }

    Ok(())
}

/// Parse `mat r g b [fuzz]`.
fn parse_material(tokens: &mut Tokens<'_>) -> ParseResult<Material> {
    let kind = tokens.word("material type")?;

    match kind {
        "lambertian" => Ok(Material::Lambertian {
            albedo: tokens.vec3("material color")?,
        }),
        "metal" => {
            let albedo = tokens.vec3("material color")?;
            let fuzz = tokens.number("metal fuzz")?;
            Ok(Material::Metal { albedo, fuzz })
        }
        "light" => Ok(Material::Light {
            emit: tokens.vec3("material color")?,
        }),
        other => Err(ParseError::UnknownMaterial(other.to_string())),
    }
}
