//! Renderer-agnostic scene description.
//!
//! A `Scene` is the flat output of the loaders: a material table and a list
//! of shapes that reference materials by index. Many shapes may share one
//! material (every triangle of a loaded mesh does). The renderer compiles
//! this description into its own primitive and material arenas.

use lumen_math::{Aabb, Vec3};

/// A surface material definition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    /// Diffuse surface with the given albedo.
    Lambertian { albedo: Vec3 },

    /// Reflective surface. `fuzz` is clamped to [0, 1] by the renderer.
    Metal { albedo: Vec3, fuzz: f32 },

    /// Emissive surface that never scatters.
    Light { emit: Vec3 },
}

impl Material {
    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        matches!(self, Material::Light { .. })
    }
}

/// Index of a material within a `Scene`.
pub type MaterialIndex = usize;

/// A geometric shape referencing a scene material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere {
        center: Vec3,
        radius: f32,
        material: MaterialIndex,
    },
    Triangle {
        vertices: [Vec3; 3],
        material: MaterialIndex,
    },
}

impl Shape {
    /// Material index used by this shape.
    pub fn material(&self) -> MaterialIndex {
        match self {
            Shape::Sphere { material, .. } | Shape::Triangle { material, .. } => *material,
        }
    }

    /// Bounding box of the shape.
    pub fn bounds(&self) -> Aabb {
        match *self {
            Shape::Sphere { center, radius, .. } => {
                let r = Vec3::splat(radius.max(0.0));
                Aabb::from_points(center - r, center + r)
            }
            Shape::Triangle { vertices: [a, b, c], .. } => {
                Aabb::from_points(a.min(b).min(c), a.max(b).max(c))
            }
        }
    }
}

/// A complete scene: materials plus the shapes that use them.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub materials: Vec<Material>,
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material and return its index.
    pub fn add_material(&mut self, material: Material) -> MaterialIndex {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Add a sphere using an existing material.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material: MaterialIndex) {
        debug_assert!(material < self.materials.len());
        self.shapes.push(Shape::Sphere {
            center,
            radius,
            material,
        });
    }

    /// Add a triangle using an existing material.
    pub fn add_triangle(&mut self, v0: Vec3, v1: Vec3, v2: Vec3, material: MaterialIndex) {
        debug_assert!(material < self.materials.len());
        self.shapes.push(Shape::Triangle {
            vertices: [v0, v1, v2],
            material,
        });
    }

    /// Number of shapes in the scene.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Number of triangles in the scene.
    pub fn triangle_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::Triangle { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Union of all shape bounds (`Aabb::EMPTY` for an empty scene).
    pub fn bounds(&self) -> Aabb {
        self.shapes
            .iter()
            .fold(Aabb::EMPTY, |acc, s| Aabb::surrounding(&acc, &s.bounds()))
    }
}
