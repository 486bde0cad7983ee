//! Render-time scene: geometry root plus material arena.

use crate::{
    hittable::{HitRecord, Hittable},
    Bvh, HittableList, Material, MaterialId, Primitive, Ray, Sphere, Triangle,
};
use lumen_core::{Scene, Shape};
use lumen_math::{Aabb, Interval};

/// How primitives are organized for intersection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Accelerator {
    /// Bounding volume hierarchy.
    #[default]
    Bvh,
    /// Flat list, every primitive tested per ray.
    List,
}

/// Everything the integrator reads during a render. Immutable once built.
pub struct World {
    geometry: Box<dyn Hittable>,
    materials: Vec<Material>,
}

impl World {
    /// Wrap an existing geometry root and material arena.
    pub fn new(geometry: Box<dyn Hittable>, materials: Vec<Material>) -> Self {
        Self {
            geometry,
            materials,
        }
    }

    /// Compile a scene description.
    ///
    /// Shapes that reference a material outside the scene's table are
    /// logged and dropped.
    pub fn from_scene(scene: &Scene, accelerator: Accelerator) -> Self {
        let materials: Vec<Material> = scene.materials.iter().map(Material::from).collect();

        let mut primitives = Vec::with_capacity(scene.shapes.len());
        for (index, shape) in scene.shapes.iter().enumerate() {
            if shape.material() >= materials.len() {
                log::warn!(
                    "Shape {} references missing material {}; dropping it",
                    index,
                    shape.material()
                );
                continue;
            }
            primitives.push(compile_shape(shape));
        }

        let emissive = scene.materials.iter().filter(|m| m.is_emissive()).count();
        log::info!(
            "Scene compiled: {} primitives, {} materials ({} emissive), {:?} accelerator",
            primitives.len(),
            materials.len(),
            emissive,
            accelerator
        );

        let geometry: Box<dyn Hittable> = match accelerator {
            Accelerator::Bvh => Box::new(Bvh::new(primitives)),
            Accelerator::List => Box::new(HittableList::from_primitives(primitives)),
        };

        Self::new(geometry, materials)
    }

    /// Look up a material by handle.
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.index())
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}

impl Hittable for World {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        self.geometry.hit(ray, ray_t, rec)
    }

    fn bounding_box(&self) -> Aabb {
        self.geometry.bounding_box()
    }
}

fn compile_shape(shape: &Shape) -> Primitive {
    match *shape {
        Shape::Sphere {
            center,
            radius,
            material,
        } => Sphere::new(center, radius, MaterialId(material as u32)).into(),
        Shape::Triangle {
            vertices: [v0, v1, v2],
            material,
        } => Triangle::new(v0, v1, v2, MaterialId(material as u32)).into(),
    }
}
