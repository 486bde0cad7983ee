//! Closed set of geometric primitives stored in acceleration structures.

use crate::{
    hittable::{HitRecord, Hittable},
    Ray, Sphere, Triangle,
};
use lumen_math::{Aabb, Interval};

/// A single piece of scene geometry.
///
/// Dispatch is a `match`, keeping the BVH leaf test free of virtual calls.
#[derive(Debug, Clone, Copy)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Hittable for Primitive {
    #[inline]
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        match self {
            Primitive::Sphere(s) => s.hit(ray, ray_t, rec),
            Primitive::Triangle(t) => t.hit(ray, ray_t, rec),
        }
    }

    #[inline]
    fn bounding_box(&self) -> Aabb {
        match self {
            Primitive::Sphere(s) => s.bounding_box(),
            Primitive::Triangle(t) => t.bounding_box(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<Triangle> for Primitive {
    fn from(t: Triangle) -> Self {
        Primitive::Triangle(t)
    }
}
