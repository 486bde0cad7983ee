//! Triangle primitive for ray tracing.
//!
//! Plane intersection followed by a barycentric inside test. Everything that
//! depends only on the vertices is computed once at construction.

use crate::{
    hittable::{HitRecord, Hittable},
    MaterialId, Ray,
};
use lumen_math::{Aabb, Interval, Vec3};

/// Rays closer to parallel with the plane than this are treated as misses.
const PARALLEL_EPSILON: f32 = 1e-8;

/// A triangle primitive.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    v0: Vec3,
    /// Edge v1 - v0
    e1: Vec3,
    /// Edge v2 - v0
    e2: Vec3,
    /// Face normal (unit length)
    normal: Vec3,
    /// Plane constant: dot(normal, v0)
    d: f32,
    /// n / dot(n, n) with n the unnormalized face normal
    w: Vec3,
    material: MaterialId,
    bbox: Aabb,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The winding v0 -> v1 -> v2 decides which side is the front face.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: MaterialId) -> Self {
        let e1 = v1 - v0;
        let e2 = v2 - v0;

        let n = e1.cross(e2);
        let normal = n.normalize();
        let d = normal.dot(v0);
        let w = n / n.dot(n);

        let bbox = Aabb::surrounding(&Aabb::from_points(v0, v1), &Aabb::from_points(v0, v2));

        Self {
            v0,
            e1,
            e2,
            normal,
            d,
            w,
            material,
            bbox,
        }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v0 + self.e1, self.v0 + self.e2]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Barycentric weights `(alpha, beta)` of a point in the triangle's plane,
    /// relative to the edges `v1 - v0` and `v2 - v0`.
    pub fn barycentric(&self, p: Vec3) -> (f32, f32) {
        let planar = p - self.v0;
        let alpha = self.w.dot(planar.cross(self.e2));
        let beta = self.w.dot(self.e1.cross(planar));
        (alpha, beta)
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let denom = self.normal.dot(ray.direction());

        // Ray is parallel to the plane
        if denom.abs() < PARALLEL_EPSILON {
            return false;
        }

        let t = (self.d - self.normal.dot(ray.origin())) / denom;
        if !ray_t.contains(t) {
            return false;
        }

        let p = ray.at(t);
        let (alpha, beta) = self.barycentric(p);

        if alpha < 0.0 || beta < 0.0 || alpha + beta > 1.0 {
            return false;
        }

        rec.t = t;
        rec.p = p;
        rec.set_face_normal(ray, self.normal);
        rec.material = self.material;

        true
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
