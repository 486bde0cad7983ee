//! Bounding Volume Hierarchy (BVH) acceleration structure.
//!
//! Binary tree over a primitive arena. Interior nodes own their children;
//! leaves refer to primitives by index, so the tree never copies geometry.

use std::cmp::Ordering;

use crate::{HitRecord, Hittable, Primitive, Ray};
use lumen_math::{Aabb, Interval};

/// A child slot of a BVH node.
#[derive(Debug)]
enum BvhChild {
    /// Index into the primitive arena.
    Leaf(usize),
    Node(Box<BvhNode>),
}

/// Internal node. A node over a single primitive has the same leaf on both sides.
#[derive(Debug)]
struct BvhNode {
    left: BvhChild,
    right: BvhChild,
    bbox: Aabb,
}

/// BVH over an owned set of primitives.
#[derive(Debug)]
pub struct Bvh {
    primitives: Vec<Primitive>,
    root: Option<BvhNode>,
}

impl Bvh {
    /// Build a BVH over the given primitives.
    ///
    /// An empty set produces a BVH that never hits.
    pub fn new(primitives: Vec<Primitive>) -> Self {
        if primitives.is_empty() {
            return Self {
                primitives,
                root: None,
            };
        }

        let mut indices: Vec<usize> = (0..primitives.len()).collect();
        let root = BvhNode::build(&primitives, &mut indices);

        let bvh = Self {
            primitives,
            root: Some(root),
        };
        log::debug!(
            "Built BVH: {} primitives, {} nodes, depth {}",
            bvh.len(),
            bvh.node_count(),
            bvh.depth()
        );
        bvh
    }

    /// Number of primitives in the hierarchy.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Number of node levels from the root to the deepest node (0 when empty).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, BvhNode::depth)
    }

    /// Number of interior nodes.
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, BvhNode::node_count)
    }
}

impl BvhNode {
    /// Recursive construction over `indices`, which is reordered in place.
    fn build(primitives: &[Primitive], indices: &mut [usize]) -> Self {
        let bbox = indices.iter().fold(Aabb::EMPTY, |acc, &i| {
            Aabb::surrounding(&acc, &primitives[i].bounding_box())
        });
        let axis = bbox.longest_axis();

        let (left, right) = match indices.len() {
            1 => (BvhChild::Leaf(indices[0]), BvhChild::Leaf(indices[0])),
            2 => (BvhChild::Leaf(indices[0]), BvhChild::Leaf(indices[1])),
            _ => {
                indices.sort_unstable_by(|&a, &b| {
                    let a_min = primitives[a].bounding_box().axis_interval(axis).min;
                    let b_min = primitives[b].bounding_box().axis_interval(axis).min;
                    a_min.partial_cmp(&b_min).unwrap_or(Ordering::Equal)
                });

                let mid = indices.len() / 2;
                let (left, right) = indices.split_at_mut(mid);
                (
                    BvhChild::Node(Box::new(Self::build(primitives, left))),
                    BvhChild::Node(Box::new(Self::build(primitives, right))),
                )
            }
        };

        Self { left, right, bbox }
    }

    fn hit(&self, primitives: &[Primitive], ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        if !self.bbox.hit(ray, ray_t) {
            return false;
        }

        let hit_left = self.left.hit(primitives, ray, ray_t, rec);

        // Only check right up to closest hit
        let right_max = if hit_left { rec.t } else { ray_t.max };
        let hit_right = self
            .right
            .hit(primitives, ray, Interval::new(ray_t.min, right_max), rec);

        hit_left || hit_right
    }

    fn depth(&self) -> usize {
        1 + self.left.depth().max(self.right.depth())
    }

    fn node_count(&self) -> usize {
        1 + self.left.node_count() + self.right.node_count()
    }
}

impl BvhChild {
    #[inline]
    fn hit(&self, primitives: &[Primitive], ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        match self {
            BvhChild::Leaf(index) => primitives[*index].hit(ray, ray_t, rec),
            BvhChild::Node(node) => node.hit(primitives, ray, ray_t, rec),
        }
    }

    fn depth(&self) -> usize {
        match self {
            BvhChild::Leaf(_) => 0,
            BvhChild::Node(node) => node.depth(),
        }
    }

    fn node_count(&self) -> usize {
        match self {
            BvhChild::Leaf(_) => 0,
            BvhChild::Node(node) => node.node_count(),
        }
    }
}

impl Hittable for Bvh {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        match &self.root {
            Some(root) => root.hit(&self.primitives, ray, ray_t, rec),
            None => false,
        }
    }

    fn bounding_box(&self) -> Aabb {
        self.root.as_ref().map_or(Aabb::EMPTY, |root| root.bbox)
    }
}
