use crate::{Interval, Ray, Vec3};

/// Minimum thickness of any box axis. Flat boxes break the slab test.
const MIN_EXTENT: f32 = 0.0001;

/// Axis-Aligned Bounding Box for spatial acceleration structures (BVH).
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// A box that contains nothing. Identity element for `surrounding`.
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    /// Create a new AABB from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB from two corner points, in any order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self::new(
            Interval::new(a.x.min(b.x), a.x.max(b.x)),
            Interval::new(a.y.min(b.y), a.y.max(b.y)),
            Interval::new(a.z.min(b.z), a.z.max(b.z)),
        )
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            1 => self.y,
            2 => self.z,
            _ => self.x,
        }
    }

    /// Test if a ray intersects this AABB within the given interval.
    ///
    /// Slab method: the ray-parameter range is narrowed axis by axis and the
    /// box is missed as soon as it becomes empty. A zero direction component
    /// yields an infinite inverse, which IEEE arithmetic handles without
    /// special cases.
    pub fn hit(&self, r: &Ray, mut ray_t: Interval) -> bool {
        let ray_orig = r.origin();
        let ray_dir = r.direction();

        for axis in 0..3 {
            let ax = self.axis_interval(axis);
            let adinv = 1.0 / ray_dir[axis];

            let t0 = (ax.min - ray_orig[axis]) * adinv;
            let t1 = (ax.max - ray_orig[axis]) * adinv;

            if t0 < t1 {
                if t0 > ray_t.min {
                    ray_t.min = t0;
                }
                if t1 < ray_t.max {
                    ray_t.max = t1;
                }
            } else {
                if t1 > ray_t.min {
                    ray_t.min = t1;
                }
                if t0 < ray_t.max {
                    ray_t.max = t0;
                }
            }

            if ray_t.max <= ray_t.min {
                return false;
            }
        }

        true
    }

    /// Returns the index (0=X, 1=Y, 2=Z) of the axis with the longest extent.
    ///
    /// Ties go to Z when X is not strictly the largest of X/Y, or Y when it
    /// beats Z.
    pub fn longest_axis(&self) -> usize {
        let x_size = self.x.size();
        let y_size = self.y.size();
        let z_size = self.z.size();

        if x_size > y_size {
            if x_size > z_size {
                0
            } else {
                2
            }
        } else if y_size > z_size {
            1
        } else {
            2
        }
    }

    /// Returns true if the point lies inside the box (boundary inclusive).
    pub fn contains_point(&self, p: Vec3) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y) && self.z.contains(p.z)
    }

    /// Pad intervals to avoid zero-width AABBs (degenerate cases).
    fn pad_to_minimums(&mut self) {
        if self.x.size() < MIN_EXTENT {
            self.x = self.x.expand(MIN_EXTENT);
        }
        if self.y.size() < MIN_EXTENT {
            self.y = self.y.expand(MIN_EXTENT);
        }
        if self.z.size() < MIN_EXTENT {
            self.z = self.z.expand(MIN_EXTENT);
        }
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::from_points(Vec3::splat(-1.0), Vec3::splat(1.0))
    }

    #[test]
    fn test_aabb_from_points() {
        let aabb = Aabb::from_points(Vec3::ZERO, Vec3::splat(10.0));

        assert_eq!(aabb.x, Interval::new(0.0, 10.0));
        assert_eq!(aabb.y, Interval::new(0.0, 10.0));
        assert_eq!(aabb.z, Interval::new(0.0, 10.0));
    }

    #[test]
    fn test_aabb_from_points_order_independent() {
        let a = Vec3::new(3.0, -1.0, 2.0);
        let b = Vec3::new(-2.0, 4.0, 0.5);
        assert_eq!(Aabb::from_points(a, b), Aabb::from_points(b, a));
    }

    #[test]
    fn test_aabb_pads_flat_axis() {
        // A box lying in the z=0 plane gets a thin z slab
        let aabb = Aabb::from_points(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        assert!(aabb.z.size() >= 0.0001 * 0.999);
        assert!(aabb.z.contains(0.0));
        assert_eq!(aabb.x, Interval::new(0.0, 1.0));
    }

    #[test]
    fn test_aabb_surrounding_contains_both() {
        let box1 = Aabb::from_points(Vec3::ZERO, Vec3::splat(5.0));
        let box2 = Aabb::from_points(Vec3::new(3.0, -2.0, 3.0), Vec3::new(10.0, 1.0, 4.0));
        let merged = Aabb::surrounding(&box1, &box2);

        for corner in [
            Vec3::ZERO,
            Vec3::splat(5.0),
            Vec3::new(3.0, -2.0, 3.0),
            Vec3::new(10.0, 1.0, 4.0),
        ] {
            assert!(merged.contains_point(corner), "{corner:?} not in merged box");
        }

        // Tight per axis
        assert_eq!(merged.x, Interval::new(0.0, 10.0));
        assert_eq!(merged.y, Interval::new(-2.0, 5.0));
        assert_eq!(merged.z, Interval::new(0.0, 5.0));
    }

    #[test]
    fn test_aabb_surrounding_empty_is_identity() {
        let b = unit_box();
        assert_eq!(Aabb::surrounding(&Aabb::EMPTY, &b), b);
        assert_eq!(Aabb::surrounding(&b, &Aabb::EMPTY), b);
    }

    #[test]
    fn test_aabb_hit_through_center() {
        let aabb = unit_box();
        let t = Interval::new(0.0, 100.0);

        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(aabb.hit(&ray, t));

        // Oblique ray through the center
        let origin = Vec3::new(4.0, -3.0, 7.0);
        let ray = Ray::new(origin, -origin);
        assert!(aabb.hit(&ray, t));

        // Negative direction components
        let ray = Ray::new(Vec3::splat(5.0), Vec3::splat(-1.0));
        assert!(aabb.hit(&ray, t));
    }

    #[test]
    fn test_aabb_miss_pointing_away() {
        let aabb = unit_box();
        let t = Interval::new(0.0, 100.0);

        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(!aabb.hit(&ray, t));

        let ray = Ray::new(Vec3::new(4.0, 4.0, 4.0), Vec3::new(1.0, 0.5, 2.0));
        assert!(!aabb.hit(&ray, t));
    }

    #[test]
    fn test_aabb_miss_parallel_outside() {
        // Zero x-direction with origin outside the x slab
        let aabb = unit_box();
        let ray = Ray::new(Vec3::new(10.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(!aabb.hit(&ray, Interval::new(0.0, 100.0)));
    }

    #[test]
    fn test_aabb_hit_respects_ray_interval() {
        let aabb = unit_box();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        // Box spans t in [4, 6]
        assert!(!aabb.hit(&ray, Interval::new(0.0, 3.0)));
        assert!(!aabb.hit(&ray, Interval::new(7.0, 100.0)));
        assert!(aabb.hit(&ray, Interval::new(4.5, 5.0)));
    }

    #[test]
    fn test_aabb_longest_axis() {
        let aabb_x = Aabb::from_points(Vec3::ZERO, Vec3::new(10.0, 1.0, 1.0));
        assert_eq!(aabb_x.longest_axis(), 0);

        let aabb_y = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 10.0, 1.0));
        assert_eq!(aabb_y.longest_axis(), 1);

        let aabb_z = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 1.0, 10.0));
        assert_eq!(aabb_z.longest_axis(), 2);
    }

    #[test]
    fn test_aabb_longest_axis_ties() {
        // x == y == z falls through to z
        assert_eq!(unit_box().longest_axis(), 2);

        // x > y but x == z picks z
        let xz = Aabb::from_points(Vec3::ZERO, Vec3::new(4.0, 1.0, 4.0));
        assert_eq!(xz.longest_axis(), 2);

        // x == y > z picks y
        let xy = Aabb::from_points(Vec3::ZERO, Vec3::new(4.0, 4.0, 1.0));
        assert_eq!(xy.longest_axis(), 1);
    }
}
