//! Built-in demo scene: a field of small random spheres around two large ones.

use lumen_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::scene::{Material, Scene};

/// Half-width of the grid of small spheres.
const GRID_EXTENT: i32 = 11;

const SMALL_RADIUS: f32 = 0.2;

/// Build the random-spheres scene from a seed.
///
/// A huge grey ground sphere, up to 22x22 small spheres (80% diffuse,
/// 20% metal) jittered on a unit grid, and two unit spheres: one diffuse,
/// one polished metal. The same seed always yields the same scene.
pub fn random_spheres(seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut scene = Scene::new();

    let ground = scene.add_material(Material::Lambertian {
        albedo: Vec3::splat(0.5),
    });
    scene.add_sphere(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground);

    // Keep the grid clear of the metal feature sphere
    let keep_out = Vec3::new(4.0, SMALL_RADIUS, 0.0);

    for a in -GRID_EXTENT..GRID_EXTENT {
        for b in -GRID_EXTENT..GRID_EXTENT {
            let choose_mat: f32 = rng.gen();
            let center = Vec3::new(
                a as f32 + 0.9 * rng.gen::<f32>(),
                SMALL_RADIUS,
                b as f32 + 0.9 * rng.gen::<f32>(),
            );

            if (center - keep_out).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                let albedo = random_color(&mut rng, 0.0, 1.0) * random_color(&mut rng, 0.0, 1.0);
                Material::Lambertian { albedo }
            } else {
                Material::Metal {
                    albedo: random_color(&mut rng, 0.5, 1.0),
                    fuzz: rng.gen_range(0.0..0.5),
                }
            };

            let material = scene.add_material(material);
            scene.add_sphere(center, SMALL_RADIUS, material);
        }
    }

    let diffuse = scene.add_material(Material::Lambertian {
        albedo: Vec3::new(0.4, 0.2, 0.1),
    });
    scene.add_sphere(Vec3::new(-4.0, 1.0, 0.0), 1.0, diffuse);

    let mirror = scene.add_material(Material::Metal {
        albedo: Vec3::new(0.7, 0.6, 0.5),
        fuzz: 0.0,
    });
    scene.add_sphere(Vec3::new(4.0, 1.0, 0.0), 1.0, mirror);

    log::debug!(
        "Generated demo scene (seed {}): {} spheres",
        seed,
        scene.shape_count()
    );
    scene
}

fn random_color<R: Rng>(rng: &mut R, min: f32, max: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(min..max),
        rng.gen_range(min..max),
        rng.gen_range(min..max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Shape;

    #[test]
    fn test_random_spheres_is_deterministic() {
        let a = random_spheres(42);
        let b = random_spheres(42);
        assert_eq!(a.shapes, b.shapes);
        assert_eq!(a.materials, b.materials);
    }

    #[test]
    fn test_random_spheres_layout() {
        let scene = random_spheres(7);

        // Ground + at most 22x22 small spheres + 2 feature spheres
        assert!(scene.shape_count() > 3);
        assert!(scene.shape_count() <= 3 + 22 * 22);
        assert_eq!(scene.materials.len(), scene.shape_count());

        match scene.shapes[0] {
            Shape::Sphere { radius, .. } => assert_eq!(radius, 1000.0),
            _ => panic!("ground should be a sphere"),
        }

        for material in &scene.materials {
            if let Material::Metal { fuzz, .. } = material {
                assert!((0.0..=0.5).contains(fuzz));
            }
        }
    }
}
