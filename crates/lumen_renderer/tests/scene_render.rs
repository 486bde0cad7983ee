//! End-to-end scenarios: scene description in, image bytes out.

use std::path::Path;

use lumen_core::{demo, parse_camera_settings, parse_scene, Material as MaterialDesc, Scene};
use lumen_renderer::{
    render, render_parallel, render_to_writer, Accelerator, Camera, HitRecord, Hittable,
    Interval, Ray, Vec3, World,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vec(rng: &mut StdRng, min: f32, max: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(min..max),
        rng.gen_range(min..max),
        rng.gen_range(min..max),
    )
}

/// Mixed spheres and triangles scattered through a 20-unit cube.
fn random_scene(seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut scene = Scene::new();

    for i in 0..60 {
        let material = scene.add_material(MaterialDesc::Lambertian {
            albedo: random_vec(&mut rng, 0.0, 1.0),
        });
        if i % 3 == 0 {
            let v0 = random_vec(&mut rng, -10.0, 10.0);
            let v1 = v0 + random_vec(&mut rng, -2.0, 2.0);
            let v2 = v0 + random_vec(&mut rng, -2.0, 2.0);
            scene.add_triangle(v0, v1, v2, material);
        } else {
            let radius = rng.gen_range(0.2..1.5);
            scene.add_sphere(random_vec(&mut rng, -10.0, 10.0), radius, material);
        }
    }

    scene
}

#[test]
fn bvh_and_list_agree_on_random_scenes() {
    for seed in [1, 2, 3, 4] {
        let scene = random_scene(seed);
        let bvh = World::from_scene(&scene, Accelerator::Bvh);
        let list = World::from_scene(&scene, Accelerator::List);
        assert_eq!(bvh.bounding_box(), list.bounding_box());

        let mut rng = StdRng::seed_from_u64(seed + 100);
        let mut hits = 0;
        for _ in 0..2000 {
            let origin = random_vec(&mut rng, -15.0, 15.0);
            // Aim near the cluster so most rays hit something
            let target = random_vec(&mut rng, -8.0, 8.0);
            let ray = Ray::new(origin, target - origin);
            let ray_t = Interval::new(0.001, f32::INFINITY);

            let mut bvh_rec = HitRecord::default();
            let mut list_rec = HitRecord::default();
            let bvh_hit = bvh.hit(&ray, ray_t, &mut bvh_rec);
            let list_hit = list.hit(&ray, ray_t, &mut list_rec);

            assert_eq!(bvh_hit, list_hit, "seed {} ray {:?}", seed, ray);
            if bvh_hit {
                hits += 1;
                assert!(
                    (bvh_rec.t - list_rec.t).abs() <= 1e-5 * bvh_rec.t.max(1.0),
                    "seed {}: bvh t={} list t={}",
                    seed,
                    bvh_rec.t,
                    list_rec.t
                );
                assert_eq!(bvh_rec.material, list_rec.material);
                assert_eq!(bvh_rec.front_face, list_rec.front_face);
            }
        }
        assert!(hits > 100, "seed {} only {} hits", seed, hits);
    }
}

const TWO_SPHERES: &str = "\
# ground and one diffuse ball
sphere 0 -100.5 -1 100 lambertian 0.5 0.5 0.5
sphere 0 0 -1 0.5 lambertian 0.1 0.2 0.5
";

const TWO_SPHERES_CAMERA: &str = "\
aspect_ratio 2
image_width 20
samples_per_pixel 1
max_depth 1
vfov 90
lookfrom 0 0 0
lookat 0 0 -1
vup 0 1 0
seed 17
";

fn two_sphere_setup() -> (Camera, World, u64) {
    let scene = parse_scene(TWO_SPHERES, Path::new("."));
    assert_eq!(scene.shape_count(), 2);

    let settings = parse_camera_settings(TWO_SPHERES_CAMERA);
    let mut camera = Camera::from_settings(&settings);
    camera.initialize();
    (camera, World::from_scene(&scene, Accelerator::Bvh), settings.seed)
}

fn streamed_ppm(camera: &Camera, world: &World, seed: u64) -> Vec<u8> {
    let mut out = Vec::new();
    render_to_writer(camera, world, seed, &mut out).unwrap();
    out
}

#[test]
fn two_sphere_scene_is_reproducible() {
    let (camera, world, seed) = two_sphere_setup();

    let first = streamed_ppm(&camera, &world, seed);
    let second = streamed_ppm(&camera, &world, seed);
    assert_eq!(first, second);

    let text = String::from_utf8(first).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(&lines[..3], &["P3", "20 10", "255"]);
    assert_eq!(lines.len(), 3 + 20 * 10);

    // Depth 1: surfaces get no bounce budget and render black, misses show the sky
    let pixel = |x: usize, y: usize| lines[3 + y * 20 + x];
    assert_eq!(pixel(10, 5), "0 0 0");
    assert_eq!(pixel(10, 9), "0 0 0");
    assert_ne!(pixel(0, 0), "0 0 0");
}

/// Expected output of the two-sphere scene with seed 17.
const TWO_SPHERES_GOLDEN: &str = include_str!("data/two_spheres.ppm");

fn assert_matches_golden(rendered: &[u8]) {
    let rendered = std::str::from_utf8(rendered).unwrap();
    for (line, (got, want)) in rendered.lines().zip(TWO_SPHERES_GOLDEN.lines()).enumerate() {
        assert_eq!(got, want, "PPM line {} differs", line + 1);
    }
    assert_eq!(rendered, TWO_SPHERES_GOLDEN);
}

#[test]
fn two_sphere_scene_matches_golden_image() {
    let (camera, world, seed) = two_sphere_setup();
    assert_matches_golden(&streamed_ppm(&camera, &world, seed));

    let image = render_parallel(&camera, &world, seed, Some(3));
    let mut banded = Vec::new();
    image.write_ppm(&mut banded).unwrap();
    assert_matches_golden(&banded);
}

#[test]
fn sequential_and_parallel_renders_match() {
    let scene = demo::random_spheres(3);
    let world = World::from_scene(&scene, Accelerator::Bvh);

    let settings =
        parse_camera_settings("image_width 32\nsamples_per_pixel 2\nmax_depth 4\nseed 5\n");
    let mut camera = Camera::from_settings(&settings);
    camera.initialize();

    let streamed = streamed_ppm(&camera, &world, settings.seed);

    for threads in [Some(3), Some(1), None] {
        let image = render_parallel(&camera, &world, settings.seed, threads);
        let mut bytes = Vec::new();
        image.write_ppm(&mut bytes).unwrap();
        assert_eq!(streamed, bytes, "threads {:?}", threads);
    }

    let buffered = render(&camera, &world, settings.seed);
    let banded = render_parallel(&camera, &world, settings.seed, Some(4));
    assert_eq!(buffered.to_rgb8(), banded.to_rgb8());
}

#[test]
fn empty_scene_renders_background() {
    let world = World::from_scene(&Scene::new(), Accelerator::Bvh);
    let settings = parse_camera_settings(
        "image_width 4\naspect_ratio 2\nsamples_per_pixel 1\nbackground 1 0 0\n",
    );
    let mut camera = Camera::from_settings(&settings);
    camera.initialize();

    let image = render(&camera, &world, 0);
    assert_eq!((image.width, image.height), (4, 2));
    for pixel in image.to_rgb8().chunks(3) {
        assert_eq!(pixel, &[255, 0, 0]);
    }
}

#[test]
fn light_seen_through_mirror() {
    // A mirror faces the camera; a light behind the camera is visible in it
    let mut scene = Scene::new();
    let mirror = scene.add_material(MaterialDesc::Metal {
        albedo: Vec3::splat(0.5),
        fuzz: 0.0,
    });
    let light = scene.add_material(MaterialDesc::Light {
        emit: Vec3::splat(1.0),
    });
    scene.add_triangle(
        Vec3::new(-50.0, -50.0, -5.0),
        Vec3::new(50.0, -50.0, -5.0),
        Vec3::new(0.0, 50.0, -5.0),
        mirror,
    );
    scene.add_sphere(Vec3::new(0.0, 0.0, 20.0), 15.0, light);
    let world = World::from_scene(&scene, Accelerator::List);

    let settings = parse_camera_settings(
        "image_width 3\naspect_ratio 1\nsamples_per_pixel 4\nmax_depth 3\nvfov 30\n\
         lookfrom 0 0 0\nlookat 0 0 -1\nbackground 0 0 0\n",
    );
    let mut camera = Camera::from_settings(&settings);
    camera.initialize();

    let image = render(&camera, &world, 2);
    let center = image.get(1, 1);
    assert!((center - Vec3::splat(0.5)).length() < 1e-4, "center {:?}", center);
}
