//! `lumen`: render a scene file (or the demo scene) to PPM or PNG.

mod cli;
mod logger;
mod output;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use lumen_core::{demo, load_camera_settings, load_scene, CameraSettings, Scene};
use lumen_renderer::{render, render_parallel, render_to_writer, Camera, World};

use crate::cli::Args;
use crate::output::Format;

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_level.map(Into::into), args.log_file.as_deref())?;

    log::info!("Starting Lumen");

    let mut settings = match &args.camera {
        Some(path) => load_camera_settings(path),
        None => CameraSettings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }

    let scene = load_input_scene(&args, settings.seed);
    let world = World::from_scene(&scene, args.accelerator());

    let mut camera = Camera::from_settings(&settings);
    camera.initialize();

    write_render(&args, &camera, &world, settings.seed)?;

    log::info!("Done");
    Ok(())
}

fn load_input_scene(args: &Args, seed: u64) -> Scene {
    match &args.scene {
        Some(path) => load_scene(path),
        None => {
            if !args.demo {
                log::info!("No scene file given; rendering the demo scene");
            }
            demo::random_spheres(seed)
        }
    }
}

fn write_render(args: &Args, camera: &Camera, world: &World, seed: u64) -> Result<()> {
    let format = if args.writes_stdout() {
        Format::Ppm
    } else {
        Format::from_path(&args.output)
    };

    // Sequential PPM streams each pixel as soon as it is done
    if !args.parallel && format == Format::Ppm {
        return if args.writes_stdout() {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            render_to_writer(camera, world, seed, &mut out).context("Failed to write image to stdout")
        } else {
            let file = File::create(&args.output)
                .with_context(|| format!("Failed to create {}", args.output))?;
            let mut out = BufWriter::new(file);
            render_to_writer(camera, world, seed, &mut out)
                .with_context(|| format!("Failed to write {}", args.output))
        };
    }

    let image = if args.parallel {
        render_parallel(camera, world, seed, args.threads)
    } else {
        render(camera, world, seed)
    };

    if args.writes_stdout() {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        image
            .write_ppm(&mut out)
            .and_then(|_| out.flush())
            .context("Failed to write image to stdout")
    } else {
        output::save_image(&image, &args.output)
    }
}
