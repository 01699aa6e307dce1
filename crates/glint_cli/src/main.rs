//! Renders the built-in demo scene to a PNG file.

mod cli;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use glint_renderer::{
    render, Camera, Material, PointLight, Quad, Scene, Sphere, Triangle, Vec3, Whitted,
};

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting glint");

    let camera = Camera::new(
        Vec3::new(-10.0, 10.0, 10.0),
        Vec3::ZERO,
        args.width,
        args.height,
    );
    let scene = build_scene(camera.eye());
    log::info!(
        "Scene built: {} objects, {} shadow casters",
        scene.object_count(),
        scene.shadow_caster_count()
    );

    let start = Instant::now();
    let image = render(&scene, &camera, &Whitted::new(args.bounces));
    log::info!("Rendered in {:.2?}", start.elapsed());

    image.to_rgb_image().save(&args.output)?;
    log::info!("Saved to {}", args.output);

    Ok(())
}

/// Build the demo scene: two mirror walls meeting over a checkered
/// floor, a glass sphere, and a matte yellow triangle.
fn build_scene(eye: Vec3) -> Scene {
    let light = PointLight::new(Vec3::new(-6.0, 4.0, 3.0), 0.7, 1.0, 0.0, 0.3, 0.0);
    let mut scene = Scene::new(light, eye);

    let white = Arc::new(Material::new(
        Vec3::splat(0.2),
        Vec3::splat(0.5),
        Vec3::ONE,
        20.0,
        0.5,
        0.0,
    ));
    let black = Arc::new(Material::new(
        Vec3::ZERO,
        Vec3::splat(0.1),
        Vec3::splat(0.3),
        3.0,
        0.1,
        0.0,
    ));
    let mirror = Arc::new(Material::new(
        Vec3::ZERO,
        Vec3::ZERO,
        Vec3::splat(0.9),
        7.0,
        1.0,
        0.0,
    ));
    let glass = Arc::new(Material::new(
        Vec3::new(0.0, 0.2, 0.2),
        Vec3::new(0.3, 0.5, 0.5),
        Vec3::ONE,
        10.0,
        0.0,
        1.5,
    ));
    let yellow = Arc::new(Material::new(
        Vec3::splat(0.2),
        Vec3::new(0.5, 0.5, 0.0),
        Vec3::ONE,
        3.0,
        0.0,
        0.0,
    ));

    // Checkered floor: 11x11 unit tiles spanning x in [-11, 0] and
    // z in [0, 11]. An odd tile count per row keeps the colors
    // alternating across row boundaries.
    let mut white_tile = true;
    for i in 0..11 {
        let x = -(i as f32);
        for j in 0..11 {
            let z = j as f32;
            let material = if white_tile { &white } else { &black };
            scene.add_object(Quad::new(
                Vec3::new(x, 0.0, z),
                Vec3::new(x - 1.0, 0.0, z),
                Vec3::new(x - 1.0, 0.0, z + 1.0),
                Vec3::new(x, 0.0, z + 1.0),
                material.clone(),
            ));
            white_tile = !white_tile;
        }
    }

    // The tiles shadow-cast as one full-floor proxy quad; shadow
    // queries never read the occluder's material
    scene.add_shadow_caster(Quad::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(-11.0, 0.0, 0.0),
        Vec3::new(-11.0, 0.0, 11.0),
        Vec3::new(0.0, 0.0, 11.0),
        white.clone(),
    ));

    // Mirror walls meeting at the x = 0, z = 0 corner
    let right_wall = Quad::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 11.0),
        Vec3::new(0.0, 11.0, 11.0),
        Vec3::new(0.0, 11.0, 0.0),
        mirror.clone(),
    );
    scene.add_object(right_wall.clone());
    scene.add_shadow_caster(right_wall);

    let left_wall = Quad::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 11.0, 0.0),
        Vec3::new(-11.0, 11.0, 0.0),
        Vec3::new(-11.0, 0.0, 0.0),
        mirror,
    );
    scene.add_object(left_wall.clone());
    scene.add_shadow_caster(left_wall);

    let ball = Sphere::new(Vec3::new(-2.0, 1.0, 2.0), 1.0, glass);
    scene.add_object(ball.clone());
    scene.add_shadow_caster(ball);

    let triangle = Triangle::new(
        Vec3::new(-5.0, 0.0, 1.0),
        Vec3::new(-4.0, 0.0, 3.0),
        Vec3::new(-4.0, 3.0, 2.0),
        yellow,
    );
    scene.add_object(triangle.clone());
    scene.add_shadow_caster(triangle);

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_counts() {
        let scene = build_scene(Vec3::new(-10.0, 10.0, 10.0));

        // 121 floor tiles, two walls, the sphere, and the triangle
        assert_eq!(scene.object_count(), 125);
        // The floor collapses to one proxy in the shadow set
        assert_eq!(scene.shadow_caster_count(), 5);
    }

    #[test]
    fn test_demo_scene_renders_something() {
        let camera = Camera::new(Vec3::new(-10.0, 10.0, 10.0), Vec3::ZERO, 16, 12);
        let scene = build_scene(camera.eye());

        let image = render(&scene, &camera, &Whitted::default());
        assert!(image.pixels.iter().any(|c| c.length() > 0.0));
    }
}
