//! Built-in scenes.
//!
//! There is no scene file format; these are the scenes the `glint` binary
//! can render, each with the camera placement it was composed for.

use std::f64::consts::{FRAC_PI_4, FRAC_PI_3};

use glint_core::{Color, Light, Material, RenderConfig, ScenePreset};
use glint_math::DVec3;

use crate::{Camera, Scene, SceneResult};

/// Build the scene and camera selected by `config.scene`.
pub fn build(config: &RenderConfig) -> SceneResult<(Scene, Camera)> {
    let camera = Camera::from_config(config);
    let built = match config.scene {
        ScenePreset::Reference => (reference()?, camera.looking_at(DVec3::ZERO, 10.0, FRAC_PI_4, FRAC_PI_4)),
        ScenePreset::MirrorFloor => (
            mirror_floor()?,
            camera.looking_at(DVec3::new(0.0, 0.0, 0.5), 12.0, FRAC_PI_3, FRAC_PI_4),
        ),
    };

    log::info!(
        "Built {:?} scene: {} shapes, {} lights",
        config.scene,
        built.0.shapes().len(),
        built.0.lights().len()
    );
    Ok(built)
}

/// Four reflective Phong spheres lit by a single white light.
pub fn reference() -> SceneResult<Scene> {
    let mut scene = Scene::new();

    let spheres = [
        (DVec3::new(0.0, 0.0, 0.0), 1.0, Color::new(0.6, 0.3, 0.3), 0.8),
        (DVec3::new(-1.0, 1.0, 0.0), 0.25, Color::new(0.0, 1.0, 0.0), 0.0),
        (DVec3::new(1.0, -0.5, 0.0), 0.25, Color::new(1.0, 0.0, 0.0), 0.3),
        (DVec3::new(0.75, 2.0, 1.0), 0.66, Color::new(0.8, 0.2, 1.0), 0.8),
    ];
    for (center, radius, color, kd) in spheres {
        let material = scene.add_material(Material::new(color, kd, 1.0, 1.0));
        scene.add_sphere(center, radius, material)?;
    }

    scene.add_light(Light::new(DVec3::new(0.0, 6.0, 2.0), Color::ONE));
    Ok(scene)
}

/// Three spheres on a half-mirror floor (the z = 0 plane), two lights.
pub fn mirror_floor() -> SceneResult<Scene> {
    let mut scene = Scene::new();

    let floor = scene.add_material(Material::new(Color::splat(0.4), 0.6, 0.2, 0.5));
    scene.add_plane(DVec3::ZERO, DVec3::Z, floor)?;

    let spheres = [
        (DVec3::new(0.0, 0.0, 1.0), 1.0, Material::new(Color::new(0.9, 0.2, 0.2), 0.9, 0.8, 0.1)),
        (DVec3::new(2.0, -1.0, 0.5), 0.5, Material::new(Color::new(0.2, 0.4, 0.9), 0.9, 0.8, 0.1)),
        (DVec3::new(-1.5, 1.5, 0.75), 0.75, Material::new(Color::splat(0.9), 0.1, 1.0, 0.9)),
    ];
    for (center, radius, material) in spheres {
        let material = scene.add_material(material);
        scene.add_sphere(center, radius, material)?;
    }

    scene.add_light(Light::new(DVec3::new(4.0, -3.0, 8.0), Color::splat(0.8)));
    scene.add_light(Light::new(DVec3::new(-5.0, 2.0, 6.0), Color::splat(0.4)));
    Ok(scene)
}
