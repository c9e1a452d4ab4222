//! Per-pixel image assembly.
//!
//! Implements:
//! - Integrator dispatch on `RenderMode`
//! - Regular-grid supersampling, averaged per pixel
//! - A single-threaded full-image render (see `bucket` for the parallel one)

use glint_core::{Color, ImageBuffer, ImageSink, RenderConfig, RenderMode};
use glint_math::Ray;

use crate::{facing_ratio, trace, Camera, RenderResult, Scene};

/// Color of a primary ray under the configured integrator.
pub fn ray_color(ray: &Ray, scene: &Scene, camera: &Camera, config: &RenderConfig) -> RenderResult<Color> {
    match config.mode {
        RenderMode::Whitted => trace(ray, scene, camera.position(), 0, config.max_depth),
        RenderMode::FacingRatio => Ok(facing_ratio(ray, scene)),
    }
}

/// Sub-pixel offsets `(k + 0.5) / n` for `k` in `0..n`.
///
/// Stratified on a fixed grid, no jitter.
pub fn sample_offsets(n: u32) -> impl Iterator<Item = f64> + Clone {
    let step = 1.0 / n as f64;
    (0..n).map(move |k| (k as f64 + 0.5) * step)
}

/// Render a single pixel: the mean over an N×N grid of camera rays.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> RenderResult<Color> {
    let offsets = sample_offsets(config.samples_per_axis);
    let mut pixel_color = Color::ZERO;

    for x_off in offsets.clone() {
        for y_off in offsets.clone() {
            let ray = camera.get_ray(x as f64 + x_off, y as f64 + y_off)?;
            pixel_color += ray_color(&ray, scene, camera, config)?;
        }
    }

    // Average the samples
    Ok(pixel_color / config.samples_per_pixel() as f64)
}

/// Render the entire scene on the calling thread.
///
/// Pixel for pixel identical to `render_parallel`; handy for tests and
/// for stepping through a render in a debugger.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    config.validate()?;
    let mut image = ImageBuffer::new(camera.width(), camera.height());

    for y in 0..camera.height() {
        for x in 0..camera.width() {
            let color = render_pixel(camera, scene, x, y, config)?;
            image.set_pixel(x, y, color);
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Light, Material};
    use glint_math::DVec3;
    use std::f64::consts::FRAC_PI_4;

    const EPS: f64 = 1e-9;

    fn test_scene() -> Scene {
        let mut scene = Scene::new();
        let mat = scene.add_material(Material::new(Color::new(0.6, 0.3, 0.3), 0.8, 1.0, 0.5));
        scene.add_sphere(DVec3::ZERO, 1.0, mat).unwrap();
        scene.add_light(Light::new(DVec3::new(0.0, 6.0, 2.0), Color::ONE));
        scene
    }

    #[test]
    fn test_sample_offsets() {
        let offsets: Vec<f64> = sample_offsets(3).collect();
        assert_eq!(offsets.len(), 3);
        assert!((offsets[0] - 1.0 / 6.0).abs() < EPS);
        assert!((offsets[1] - 0.5).abs() < EPS);
        assert!((offsets[2] - 5.0 / 6.0).abs() < EPS);

        assert_eq!(sample_offsets(1).collect::<Vec<_>>(), vec![0.5]);
    }

    #[test]
    fn test_pixel_is_mean_of_samples() {
        let scene = test_scene();
        let config = RenderConfig::default().with_resolution(8, 8).with_quality(2, 8);
        let camera = Camera::from_config(&config).looking_at(DVec3::ZERO, 10.0, 0.3, 0.2);

        let mut sum = Color::ZERO;
        for x_off in [0.25, 0.75] {
            for y_off in [0.25, 0.75] {
                let ray = camera.get_ray(3.0 + x_off, 5.0 + y_off).unwrap();
                sum += ray_color(&ray, &scene, &camera, &config).unwrap();
            }
        }

        let pixel = render_pixel(&camera, &scene, 3, 5, &config).unwrap();
        assert!((pixel - sum / 4.0).length() < EPS);
    }

    #[test]
    fn test_single_sample_is_pixel_center() {
        let scene = test_scene();
        let config = RenderConfig::default().with_resolution(8, 8).with_quality(1, 8);
        let camera = Camera::from_config(&config).looking_at(DVec3::ZERO, 10.0, 0.3, 0.2);

        let ray = camera.get_ray(2.5, 6.5).unwrap();
        let expected = ray_color(&ray, &scene, &camera, &config).unwrap();
        assert_eq!(render_pixel(&camera, &scene, 2, 6, &config).unwrap(), expected);
    }

    #[test]
    fn test_render_empty_scene_is_black() {
        let config = RenderConfig::default().with_resolution(6, 4).with_quality(2, 8);
        let camera = Camera::from_config(&config).looking_at(DVec3::ZERO, 10.0, 0.0, 0.0);
        let image = render(&camera, &Scene::new(), &config).unwrap();

        assert_eq!((image.width, image.height), (6, 4));
        assert!(image.pixels.iter().all(|&c| c == Color::ZERO));
    }

    #[test]
    fn test_render_hits_sphere_in_center() {
        let config = RenderConfig::default().with_resolution(16, 16).with_quality(1, 8);
        let camera = Camera::new(FRAC_PI_4 / 4.0, 16, 16).looking_at(DVec3::ZERO, 10.0, 0.3, 0.2);
        let image = render(&camera, &test_scene(), &config).unwrap();

        // Corners miss, the center sees the sphere
        assert_eq!(image.get(0, 0), Color::ZERO);
        assert!(image.get(8, 8).min_element() >= crate::AMBIENT_FLOOR);
    }

    #[test]
    fn test_facing_ratio_mode() {
        let config = RenderConfig::default()
            .with_resolution(9, 9)
            .with_quality(1, 8)
            .with_mode(RenderMode::FacingRatio);
        let camera = Camera::new(FRAC_PI_4 / 4.0, 9, 9).looking_at(DVec3::ZERO, 10.0, 0.0, 0.0);
        let image = render(&camera, &test_scene(), &config).unwrap();

        // Center pixel looks straight at the sphere
        let center = image.get(4, 4);
        assert!((center - Color::ONE).length() < EPS);
    }

    #[test]
    fn test_render_rejects_invalid_config() {
        let config = RenderConfig::default().with_quality(0, 8);
        let camera = Camera::from_config(&config);
        assert!(render(&camera, &Scene::new(), &config).is_err());
    }
}
